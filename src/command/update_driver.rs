use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::devinfo::HardwareId;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// 为匹配硬件ID的设备更新驱动
pub fn update_driver<A: DeviceApi>(devcon: &Devcon<A>, hwId: &HardwareId, infPath: &Path) -> Result<Outcome, Box<dyn Error>> {
    let rebootRequired = devcon.updateDeviceDriver(hwId, infPath)?;

    let args: HashMap<String, FluentValue> = hash_map!(
        "hwid".to_string() => hwId.to_string().into(),
        "path".to_string() => infPath.display().to_string().into()
    );
    writeConsole(ConsoleType::Success, &getLocaleText("update-driver-success", Some(&args)));
    if rebootRequired {
        writeConsole(ConsoleType::Warning, &getLocaleText("reboot-required", None));
    }
    Ok(Outcome::from_reboot(rebootRequired))
}
