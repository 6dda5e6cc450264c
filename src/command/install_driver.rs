use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// 安装 INF 驱动
pub fn install_driver<A: DeviceApi>(devcon: &Devcon<A>, infPath: &Path) -> Result<Outcome, Box<dyn Error>> {
    let rebootRequired = devcon.installDriver(infPath)?;

    let args: HashMap<String, FluentValue> = hash_map!("path".to_string() => infPath.display().to_string().into());
    writeConsole(ConsoleType::Success, &getLocaleText("install-driver-success", Some(&args)));
    if rebootRequired {
        writeConsole(ConsoleType::Warning, &getLocaleText("reboot-required", None));
    }
    Ok(Outcome::from_reboot(rebootRequired))
}
