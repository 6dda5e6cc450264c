use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// 安装虚拟总线
/// 创建设备节点 -> 绑定驱动 -> 刷新设备树
pub fn install_bus<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile, infPath: &Path) -> Result<Outcome, Box<dyn Error>> {
    let hwId = profile.hardwareId()?;

    devcon.createDeviceNode(&profile.class_name, &profile.class_guid, &hwId)?;
    let args: HashMap<String, FluentValue> = hash_map!(
        "hwid".to_string() => hwId.to_string().into(),
        "class".to_string() => profile.class_name.clone().into()
    );
    writeConsole(ConsoleType::Success, &getLocaleText("create-node-success", Some(&args)));

    let rebootRequired = devcon.updateDeviceDriver(&hwId, infPath)?;
    let args: HashMap<String, FluentValue> = hash_map!(
        "hwid".to_string() => hwId.to_string().into(),
        "path".to_string() => infPath.display().to_string().into()
    );
    writeConsole(ConsoleType::Success, &getLocaleText("update-driver-success", Some(&args)));

    // 节点创建不一定触发枚举
    devcon.refreshDevices()?;

    if let Some(device) = devcon.findDeviceByInterfaceId(&profile.interface_guid, 0)? {
        let args: HashMap<String, FluentValue> = hash_map!(
            "instance".to_string() => device.instance_id.into(),
            "path".to_string() => device.path.into()
        );
        writeConsole(ConsoleType::Success, &getLocaleText("device-found", Some(&args)));
    }

    if rebootRequired {
        writeConsole(ConsoleType::Warning, &getLocaleText("reboot-required", None));
    }
    Ok(Outcome::from_reboot(rebootRequired))
}
