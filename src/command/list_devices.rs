use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;

/// 列出接口下的全部设备
pub fn list_devices<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile) -> Result<Outcome, Box<dyn Error>> {
    let devices = devcon.enumerateDevices(&profile.interface_guid)?;
    if devices.is_empty() {
        writeConsole(ConsoleType::Info, &getLocaleText("no-device", None));
        return Ok(Outcome::Done);
    }

    let args: HashMap<String, FluentValue> = hash_map!("count".to_string() => devices.len().to_string().into());
    writeConsole(ConsoleType::Info, &getLocaleText("device-count", Some(&args)));

    for (index, device) in devices.iter().enumerate() {
        let args: HashMap<String, FluentValue> = hash_map!(
            "index".to_string() => index.to_string().into(),
            "instance".to_string() => device.instance_id.clone().into(),
            "path".to_string() => device.path.clone().into()
        );
        writeConsole(ConsoleType::Info, &getLocaleText("device-item", Some(&args)));
    }
    Ok(Outcome::Done)
}
