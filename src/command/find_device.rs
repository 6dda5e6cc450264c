use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;

/// 查找指定序号的设备
pub fn find_device<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile, index: u32) -> Result<Outcome, Box<dyn Error>> {
    match devcon.findDeviceByInterfaceId(&profile.interface_guid, index)? {
        Some(device) => {
            let args: HashMap<String, FluentValue> = hash_map!(
                "instance".to_string() => device.instance_id.into(),
                "path".to_string() => device.path.into()
            );
            writeConsole(ConsoleType::Success, &getLocaleText("device-found", Some(&args)));
            Ok(Outcome::Done)
        }
        None => {
            let args: HashMap<String, FluentValue> = hash_map!("index".to_string() => index.to_string().into());
            Err(getLocaleText("device-not-found", Some(&args)).into())
        }
    }
}
