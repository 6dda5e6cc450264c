use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;

/// 创建设备节点
pub fn create_node<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile) -> Result<Outcome, Box<dyn Error>> {
    let hwId = profile.hardwareId()?;
    devcon.createDeviceNode(&profile.class_name, &profile.class_guid, &hwId)?;

    let args: HashMap<String, FluentValue> = hash_map!(
        "hwid".to_string() => hwId.to_string().into(),
        "class".to_string() => profile.class_name.clone().into()
    );
    writeConsole(ConsoleType::Success, &getLocaleText("create-node-success", Some(&args)));
    Ok(Outcome::Done)
}
