use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::{Devcon, RemovalStatus};
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;

/// 移除接口下的全部设备实例
///
/// 每次移除后重新查询序号 0（移除后序号会重排）。
/// 遇到需要重启时立即停止，重启前设备树处于过渡状态，不再继续修改
pub fn remove_all<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile) -> Result<Outcome, Box<dyn Error>> {
    let mut removed = 0;
    let mut lastRemoved: Option<String> = None;

    while let Some(device) = devcon.findDeviceByInterfaceId(&profile.interface_guid, 0)? {
        // 移除成功但实例仍在序号 0，再次移除不会有进展
        if lastRemoved.as_deref() == Some(device.instance_id.as_str()) {
            let args: HashMap<String, FluentValue> = hash_map!("instance".to_string() => device.instance_id.clone().into());
            return Err(getLocaleText("remove-all-stuck", Some(&args)).into());
        }

        let args: HashMap<String, FluentValue> = hash_map!(
            "instance".to_string() => device.instance_id.clone().into(),
            "path".to_string() => device.path.clone().into()
        );
        writeConsole(ConsoleType::Info, &getLocaleText("removing-device", Some(&args)));

        match devcon.removeDeviceInstance(&profile.interface_guid, &device.instance_id)? {
            RemovalStatus::Removed { reboot_required } => {
                removed += 1;
                let args: HashMap<String, FluentValue> = hash_map!("instance".to_string() => device.instance_id.clone().into());
                writeConsole(ConsoleType::Success, &getLocaleText("remove-device-success", Some(&args)));

                if reboot_required {
                    writeConsole(ConsoleType::Warning, &getLocaleText("remove-all-halt", Some(&args)));
                    return Ok(Outcome::RebootRequired);
                }
                lastRemoved = Some(device.instance_id);
            }
            RemovalStatus::Failed { code } => {
                // 失败的实例仍位于序号 0，继续循环只会重复失败
                let args: HashMap<String, FluentValue> = hash_map!(
                    "instance".to_string() => device.instance_id.clone().into(),
                    "code".to_string() => code.to_string().into()
                );
                return Err(getLocaleText("remove-device-error", Some(&args)).into());
            }
        }
    }

    let args: HashMap<String, FluentValue> = hash_map!("count".to_string() => removed.to_string().into());
    writeConsole(ConsoleType::Success, &getLocaleText("remove-all-done", Some(&args)));
    Ok(Outcome::Done)
}
