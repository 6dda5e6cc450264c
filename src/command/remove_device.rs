use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::{Devcon, RemovalStatus};
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::error::Error;

/// 移除设备实例
/// # 参数
/// 1. Devcon
/// 2. 总线配置
/// 3. 设备实例ID
/// 4. 使用旧接口（不报告重启状态）
pub fn remove_device<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile, instanceId: &str, legacy: bool) -> Result<Outcome, Box<dyn Error>> {
    let args: HashMap<String, FluentValue> = hash_map!("instance".to_string() => instanceId.to_string().into());

    if legacy {
        return match devcon.removeDeviceInstanceLegacy(&profile.interface_guid, instanceId)? {
            true => {
                writeConsole(ConsoleType::Success, &getLocaleText("remove-device-success", Some(&args)));
                Ok(Outcome::Done)
            }
            false => Err(getLocaleText("remove-device-failed", Some(&args)).into()),
        };
    }

    match devcon.removeDeviceInstance(&profile.interface_guid, instanceId)? {
        RemovalStatus::Removed { reboot_required } => {
            writeConsole(ConsoleType::Success, &getLocaleText("remove-device-success", Some(&args)));
            if reboot_required {
                writeConsole(ConsoleType::Warning, &getLocaleText("reboot-required", None));
            }
            Ok(Outcome::from_reboot(reboot_required))
        }
        RemovalStatus::Failed { code } => {
            let args: HashMap<String, FluentValue> = hash_map!(
                "instance".to_string() => instanceId.to_string().into(),
                "code".to_string() => code.to_string().into()
            );
            Err(getLocaleText("remove-device-error", Some(&args)).into())
        }
    }
}
