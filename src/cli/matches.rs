use crate::cli::cli::{HARDWARE_ID, INDEX, INF_PATH, INSTANCE_ID, INTERFACE_GUID, LEGACY, PROFILE};
use crate::command;
use crate::command::Outcome;
use crate::i18n::getLocaleText;
use crate::utils::console::{writeConsole, ConsoleType};
use crate::utils::devcon::Devcon;
use crate::utils::deviceAPI::DeviceApi;
use crate::utils::devinfo::HardwareId;
use crate::utils::profile::BusProfile;
use clap::ArgMatches;
use std::error::Error;
use std::path::PathBuf;
use windows::core::GUID;

#[cfg(windows)]
pub fn matches(matches: ArgMatches) -> Result<Outcome, Box<dyn Error>> {
    use crate::cli::cli::{command, DEBUG};
    use crate::utils::console::{isDebug, setDebug};
    use crate::LOG_PATH;
    use fluent_templates::fluent_bundle::FluentValue;
    use std::collections::HashMap;

    let Some((name, subMatches)) = matches.subcommand() else {
        return Ok(Outcome::Done);
    };

    if name == "help" {
        command().print_help()?;
        return Ok(Outcome::Done);
    }

    setDebug(subMatches.get_flag(DEBUG));
    if isDebug() {
        let arg: HashMap<String, FluentValue> = hash_map!("path".to_string() => LOG_PATH.display().to_string().into());
        writeConsole(ConsoleType::Info, &getLocaleText("opened-debug", Some(&arg)));
    }

    let profile = resolveProfile(subMatches);
    let devcon = Devcon::new();

    dispatch(&devcon, &profile, name, subMatches).inspect_err(|e| writeConsole(ConsoleType::Err, &e.to_string()))
}

/// 读取总线配置（--Profile / --InterfaceGuid）
pub fn resolveProfile(matches: &ArgMatches) -> BusProfile {
    let mut profile = matches.get_one::<BusProfile>(PROFILE).cloned().unwrap_or_default();
    if let Some(guid) = matches.get_one::<GUID>(INTERFACE_GUID) {
        profile.interface_guid = *guid;
    }
    profile
}

/// 执行子命令
pub fn dispatch<A: DeviceApi>(devcon: &Devcon<A>, profile: &BusProfile, name: &str, matches: &ArgMatches) -> Result<Outcome, Box<dyn Error>> {
    match name {
        // 列出设备
        "list-devices" => command::list_devices::list_devices(devcon, profile),
        // 查找设备
        "find-device" => {
            let index = matches.get_one::<u32>(INDEX).copied().unwrap_or(0);
            command::find_device::find_device(devcon, profile, index)
        }
        // 创建设备节点
        "create-node" => command::create_node::create_node(devcon, profile),
        // 安装驱动
        "install-driver" => {
            let infPath = infPath(matches)?;
            command::install_driver::install_driver(devcon, &infPath)
        }
        // 更新驱动
        "update-driver" => {
            let infPath = infPath(matches)?;
            let hwId = match matches.get_one::<HardwareId>(HARDWARE_ID) {
                Some(hwId) => hwId.clone(),
                None => profile.hardwareId()?,
            };
            command::update_driver::update_driver(devcon, &hwId, &infPath)
        }
        // 安装虚拟总线
        "install-bus" => {
            let infPath = infPath(matches)?;
            command::install_bus::install_bus(devcon, profile, &infPath)
        }
        // 移除设备
        "remove-device" => {
            let instanceId = matches
                .get_one::<String>(INSTANCE_ID)
                .ok_or_else(|| getLocaleText("invalid-instance-id", None))?;
            command::remove_device::remove_device(devcon, profile, instanceId, matches.get_flag(LEGACY))
        }
        // 移除全部设备
        "remove-all" => command::remove_all::remove_all(devcon, profile),
        // 扫描硬件设备更改
        "scan-devices" => match devcon.refreshDevices() {
            Ok(()) => {
                writeConsole(ConsoleType::Success, &getLocaleText("scan-devices-success", None));
                Ok(Outcome::Done)
            }
            Err(e) => Err(format!("{} {}", getLocaleText("scan-devices-failed", None), e).into()),
        },
        _ => Ok(Outcome::Done),
    }
}

fn infPath(matches: &ArgMatches) -> Result<PathBuf, Box<dyn Error>> {
    matches
        .get_one::<String>(INF_PATH)
        .map(PathBuf::from)
        .ok_or_else(|| getLocaleText("invalid-inf-path", None).into())
}
