use crate::cli::validator::{isValidGuid, isValidHardwareId, isValidInfPath, isValidInstanceId, isValidProfile};
use crate::i18n::getLocaleText;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub const HELP: &str = "help";
pub const DEBUG: &str = "debug";
pub const PROFILE: &str = "Profile";
pub const INTERFACE_GUID: &str = "InterfaceGuid";
pub const INF_PATH: &str = "InfPath";
pub const INDEX: &str = "Index";
pub const INSTANCE_ID: &str = "InstanceId";
pub const HARDWARE_ID: &str = "HardwareId";
pub const LEGACY: &str = "Legacy";

pub fn cli() -> ArgMatches {
    command().get_matches()
}

pub fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        // 基本配置
        .arg_required_else_help(true)
        .subcommand_required(true)
        .propagate_version(false)
        .version(env!("CARGO_PKG_VERSION"))
        // 模板
        .help_template(getLocaleText("template", None))
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help(getLocaleText("version-message", None))
                .action(ArgAction::Version)
        )
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            Arg::new("help")
                .short('H')
                .long("help")
                .help(getLocaleText("help", None))
                .action(ArgAction::Help)
        )
        .subcommand(Command::new(HELP)
            .about(getLocaleText("help", None))
        )
        // Debug 模式
        .arg(
            Arg::new(DEBUG)
                .short('D')
                .long(DEBUG)
                .global(true)
                .action(ArgAction::SetTrue)
                .help(getLocaleText("on-debug", None)),
        )
        // 总线配置文件
        .arg(
            Arg::new(PROFILE)
                .short('P')
                .long(PROFILE)
                .value_name(PROFILE)
                .global(true)
                .value_parser(isValidProfile)
                .help(getLocaleText("profile-path", None)),
        )
        // 覆盖配置中的设备接口GUID
        .arg(
            Arg::new(INTERFACE_GUID)
                .long(INTERFACE_GUID)
                .value_name(INTERFACE_GUID)
                .global(true)
                .value_parser(isValidGuid)
                .help(getLocaleText("interface-guid", None)),
        )
        // 列出设备
        .subcommand(
            Command::new("list-devices")
                .about(getLocaleText("list-devices", None))
        )
        // 查找设备
        .subcommand(
            Command::new("find-device")
                .about(getLocaleText("find-device", None))
                .arg(
                    Arg::new(INDEX)
                        .short('i')
                        .long(INDEX)
                        .value_name(INDEX)
                        .value_parser(clap::value_parser!(u32))
                        .default_value("0")
                        .help(getLocaleText("instance-index", None)),
                )
        )
        // 创建设备节点
        .subcommand(
            Command::new("create-node")
                .about(getLocaleText("create-node", None))
        )
        // 安装驱动
        .subcommand(
            Command::new("install-driver")
                .about(getLocaleText("install-driver", None))
                .arg(
                    Arg::new(INF_PATH)
                        .value_name(INF_PATH)
                        .value_parser(isValidInfPath)
                        .required(true)
                        .index(1)
                        .help(getLocaleText("inf-path", None)),
                )
        )
        // 更新驱动
        .subcommand(
            Command::new("update-driver")
                .about(getLocaleText("update-driver", None))
                .arg(
                    Arg::new(INF_PATH)
                        .value_name(INF_PATH)
                        .value_parser(isValidInfPath)
                        .required(true)
                        .index(1)
                        .help(getLocaleText("inf-path", None)),
                )
                // 选项-硬件ID（默认使用配置中的硬件ID）
                .arg(
                    Arg::new(HARDWARE_ID)
                        .long(HARDWARE_ID)
                        .value_name(HARDWARE_ID)
                        .value_parser(isValidHardwareId)
                        .help(getLocaleText("hardware-id", None)),
                )
        )
        // 安装虚拟总线
        .subcommand(
            Command::new("install-bus")
                .about(getLocaleText("install-bus", None))
                .arg(
                    Arg::new(INF_PATH)
                        .value_name(INF_PATH)
                        .value_parser(isValidInfPath)
                        .required(true)
                        .index(1)
                        .help(getLocaleText("inf-path", None)),
                )
        )
        // 移除设备
        .subcommand(
            Command::new("remove-device")
                .about(getLocaleText("remove-device", None))
                .arg(
                    Arg::new(INSTANCE_ID)
                        .value_name(INSTANCE_ID)
                        .value_parser(isValidInstanceId)
                        .required(true)
                        .index(1)
                        .help(getLocaleText("instance-id", None)),
                )
                .arg(
                    Arg::new(LEGACY)
                        .long(LEGACY)
                        .action(ArgAction::SetTrue)
                        .help(getLocaleText("legacy-remove", None)),
                )
        )
        // 移除全部设备
        .subcommand(
            Command::new("remove-all")
                .about(getLocaleText("remove-all", None))
        )
        // 扫描设备硬件更改
        .subcommand(
            Command::new("scan-devices")
                .about(getLocaleText("scan-devices", None))
        )
}
