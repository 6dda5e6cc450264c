pub mod create_node;
pub mod find_device;
pub mod install_bus;
pub mod install_driver;
pub mod list_devices;
pub mod remove_all;
pub mod remove_device;
pub mod update_driver;

/// 命令执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// 已完成，需要重启系统
    RebootRequired,
}

impl Outcome {
    pub fn from_reboot(rebootRequired: bool) -> Self {
        if rebootRequired {
            Outcome::RebootRequired
        } else {
            Outcome::Done
        }
    }
}
