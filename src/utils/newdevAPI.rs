use crate::utils::devinfo::HardwareId;
use crate::utils::error::osCode;
use crate::utils::util::pathToWide;
use std::path::Path;
use windows::core::PCWSTR;
use windows::{
    Win32::Devices::DeviceAndDriverInstallation::{DiInstallDriverW, UpdateDriverForPlugAndPlayDevicesW},
    Win32::Devices::DeviceAndDriverInstallation::{DIINSTALLDRIVER_FLAGS, UPDATEDRIVERFORPLUGANDPLAYDEVICES_FLAGS},
    Win32::Foundation::{BOOL, ERROR_INVALID_PARAMETER, HWND},
};

/// 更新驱动
/// [相关文档](https://docs.microsoft.com/zh-cn/windows/win32/api/newdev/nf-newdev-updatedriverforplugandplaydevicesa?redirectedfrom=MSDN)
/// # 参数
/// 1. INF路径
/// 2. 硬件ID
/// 3. INSTALLFLAG_*
///
/// 返回是否需要重启
pub unsafe fn updateDriverForPlugAndPlayDevices(infPath: &Path, hwId: &HardwareId, flags: UPDATEDRIVERFORPLUGANDPLAYDEVICES_FLAGS) -> Result<bool, u32> {
    let infPath = pathToWide(infPath).map_err(|_| ERROR_INVALID_PARAMETER.0)?;
    let hwId: Vec<u16> = hwId.toWide();
    let mut isReboot = BOOL(0);
    UpdateDriverForPlugAndPlayDevicesW(Some(HWND(std::ptr::null_mut())), PCWSTR::from_raw(hwId.as_ptr()), PCWSTR::from_raw(infPath.as_ptr()), flags, Some(&mut isReboot))
        .map(|_| isReboot.as_bool())
        .map_err(|e| osCode(&e))
}

/// 安装 INF 驱动
/// [相关文档](https://learn.microsoft.com/zh-cn/windows/win32/api/newdev/nf-newdev-diinstalldriverw)
/// # 参数
/// 1. INF路径
/// 2. DIIRFLAG_*
pub unsafe fn diInstallDriver(infPath: &Path, flags: DIINSTALLDRIVER_FLAGS) -> Result<bool, u32> {
    let infPath = pathToWide(infPath).map_err(|_| ERROR_INVALID_PARAMETER.0)?;
    let mut isReboot = BOOL(0);
    DiInstallDriverW(Some(HWND(std::ptr::null_mut())), PCWSTR::from_raw(infPath.as_ptr()), flags, Some(&mut isReboot))
        .map(|_| isReboot.as_bool())
        .map_err(|e| osCode(&e))
}
