// [设备安装函数](https://learn.microsoft.com/zh-cn/windows-hardware/drivers/install/using-device-installation-functions)

use crate::utils::console::writeLog;
use crate::utils::deviceAPI::{configRetError, win32Error, DeviceApi, DeviceInfoSet};
use crate::utils::devinfo::{
    devInfoData, globalRemoveParams, installParams, interfaceData, isRebootRequired, DetailBuffer, HardwareId,
    DEVICE_ID_BUFFER_LEN,
};
use crate::utils::error::DevconError;
use crate::utils::util::fromWide;
use std::ops::ControlFlow;
use std::path::Path;
use windows::core::GUID;
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    CM_REENUMERATE_NORMAL, DICD_GENERATE_ID, DIF_REGISTERDEVICE, DIF_REMOVE, DIIRFLAG_FORCE_INF, INSTALLFLAG_FORCE,
    INSTALLFLAG_NONINTERACTIVE, SPDRP_HARDWAREID, SP_DEVINFO_DATA,
};
use windows::Win32::Foundation::ERROR_NO_MORE_ITEMS;

/// 设备接口实例
#[derive(Debug, Clone, Eq)]
pub struct DeviceEntry {
    /// 设备路径（大写）
    pub path: String,
    /// 设备实例ID（大写）
    pub instance_id: String,
}

impl PartialEq for DeviceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path.eq_ignore_ascii_case(&other.path)
    }
}

/// 移除结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStatus {
    /// 已移除
    Removed { reboot_required: bool },
    /// 类安装器执行失败
    Failed { code: u32 },
}

pub struct Devcon<A: DeviceApi> {
    api: A,
}

#[cfg(windows)]
impl Devcon<crate::utils::setupAPI::SetupApi> {
    pub fn new() -> Self {
        Self::with_api(crate::utils::setupAPI::SetupApi)
    }
}

impl<A: DeviceApi> Devcon<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// 按接口GUID查找设备
    /// # 参数
    /// 1. 设备接口GUID
    /// 2. 实例序号（从 0 开始）
    ///
    /// 设备数量不足时返回 `Ok(None)`
    pub fn findDeviceByInterfaceId(&self, interfaceGuid: &GUID, index: u32) -> Result<Option<DeviceEntry>, DevconError> {
        self.walkInterfaces(interfaceGuid, |memberIndex, path, devInfo| {
            if memberIndex != index {
                return Ok(ControlFlow::Continue(()));
            }
            let instance_id = self.deviceInstanceId(devInfo.DevInst)?;
            Ok(ControlFlow::Break(DeviceEntry { path, instance_id }))
        })
    }

    /// 一次性枚举接口下的全部设备
    pub fn enumerateDevices(&self, interfaceGuid: &GUID) -> Result<Vec<DeviceEntry>, DevconError> {
        let mut devices = Vec::new();
        self.walkInterfaces::<()>(interfaceGuid, |_, path, devInfo| {
            let instance_id = self.deviceInstanceId(devInfo.DevInst)?;
            devices.push(DeviceEntry { path, instance_id });
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(devices)
    }

    /// 创建无驱动的设备节点
    /// # 参数
    /// 1. 设备类名
    /// 2. 设备类GUID
    /// 3. 硬件ID
    pub fn createDeviceNode(&self, className: &str, classGuid: &GUID, hwId: &HardwareId) -> Result<(), DevconError> {
        let set = DeviceInfoSet::forClass(&self.api, classGuid)?;
        let mut devInfo = devInfoData();

        self.api
            .create_device_info(set.handle(), className, classGuid, DICD_GENERATE_ID, &mut devInfo)
            .map_err(|code| win32Error("SetupDiCreateDeviceInfoW", code))?;

        self.api
            .set_device_registry_property(set.handle(), &devInfo, SPDRP_HARDWAREID, &hwId.toMultiSz())
            .map_err(|code| win32Error("SetupDiSetDeviceRegistryPropertyW", code))?;

        self.api
            .call_class_installer(DIF_REGISTERDEVICE, set.handle(), &devInfo)
            .map_err(|code| win32Error("SetupDiCallClassInstaller", code))?;

        writeLog(&format!("Device node registered: {} ({})", hwId, className));
        Ok(())
    }

    /// 安装 INF 驱动，返回是否需要重启
    pub fn installDriver(&self, infPath: &Path) -> Result<bool, DevconError> {
        self.api
            .install_driver(infPath, DIIRFLAG_FORCE_INF)
            .map_err(|code| win32Error("DiInstallDriverW", code))
    }

    /// 为匹配硬件ID的设备强制更新驱动，返回是否需要重启
    pub fn updateDeviceDriver(&self, hwId: &HardwareId, infPath: &Path) -> Result<bool, DevconError> {
        self.api
            .update_driver_for_plug_and_play_devices(hwId, infPath, INSTALLFLAG_FORCE | INSTALLFLAG_NONINTERACTIVE)
            .map_err(|code| win32Error("UpdateDriverForPlugAndPlayDevicesW", code))
    }

    /// 移除设备实例
    /// # 参数
    /// 1. 设备接口GUID
    /// 2. 设备实例ID
    ///
    /// 打开设备、设置移除参数、读取安装参数失败时返回错误；类安装器失败时返回 `RemovalStatus::Failed`
    pub fn removeDeviceInstance(&self, interfaceGuid: &GUID, instanceId: &str) -> Result<RemovalStatus, DevconError> {
        let set = DeviceInfoSet::forInterface(&self.api, interfaceGuid)?;
        let mut devInfo = devInfoData();

        self.api
            .open_device_info(set.handle(), instanceId, &mut devInfo)
            .map_err(|code| win32Error("SetupDiOpenDeviceInfoW", code))?;

        self.api
            .set_class_install_params(set.handle(), &devInfo, &globalRemoveParams())
            .map_err(|code| win32Error("SetupDiSetClassInstallParamsW", code))?;

        if let Err(code) = self.api.call_class_installer(DIF_REMOVE, set.handle(), &devInfo) {
            writeLog(&format!("SetupDiCallClassInstaller(DIF_REMOVE) failed for {}, error code: {:#X}", instanceId, code));
            return Ok(RemovalStatus::Failed { code });
        }

        let mut params = installParams();
        self.api
            .get_device_install_params(set.handle(), &devInfo, &mut params)
            .map_err(|code| win32Error("SetupDiGetDeviceInstallParamsW", code))?;

        Ok(RemovalStatus::Removed { reboot_required: isRebootRequired(params.Flags) })
    }

    /// 移除设备实例（旧接口，不报告重启状态）
    pub fn removeDeviceInstanceLegacy(&self, interfaceGuid: &GUID, instanceId: &str) -> Result<bool, DevconError> {
        let set = DeviceInfoSet::forInterface(&self.api, interfaceGuid)?;
        let mut devInfo = devInfoData();

        self.api
            .open_device_info(set.handle(), instanceId, &mut devInfo)
            .map_err(|code| win32Error("SetupDiOpenDeviceInfoW", code))?;

        if let Err(code) = self.api.set_class_install_params(set.handle(), &devInfo, &globalRemoveParams()) {
            writeLog(&format!("SetupDiSetClassInstallParamsW failed, error code: {:#X}", code));
            return Ok(false);
        }
        if let Err(code) = self.api.call_class_installer(DIF_REMOVE, set.handle(), &devInfo) {
            writeLog(&format!("SetupDiCallClassInstaller(DIF_REMOVE) failed, error code: {:#X}", code));
            return Ok(false);
        }
        Ok(true)
    }

    /// 从根节点重新枚举设备树
    pub fn refreshDevices(&self) -> Result<(), DevconError> {
        let devInst = self
            .api
            .locate_root_devnode()
            .map_err(|code| configRetError("CM_Locate_DevNodeW", code))?;
        self.api
            .reenumerate_devnode(devInst, CM_REENUMERATE_NORMAL)
            .map_err(|code| configRetError("CM_Reenumerate_DevNode", code))
    }

    /// 遍历接口下的设备，回调参数为（成员序号, 大写设备路径, 设备信息）
    fn walkInterfaces<T>(
        &self,
        interfaceGuid: &GUID,
        mut visit: impl FnMut(u32, String, &SP_DEVINFO_DATA) -> Result<ControlFlow<T>, DevconError>,
    ) -> Result<Option<T>, DevconError> {
        let set = DeviceInfoSet::forInterface(&self.api, interfaceGuid)?;
        let mut memberIndex = 0;

        loop {
            let mut interface = interfaceData();
            match self.api.enum_device_interfaces(set.handle(), interfaceGuid, memberIndex, &mut interface) {
                Ok(()) => {}
                Err(code) if code == ERROR_NO_MORE_ITEMS.0 => return Ok(None),
                Err(code) => return Err(win32Error("SetupDiEnumDeviceInterfaces", code)),
            }

            let mut devInfo = devInfoData();
            let size = self
                .api
                .get_device_interface_detail_size(set.handle(), &interface, &mut devInfo)
                .map_err(|code| win32Error("SetupDiGetDeviceInterfaceDetailW", code))?;

            let mut buffer = DetailBuffer::new(size as usize);
            self.api
                .get_device_interface_detail(set.handle(), &interface, &mut buffer, &mut devInfo)
                .map_err(|code| win32Error("SetupDiGetDeviceInterfaceDetailW", code))?;
            let path = buffer.devicePath().to_uppercase();
            drop(buffer);

            if let ControlFlow::Break(value) = visit(memberIndex, path, &devInfo)? {
                return Ok(Some(value));
            }
            memberIndex += 1;
        }
    }

    /// 读取设备实例ID
    fn deviceInstanceId(&self, devInst: u32) -> Result<String, DevconError> {
        let mut buffer = [0u16; DEVICE_ID_BUFFER_LEN];
        self.api
            .get_device_id(devInst, &mut buffer)
            .map_err(|code| configRetError("CM_Get_Device_IDW", code))?;
        Ok(fromWide(&buffer).to_uppercase())
    }
}
