use crate::utils::console::writeLog;
use crate::utils::devinfo::{DetailBuffer, HardwareId};
use crate::utils::error::DevconError;
use std::path::Path;
use windows::core::GUID;
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    CM_REENUMERATE_FLAGS, DIGCF_DEVICEINTERFACE, DIGCF_PRESENT, DIINSTALLDRIVER_FLAGS, DI_FUNCTION, HDEVINFO,
    SETUP_DI_DEVICE_CREATION_FLAGS, SETUP_DI_GET_CLASS_DEVS_FLAGS, SETUP_DI_REGISTRY_PROPERTY, SP_DEVICE_INTERFACE_DATA,
    SP_DEVINFO_DATA, SP_DEVINSTALL_PARAMS_W, SP_REMOVEDEVICE_PARAMS, UPDATEDRIVERFORPLUGANDPLAYDEVICES_FLAGS,
};

/// 设备安装相关系统调用
///
/// 每个方法对应一次系统调用，失败时返回系统错误码
/// （SetupAPI / newdev 为 GetLastError，cfgmgr32 为 CONFIGRET）
pub trait DeviceApi {
    /// SetupDiGetClassDevsW
    fn get_class_devs(&self, guid: &GUID, flags: SETUP_DI_GET_CLASS_DEVS_FLAGS) -> Result<HDEVINFO, u32>;

    /// SetupDiCreateDeviceInfoList
    fn create_device_info_list(&self, classGuid: &GUID) -> Result<HDEVINFO, u32>;

    /// SetupDiDestroyDeviceInfoList
    fn destroy_device_info_list(&self, set: HDEVINFO) -> Result<(), u32>;

    /// SetupDiEnumDeviceInterfaces，枚举结束时返回 `ERROR_NO_MORE_ITEMS`
    fn enum_device_interfaces(
        &self,
        set: HDEVINFO,
        guid: &GUID,
        index: u32,
        data: &mut SP_DEVICE_INTERFACE_DATA,
    ) -> Result<(), u32>;

    /// SetupDiGetDeviceInterfaceDetailW 第一步：查询所需缓冲区大小（字节）
    fn get_device_interface_detail_size(
        &self,
        set: HDEVINFO,
        interfaceData: &SP_DEVICE_INTERFACE_DATA,
        devInfo: &mut SP_DEVINFO_DATA,
    ) -> Result<u32, u32>;

    /// SetupDiGetDeviceInterfaceDetailW 第二步：填充该大小的缓冲区
    fn get_device_interface_detail(
        &self,
        set: HDEVINFO,
        interfaceData: &SP_DEVICE_INTERFACE_DATA,
        buffer: &mut DetailBuffer,
        devInfo: &mut SP_DEVINFO_DATA,
    ) -> Result<(), u32>;

    /// CM_Get_Device_IDW
    fn get_device_id(&self, devInst: u32, buffer: &mut [u16]) -> Result<(), u32>;

    /// SetupDiCreateDeviceInfoW
    fn create_device_info(
        &self,
        set: HDEVINFO,
        className: &str,
        classGuid: &GUID,
        flags: SETUP_DI_DEVICE_CREATION_FLAGS,
        devInfo: &mut SP_DEVINFO_DATA,
    ) -> Result<(), u32>;

    /// SetupDiSetDeviceRegistryPropertyW
    fn set_device_registry_property(
        &self,
        set: HDEVINFO,
        devInfo: &SP_DEVINFO_DATA,
        property: SETUP_DI_REGISTRY_PROPERTY,
        value: &[u8],
    ) -> Result<(), u32>;

    /// SetupDiCallClassInstaller
    fn call_class_installer(&self, function: DI_FUNCTION, set: HDEVINFO, devInfo: &SP_DEVINFO_DATA) -> Result<(), u32>;

    /// SetupDiOpenDeviceInfoW
    fn open_device_info(&self, set: HDEVINFO, instanceId: &str, devInfo: &mut SP_DEVINFO_DATA) -> Result<(), u32>;

    /// SetupDiSetClassInstallParamsW
    fn set_class_install_params(
        &self,
        set: HDEVINFO,
        devInfo: &SP_DEVINFO_DATA,
        params: &SP_REMOVEDEVICE_PARAMS,
    ) -> Result<(), u32>;

    /// SetupDiGetDeviceInstallParamsW
    fn get_device_install_params(
        &self,
        set: HDEVINFO,
        devInfo: &SP_DEVINFO_DATA,
        params: &mut SP_DEVINSTALL_PARAMS_W,
    ) -> Result<(), u32>;

    /// DiInstallDriverW，返回是否需要重启
    fn install_driver(&self, infPath: &Path, flags: DIINSTALLDRIVER_FLAGS) -> Result<bool, u32>;

    /// UpdateDriverForPlugAndPlayDevicesW，返回是否需要重启
    fn update_driver_for_plug_and_play_devices(
        &self,
        hwId: &HardwareId,
        infPath: &Path,
        flags: UPDATEDRIVERFORPLUGANDPLAYDEVICES_FLAGS,
    ) -> Result<bool, u32>;

    /// CM_Locate_DevNodeW（根节点）
    fn locate_root_devnode(&self) -> Result<u32, u32>;

    /// CM_Reenumerate_DevNode
    fn reenumerate_devnode(&self, devInst: u32, flags: CM_REENUMERATE_FLAGS) -> Result<(), u32>;
}

/// 设备信息集
/// 离开作用域时销毁句柄
pub struct DeviceInfoSet<'a, A: DeviceApi> {
    api: &'a A,
    handle: HDEVINFO,
}

impl<'a, A: DeviceApi> DeviceInfoSet<'a, A> {
    /// 打开当前存在且暴露指定接口的设备集合
    pub fn forInterface(api: &'a A, interfaceGuid: &GUID) -> Result<Self, DevconError> {
        api.get_class_devs(interfaceGuid, DIGCF_PRESENT | DIGCF_DEVICEINTERFACE)
            .map(|handle| Self { api, handle })
            .map_err(|code| win32Error("SetupDiGetClassDevsW", code))
    }

    /// 创建绑定到设备类的空集合
    pub fn forClass(api: &'a A, classGuid: &GUID) -> Result<Self, DevconError> {
        api.create_device_info_list(classGuid)
            .map(|handle| Self { api, handle })
            .map_err(|code| win32Error("SetupDiCreateDeviceInfoList", code))
    }

    pub fn handle(&self) -> HDEVINFO {
        self.handle
    }
}

impl<A: DeviceApi> Drop for DeviceInfoSet<'_, A> {
    fn drop(&mut self) {
        if let Err(code) = self.api.destroy_device_info_list(self.handle) {
            writeLog(&format!("SetupDiDestroyDeviceInfoList failed, error code: {:#X}", code));
        }
    }
}

/// 记录并构造 Win32 错误
pub fn win32Error(call: &'static str, code: u32) -> DevconError {
    writeLog(&format!("{} failed, error code: {:#X}", call, code));
    DevconError::Win32 { call, code }
}

/// 记录并构造 CONFIGRET 错误
pub fn configRetError(call: &'static str, code: u32) -> DevconError {
    writeLog(&format!("{} failed, CONFIGRET: {:#X}", call, code));
    DevconError::ConfigRet { call, code }
}
