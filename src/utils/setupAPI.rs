// [SetupAPI 参考](https://learn.microsoft.com/zh-cn/windows/win32/api/setupapi/)
// [cfgmgr32 参考](https://learn.microsoft.com/zh-cn/windows/win32/api/cfgmgr32/)

use crate::utils::deviceAPI::DeviceApi;
use crate::utils::devinfo::{DetailBuffer, HardwareId};
use crate::utils::error::osCode;
use crate::utils::newdevAPI;
use crate::utils::util::toWide;
use std::mem::size_of;
use std::path::Path;
use windows::core::{GUID, PCWSTR};
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    CM_Get_Device_IDW, CM_Locate_DevNodeW, CM_Reenumerate_DevNode, SetupDiCallClassInstaller,
    SetupDiCreateDeviceInfoList, SetupDiCreateDeviceInfoW, SetupDiDestroyDeviceInfoList, SetupDiEnumDeviceInterfaces,
    SetupDiGetClassDevsW, SetupDiGetDeviceInstallParamsW, SetupDiGetDeviceInterfaceDetailW, SetupDiOpenDeviceInfoW,
    SetupDiSetClassInstallParamsW, SetupDiSetDeviceRegistryPropertyW, CM_LOCATE_DEVNODE_NORMAL, CM_REENUMERATE_FLAGS,
    CONFIGRET, CR_SUCCESS, DIINSTALLDRIVER_FLAGS, DI_FUNCTION, HDEVINFO, SETUP_DI_DEVICE_CREATION_FLAGS,
    SETUP_DI_GET_CLASS_DEVS_FLAGS, SETUP_DI_REGISTRY_PROPERTY, SP_CLASSINSTALL_HEADER, SP_DEVICE_INTERFACE_DATA,
    SP_DEVINFO_DATA, SP_DEVINSTALL_PARAMS_W, SP_REMOVEDEVICE_PARAMS, UPDATEDRIVERFORPLUGANDPLAYDEVICES_FLAGS,
};
use windows::Win32::Foundation::{ERROR_INSUFFICIENT_BUFFER, ERROR_INVALID_PARAMETER};

/// 通过 windows crate 调用设备安装函数
pub struct SetupApi;

fn wide(text: &str) -> Result<widestring::U16CString, u32> {
    toWide(text).map_err(|_| ERROR_INVALID_PARAMETER.0)
}

fn configRet(status: CONFIGRET) -> Result<(), u32> {
    if status == CR_SUCCESS {
        Ok(())
    } else {
        Err(status.0)
    }
}

impl DeviceApi for SetupApi {
    fn get_class_devs(&self, guid: &GUID, flags: SETUP_DI_GET_CLASS_DEVS_FLAGS) -> Result<HDEVINFO, u32> {
        unsafe { SetupDiGetClassDevsW(Some(guid), PCWSTR::null(), None, flags).map_err(|e| osCode(&e)) }
    }

    fn create_device_info_list(&self, classGuid: &GUID) -> Result<HDEVINFO, u32> {
        unsafe { SetupDiCreateDeviceInfoList(Some(classGuid), None).map_err(|e| osCode(&e)) }
    }

    fn destroy_device_info_list(&self, set: HDEVINFO) -> Result<(), u32> {
        unsafe { SetupDiDestroyDeviceInfoList(set).map_err(|e| osCode(&e)) }
    }

    fn enum_device_interfaces(&self, set: HDEVINFO, guid: &GUID, index: u32, data: &mut SP_DEVICE_INTERFACE_DATA) -> Result<(), u32> {
        unsafe { SetupDiEnumDeviceInterfaces(set, None, guid, index, data).map_err(|e| osCode(&e)) }
    }

    fn get_device_interface_detail_size(&self, set: HDEVINFO, interfaceData: &SP_DEVICE_INTERFACE_DATA, devInfo: &mut SP_DEVINFO_DATA) -> Result<u32, u32> {
        let mut required = 0u32;
        // 空缓冲区调用必然失败，ERROR_INSUFFICIENT_BUFFER 时 required 为所需字节数
        match unsafe { SetupDiGetDeviceInterfaceDetailW(set, interfaceData, None, 0, Some(&mut required), Some(devInfo)) } {
            Ok(()) => Ok(required),
            Err(e) if osCode(&e) == ERROR_INSUFFICIENT_BUFFER.0 => Ok(required),
            Err(e) => Err(osCode(&e)),
        }
    }

    fn get_device_interface_detail(&self, set: HDEVINFO, interfaceData: &SP_DEVICE_INTERFACE_DATA, buffer: &mut DetailBuffer, devInfo: &mut SP_DEVINFO_DATA) -> Result<(), u32> {
        let len = buffer.len() as u32;
        unsafe {
            SetupDiGetDeviceInterfaceDetailW(set, interfaceData, Some(buffer.as_mut_ptr()), len, None, Some(devInfo))
                .map_err(|e| osCode(&e))
        }
    }

    fn get_device_id(&self, devInst: u32, buffer: &mut [u16]) -> Result<(), u32> {
        configRet(unsafe { CM_Get_Device_IDW(devInst, buffer, 0) })
    }

    fn create_device_info(&self, set: HDEVINFO, className: &str, classGuid: &GUID, flags: SETUP_DI_DEVICE_CREATION_FLAGS, devInfo: &mut SP_DEVINFO_DATA) -> Result<(), u32> {
        let className = wide(className)?;
        unsafe {
            SetupDiCreateDeviceInfoW(set, PCWSTR::from_raw(className.as_ptr()), classGuid, PCWSTR::null(), None, flags, Some(devInfo))
                .map_err(|e| osCode(&e))
        }
    }

    fn set_device_registry_property(&self, set: HDEVINFO, devInfo: &SP_DEVINFO_DATA, property: SETUP_DI_REGISTRY_PROPERTY, value: &[u8]) -> Result<(), u32> {
        let mut devInfo = *devInfo;
        unsafe { SetupDiSetDeviceRegistryPropertyW(set, &mut devInfo, property, Some(value)).map_err(|e| osCode(&e)) }
    }

    fn call_class_installer(&self, function: DI_FUNCTION, set: HDEVINFO, devInfo: &SP_DEVINFO_DATA) -> Result<(), u32> {
        unsafe { SetupDiCallClassInstaller(function, set, Some(devInfo)).map_err(|e| osCode(&e)) }
    }

    fn open_device_info(&self, set: HDEVINFO, instanceId: &str, devInfo: &mut SP_DEVINFO_DATA) -> Result<(), u32> {
        let instanceId = wide(instanceId)?;
        unsafe {
            SetupDiOpenDeviceInfoW(set, PCWSTR::from_raw(instanceId.as_ptr()), None, 0, Some(devInfo))
                .map_err(|e| osCode(&e))
        }
    }

    fn set_class_install_params(&self, set: HDEVINFO, devInfo: &SP_DEVINFO_DATA, params: &SP_REMOVEDEVICE_PARAMS) -> Result<(), u32> {
        // 移除参数以类安装头开始
        let header = params as *const SP_REMOVEDEVICE_PARAMS as *const SP_CLASSINSTALL_HEADER;
        unsafe {
            SetupDiSetClassInstallParamsW(set, Some(devInfo), Some(header), size_of::<SP_REMOVEDEVICE_PARAMS>() as u32)
                .map_err(|e| osCode(&e))
        }
    }

    fn get_device_install_params(&self, set: HDEVINFO, devInfo: &SP_DEVINFO_DATA, params: &mut SP_DEVINSTALL_PARAMS_W) -> Result<(), u32> {
        unsafe { SetupDiGetDeviceInstallParamsW(set, Some(devInfo), params).map_err(|e| osCode(&e)) }
    }

    fn install_driver(&self, infPath: &Path, flags: DIINSTALLDRIVER_FLAGS) -> Result<bool, u32> {
        unsafe { newdevAPI::diInstallDriver(infPath, flags) }
    }

    fn update_driver_for_plug_and_play_devices(&self, hwId: &HardwareId, infPath: &Path, flags: UPDATEDRIVERFORPLUGANDPLAYDEVICES_FLAGS) -> Result<bool, u32> {
        unsafe { newdevAPI::updateDriverForPlugAndPlayDevices(infPath, hwId, flags) }
    }

    /// [参考资料](https://www.shuzhiduo.com/A/D854GRg3JE)
    fn locate_root_devnode(&self) -> Result<u32, u32> {
        let mut devInst = 0u32;
        configRet(unsafe { CM_Locate_DevNodeW(&mut devInst, PCWSTR::null(), CM_LOCATE_DEVNODE_NORMAL) })?;
        Ok(devInst)
    }

    fn reenumerate_devnode(&self, devInst: u32, flags: CM_REENUMERATE_FLAGS) -> Result<(), u32> {
        configRet(unsafe { CM_Reenumerate_DevNode(devInst, flags) })
    }
}
