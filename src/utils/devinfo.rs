// [SetupAPI 结构体定义](https://learn.microsoft.com/zh-cn/windows/win32/api/setupapi/)
// 结构体与常量来自 windows crate，这里只补充 cbSize 初始化、重启判断与详情缓冲区

use crate::utils::error::DevconError;
use std::mem::{offset_of, size_of};
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    DIF_REMOVE, DI_NEEDREBOOT, DI_NEEDRESTART, DI_REMOVEDEVICE_GLOBAL, SETUP_DI_DEVICE_INSTALL_FLAGS,
    SP_CLASSINSTALL_HEADER, SP_DEVICE_INTERFACE_DATA, SP_DEVICE_INTERFACE_DETAIL_DATA_W, SP_DEVINFO_DATA,
    SP_DEVINSTALL_PARAMS_W, SP_REMOVEDEVICE_PARAMS,
};

/// 设备实例ID缓冲区长度（字符数，大于 MAX_DEVICE_ID_LEN + 1）
pub const DEVICE_ID_BUFFER_LEN: usize = 256;

/// SP_DEVICE_INTERFACE_DETAIL_DATA_W 头部 cbSize（64 位为 8，32 位为 4 + 一个宽字符）
pub const DETAIL_HEADER_SIZE: u32 = size_of::<SP_DEVICE_INTERFACE_DETAIL_DATA_W>() as u32;

/// 设备路径在详情缓冲区中的偏移
pub const DETAIL_PATH_OFFSET: usize = offset_of!(SP_DEVICE_INTERFACE_DETAIL_DATA_W, DevicePath);

#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(size_of::<SP_DEVINFO_DATA>() == 32);
    assert!(size_of::<SP_DEVICE_INTERFACE_DATA>() == 32);
    assert!(size_of::<SP_DEVINSTALL_PARAMS_W>() == 584);
    assert!(DETAIL_HEADER_SIZE == 8);
};
#[cfg(target_pointer_width = "32")]
const _: () = {
    assert!(size_of::<SP_DEVINFO_DATA>() == 28);
    assert!(size_of::<SP_DEVICE_INTERFACE_DATA>() == 28);
    assert!(size_of::<SP_DEVINSTALL_PARAMS_W>() == 556);
    assert!(DETAIL_HEADER_SIZE == 6);
};
const _: () = {
    assert!(offset_of!(SP_DEVINSTALL_PARAMS_W, Flags) == 4);
    assert!(DETAIL_PATH_OFFSET == 4);
    assert!(size_of::<SP_CLASSINSTALL_HEADER>() == 8);
    assert!(size_of::<SP_REMOVEDEVICE_PARAMS>() == 16);
};

/// 已设置 cbSize 的 SP_DEVINFO_DATA
pub fn devInfoData() -> SP_DEVINFO_DATA {
    SP_DEVINFO_DATA { cbSize: size_of::<SP_DEVINFO_DATA>() as u32, ..Default::default() }
}

/// 已设置 cbSize 的 SP_DEVICE_INTERFACE_DATA
pub fn interfaceData() -> SP_DEVICE_INTERFACE_DATA {
    SP_DEVICE_INTERFACE_DATA { cbSize: size_of::<SP_DEVICE_INTERFACE_DATA>() as u32, ..Default::default() }
}

/// 已设置 cbSize 的 SP_DEVINSTALL_PARAMS_W
pub fn installParams() -> SP_DEVINSTALL_PARAMS_W {
    SP_DEVINSTALL_PARAMS_W { cbSize: size_of::<SP_DEVINSTALL_PARAMS_W>() as u32, ..Default::default() }
}

/// 全局移除参数（所有硬件配置文件）
pub fn globalRemoveParams() -> SP_REMOVEDEVICE_PARAMS {
    SP_REMOVEDEVICE_PARAMS {
        ClassInstallHeader: SP_CLASSINSTALL_HEADER {
            cbSize: size_of::<SP_CLASSINSTALL_HEADER>() as u32,
            InstallFunction: DIF_REMOVE,
        },
        Scope: DI_REMOVEDEVICE_GLOBAL,
        HwProfile: 0,
    }
}

/// 检查 DI_NEEDRESTART / DI_NEEDREBOOT 任一标志
pub fn isRebootRequired(flags: SETUP_DI_DEVICE_INSTALL_FLAGS) -> bool {
    (flags & (DI_NEEDRESTART | DI_NEEDREBOOT)).0 != 0
}

#[cfg(test)]
thread_local! {
    pub static LIVE_DETAIL_BUFFERS: std::cell::Cell<isize> = const { std::cell::Cell::new(0) };
}

/// SP_DEVICE_INTERFACE_DETAIL_DATA_W 缓冲区
/// 按查询到的大小分配，4 字节对齐
pub struct DetailBuffer {
    words: Vec<u32>,
    len: usize,
}

impl DetailBuffer {
    /// 分配 `len` 字节并写入头部 cbSize
    pub fn new(len: usize) -> Self {
        let mut words = vec![0u32; len.div_ceil(4).max(2)];
        words[0] = DETAIL_HEADER_SIZE;

        #[cfg(test)]
        LIVE_DETAIL_BUFFERS.with(|live| live.set(live.get() + 1));

        Self { words, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn as_mut_ptr(&mut self) -> *mut SP_DEVICE_INTERFACE_DETAIL_DATA_W {
        self.words.as_mut_ptr() as *mut SP_DEVICE_INTERFACE_DETAIL_DATA_W
    }

    /// 头部 cbSize
    #[cfg(test)]
    pub fn header(&self) -> u32 {
        self.words[0]
    }

    /// 可写的宽字符区域（设备路径）
    #[cfg(test)]
    pub fn path_mut(&mut self) -> &mut [u16] {
        let count = self.len.saturating_sub(DETAIL_PATH_OFFSET) / 2;
        unsafe { std::slice::from_raw_parts_mut((self.words.as_mut_ptr() as *mut u16).add(DETAIL_PATH_OFFSET / 2), count) }
    }

    /// 读取设备路径（偏移 4 字节起，到第一个 NUL 为止）
    pub fn devicePath(&self) -> String {
        let count = self.len.saturating_sub(DETAIL_PATH_OFFSET) / 2;
        let wide = unsafe { std::slice::from_raw_parts((self.words.as_ptr() as *const u16).add(DETAIL_PATH_OFFSET / 2), count) };
        let end = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
        String::from_utf16_lossy(&wide[..end])
    }
}

#[cfg(test)]
impl Drop for DetailBuffer {
    fn drop(&mut self) {
        LIVE_DETAIL_BUFFERS.with(|live| live.set(live.get() - 1));
    }
}

/// 硬件ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareId(String);

impl HardwareId {
    pub fn new(id: &str) -> Result<Self, DevconError> {
        if id.is_empty() || id.contains('\0') {
            return Err(DevconError::InvalidString(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// REG_MULTI_SZ 字节序列（双 NUL 结尾，长度含结束符）
    pub fn toMultiSz(&self) -> Vec<u8> {
        self.0
            .encode_utf16()
            .chain([0, 0])
            .flat_map(u16::to_ne_bytes)
            .collect()
    }

    /// 单 NUL 结尾的宽字符串
    pub fn toWide(&self) -> Vec<u16> {
        self.0.encode_utf16().chain(Some(0)).collect()
    }
}

impl std::fmt::Display for HardwareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
