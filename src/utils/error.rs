use thiserror::Error;
use windows::Win32::Foundation::WIN32_ERROR;

/// 设备节点操作错误
#[derive(Debug, Error)]
pub enum DevconError {
    /// Win32 调用失败（GetLastError）
    #[error("{call} failed, error code: {code:#X}")]
    Win32 { call: &'static str, code: u32 },

    /// 配置管理器调用失败（CONFIGRET）
    #[error("{call} failed, CONFIGRET: {code:#X}")]
    ConfigRet { call: &'static str, code: u32 },

    #[error("invalid string: {0:?}")]
    InvalidString(String),

    #[error("invalid profile: {0}")]
    Profile(String),
}

impl DevconError {
    /// 附带的系统错误码
    #[cfg(test)]
    pub fn code(&self) -> Option<u32> {
        match self {
            DevconError::Win32 { code, .. } | DevconError::ConfigRet { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// windows::core::Error 还原为系统错误码
/// HRESULT_FROM_WIN32 包装的取回 Win32 错误码，SetupAPI 的 0xE000xxxx 错误码原样返回
pub fn osCode(error: &windows::core::Error) -> u32 {
    match WIN32_ERROR::from_error(error) {
        Some(code) => code.0,
        None => error.code().0 as u32,
    }
}
