use crate::utils::error::DevconError;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use widestring::{U16CStr, U16CString};

/// 写日志
pub fn writeLogFile(logPath: &Path, content: &str) -> Result<(), Box<dyn Error>> {
    // 以追加模式打开文件（不存在则创建）
    let mut file = OpenOptions::new().create(true).append(true).open(logPath)?;
    file.write_all(format!("{}\r\n", content).as_bytes())?;
    Ok(())
}

/// 转为以 NUL 结尾的宽字符串
pub fn toWide(text: &str) -> Result<U16CString, DevconError> {
    U16CString::from_str(text).map_err(|_| DevconError::InvalidString(text.to_string()))
}

/// 路径转为以 NUL 结尾的宽字符串
pub fn pathToWide(path: &Path) -> Result<U16CString, DevconError> {
    U16CString::from_os_str(path.as_os_str()).map_err(|_| DevconError::InvalidString(path.display().to_string()))
}

/// 读取宽字符缓冲区（到第一个 NUL 为止）
pub fn fromWide(buffer: &[u16]) -> String {
    match U16CStr::from_slice_truncate(buffer) {
        Ok(text) => text.to_string_lossy(),
        Err(_) => String::from_utf16_lossy(buffer),
    }
}
