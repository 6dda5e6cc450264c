use crate::i18n::getLocaleText;
use crate::utils::util::writeLogFile;
use crate::LOG_PATH;
use chrono::Local;
use console::style;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub enum ConsoleType {
    Info,
    Success,
    Warning,
    Err,
}

/// 开启/关闭调试日志
pub fn setDebug(enable: bool) {
    DEBUG.store(enable, Ordering::Relaxed);
}

/// 是否为调试模式
pub fn isDebug() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// 输出到控制台
pub fn writeConsole(consoleType: ConsoleType, message: &str) {
    let (tag, level) = match consoleType {
        ConsoleType::Info => (style(getLocaleText("info", None)).cyan(), "INFO"),
        ConsoleType::Success => (style(getLocaleText("success", None)).green(), "SUCCESS"),
        ConsoleType::Warning => (style(getLocaleText("warning", None)).yellow(), "WARNING"),
        ConsoleType::Err => (style(getLocaleText("error", None)).red().bright(), "ERROR"),
    };
    println!("  {:<8}  {}", tag, message);
    writeLog(&format!("[{}] {}", level, message));
}

/// 调试模式下写入日志文件
pub fn writeLog(message: &str) {
    if !isDebug() {
        return;
    }
    let line = format!("{}  {}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), message);
    writeLogFile(&LOG_PATH, &line).ok();
}
