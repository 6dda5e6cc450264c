// 禁用变量命名警告
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
// 禁用未使用代码警告
#![allow(dead_code)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
mod macros;
mod cli;
mod command;
mod i18n;
mod utils;


use std::env;
use std::path::PathBuf;

/// ERROR_SUCCESS_REBOOT_REQUIRED
pub const EXIT_REBOOT_REQUIRED: i32 = 3010;

lazy_static! {
    pub static ref LOG_PATH: PathBuf = {
        let name = env::current_exe()
            .ok()
            .and_then(|exe| exe.file_stem().map(|stem| PathBuf::from(stem).with_extension("log")))
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_PKG_NAME"), ".log")));
        env::current_dir().unwrap_or_default().join(name)
    };
}

#[cfg(windows)]
fn main() {
    use crate::command::Outcome;

    // 处理CLI
    let matches = cli::cli::cli();
    let result = cli::matches::matches(matches);

    // 退出程序
    std::process::exit(match result {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::RebootRequired) => EXIT_REBOOT_REQUIRED,
        Err(_) => 1,
    });
}

#[cfg(not(windows))]
fn main() {
    use crate::i18n::getLocaleText;
    use crate::utils::console::{writeConsole, ConsoleType};

    writeConsole(ConsoleType::Err, &getLocaleText("unsupported-platform", None));
    std::process::exit(1);
}
