use fluent_templates::fluent_bundle::FluentValue;
use fluent_templates::{static_loader, Loader};
use std::borrow::Cow;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

static_loader! {
    static LOCALES = {
        locales: "./src/i18n/locales",
        fallback_language: "en-US",
        // 去除参数两侧的 Unicode 隔离符
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

lazy_static! {
    static ref LANGUAGE: LanguageIdentifier = currentLanguage();
}

/// 当前界面语言
#[cfg(windows)]
fn currentLanguage() -> LanguageIdentifier {
    use windows::Win32::Globalization::GetUserDefaultUILanguage;

    // 2052 为简体中文
    let tag = match unsafe { GetUserDefaultUILanguage() } {
        2052 => "zh-CN",
        _ => "en-US",
    };
    tag.parse().unwrap_or_default()
}

#[cfg(not(windows))]
fn currentLanguage() -> LanguageIdentifier {
    "en-US".parse().unwrap_or_default()
}

/// 获取本地化文本
/// # 参数
/// 1. 文本ID
/// 2. 参数
pub fn getLocaleText(id: &str, args: Option<&HashMap<String, FluentValue>>) -> String {
    match args {
        Some(args) => {
            let args: HashMap<Cow<'static, str>, FluentValue> =
                args.iter().map(|(key, value)| (Cow::Owned(key.clone()), value.clone())).collect();
            LOCALES.lookup_with_args(&LANGUAGE, id, &args)
        }
        None => LOCALES.lookup(&LANGUAGE, id),
    }
}
