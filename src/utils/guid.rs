use serde::{Deserialize, Deserializer, Serializer};
use windows::core::GUID;

/// 解析 `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`，大括号可省略
pub fn parseGuid(text: &str) -> Result<GUID, String> {
    let text = text.trim();
    let inner = match (text.strip_prefix('{'), text.ends_with('}')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => text,
        _ => return Err(format!("Invalid GUID: {}", text)),
    };
    GUID::try_from(inner).map_err(|_| format!("Invalid GUID: {}", text))
}

/// 大写带大括号的 GUID 文本
pub fn formatGuid(guid: &GUID) -> String {
    format!("{{{:?}}}", guid)
}

/// 以字符串读写 GUID（配合 `#[serde(with = "...")]`）
pub mod asString {
    use super::*;

    pub fn serialize<S: Serializer>(guid: &GUID, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&formatGuid(guid))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<GUID, D::Error> {
        let text = String::deserialize(deserializer)?;
        parseGuid(&text).map_err(serde::de::Error::custom)
    }
}
