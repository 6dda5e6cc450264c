use crate::i18n::getLocaleText;
use crate::utils::devinfo::HardwareId;
use crate::utils::guid::parseGuid;
use crate::utils::profile::BusProfile;
use fluent_templates::fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::path::{absolute, Path};
use windows::core::GUID;

/// INF 文件路径（存在且扩展名为 .inf），返回绝对路径
pub fn isValidInfPath(value: &str) -> Result<String, String> {
    let path = Path::new(value);
    let isInf = path.extension().map(|ext| ext.eq_ignore_ascii_case("inf")).unwrap_or(false);
    if !path.is_file() || !isInf {
        let args: HashMap<String, FluentValue> = hash_map!("path".to_string() => value.to_string().into());
        return Err(getLocaleText("invalid-inf-path", Some(&args)));
    }
    absolute(path)
        .map(|path| path.display().to_string())
        .map_err(|e| e.to_string())
}

pub fn isValidGuid(value: &str) -> Result<GUID, String> {
    parseGuid(value).map_err(|_| {
        let args: HashMap<String, FluentValue> = hash_map!("guid".to_string() => value.to_string().into());
        getLocaleText("invalid-guid", Some(&args))
    })
}

pub fn isValidHardwareId(value: &str) -> Result<HardwareId, String> {
    HardwareId::new(value).map_err(|_| getLocaleText("invalid-hardware-id", None))
}

pub fn isValidInstanceId(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() || value.contains('\0') {
        return Err(getLocaleText("invalid-instance-id", None));
    }
    Ok(value.to_string())
}

/// 总线配置文件（JSON）
pub fn isValidProfile(value: &str) -> Result<BusProfile, String> {
    BusProfile::load(Path::new(value)).map_err(|e| {
        let args: HashMap<String, FluentValue> = hash_map!(
            "path".to_string() => value.to_string().into(),
            "error".to_string() => e.to_string().into()
        );
        getLocaleText("invalid-profile", Some(&args))
    })
}
