use crate::utils::devinfo::HardwareId;
use crate::utils::error::DevconError;
use crate::utils::guid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use windows::core::GUID;

/// 虚拟总线配置
/// 设备类、接口GUID与硬件ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusProfile {
    pub class_name: String,
    #[serde(with = "guid::asString")]
    pub class_guid: GUID,
    #[serde(with = "guid::asString")]
    pub interface_guid: GUID,
    pub hardware_id: String,
}

impl Default for BusProfile {
    /// ViGEmBus
    fn default() -> Self {
        Self {
            class_name: "System".to_string(),
            class_guid: GUID::from_u128(0x4D36E97D_E325_11CE_BFC1_08002BE10318),
            interface_guid: GUID::from_u128(0x96E42B22_F5E9_42F8_B043_ED0F932F014F),
            hardware_id: r"Nefarius\ViGEmBus\Gen1".to_string(),
        }
    }
}

impl BusProfile {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, DevconError> {
        let content = fs::read_to_string(path).map_err(|e| DevconError::Profile(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, DevconError> {
        let profile: BusProfile = serde_json::from_str(content).map_err(|e| DevconError::Profile(e.to_string()))?;
        profile.hardwareId()?;
        Ok(profile)
    }

    pub fn hardwareId(&self) -> Result<HardwareId, DevconError> {
        HardwareId::new(&self.hardware_id)
    }
}
