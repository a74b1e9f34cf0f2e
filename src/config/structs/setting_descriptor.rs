use serde::Serialize;
use crate::config::enums::setting_kind::SettingKind;

/// Describes one plugin option so a host can render and bound it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SettingDescriptor {
    /// Key of the option in the serialized settings.
    pub key: &'static str,

    /// Human readable label.
    pub description: &'static str,

    /// Presentation kind.
    pub kind: SettingKind,

    /// Lowest accepted value for integer options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
}
