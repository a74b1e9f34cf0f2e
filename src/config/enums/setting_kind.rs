use serde::{Deserialize, Serialize};

/// How a host should present a plugin setting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Multi-line free text.
    #[serde(rename = "textview")]
    TextView,
    /// Non-negative integer, optionally bounded below.
    #[serde(rename = "int")]
    Int,
    /// Checkbox.
    #[serde(rename = "bool")]
    Bool,
    /// Editable list of strings.
    #[serde(rename = "list string")]
    ListString,
}
