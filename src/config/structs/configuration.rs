use serde::{Deserialize, Serialize};
use crate::config::structs::leecher_settings::LeecherSettings;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub plugin: LeecherSettings,
}
