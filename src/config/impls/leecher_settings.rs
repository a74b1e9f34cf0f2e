use std::collections::HashSet;
use log::warn;
use crate::common::common::render_template;
use crate::config::enums::setting_kind::SettingKind;
use crate::config::structs::leecher_settings::LeecherSettings;
use crate::config::structs::setting_descriptor::SettingDescriptor;

impl Default for LeecherSettings {
    fn default() -> Self {
        LeecherSettings {
            warning_message: String::from(
                "You are sharing less than %files% files, please consider sharing more files if you would like to download from me again. Thanks :)"
            ),
            ban_message: String::from(
                "It looks like you're not sharing anything, so you've been automatically banned.\nPlease consider sharing more files if you would like to download from me again. Thanks :)"
            ),
            min_files: 100,
            min_folders: 1,
            open_private_chat: true,
            ban_zero_files: true,
            detected_leechers: Vec::new(),
        }
    }
}

impl LeecherSettings {
    pub const MIN_FILES_MINIMUM: u64 = 0;
    pub const MIN_FOLDERS_MINIMUM: u64 = 1;

    pub const FILES_PLACEHOLDER: &'static str = "%files%";
    pub const FOLDERS_PLACEHOLDER: &'static str = "%folders%";

    /// Clamps thresholds up to their minimums and drops duplicate entries
    /// from the detected leechers list, keeping the first occurrence.
    pub fn sanitize(&mut self)
    {
        self.min_files = self.min_files.max(Self::MIN_FILES_MINIMUM);
        if self.min_folders < Self::MIN_FOLDERS_MINIMUM {
            warn!("[SETTINGS] Minimum folders {} raised to {}", self.min_folders, Self::MIN_FOLDERS_MINIMUM);
            self.min_folders = Self::MIN_FOLDERS_MINIMUM;
        }

        let mut seen = HashSet::new();
        self.detected_leechers.retain(|user| seen.insert(user.clone()));
    }

    pub fn schema() -> Vec<SettingDescriptor>
    {
        vec![
            SettingDescriptor {
                key: "warning_message",
                description: "Private chat message to send to leechers. Each line is sent as a separate message, too many message lines may get you temporarily banned for spam!",
                kind: SettingKind::TextView,
                minimum: None,
            },
            SettingDescriptor {
                key: "ban_message",
                description: "If enabled, this message will be sent to users that share zero files.",
                kind: SettingKind::TextView,
                minimum: None,
            },
            SettingDescriptor {
                key: "min_files",
                description: "Require users to have a minimum number of shared files:",
                kind: SettingKind::Int,
                minimum: Some(Self::MIN_FILES_MINIMUM),
            },
            SettingDescriptor {
                key: "min_folders",
                description: "Require users to have a minimum number of shared folders:",
                kind: SettingKind::Int,
                minimum: Some(Self::MIN_FOLDERS_MINIMUM),
            },
            SettingDescriptor {
                key: "open_private_chat",
                description: "Open chat tabs when sending private messages to leechers",
                kind: SettingKind::Bool,
                minimum: None,
            },
            SettingDescriptor {
                key: "ban_zero_files",
                description: "Ban users that share zero files",
                kind: SettingKind::Bool,
                minimum: None,
            },
            SettingDescriptor {
                key: "detected_leechers",
                description: "Detected leechers",
                kind: SettingKind::ListString,
                minimum: None,
            },
        ]
    }

    pub fn placeholders(&self) -> Vec<(&'static str, String)>
    {
        vec![
            (Self::FILES_PLACEHOLDER, self.min_files.to_string()),
            (Self::FOLDERS_PLACEHOLDER, self.min_folders.to_string()),
        ]
    }

    pub fn render_warning_message(&self) -> Vec<String>
    {
        render_template(&self.warning_message, &self.placeholders())
    }

    pub fn render_ban_message(&self) -> Vec<String>
    {
        render_template(&self.ban_message, &self.placeholders())
    }

    pub fn has_warning_message(&self) -> bool
    {
        !self.warning_message.is_empty()
    }

    pub fn has_ban_message(&self) -> bool
    {
        !self.ban_message.is_empty()
    }

    pub fn meets_thresholds(&self, files: u64, folders: u64) -> bool
    {
        files >= self.min_files && folders >= self.min_folders
    }

    #[inline]
    pub fn is_detected_leecher(&self, user: &str) -> bool
    {
        self.detected_leechers.iter().any(|detected| detected == user)
    }

    /// Returns `true` when the user was not yet in the list.
    pub fn add_detected_leecher(&mut self, user: &str) -> bool
    {
        if self.is_detected_leecher(user) {
            return false;
        }
        self.detected_leechers.push(user.to_string());
        true
    }

    /// Returns `true` when the user was in the list.
    pub fn remove_detected_leecher(&mut self, user: &str) -> bool
    {
        let before = self.detected_leechers.len();
        self.detected_leechers.retain(|detected| detected != user);
        self.detected_leechers.len() != before
    }
}
