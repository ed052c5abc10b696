//! Reader software updates announced by the SDK.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSoftwareUpdate {
    pub version: String,
    pub components: Vec<UpdateComponent>,
    pub key_profile_name: Option<String>,
    pub only_install_required_updates: bool,
    /// Deadline after which the update is installed on connect
    pub required_at: DateTime<Utc>,
    pub settings_version: Option<String>,
    pub time_estimate: UpdateTimeEstimate,
}

impl ReaderSoftwareUpdate {
    pub fn has_firmware_update(&self) -> bool {
        self.components.contains(&UpdateComponent::Firmware)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateComponent {
    Incremental,
    Firmware,
    Config,
    Keys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateTimeEstimate {
    LessThanOneMinute,
    OneToTwoMinutes,
    TwoToFiveMinutes,
    FiveToFifteenMinutes,
}
