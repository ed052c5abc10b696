use crate::sdk::models::software_update::{
    ReaderSoftwareUpdate, UpdateComponent, UpdateTimeEstimate,
};
use shared::{ReaderSoftwareUpdateApi, UpdateComponentApi, UpdateTimeEstimateApi};

pub struct SoftwareUpdateMapper;

impl SoftwareUpdateMapper {
    /// Convert an SDK update descriptor; `requiredAt` becomes epoch milliseconds
    pub fn to_api(update: ReaderSoftwareUpdate) -> ReaderSoftwareUpdateApi {
        ReaderSoftwareUpdateApi {
            components: update
                .components
                .into_iter()
                .map(Self::component_to_api)
                .collect(),
            key_profile_name: update.key_profile_name,
            only_install_required_updates: update.only_install_required_updates,
            required_at: update.required_at.timestamp_millis(),
            settings_version: update.settings_version,
            time_estimate: Self::time_estimate_to_api(update.time_estimate),
            version: update.version,
        }
    }

    pub fn component_to_api(component: UpdateComponent) -> UpdateComponentApi {
        match component {
            UpdateComponent::Incremental => UpdateComponentApi::Incremental,
            UpdateComponent::Firmware => UpdateComponentApi::Firmware,
            UpdateComponent::Config => UpdateComponentApi::Config,
            UpdateComponent::Keys => UpdateComponentApi::Keys,
        }
    }

    pub fn time_estimate_to_api(estimate: UpdateTimeEstimate) -> UpdateTimeEstimateApi {
        match estimate {
            UpdateTimeEstimate::LessThanOneMinute => UpdateTimeEstimateApi::LessThanOneMinute,
            UpdateTimeEstimate::OneToTwoMinutes => UpdateTimeEstimateApi::OneToTwoMinutes,
            UpdateTimeEstimate::TwoToFiveMinutes => UpdateTimeEstimateApi::TwoToFiveMinutes,
            UpdateTimeEstimate::FiveToFifteenMinutes => UpdateTimeEstimateApi::FiveToFifteenMinutes,
        }
    }
}
