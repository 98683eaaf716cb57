use contracts::shared::api_error::ApiError;
use contracts::system::settings::{SiteSettings, SETTINGS_KEY};

use crate::shared::api_client::{fetch_record, put_json};

const SETTINGS_PATH: &str = "/settings";

pub async fn fetch_settings() -> Result<SiteSettings, ApiError> {
    fetch_record(SETTINGS_PATH, SETTINGS_KEY).await
}

pub async fn save_settings(settings: &SiteSettings) -> Result<(), ApiError> {
    put_json(SETTINGS_PATH, settings).await
}
