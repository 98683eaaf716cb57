use serde::{Deserialize, Serialize};

use crate::shared::localized::LocalizedText;
use crate::shared::validation::{optional_email, require_localized, Validate};

/// Envelope key of `GET /settings`.
pub const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// Site-wide settings edited from the admin console
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default, alias = "site_name")]
    pub site_name: LocalizedText,
    #[serde(default)]
    pub tagline: Option<LocalizedText>,
    #[serde(default, alias = "contact_email")]
    pub contact_email: Option<String>,
    #[serde(default, alias = "contact_phone")]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<LocalizedText>,
    #[serde(default)]
    pub social: SocialLinks,
}

impl Validate for SiteSettings {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.site_name, "Site name")?;
        optional_email(self.contact_email.as_deref(), "Contact email")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::extract_record;
    use serde_json::json;

    #[test]
    fn test_settings_from_envelope() {
        let settings: SiteSettings = extract_record(
            json!({"settings": {"siteName": {"en": "Research Institute", "ar": "معهد البحوث"}, "contact_email": "info@institute.org"}}),
            SETTINGS_KEY,
        )
        .unwrap();
        assert_eq!(settings.site_name.resolve("ar"), "معهد البحوث");
        assert_eq!(settings.contact_email.as_deref(), Some("info@institute.org"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_site_name_required() {
        assert_eq!(SiteSettings::default().validate().unwrap_err(), "Site name is required");
    }
}
