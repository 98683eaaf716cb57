use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;
use crate::shared::slug::is_valid_slug;
use crate::shared::validation::{optional_email, require_localized, Validate};

// ============================================================================
// Record
// ============================================================================

/// Person heading a service center; also embedded in services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterHead {
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub title: Option<LocalizedText>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Service center offering lab / consulting services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenter {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    /// The API has shipped both spellings.
    #[serde(default, alias = "center_head")]
    pub center_head: Option<CenterHead>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
    #[serde(default, alias = "services_count")]
    pub services_count: u32,
}

fn default_active() -> bool {
    true
}

impl EntityRecord for ServiceCenter {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "service-centers"
    }

    fn envelope_key() -> &'static str {
        "centers"
    }

    fn element_name() -> &'static str {
        "Service center"
    }

    fn list_name() -> &'static str {
        "Service centers"
    }
}

impl Searchable for ServiceCenter {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::Localized(Some(&self.name)),
            SearchField::Text(&self.slug),
            SearchField::Text(self.email.as_deref().unwrap_or("")),
            SearchField::Localized(self.center_head.as_ref().map(|h| &h.name)),
        ]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(if self.is_active { "active" } else { "inactive" }.to_string()),
            _ => None,
        }
    }
}

impl DeleteGuard for ServiceCenter {
    fn delete_blocker(&self) -> Option<String> {
        (self.services_count > 0).then(|| {
            format!(
                "Center still offers {} service(s); reassign or delete them first",
                self.services_count
            )
        })
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenterDto {
    pub name: LocalizedText,
    pub slug: String,
    pub description: Option<LocalizedText>,
    pub center_head: Option<CenterHead>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

impl From<&ServiceCenter> for ServiceCenterDto {
    fn from(c: &ServiceCenter) -> Self {
        Self {
            name: c.name.clone(),
            slug: c.slug.clone(),
            description: c.description.clone(),
            center_head: c.center_head.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            is_active: c.is_active,
        }
    }
}

impl Validate for ServiceCenterDto {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.name, "Name")?;
        if !self.slug.is_empty() && !is_valid_slug(&self.slug) {
            return Err("Slug may only contain lowercase letters, digits and hyphens".into());
        }
        optional_email(self.email.as_deref(), "Email")?;
        if let Some(head) = &self.center_head {
            optional_email(head.email.as_deref(), "Head email")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_center_head_accepts_both_spellings() {
        let camel: ServiceCenter = serde_json::from_value(json!({
            "id": "c1",
            "name": "Nano Center",
            "centerHead": {"name": {"en": "Dr. Huda"}}
        }))
        .unwrap();
        let snake: ServiceCenter = serde_json::from_value(json!({
            "id": "c1",
            "name": "Nano Center",
            "center_head": {"name": {"en": "Dr. Huda"}}
        }))
        .unwrap();
        assert_eq!(camel.center_head, snake.center_head);
        assert_eq!(camel.center_head.unwrap().name.resolve("ar"), "Dr. Huda");
    }

    #[test]
    fn test_delete_guard_counts_services() {
        let mut c: ServiceCenter = serde_json::from_value(json!({"id": "c2", "servicesCount": 2})).unwrap();
        assert!(c.delete_blocker().is_some());
        c.services_count = 0;
        assert!(c.delete_blocker().is_none());
    }

    #[test]
    fn test_search_includes_head_name() {
        let c: ServiceCenter = serde_json::from_value(json!({
            "id": "c3",
            "name": "Analysis Center",
            "centerHead": {"name": "Prof. Karim"}
        }))
        .unwrap();
        assert!(crate::shared::list_filter::matches_search(&c, "karim", "en"));
    }

    #[test]
    fn test_validation_checks_emails() {
        let dto = ServiceCenterDto {
            name: LocalizedText::plain("Center"),
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err(), "Email is not a valid email address");
    }
}
