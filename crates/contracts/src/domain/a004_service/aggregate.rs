use serde::{Deserialize, Serialize};

use crate::domain::a006_service_center::CenterHead;
use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;
use crate::shared::validation::{require_localized, Validate};

// ============================================================================
// Record
// ============================================================================

/// Service offered to external clients (testing, consulting, training)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "center_id")]
    pub center_id: Option<String>,
    #[serde(default, alias = "center_head")]
    pub center_head: Option<CenterHead>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl EntityRecord for Service {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn envelope_key() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "Service"
    }

    fn list_name() -> &'static str {
        "Services"
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::Localized(Some(&self.title)),
            SearchField::Text(&self.category),
            SearchField::Localized(self.center_head.as_ref().map(|h| &h.name)),
        ]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "category" => Some(self.category.clone()).filter(|c| !c.is_empty()),
            "center" => self.center_id.clone(),
            _ => None,
        }
    }
}

impl DeleteGuard for Service {}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub title: LocalizedText,
    pub description: Option<LocalizedText>,
    pub category: String,
    pub center_id: Option<String>,
    pub price: Option<f64>,
    pub is_active: bool,
}

impl From<&Service> for ServiceDto {
    fn from(s: &Service) -> Self {
        Self {
            title: s.title.clone(),
            description: s.description.clone(),
            category: s.category.clone(),
            center_id: s.center_id.clone(),
            price: s.price,
            is_active: s.is_active,
        }
    }
}

impl Validate for ServiceDto {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.title, "Title")?;
        if self.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err("Price must be a non-negative number".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_center_head_alias() {
        let s: Service = serde_json::from_value(json!({
            "id": "sv1",
            "title": {"en": "XRD analysis", "ar": "تحليل حيود الأشعة السينية"},
            "category": "testing",
            "center_head": {"name": "Dr. Omar"}
        }))
        .unwrap();
        assert_eq!(s.center_head.unwrap().name.resolve("en"), "Dr. Omar");
    }

    #[test]
    fn test_price_validation() {
        let mut dto = ServiceDto {
            title: LocalizedText::plain("SEM imaging"),
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.price = Some(150.0);
        assert!(dto.validate().is_ok());
        dto.price = None;
        assert!(dto.validate().is_ok());
    }
}
