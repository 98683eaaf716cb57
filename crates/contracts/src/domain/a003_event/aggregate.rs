use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;
use crate::shared::validation::{require_localized, require_timestamp, Validate};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> LocalizedText {
        match self {
            EventStatus::Upcoming => LocalizedText::pair("Upcoming", "قادمة"),
            EventStatus::Ongoing => LocalizedText::pair("Ongoing", "جارية"),
            EventStatus::Completed => LocalizedText::pair("Completed", "منتهية"),
            EventStatus::Cancelled => LocalizedText::pair("Cancelled", "ملغاة"),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Conference, workshop, seminar...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: Option<LocalizedText>,
    #[serde(default, alias = "starts_at")]
    pub starts_at: String,
    #[serde(default, alias = "ends_at")]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, alias = "image_url")]
    pub image_url: Option<String>,
}

impl EntityRecord for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "events"
    }

    fn envelope_key() -> &'static str {
        "events"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::Localized(Some(&self.title)),
            SearchField::Localized(self.location.as_ref()),
            SearchField::Text(&self.category),
        ]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "category" => Some(self.category.clone()).filter(|c| !c.is_empty()),
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl DeleteGuard for Event {}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub title: LocalizedText,
    pub description: Option<LocalizedText>,
    pub category: String,
    pub location: Option<LocalizedText>,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub status: EventStatus,
    pub image_url: Option<String>,
}

impl From<&Event> for EventDto {
    fn from(e: &Event) -> Self {
        Self {
            title: e.title.clone(),
            description: e.description.clone(),
            category: e.category.clone(),
            location: e.location.clone(),
            starts_at: e.starts_at.clone(),
            ends_at: e.ends_at.clone(),
            status: e.status,
            image_url: e.image_url.clone(),
        }
    }
}

impl Validate for EventDto {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.title, "Title")?;
        let starts_at = require_timestamp(&self.starts_at, "Start date")?;
        if let Some(ends_at) = self.ends_at.as_deref().filter(|e| !e.trim().is_empty()) {
            if require_timestamp(ends_at, "End date")? < starts_at {
                return Err("End date must not precede the start date".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_and_category_facets() {
        let e: Event = serde_json::from_value(json!({
            "id": "e1",
            "title": {"en": "Materials Symposium"},
            "category": "conference",
            "startsAt": "2026-11-02",
            "status": "ongoing"
        }))
        .unwrap();
        assert_eq!(e.facet("status").as_deref(), Some("ongoing"));
        assert_eq!(e.facet("category").as_deref(), Some("conference"));
    }

    #[test]
    fn test_empty_category_has_no_facet_value() {
        let e: Event = serde_json::from_value(json!({"id": "e2"})).unwrap();
        assert_eq!(e.facet("category"), None);
        assert_eq!(e.status, EventStatus::Upcoming);
    }

    #[test]
    fn test_validation() {
        let mut dto = EventDto {
            title: LocalizedText::pair("Open Day", ""),
            starts_at: "2026-05-10".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.ends_at = Some("2026-05-09".into());
        assert!(dto.validate().is_err());
        dto.ends_at = Some(String::new());
        assert!(dto.validate().is_ok());
        dto.starts_at.clear();
        assert_eq!(dto.validate().unwrap_err(), "Start date is required");
    }

    #[test]
    fn test_validation_compares_instants_across_offsets() {
        let dto = EventDto {
            title: LocalizedText::pair("Open Day", ""),
            starts_at: "2025-05-01T10:00:00+03:00".into(),
            ends_at: Some("2025-05-01T08:30:00Z".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let garbled = EventDto { ends_at: Some("soon".into()), ..dto };
        assert_eq!(garbled.validate().unwrap_err(), "End date is not a valid date");
    }

    #[test]
    fn test_status_codes_round_trip() {
        for status in EventStatus::ALL {
            assert_eq!(EventStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(EventStatus::from_code("all"), None);
    }
}
