use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> LocalizedText {
        match self {
            EnrollmentStatus::Pending => LocalizedText::pair("Pending", "قيد المراجعة"),
            EnrollmentStatus::Active => LocalizedText::pair("Active", "نشط"),
            EnrollmentStatus::Completed => LocalizedText::pair("Completed", "مكتمل"),
            EnrollmentStatus::Cancelled => LocalizedText::pair("Cancelled", "ملغى"),
        }
    }
}

/// Learner's enrollment in an event or service (training course)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    #[serde(default, alias = "target_id")]
    pub target_id: String,
    #[serde(default, alias = "target_kind")]
    pub target_kind: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(default, alias = "enrolled_at")]
    pub enrolled_at: Option<String>,
}

impl EntityRecord for Enrollment {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "me/enrollments"
    }

    fn envelope_key() -> &'static str {
        "enrollments"
    }

    fn element_name() -> &'static str {
        "Enrollment"
    }

    fn list_name() -> &'static str {
        "Enrollments"
    }
}

impl Searchable for Enrollment {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![SearchField::Localized(Some(&self.title))]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl DeleteGuard for Enrollment {
    fn delete_blocker(&self) -> Option<String> {
        match self.status {
            EnrollmentStatus::Completed => Some("Completed enrollments cannot be cancelled".into()),
            EnrollmentStatus::Cancelled => Some("Enrollment is already cancelled".into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_open_enrollments_can_be_cancelled() {
        let mut e: Enrollment = serde_json::from_value(json!({
            "id": "en1",
            "targetId": "ev9",
            "targetKind": "event",
            "title": {"en": "Lab Safety Course"},
            "status": "active"
        }))
        .unwrap();
        assert!(e.delete_blocker().is_none());
        e.status = EnrollmentStatus::Completed;
        assert!(e.delete_blocker().is_some());
    }
}
