use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;
use crate::shared::validation::{optional_email, require_localized, Validate};

/// Researcher or staff member listed on department pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub position: Option<LocalizedText>,
    #[serde(default, alias = "department_id")]
    pub department_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "photo_url")]
    pub photo_url: Option<String>,
}

impl EntityRecord for StaffMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "staff"
    }

    fn envelope_key() -> &'static str {
        "staff"
    }

    fn element_name() -> &'static str {
        "Staff member"
    }

    fn list_name() -> &'static str {
        "Staff"
    }
}

impl Searchable for StaffMember {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::Localized(Some(&self.name)),
            SearchField::Localized(self.position.as_ref()),
            SearchField::Text(self.email.as_deref().unwrap_or("")),
        ]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "department" => self.department_id.clone(),
            _ => None,
        }
    }
}

impl DeleteGuard for StaffMember {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberDto {
    pub name: LocalizedText,
    pub position: Option<LocalizedText>,
    pub department_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&StaffMember> for StaffMemberDto {
    fn from(s: &StaffMember) -> Self {
        Self {
            name: s.name.clone(),
            position: s.position.clone(),
            department_id: s.department_id.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            photo_url: s.photo_url.clone(),
        }
    }
}

impl Validate for StaffMemberDto {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.name, "Name")?;
        optional_email(self.email.as_deref(), "Email")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_filter::{filter_items, FilterState};
    use serde_json::json;

    #[test]
    fn test_search_by_position_in_arabic() {
        let staff: Vec<StaffMember> = serde_json::from_value(json!([
            {"id": "1", "name": "Layla", "position": {"en": "Research Fellow", "ar": "باحث زميل"}},
            {"id": "2", "name": "Sami", "position": {"en": "Technician", "ar": "فني"}}
        ]))
        .unwrap();
        let found = filter_items(&staff, &FilterState::with_search("باحث"), "ar");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");
    }

    #[test]
    fn test_name_required() {
        assert!(StaffMemberDto::default().validate().is_err());
    }
}
