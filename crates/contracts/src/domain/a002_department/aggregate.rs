use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;
use crate::shared::slug::is_valid_slug;
use crate::shared::validation::{require_localized, require_text, Validate};

// ============================================================================
// Record
// ============================================================================

/// Academic or support department, belongs to one section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    #[serde(default, alias = "section_id")]
    pub section_id: Option<String>,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default, alias = "head_name")]
    pub head_name: Option<String>,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl EntityRecord for Department {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "departments"
    }

    fn envelope_key() -> &'static str {
        "departments"
    }

    fn element_name() -> &'static str {
        "Department"
    }

    fn list_name() -> &'static str {
        "Departments"
    }
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::Localized(Some(&self.name)),
            SearchField::Text(&self.slug),
            SearchField::Text(self.head_name.as_deref().unwrap_or("")),
        ]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "section" => self.section_id.clone(),
            _ => None,
        }
    }
}

impl DeleteGuard for Department {}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub section_id: String,
    pub name: LocalizedText,
    pub slug: String,
    pub description: Option<LocalizedText>,
    pub head_name: Option<String>,
    pub is_active: bool,
}

impl From<&Department> for DepartmentDto {
    fn from(d: &Department) -> Self {
        Self {
            section_id: d.section_id.clone().unwrap_or_default(),
            name: d.name.clone(),
            slug: d.slug.clone(),
            description: d.description.clone(),
            head_name: d.head_name.clone(),
            is_active: d.is_active,
        }
    }
}

impl Validate for DepartmentDto {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.name, "Name")?;
        require_text(&self.section_id, "Section")?;
        if !self.slug.is_empty() && !is_valid_slug(&self.slug) {
            return Err("Slug may only contain lowercase letters, digits and hyphens".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_case_payload_is_accepted() {
        let d: Department = serde_json::from_value(json!({
            "id": "d1",
            "section_id": "s1",
            "name": "Physics",
            "head_name": "Dr. Salem"
        }))
        .unwrap();
        assert_eq!(d.section_id.as_deref(), Some("s1"));
        assert_eq!(d.head_name.as_deref(), Some("Dr. Salem"));
        assert_eq!(d.facet("section").as_deref(), Some("s1"));
    }

    #[test]
    fn test_section_is_required() {
        let dto = DepartmentDto {
            name: LocalizedText::pair("Physics", ""),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err(), "Section is required");
    }
}
