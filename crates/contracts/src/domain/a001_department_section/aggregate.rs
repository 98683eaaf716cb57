use serde::{Deserialize, Serialize};

use crate::domain::common::{DeleteGuard, EntityRecord};
use crate::shared::list_filter::{SearchField, Searchable};
use crate::shared::localized::LocalizedText;
use crate::shared::slug::is_valid_slug;
use crate::shared::validation::{require_localized, Validate};

// ============================================================================
// Record
// ============================================================================

/// Top-level grouping of departments (e.g. "Scientific departments")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSection {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default, alias = "departments_count")]
    pub departments_count: u32,
}

fn default_visible() -> bool {
    true
}

impl EntityRecord for DepartmentSection {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "department-sections"
    }

    fn envelope_key() -> &'static str {
        "sections"
    }

    fn element_name() -> &'static str {
        "Department section"
    }

    fn list_name() -> &'static str {
        "Department sections"
    }
}

impl Searchable for DepartmentSection {
    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![SearchField::Localized(Some(&self.name)), SearchField::Text(&self.slug)]
    }

    fn facet(&self, key: &str) -> Option<String> {
        match key {
            "visibility" => Some(if self.is_visible { "visible" } else { "hidden" }.to_string()),
            _ => None,
        }
    }
}

impl DeleteGuard for DepartmentSection {
    fn delete_blocker(&self) -> Option<String> {
        (self.departments_count > 0).then(|| {
            format!(
                "Section contains {} department(s); move or delete them first",
                self.departments_count
            )
        })
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating / updating a section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSectionDto {
    pub name: LocalizedText,
    pub slug: String,
    pub description: Option<LocalizedText>,
    pub sort_order: i32,
    pub is_visible: bool,
}

impl From<&DepartmentSection> for DepartmentSectionDto {
    fn from(s: &DepartmentSection) -> Self {
        Self {
            name: s.name.clone(),
            slug: s.slug.clone(),
            description: s.description.clone(),
            sort_order: s.sort_order,
            is_visible: s.is_visible,
        }
    }
}

impl Validate for DepartmentSectionDto {
    fn validate(&self) -> Result<(), String> {
        require_localized(&self.name, "Name")?;
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

    fn section(count: u32) -> DepartmentSection {
        DepartmentSection {
            id: "s1".into(),
            name: LocalizedText::pair("Scientific Departments", "الأقسام العلمية"),
            slug: "scientific-departments".into(),
            description: None,
            sort_order: 1,
            is_visible: true,
            departments_count: count,
        }
    }

    #[test]
    fn test_deserialize_from_api_payload() {
        let s: DepartmentSection = serde_json::from_value(json!({
            "id": "7",
            "name": {"en": "Support Units", "ar": "الوحدات المساندة"},
            "slug": "support-units",
            "departments_count": 3
        }))
        .unwrap();
        assert_eq!(s.departments_count, 3);
        assert!(s.is_visible);
        assert_eq!(s.name.resolve("ar"), "الوحدات المساندة");
    }

    #[test]
    fn test_delete_blocked_while_departments_remain() {
        assert!(section(3).delete_blocker().unwrap().contains('3'));
        assert_eq!(section(0).delete_blocker(), None);
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let dto = DepartmentSectionDto::default();
        assert_eq!(dto.validate().unwrap_err(), "Name is required");
    }

    #[test]
    fn test_slug_shape_is_checked_when_present() {
        let mut dto = DepartmentSectionDto::from(&section(0));
        assert!(dto.validate().is_ok());
        dto.slug = "Not A Slug".into();
        assert!(dto.validate().is_err());
        dto.slug.clear();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_visibility_facet() {
        let mut s = section(0);
        assert_eq!(s.facet("visibility").as_deref(), Some("visible"));
        s.is_visible = false;
        assert_eq!(s.facet("visibility").as_deref(), Some("hidden"));
        assert_eq!(s.facet("other"), None);
    }
}
