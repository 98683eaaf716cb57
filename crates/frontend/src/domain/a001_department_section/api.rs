use contracts::domain::a001_department_section::{DepartmentSection, DepartmentSectionDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type SectionApi = RestCollection<DepartmentSection, DepartmentSectionDto>;
pub type SectionController = ScreenController<SectionApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load department sections",
    created: "Section created",
    create_failed: "Failed to create section",
    updated: "Section updated",
    update_failed: "Failed to update section",
    deleted: "Section deleted",
    delete_failed: "Failed to delete section",
    confirm_delete: "Delete this section? This cannot be undone.",
};

/// The console sees hidden sections too.
pub fn sections_api() -> SectionApi {
    RestCollection::new().with_query(&[("includeHidden", "true")])
}

/// Public listing: visible sections only.
pub fn public_sections_api() -> SectionApi {
    RestCollection::new()
}
