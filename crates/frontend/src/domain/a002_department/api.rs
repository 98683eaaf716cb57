use contracts::domain::a002_department::{Department, DepartmentDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type DepartmentApi = RestCollection<Department, DepartmentDto>;
pub type DepartmentController = ScreenController<DepartmentApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load departments",
    created: "Department created",
    create_failed: "Failed to create department",
    updated: "Department updated",
    update_failed: "Failed to update department",
    deleted: "Department deleted",
    delete_failed: "Failed to delete department",
    confirm_delete: "Delete this department? This cannot be undone.",
};

pub fn departments_api() -> DepartmentApi {
    RestCollection::new()
}
