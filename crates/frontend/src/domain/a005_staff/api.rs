use contracts::domain::a005_staff::{StaffMember, StaffMemberDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type StaffApi = RestCollection<StaffMember, StaffMemberDto>;
pub type StaffController = ScreenController<StaffApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load staff",
    created: "Staff member added",
    create_failed: "Failed to add staff member",
    updated: "Staff member updated",
    update_failed: "Failed to update staff member",
    deleted: "Staff member removed",
    delete_failed: "Failed to remove staff member",
    confirm_delete: "Remove this staff member? This cannot be undone.",
};

pub fn staff_api() -> StaffApi {
    RestCollection::new()
}
