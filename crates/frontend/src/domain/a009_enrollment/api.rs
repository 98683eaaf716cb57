use contracts::domain::a009_enrollment::Enrollment;

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

/// `GET /me/enrollments`, `DELETE /me/enrollments/{id}` cancels.
pub type EnrollmentApi = RestCollection<Enrollment, ()>;
pub type EnrollmentController = ScreenController<EnrollmentApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load enrollments",
    created: "",
    create_failed: "",
    updated: "",
    update_failed: "",
    deleted: "Enrollment cancelled",
    delete_failed: "Failed to cancel enrollment",
    confirm_delete: "Cancel this enrollment?",
};

pub fn enrollments_api() -> EnrollmentApi {
    RestCollection::new()
}
