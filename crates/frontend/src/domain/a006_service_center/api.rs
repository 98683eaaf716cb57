use contracts::domain::a006_service_center::{ServiceCenter, ServiceCenterDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type ServiceCenterApi = RestCollection<ServiceCenter, ServiceCenterDto>;
pub type ServiceCenterController = ScreenController<ServiceCenterApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load service centers",
    created: "Service center created",
    create_failed: "Failed to create service center",
    updated: "Service center updated",
    update_failed: "Failed to update service center",
    deleted: "Service center deleted",
    delete_failed: "Failed to delete service center",
    confirm_delete: "Delete this service center? This cannot be undone.",
};

pub fn service_centers_api() -> ServiceCenterApi {
    RestCollection::new()
}
