use contracts::domain::a004_service::{Service, ServiceDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type ServiceApi = RestCollection<Service, ServiceDto>;
pub type ServiceController = ScreenController<ServiceApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load services",
    created: "Service created",
    create_failed: "Failed to create service",
    updated: "Service updated",
    update_failed: "Failed to update service",
    deleted: "Service deleted",
    delete_failed: "Failed to delete service",
    confirm_delete: "Delete this service? This cannot be undone.",
};

pub fn services_api() -> ServiceApi {
    RestCollection::new()
}
