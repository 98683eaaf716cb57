use contracts::domain::a003_event::{Event, EventDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type EventApi = RestCollection<Event, EventDto>;
pub type EventController = ScreenController<EventApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load events",
    created: "Event created",
    create_failed: "Failed to create event",
    updated: "Event updated",
    update_failed: "Failed to update event",
    deleted: "Event deleted",
    delete_failed: "Failed to delete event",
    confirm_delete: "Delete this event? This cannot be undone.",
};

pub fn events_api() -> EventApi {
    RestCollection::new()
}
