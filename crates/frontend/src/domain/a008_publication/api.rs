use contracts::domain::a008_publication::Publication;

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type PublicationApi = RestCollection<Publication, ()>;
pub type PublicationController = ScreenController<PublicationApi>;

pub const MESSAGES: ListMessages = ListMessages::read_only("Failed to load publications");
pub const JOURNAL_MESSAGES: ListMessages = ListMessages::read_only("Failed to load the journal");

pub fn library_api() -> PublicationApi {
    RestCollection::new()
}

/// Journal issues and articles share the publication record.
pub fn journal_api() -> PublicationApi {
    RestCollection::new().at_path("journal")
}
