use contracts::domain::a007_news::NewsArticle;

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type NewsApi = RestCollection<NewsArticle, ()>;
pub type NewsController = ScreenController<NewsApi>;

pub const MESSAGES: ListMessages = ListMessages::read_only("Failed to load news");

pub fn news_api() -> NewsApi {
    RestCollection::new()
}
