use contracts::domain::a010_wishlist::WishlistItem;

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type WishlistApi = RestCollection<WishlistItem, ()>;
pub type WishlistController = ScreenController<WishlistApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load wishlist",
    created: "",
    create_failed: "",
    updated: "",
    update_failed: "",
    deleted: "Removed from wishlist",
    delete_failed: "Failed to remove item",
    confirm_delete: "Remove this item from your wishlist?",
};

pub fn wishlist_api() -> WishlistApi {
    RestCollection::new()
}
