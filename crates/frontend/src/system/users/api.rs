use contracts::system::users::{User, UserDto};

use crate::shared::api_client::RestCollection;
use crate::shared::list_controller::{ListMessages, ScreenController};

pub type UserApi = RestCollection<User, UserDto>;
pub type UserController = ScreenController<UserApi>;

pub const MESSAGES: ListMessages = ListMessages {
    load_failed: "Failed to load users",
    created: "User created",
    create_failed: "Failed to create user",
    updated: "User updated",
    update_failed: "Failed to update user",
    deleted: "User deleted",
    delete_failed: "Failed to delete user",
    confirm_delete: "Delete this user account? This cannot be undone.",
};

pub fn users_api() -> UserApi {
    RestCollection::new()
}
