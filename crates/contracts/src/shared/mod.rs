pub mod api_error;
pub mod list_filter;
pub mod localized;
pub mod slug;
pub mod validation;
