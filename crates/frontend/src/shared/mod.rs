pub mod api_client;
pub mod config;
pub mod confirm;
pub mod date_utils;
pub mod dialog;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod locale;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
pub mod toast;
