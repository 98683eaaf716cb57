//! Public site pages, served under `/:locale/...`.

pub mod about;
pub mod common;
pub mod departments;
pub mod events;
pub mod home;
pub mod library;
pub mod news;
pub mod services;
