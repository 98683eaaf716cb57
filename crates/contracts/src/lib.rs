//! Wire contracts and client-side rules shared by the institute portal.

pub mod domain;
pub mod shared;
pub mod system;
