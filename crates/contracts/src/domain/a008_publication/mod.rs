pub mod aggregate;

pub use aggregate::{Publication, PublicationKind};
