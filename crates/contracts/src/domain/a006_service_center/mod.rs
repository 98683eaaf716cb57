pub mod aggregate;

pub use aggregate::{CenterHead, ServiceCenter, ServiceCenterDto};
