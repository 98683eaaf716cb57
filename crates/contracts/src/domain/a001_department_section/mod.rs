pub mod aggregate;

pub use aggregate::{DepartmentSection, DepartmentSectionDto};
