pub mod aggregate;

pub use aggregate::{Enrollment, EnrollmentStatus};
