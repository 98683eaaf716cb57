pub mod a001_department_section;
pub mod a002_department;
pub mod a003_event;
pub mod a004_service;
pub mod a005_staff;
pub mod a006_service_center;
pub mod a007_news;
pub mod a008_publication;
pub mod a009_enrollment;
pub mod a010_wishlist;
