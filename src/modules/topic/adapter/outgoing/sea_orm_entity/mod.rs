pub mod courses;
pub mod topics;
