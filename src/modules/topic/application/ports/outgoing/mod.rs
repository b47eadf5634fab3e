pub mod course_store;
pub mod list_cache;
pub mod topic_store;

pub use course_store::*;
pub use list_cache::*;
pub use topic_store::*;
