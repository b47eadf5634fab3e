mod create_topic;
mod delete_topic;
mod get_topic_detail;
mod list_topics;
mod update_topic;

pub use create_topic::*;
pub use delete_topic::*;
pub use get_topic_detail::*;
pub use list_topics::*;
pub use update_topic::*;
