mod create_topic;
mod delete_topic;
mod get_topic_detail;
mod list_topics;
mod update_topic;

pub use create_topic::create_topic_handler;
pub use delete_topic::delete_topic_handler;
pub use get_topic_detail::get_topic_detail_handler;
pub use list_topics::list_topics_handler;
pub use update_topic::update_topic_handler;
