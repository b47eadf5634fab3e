pub mod course_store_postgres;
pub mod sea_orm_entity;
pub mod topic_list_cache_redis;
pub mod topic_store_postgres;
