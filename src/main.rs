pub mod modules;
pub use modules::topic;
pub mod health;
pub mod shared;

use crate::topic::adapter::outgoing::course_store_postgres::CourseStorePostgres;
use crate::topic::adapter::outgoing::topic_list_cache_redis::TopicListCacheRedis;
use crate::topic::adapter::outgoing::topic_store_postgres::TopicStorePostgres;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicDetailUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicDetailService, ListTopicsService,
    UpdateTopicService,
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_topics_use_case: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub create_topic_use_case: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_topic_detail_use_case: Arc<dyn GetTopicDetailUseCase + Send + Sync>,
    pub update_topic_use_case: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete_topic_use_case: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Stores and cache adapters
    let topic_store = TopicStorePostgres::new(Arc::clone(&db_arc));
    let course_store = CourseStorePostgres::new(Arc::clone(&db_arc));
    let list_cache = TopicListCacheRedis::new(Arc::clone(&redis_arc));

    // Use cases
    let list_topics_use_case = ListTopicsService::new(topic_store.clone(), list_cache.clone());
    let create_topic_use_case = CreateTopicService::new(
        topic_store.clone(),
        course_store.clone(),
        list_cache.clone(),
    );
    let get_topic_detail_use_case = GetTopicDetailService::new(topic_store.clone());
    let update_topic_use_case = UpdateTopicService::new(topic_store.clone(), list_cache.clone());
    let delete_topic_use_case = DeleteTopicService::new(topic_store, list_cache);

    let state = AppState {
        list_topics_use_case: Arc::new(list_topics_use_case),
        create_topic_use_case: Arc::new(create_topic_use_case),
        get_topic_detail_use_case: Arc::new(get_topic_detail_use_case),
        update_topic_use_case: Arc::new(update_topic_use_case),
        delete_topic_use_case: Arc::new(delete_topic_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::list_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_detail_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
