use actix_web::{delete, web, Responder};

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

#[delete("/topicos/{id}")]
pub async fn delete_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match data.delete_topic_use_case.execute(id).await {
        Ok(()) => ApiResponse::ok_empty(),
        Err(DeleteTopicError::TopicNotFound) => ApiResponse::not_found(),
        Err(DeleteTopicError::RepositoryError(_)) | Err(DeleteTopicError::CacheError(_)) => {
            ApiResponse::internal_error()
        }
    }
}
