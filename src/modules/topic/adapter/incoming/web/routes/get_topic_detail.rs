use actix_web::{get, web, Responder};

use crate::{
    shared::api::ApiResponse,
    topic::adapter::incoming::web::dto::TopicDetailResponse,
    topic::application::ports::incoming::use_cases::GetTopicDetailError,
    AppState,
};

#[get("/topicos/{id}")]
pub async fn get_topic_detail_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match data.get_topic_detail_use_case.execute(id).await {
        Ok(detail) => ApiResponse::ok(TopicDetailResponse::from(detail)),
        Err(GetTopicDetailError::TopicNotFound) => ApiResponse::not_found(),
        Err(GetTopicDetailError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
