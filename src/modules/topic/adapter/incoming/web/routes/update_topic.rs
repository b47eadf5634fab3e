use actix_web::{put, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    topic::adapter::incoming::web::dto::TopicSummaryResponse,
    topic::application::ports::incoming::use_cases::{
        UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
struct UpdateTopicRequest {
    pub title: String,
    pub message: String,
}

#[put("/topicos/{id}")]
pub async fn update_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let command =
        match UpdateTopicCommand::new(id, payload.title.clone(), payload.message.clone()) {
            Ok(command) => command,
            Err(err) => return map_command_error(err),
        };

    match data.update_topic_use_case.execute(command).await {
        Ok(topic) => ApiResponse::ok(TopicSummaryResponse::from(topic)),
        Err(UpdateTopicError::TopicNotFound) => ApiResponse::not_found(),
        Err(UpdateTopicError::RepositoryError(_)) | Err(UpdateTopicError::CacheError(_)) => {
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: UpdateTopicCommandError) -> actix_web::HttpResponse {
    let message = err.to_string();
    match err {
        UpdateTopicCommandError::EmptyTitle => ApiResponse::bad_request("EMPTY_TITLE", &message),
        UpdateTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", &message)
        }
        UpdateTopicCommandError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", &message)
        }
    }
}
