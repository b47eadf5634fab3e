use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    topic::adapter::incoming::web::dto::TopicSummaryResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CreateTopicRequest {
    pub title: String,
    pub message: String,
    #[serde(rename = "courseId")]
    pub course_id: i64,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topicos")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let command = match CreateTopicCommand::new(
        payload.title.clone(),
        payload.message.clone(),
        payload.course_id,
    ) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    match data.create_topic_use_case.execute(command).await {
        Ok(topic) => {
            let location = format!("/topicos/{}", topic.id);
            ApiResponse::created(&location, TopicSummaryResponse::from(topic))
        }
        Err(err) => map_create_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> actix_web::HttpResponse {
    let message = err.to_string();
    match err {
        CreateTopicCommandError::EmptyTitle => ApiResponse::bad_request("EMPTY_TITLE", &message),
        CreateTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", &message)
        }
        CreateTopicCommandError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", &message)
        }
    }
}

fn map_create_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::CourseNotFound => {
            ApiResponse::bad_request("COURSE_NOT_FOUND", "Course not found")
        }
        CreateTopicError::RepositoryError(_) | CreateTopicError::CacheError(_) => {
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{app_state_builder::TestAppStateBuilder, stubs::*};
    use crate::topic::application::domain::entities::TopicStatus;
    use crate::topic::application::ports::outgoing::TopicView;

    fn created_topic() -> TopicView {
        TopicView {
            id: 42,
            title: "T1".to_string(),
            message: "M1".to_string(),
            creation_date: chrono::Utc::now(),
            status: TopicStatus::Open,
            course_name: "Java".to_string(),
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn create_returns_created_with_location_header() {
        let state = TestAppStateBuilder::default()
            .with_create_topic(StubCreateTopicUseCase::success(created_topic()))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_topic_handler)).await;

        let req = test::TestRequest::post()
            .uri("/topicos")
            .set_json(serde_json::json!({
                "title": "T1",
                "message": "M1",
                "courseId": 7
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location = resp
            .headers()
            .get(actix_web::http::header::LOCATION)
            .expect("Location header must be present");
        assert_eq!(location.to_str().unwrap(), "/topicos/42");

        let json = read_json(resp).await;
        assert_eq!(json["id"], 42);
        assert_eq!(json["title"], "T1");
        assert_eq!(json["message"], "M1");
        assert_eq!(json["status"], "OPEN");
    }

    #[actix_web::test]
    async fn blank_title_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(create_topic_handler)).await;

        let req = test::TestRequest::post()
            .uri("/topicos")
            .set_json(serde_json::json!({
                "title": "   ",
                "message": "M1",
                "courseId": 7
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "EMPTY_TITLE");
    }

    #[actix_web::test]
    async fn blank_message_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(create_topic_handler)).await;

        let req = test::TestRequest::post()
            .uri("/topicos")
            .set_json(serde_json::json!({
                "title": "T1",
                "message": "",
                "courseId": 7
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "EMPTY_MESSAGE");
    }

    #[actix_web::test]
    async fn unknown_course_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_create_topic(StubCreateTopicUseCase::course_not_found())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_topic_handler)).await;

        let req = test::TestRequest::post()
            .uri("/topicos")
            .set_json(serde_json::json!({
                "title": "T1",
                "message": "M1",
                "courseId": 999
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "COURSE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn repository_error_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_create_topic(StubCreateTopicUseCase::repo_error("db down"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_topic_handler)).await;

        let req = test::TestRequest::post()
            .uri("/topicos")
            .set_json(serde_json::json!({
                "title": "T1",
                "message": "M1",
                "courseId": 7
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
