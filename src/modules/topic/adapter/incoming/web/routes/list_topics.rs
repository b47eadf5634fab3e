use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    topic::adapter::incoming::web::dto::TopicPageResponse,
    topic::application::ports::incoming::use_cases::{
        ListTopicsError, ListTopicsQuery, ListTopicsQueryError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ListTopicsParams {
    #[serde(rename = "nomeCurso")]
    nome_curso: Option<String>,
    page: Option<u64>,
    size: Option<u64>,
    sort: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/topicos")]
pub async fn list_topics_handler(
    data: web::Data<AppState>,
    params: web::Query<ListTopicsParams>,
) -> impl Responder {
    let query = match ListTopicsQuery::new(
        params.nome_curso.clone(),
        params.page,
        params.size,
        params.sort.as_deref(),
    ) {
        Ok(query) => query,
        Err(err) => return map_query_error(err),
    };

    match data.list_topics_use_case.execute(query).await {
        Ok(page) => ApiResponse::ok(TopicPageResponse::from(page)),
        Err(err) => map_list_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_query_error(err: ListTopicsQueryError) -> actix_web::HttpResponse {
    let message = err.to_string();
    match err {
        ListTopicsQueryError::InvalidPageSize => {
            ApiResponse::bad_request("INVALID_PAGE_SIZE", &message)
        }
        ListTopicsQueryError::InvalidSortField(_) => {
            ApiResponse::bad_request("INVALID_SORT_FIELD", &message)
        }
        ListTopicsQueryError::InvalidSortDirection(_) => {
            ApiResponse::bad_request("INVALID_SORT_DIRECTION", &message)
        }
    }
}

fn map_list_error(err: ListTopicsError) -> actix_web::HttpResponse {
    match err {
        ListTopicsError::QueryFailed(_) => ApiResponse::internal_error(),
    }
}
