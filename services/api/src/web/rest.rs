//! services/api/src/web/rest.rs
//!
//! Contains the Axum handler for the mushaf endpoint and the master
//! definition for the OpenAPI specification.
//!
//! One route serves four shapes, selected by query parameter:
//! `page` (one resolved mushaf page), `juz` (a juz's page range),
//! `action=mapping` (the full static table), or nothing (service info).

use crate::web::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use mushaf_core::{juz, JuzPageRange};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        mushaf_handler,
    ),
    components(
        schemas(ErrorResponse, JuzDetail, MappingOverview, JuzSummary)
    ),
    tags(
        (name = "Mushaf API", description = "Quran mushaf page content with multi-source fallback.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// Query parameters for the mushaf endpoint. `page` takes precedence over
/// `juz`, which takes precedence over `action`.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MushafParams {
    /// Mushaf page number, 1-604.
    pub page: Option<i64>,
    /// Juz number, 1-30.
    pub juz: Option<i64>,
    /// Set to "mapping" to dump the full juz table.
    pub action: Option<String>,
}

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

/// The envelope for every failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    success: bool,
    error: String,
}

/// The page range of one juz.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JuzDetail {
    juz: u8,
    #[schema(value_type = Object)]
    page_range: JuzPageRange,
    total_pages: u16,
    pages: Vec<u16>,
}

/// The full static juz → page table plus a human-readable summary.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MappingOverview {
    #[schema(value_type = Vec<Object>)]
    juz_mapping: Vec<JuzPageRange>,
    total_pages: u16,
    total_juz: u8,
    summary: Vec<JuzSummary>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JuzSummary {
    juz: u8,
    pages: String,
    surahs: String,
    page_count: u16,
}

fn ok<T: Serialize>(data: T) -> Response {
    Json(SuccessResponse {
        success: true,
        data,
    })
    .into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
        .into_response()
}

//=========================================================================================
// REST API Handler
//=========================================================================================

/// Resolve mushaf content.
///
/// With `page`, returns one resolved mushaf page; content degrades from
/// page-exact, to proportionally distributed juz content, to a static
/// placeholder as upstream sources fail (see `pageInfo.quality`). With `juz`,
/// returns that juz's page range. With `action=mapping`, dumps the static
/// table. With no parameters, returns a service self-description.
#[utoipa::path(
    get,
    path = "/mushaf",
    params(MushafParams),
    responses(
        (status = 200, description = "Resolved content wrapped in {success, data}"),
        (status = 400, description = "Page or juz number out of range", body = ErrorResponse)
    ),
    tag = "Mushaf API"
)]
pub async fn mushaf_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<MushafParams>,
) -> Response {
    if let Some(page) = params.page {
        if page < 1 || page > juz::TOTAL_PAGES as i64 {
            return bad_request("Invalid page number");
        }
        return match app_state.resolver.resolve_page(page as u16).await {
            Ok(resolved) => ok(resolved),
            Err(e) => bad_request(e.to_string()),
        };
    }

    if let Some(requested) = params.juz {
        if requested < 1 || requested > juz::TOTAL_JUZ as i64 {
            return bad_request("Invalid juz number");
        }
        return match juz::resolve_juz_range(requested as u8) {
            Ok(range) => ok(JuzDetail {
                juz: range.juz,
                page_range: *range,
                total_pages: range.page_count(),
                pages: (range.start_page..=range.end_page).collect(),
            }),
            Err(e) => bad_request(e.to_string()),
        };
    }

    if params.action.as_deref() == Some("mapping") {
        let table = juz::mapping_overview();
        return ok(MappingOverview {
            juz_mapping: table.to_vec(),
            total_pages: juz::TOTAL_PAGES,
            total_juz: juz::TOTAL_JUZ,
            summary: table
                .iter()
                .map(|r| JuzSummary {
                    juz: r.juz,
                    pages: format!("{}-{}", r.start_page, r.end_page),
                    surahs: r.surah_label.to_string(),
                    page_count: r.page_count(),
                })
                .collect(),
        });
    }

    ok(json!({
        "name": "Mushaf Page Resolver API",
        "description": "Arabic Quran page content over the standard 604-page Uthmani layout.",
        "usage": {
            "page": "GET /mushaf?page=<1..604> - one resolved mushaf page",
            "juz": "GET /mushaf?juz=<1..30> - a juz's page range",
            "mapping": "GET /mushaf?action=mapping - the full juz table"
        }
    }))
}

/// Builds the API router around the shared state.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/mushaf", get(mushaf_handler))
        .with_state(app_state)
}
