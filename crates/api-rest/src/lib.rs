//! # API REST
//!
//! REST API implementation for threadview.
//!
//! Handles:
//! - Page routes mounted from the static route table in `threadview-core`
//! - A JSON render endpoint and route listing
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (HTML/JSON responses, CORS)

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post, MethodRouter},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use threadview_core::{index_route, routes, Comment, Page, ThreadError, ThreadService};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    thread_service: ThreadService,
}

impl AppState {
    pub fn new(thread_service: ThreadService) -> Self {
        Self { thread_service }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RenderRes {
    /// Rendered thread fragment
    pub html: String,
    /// Number of comment blocks in the fragment
    pub blocks: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteRes {
    pub path: String,
    pub url: String,
    pub page: String,
    pub index: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListRoutesRes {
    pub routes: Vec<RouteRes>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_routes, render_comments, comment_thread_page),
    components(schemas(HealthRes, RenderRes, RouteRes, ListRoutesRes))
)]
struct ApiDoc;

/// Builds the REST router.
///
/// Every entry of the static route table is mounted at its URL with the handler for its
/// page; the index entry is also mounted at `/`.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(list_routes))
        .route("/api/render", post(render_comments));

    for entry in routes() {
        let url = entry.path.url();
        tracing::debug!("mounting {} at {}", entry.element.as_str(), url);
        router = router.route(&url, page_handler(entry.element));
    }
    if let Some(entry) = index_route() {
        tracing::debug!("mounting {} at /", entry.element.as_str());
        router = router.route("/", page_handler(entry.element));
    }

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn page_handler(page: Page) -> MethodRouter<AppState> {
    match page {
        Page::CommentThread => get(comment_thread_page),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "threadview REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/routes",
    responses(
        (status = 200, description = "Active route table entries", body = ListRoutesRes)
    )
)]
/// List the active entries of the route table in declaration order
#[axum::debug_handler]
async fn list_routes(State(_state): State<AppState>) -> Json<ListRoutesRes> {
    let routes = routes()
        .iter()
        .map(|entry| RouteRes {
            path: entry.path.as_str().into(),
            url: entry.path.url(),
            page: entry.element.as_str().into(),
            index: entry.index,
        })
        .collect();

    Json(ListRoutesRes { routes })
}

#[utoipa::path(
    post,
    path = "/api/render",
    request_body(
        content = String,
        description = "JSON array of comments (`id`, `body`, optional `comments`), or null",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Rendered thread fragment", body = RenderRes),
        (status = 400, description = "Malformed comment tree")
    )
)]
/// Render a comment tree supplied in the request body
///
/// The body is parsed here rather than through the `Json` extractor so that every
/// malformed tree, syntactic or structural, is reported as `400 Bad Request`.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON or a node has the wrong shape,
/// - sibling comments share an id, or
/// - the tree is deeper than the configured maximum.
#[axum::debug_handler]
async fn render_comments(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<RenderRes>, (StatusCode, &'static str)> {
    let comments: Option<Vec<Comment>> = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("render request rejected: {}", e);
        (StatusCode::BAD_REQUEST, "Malformed comment tree")
    })?;

    let page = state
        .thread_service
        .render_comments(comments.as_deref())
        .map_err(|e| {
            tracing::warn!("render request rejected: {}", e);
            match e {
                ThreadError::DuplicateId { .. } => {
                    (StatusCode::BAD_REQUEST, "Duplicate sibling comment id")
                }
                ThreadError::TooDeep { .. } => (StatusCode::BAD_REQUEST, "Comment tree too deep"),
                _ => (StatusCode::BAD_REQUEST, "Malformed comment tree"),
            }
        })?;

    Ok(Json(RenderRes {
        html: page.html,
        blocks: page.blocks,
    }))
}

#[utoipa::path(
    get,
    path = "/home",
    responses(
        (status = 200, description = "Post page with its comment thread", content_type = "text/html", body = String),
        (status = 500, description = "Thread data unavailable")
    )
)]
/// Comment thread page
///
/// Loads the configured thread file on every request and renders the post with its
/// comment tree.
///
/// # Errors
/// Returns `500 Internal Server Error` if the thread file cannot be read or is invalid.
#[axum::debug_handler]
async fn comment_thread_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    match state.thread_service.render_thread_page() {
        Ok(page) => {
            tracing::info!("rendered comment thread page ({} blocks)", page.blocks);
            Ok(Html(page.html))
        }
        Err(e) => {
            tracing::error!("Comment thread page error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Thread data unavailable"))
        }
    }
}
