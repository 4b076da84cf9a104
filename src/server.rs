/// HTTP server exposing the record viewer to a browser frontend
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use log::{info, warn};
use std::sync::Mutex;

use crate::decode::{Decoder, FileMeta, JsonDecoder};
use crate::messages::{ErrorResponse, FileSummary, PageResponse, RecordsQuery, UploadQuery};
use crate::store::RecordStore;

/// Upper bound on uploaded file size.
const MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

/// The one loaded file and its derived view state.
pub struct ViewerSession {
    pub store: RecordStore,
    pub meta: Option<FileMeta>,
    pub file_name: Option<String>,
}

impl ViewerSession {
    pub fn new() -> Self {
        ViewerSession {
            store: RecordStore::new(),
            meta: None,
            file_name: None,
        }
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state for all request handlers. The session mutex serializes
/// store mutations, so filter changes, page changes and reloads never
/// interleave.
pub struct AppState {
    pub session: Mutex<ViewerSession>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            session: Mutex::new(ViewerSession::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve the embedded viewer page.
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

/// Accept raw file bytes, decode them and replace the session's record set.
async fn upload(
    query: web::Query<UploadQuery>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> HttpResponse {
    let file_name = query
        .name
        .clone()
        .unwrap_or_else(|| "untitled".to_string());

    let decoder = JsonDecoder::new();
    let decoded = match decoder.decode(&body) {
        Ok(decoded) => decoded,
        Err(message) => {
            warn!("Failed to decode '{}': {}", file_name, message);
            return HttpResponse::BadRequest().json(ErrorResponse { message });
        }
    };

    let record_count = decoded.records.len();
    let summary = FileSummary {
        file_name: file_name.clone(),
        byte_size: decoded.meta.byte_size,
        record_count,
        declared_count: decoded.meta.declared_count,
        codec: decoded.meta.codec.clone(),
        schema: decoded.meta.schema.clone(),
    };

    let mut session = state.session.lock().unwrap();
    session.store.load(decoded.records);
    session.meta = Some(decoded.meta);
    session.file_name = Some(file_name.clone());

    info!("Loaded '{}' with {} records", file_name, record_count);
    HttpResponse::Ok().json(summary)
}

/// Return the current page. A changed filter parameter replaces the active
/// filter (and resets to page 1) before any page parameter is applied.
async fn records(query: web::Query<RecordsQuery>, state: web::Data<AppState>) -> HttpResponse {
    let mut session = state.session.lock().unwrap();

    if let Some(filter) = &query.filter {
        if filter.as_str() != session.store.filter() {
            session.store.set_filter(filter);
        }
    }
    if let Some(page) = query.page {
        session.store.set_page(page);
    }

    let view = session.store.page_view();
    HttpResponse::Ok().json(PageResponse::from_view(&view))
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Rowscope server is running"
    }))
}

/// Start the HTTP server hosting the viewer page and record endpoints.
pub async fn run_server(host: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new());

    println!("🚀 Rowscope Record Viewer");
    println!("====================================");
    println!("📄 Viewer: http://{}:{}/", host, port);
    println!("🏥 Health check: http://{}:{}/health", host, port);
    println!("====================================");
    println!();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            // Enable logger
            .wrap(middleware::Logger::default())
            // CORS for development
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/", web::get().to(index))
            .route("/upload", web::post().to(upload))
            .route("/records", web::get().to(records))
            .route("/health", web::get().to(health_check))
    })
    .bind((host, port))?
    .run()
    .await
}
