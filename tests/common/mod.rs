// tests/common/mod.rs
//
// In-process fake of the recruitment backend, served by axum on an
// ephemeral port. Collections are plain JSON values keyed by route name.

#![allow(dead_code)]

use axum::{
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use recruit_console::http::{History, UnauthorizedRedirect};
use recruit_console::notifications::ToastCenter;
use recruit_console::{ApiClient, ClientConfig, Session};

pub const TOKEN: &str = "test-token";
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n% fake offer letter\n";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
struct StoredFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Default)]
pub struct BackendState {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    files: Mutex<HashMap<i64, StoredFile>>,
    next_id: AtomicI64,
    reject_all: AtomicBool,
    requests: Mutex<Vec<RecordedRequest>>,
}

type Shared = Arc<BackendState>;

// ============================================================================
// Backend handle
// ============================================================================

pub struct FakeBackend {
    pub base_url: String,
    state: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(BackendState {
            next_id: AtomicI64::new(100),
            ..Default::default()
        });

        let app = Router::new()
            .route("/api/:collection", get(list).post(create))
            .route(
                "/api/:collection/:id",
                get(get_item).put(update).delete(remove).post(post_item),
            )
            .route(
                "/api/:collection/:id/:action",
                get(item_action).put(item_action).post(item_action),
            )
            .layer(middleware::from_fn_with_state(
                state.clone(),
                record_and_authorize,
            ))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn seed(&self, collection: &str, items: Vec<Value>) {
        self.state
            .collections
            .lock()
            .entry(collection.to_string())
            .or_default()
            .extend(items);
    }

    pub fn items(&self, collection: &str) -> Vec<Value> {
        self.state
            .collections
            .lock()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn find(&self, collection: &str, id: i64) -> Option<Value> {
        self.items(collection)
            .into_iter()
            .find(|item| item["id"] == json!(id))
    }

    pub fn store_file(&self, id: i64, file_name: &str, content_type: &str, bytes: &[u8]) {
        self.state.files.lock().insert(
            id,
            StoredFile {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                bytes: bytes.to_vec(),
            },
        );
    }

    pub fn file_bytes(&self, id: i64) -> Option<Vec<u8>> {
        self.state.files.lock().get(&id).map(|f| f.bytes.clone())
    }

    /// Every subsequent request answers 401, as when a token expires.
    pub fn expire_session(&self) {
        self.state.reject_all.store(true, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }
}

// ============================================================================
// Client side wiring
// ============================================================================

pub struct Harness {
    pub backend: FakeBackend,
    pub api: ApiClient,
    pub session: Session,
    pub history: History,
    pub toasts: Arc<ToastCenter>,
    pub config: ClientConfig,
}

/// Backend plus a client signed in as `role`, starting on `/jobs`.
pub async fn harness_as(role: &str) -> Harness {
    let backend = FakeBackend::start().await;
    let config = ClientConfig {
        api_url: backend.base_url.clone(),
        token: Some(TOKEN.to_string()),
        page_size: 10,
        ..ClientConfig::default()
    };

    let session = Session::with_token(TOKEN);
    session.set_role(Some(role.to_string())).await;

    let history = History::new("/jobs");
    let api = ApiClient::new(&config, session.clone())
        .expect("Failed to build client")
        .with_interceptor(Arc::new(UnauthorizedRedirect::new(
            Arc::new(history.clone()),
            config.login_path.clone(),
        )));

    Harness {
        backend,
        api,
        session,
        history,
        toasts: Arc::new(ToastCenter::default()),
        config,
    }
}

pub async fn harness() -> Harness {
    harness_as("Admin").await
}

pub fn named(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "description": null })
}

// ============================================================================
// Middleware
// ============================================================================

async fn record_and_authorize(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().push(RecordedRequest {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        query: request.uri().query().unwrap_or_default().to_string(),
        authorization: authorization.clone(),
    });

    let expected = format!("Bearer {}", TOKEN);
    if state.reject_all.load(Ordering::SeqCst) || authorization.as_deref() != Some(expected.as_str())
    {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "title": "Unauthorized", "status": 401 })),
        )
            .into_response();
    }

    next.run(request).await
}

// ============================================================================
// Collection handlers
// ============================================================================

async fn list(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let items = state
        .collections
        .lock()
        .get(&collection)
        .cloned()
        .unwrap_or_default();

    // served as a bare array, like the real statuses endpoint
    if collection == "statuses" {
        return Json(Value::Array(items)).into_response();
    }

    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1usize)
        .max(1);
    let page_size: usize = params
        .get("pageSize")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10usize)
        .max(1);

    let matching: Vec<Value> = items
        .into_iter()
        .filter(|item| matches_filters(item, &params))
        .collect();
    let total = matching.len();
    let page_items: Vec<Value> = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Json(json!({
        "items": page_items,
        "totalCount": total,
        "page": page,
        "pageSize": page_size,
    }))
    .into_response()
}

fn matches_filters(item: &Value, params: &HashMap<String, String>) -> bool {
    params.iter().all(|(key, wanted)| match key.as_str() {
        "page" | "pageSize" => true,
        "includeDeleted" => {
            wanted == "true" || !item["isDeleted"].as_bool().unwrap_or(false)
        }
        "search" => {
            let wanted = wanted.to_lowercase();
            item.as_object().is_some_and(|fields| {
                fields
                    .values()
                    .filter_map(Value::as_str)
                    .any(|text| text.to_lowercase().contains(&wanted))
            })
        }
        _ => item.get(key).is_some_and(|v| value_text(v) == *wanted),
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "title": "Not Found", "status": 404 })),
    )
        .into_response()
}

fn singular(collection: &str) -> &str {
    collection.strip_suffix('s').unwrap_or(collection)
}

async fn create(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut collections = state.collections.lock();
    let items = collections.entry(collection.clone()).or_default();

    if let Some(name) = body["name"].as_str() {
        let taken = items
            .iter()
            .any(|item| item["name"].as_str().is_some_and(|n| n.eq_ignore_ascii_case(name)));
        if taken {
            return bad_request(format!("{} '{}' already exists", singular(&collection), name));
        }
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    if let Some(object) = body.as_object_mut() {
        object.insert("id".to_string(), json!(id));
        match collection.as_str() {
            "users" => {
                object.insert("isDeleted".to_string(), json!(false));
                object.remove("password");
            }
            "jobs" => {
                object.entry("status").or_insert(json!("Open"));
            }
            _ => {}
        }
    }

    items.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn get_item(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if collection == "reports" && id == "dashboard" {
        return Json(dashboard(&state)).into_response();
    }
    if id == "export" {
        return export(&state, &collection, &params);
    }

    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };
    let found = state
        .collections
        .lock()
        .get(&collection)
        .and_then(|items| items.iter().find(|item| item["id"] == json!(id)).cloned());

    match found {
        Some(item) => Json(item).into_response(),
        None => not_found(),
    }
}

async fn update(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };

    let mut collections = state.collections.lock();
    let Some(item) = collections
        .get_mut(&collection)
        .and_then(|items| items.iter_mut().find(|item| item["id"] == json!(id)))
    else {
        return not_found();
    };

    if let (Some(target), Some(changes)) = (item.as_object_mut(), body.as_object()) {
        for (key, value) in changes {
            if key != "id" && key != "password" {
                target.insert(key.clone(), value.clone());
            }
        }
    }

    // events answer 204 like the real endpoint
    if collection == "events" {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(item.clone()).into_response()
}

async fn remove(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };

    let mut collections = state.collections.lock();

    if collection == "skills" {
        let referencing = collections
            .get("jobs")
            .map(|jobs| {
                jobs.iter()
                    .filter(|job| {
                        job["requiredSkillIds"]
                            .as_array()
                            .is_some_and(|ids| ids.contains(&json!(id)))
                    })
                    .count()
            })
            .unwrap_or(0);
        if referencing > 0 {
            return bad_request(format!("Skill is in use by {} job(s)", referencing));
        }
    }

    let Some(items) = collections.get_mut(&collection) else {
        return not_found();
    };
    let Some(position) = items.iter().position(|item| item["id"] == json!(id)) else {
        return not_found();
    };

    match collection.as_str() {
        "users" => items[position]["isDeleted"] = json!(true),
        "jobs" => items[position]["status"] = json!("Closed"),
        _ => {
            items.remove(position);
        }
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn post_item(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
    mut multipart: Multipart,
) -> Response {
    if collection != "documents" || id != "upload" {
        return not_found();
    }

    let mut fields: HashMap<String, String> = HashMap::new();
    let mut file: Option<StoredFile> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("upload.bin").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            file = Some(StoredFile {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let text = field.text().await.unwrap_or_default();
            fields.insert(name, text);
        }
    }

    let Some(file) = file else {
        return bad_request("A file is required".to_string());
    };

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    let document = json!({
        "id": id,
        "name": fields.get("name").cloned().unwrap_or_else(|| file.file_name.clone()),
        "fileName": file.file_name,
        "contentType": file.content_type,
        "size": file.bytes.len(),
        "candidateId": fields.get("candidateId").and_then(|v| v.parse::<i64>().ok()),
        "description": fields.get("description"),
    });

    state.files.lock().insert(id, file);
    state
        .collections
        .lock()
        .entry("documents".to_string())
        .or_default()
        .push(document.clone());

    (StatusCode::CREATED, Json(document)).into_response()
}

// ============================================================================
// Item actions
// ============================================================================

async fn item_action(
    State(state): State<Shared>,
    Path((collection, id, action)): Path<(String, String, String)>,
    request: Request,
) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };
    let exists = state
        .collections
        .lock()
        .get(&collection)
        .is_some_and(|items| items.iter().any(|item| item["id"] == json!(id)));
    if !exists {
        return not_found();
    }

    match (collection.as_str(), action.as_str()) {
        (_, "status") => {
            let Ok(Json(body)) = Json::<Value>::from_request(request, &()).await else {
                return bad_request("Invalid body".to_string());
            };
            let mut collections = state.collections.lock();
            let Some(item) = collections
                .get_mut(&collection)
                .and_then(|items| items.iter_mut().find(|item| item["id"] == json!(id)))
            else {
                return not_found();
            };
            item["status"] = body["status"].clone();
            Json(item.clone()).into_response()
        }
        ("offerletters", "generate-pdf") => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"offer_letter_{}.pdf\"", id),
                ),
            ],
            PDF_BYTES.to_vec(),
        )
            .into_response(),
        ("documents", "download") => {
            let Some(file) = state.files.lock().get(&id).cloned() else {
                return not_found();
            };
            (
                [
                    (header::CONTENT_TYPE, file.content_type),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file.file_name),
                    ),
                ],
                file.bytes,
            )
                .into_response()
        }
        ("applications", "screen") => Json(json!({
            "applicationId": id,
            "score": 82.5,
            "passed": true,
            "matchedSkills": ["Rust", "SQL"],
            "missingSkills": ["Kubernetes"],
            "summary": "Strong backend match",
        }))
        .into_response(),
        ("candidates", "resume") => {
            let Ok(mut multipart) = Multipart::from_request(request, &()).await else {
                return bad_request("Expected multipart body".to_string());
            };
            let mut file_name = None;
            while let Ok(Some(field)) = multipart.next_field().await {
                if field.name() == Some("file") {
                    file_name = field.file_name().map(str::to_string);
                }
            }
            let Some(file_name) = file_name else {
                return bad_request("A file is required".to_string());
            };

            let mut collections = state.collections.lock();
            let Some(candidate) = collections
                .get_mut("candidates")
                .and_then(|items| items.iter_mut().find(|item| item["id"] == json!(id)))
            else {
                return not_found();
            };
            candidate["resumeUrl"] = json!(format!("/resumes/{}/{}", id, file_name));
            Json(candidate.clone()).into_response()
        }
        _ => not_found(),
    }
}

fn export(state: &BackendState, collection: &str, params: &HashMap<String, String>) -> Response {
    let items = state
        .collections
        .lock()
        .get(collection)
        .cloned()
        .unwrap_or_default();

    let mut csv = String::from("id,name\n");
    for item in items.iter().filter(|item| matches_filters(item, params)) {
        let name = item["title"]
            .as_str()
            .or_else(|| item["firstName"].as_str())
            .unwrap_or_default();
        csv.push_str(&format!("{},{}\n", item["id"], name));
    }

    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}_export.csv\"", collection),
            ),
        ],
        csv,
    )
        .into_response()
}

fn dashboard(state: &BackendState) -> Value {
    let collections = state.collections.lock();
    let count = |name: &str| collections.get(name).map_or(0, Vec::len);
    let applications = collections.get("applications").cloned().unwrap_or_default();

    let mut stages: Vec<(String, u64)> = Vec::new();
    for application in &applications {
        let status = application["status"].as_str().unwrap_or("Applied").to_string();
        match stages.iter_mut().find(|(s, _)| *s == status) {
            Some((_, n)) => *n += 1,
            None => stages.push((status, 1)),
        }
    }
    let hires = stages
        .iter()
        .find(|(s, _)| s == "Hired")
        .map_or(0, |(_, n)| *n);

    json!({
        "openJobs": collections.get("jobs").map_or(0, |jobs| {
            jobs.iter().filter(|j| j["status"] == json!("Open")).count()
        }),
        "totalCandidates": count("candidates"),
        "totalApplications": applications.len(),
        "interviewsScheduled": count("interviews"),
        "offersReleased": count("offerletters"),
        "hires": hires,
        "pipeline": stages
            .into_iter()
            .map(|(status, count)| json!({ "status": status, "count": count }))
            .collect::<Vec<_>>(),
    })
}
