// tests/support/mod.rs
//! In-process mock of the Hellio REST backend, just enough surface for the
//! client integration tests. Seeded with a small fixed roster; list
//! endpoints count their hits so tests can assert on cache behavior.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

pub const USERNAME: &str = "admin@hellio.test";
pub const PASSWORD: &str = "admin123";

pub struct MockBackend {
    candidates: Mutex<Vec<Value>>,
    positions: Mutex<Vec<Value>>,
    valid_token: Mutex<Option<String>>,
    logins: AtomicUsize,
    pub candidate_list_hits: AtomicUsize,
    pub position_list_hits: AtomicUsize,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            candidates: Mutex::new(seed_candidates()),
            positions: Mutex::new(seed_positions()),
            valid_token: Mutex::new(None),
            logins: AtomicUsize::new(0),
            candidate_list_hits: AtomicUsize::new(0),
            position_list_hits: AtomicUsize::new(0),
        }
    }

    pub fn login_count(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let Some(valid) = self.valid_token.lock().unwrap().clone() else {
            return false;
        };
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == format!("Bearer {valid}"))
            .unwrap_or(false)
    }
}

/// Start the mock on a random port and return its state handle and base URL.
pub async fn spawn() -> (Arc<MockBackend>, String) {
    let state = Arc::new(MockBackend::new());
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (state, format!("http://{addr}"))
}

fn router(state: Arc<MockBackend>) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh", post(refresh))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/candidates", get(list_candidates))
        .route("/api/v1/candidates/:id", get(get_candidate))
        .route(
            "/api/v1/candidates/:id/positions/:pid",
            post(add_position).delete(remove_position),
        )
        .route("/api/v1/positions", get(list_positions))
        .route("/api/v1/positions/:id", get(get_position).put(update_position))
        .with_state(state)
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(
    State(state): State<Arc<MockBackend>>,
    Form(form): Form<LoginForm>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if form.username != USERNAME || form.password != PASSWORD {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        ));
    }
    let n = state.logins.fetch_add(1, Ordering::SeqCst);
    let token = format!("access-{n}");
    *state.valid_token.lock().unwrap() = Some(token.clone());
    Ok(Json(json!({
        "access_token": token,
        "refresh_token": format!("refresh-{n}"),
        "token_type": "bearer",
    })))
}

#[derive(Deserialize)]
struct RefreshRequest {
    refresh_token: String,
}

async fn refresh(
    State(state): State<Arc<MockBackend>>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<Value>, StatusCode> {
    if !body.refresh_token.starts_with("refresh-") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let n = state.logins.fetch_add(1, Ordering::SeqCst);
    let token = format!("access-{n}");
    *state.valid_token.lock().unwrap() = Some(token.clone());
    Ok(Json(json!({
        "access_token": token,
        "refresh_token": format!("refresh-{n}"),
        "token_type": "bearer",
    })))
}

async fn me(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "id": "u1",
        "email": USERNAME,
        "fullName": "Admin User",
        "role": "admin",
        "isActive": true,
    })))
}

#[derive(Deserialize)]
struct ListParams {
    status: Option<String>,
    search: Option<String>,
    #[serde(rename = "positionId")]
    position_id: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_candidates(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    state.candidate_list_hits.fetch_add(1, Ordering::SeqCst);

    let mut items: Vec<Value> = state.candidates.lock().unwrap().clone();
    if let Some(status) = &params.status {
        items.retain(|c| c["status"] == status.as_str());
    }
    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        items.retain(|c| {
            c["name"].as_str().unwrap_or("").to_lowercase().contains(&needle)
                || c["email"].as_str().unwrap_or("").to_lowercase().contains(&needle)
        });
    }
    if let Some(position_id) = &params.position_id {
        items.retain(|c| {
            c["appliedPositions"]
                .as_array()
                .map(|a| a.iter().any(|p| p == position_id.as_str()))
                .unwrap_or(false)
        });
    }
    let total = items.len();
    let items = page(items, params.offset, params.limit);
    Ok(Json(json!({ "candidates": items, "total": total })))
}

async fn get_candidate(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !state.authorized(&headers) {
        return Err((StatusCode::UNAUTHORIZED, Json(json!({}))));
    }
    if id == "explode" {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "boom" })),
        ));
    }
    state
        .candidates
        .lock()
        .unwrap()
        .iter()
        .find(|c| c["id"] == id.as_str())
        .cloned()
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Candidate not found" })),
        ))
}

async fn add_position(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path((id, pid)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut candidates = state.candidates.lock().unwrap();
    let candidate = candidates
        .iter_mut()
        .find(|c| c["id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    let applied = candidate["appliedPositions"].as_array_mut().unwrap();
    if !applied.iter().any(|p| *p == pid.as_str()) {
        applied.push(json!(pid));
    }
    Ok(Json(json!({ "message": "Position added to candidate" })))
}

async fn remove_position(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path((id, pid)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut candidates = state.candidates.lock().unwrap();
    let candidate = candidates
        .iter_mut()
        .find(|c| c["id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    let applied = candidate["appliedPositions"].as_array_mut().unwrap();
    applied.retain(|p| *p != pid.as_str());
    Ok(Json(json!({ "message": "Position removed from candidate" })))
}

async fn list_positions(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    state.position_list_hits.fetch_add(1, Ordering::SeqCst);

    let mut items: Vec<Value> = state.positions.lock().unwrap().clone();
    if let Some(status) = &params.status {
        items.retain(|p| p["status"] == status.as_str());
    }
    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        items.retain(|p| p["title"].as_str().unwrap_or("").to_lowercase().contains(&needle));
    }
    let total = items.len();
    let items = page(items, params.offset, params.limit);
    Ok(Json(json!({ "positions": items, "total": total })))
}

async fn get_position(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    state
        .positions
        .lock()
        .unwrap()
        .iter()
        .find(|p| p["id"] == id.as_str())
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_position(
    State(state): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(update): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut positions = state.positions.lock().unwrap();
    let position = positions
        .iter_mut()
        .find(|p| p["id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(fields) = update.as_object() {
        for (key, value) in fields {
            position[key] = value.clone();
        }
    }
    Ok(Json(position.clone()))
}

fn page(items: Vec<Value>, offset: Option<usize>, limit: Option<usize>) -> Vec<Value> {
    let offset = offset.unwrap_or(0);
    let items: Vec<Value> = items.into_iter().skip(offset).collect();
    match limit {
        Some(limit) => items.into_iter().take(limit).collect(),
        None => items,
    }
}

fn seed_candidates() -> Vec<Value> {
    vec![
        json!({
            "id": "c1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0101",
            "location": "London",
            "summary": "Systems engineer",
            "status": "Active",
            "yearsOfExperience": 7.0,
            "sortOrder": 0,
            "experience": [
                {
                    "company": "Analytical Engines Ltd",
                    "title": "Engineer",
                    "startDate": "2017-01-09",
                    "endDate": null,
                    "description": "Compute things"
                }
            ],
            "education": [
                {
                    "institution": "Cambridge",
                    "degree": "BSc",
                    "field": "Mathematics",
                    "startDate": "2010-09-01",
                    "endDate": "2013-06-30"
                }
            ],
            "skills": [
                { "name": "Rust", "level": "Expert" },
                { "name": "SQL", "level": "Intermediate" }
            ],
            "documents": [
                { "type": "CV", "name": "ada_cv.pdf", "url": "/files/ada_cv.pdf" }
            ],
            "appliedPositions": ["p1"]
        }),
        json!({
            "id": "c2",
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "555-0102",
            "location": "New York",
            "summary": "Compiler pioneer",
            "status": "Active",
            "yearsOfExperience": 12.0,
            "sortOrder": 1,
            "experience": [
                {
                    "company": "Eckert-Mauchly",
                    "title": "Senior Engineer",
                    "startDate": "2012-05-01",
                    "endDate": "2020-03-31",
                    "description": "Built compilers"
                }
            ],
            "education": [],
            "skills": [
                { "name": "COBOL", "level": "Expert" }
            ],
            "documents": [],
            "appliedPositions": []
        }),
        json!({
            "id": "c3",
            "name": "Cher",
            "email": "cher@example.com",
            "phone": "555-0103",
            "location": "Los Angeles",
            "summary": "",
            "status": "Inactive",
            "yearsOfExperience": 2.0,
            "sortOrder": 2,
            "experience": [],
            "education": [],
            "skills": [],
            "documents": [],
            "appliedPositions": ["p1"]
        }),
    ]
}

fn seed_positions() -> Vec<Value> {
    vec![
        json!({
            "id": "p1",
            "title": "Backend Engineer",
            "department": "Engineering",
            "location": "Remote",
            "description": "Own the API layer",
            "requirements": "Ship reliable services",
            "requiredSkills": ["Rust", "SQL"],
            "minExperienceYears": 3,
            "status": "Open",
            "postedDate": "2024-02-01",
            "candidates": ["c1"],
            "sortOrder": 0
        }),
        json!({
            "id": "p2",
            "title": "Data Analyst",
            "department": "Analytics",
            "location": "Geneva",
            "description": "Make sense of funnels",
            "requirements": "",
            "requiredSkills": ["SQL"],
            "minExperienceYears": 2,
            "status": "Open",
            "postedDate": "2024-03-10",
            "candidates": [],
            "sortOrder": 1
        }),
        json!({
            "id": "p3",
            "title": "Office Manager",
            "department": "Operations",
            "location": "Zurich",
            "description": "Keep the lights on",
            "requirements": "",
            "requiredSkills": [],
            "minExperienceYears": 5,
            "status": "Closed",
            "postedDate": "2023-11-20",
            "candidates": [],
            "sortOrder": 2
        }),
    ]
}
