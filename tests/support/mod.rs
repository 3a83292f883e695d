use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use visa_console::models::visa::VisaRecord;

/// In-process stand-in for the visa backend and the country source.
#[derive(Clone, Default)]
pub struct MockBackend {
    pub visas: Arc<Mutex<Vec<VisaRecord>>>,
    /// Captured POST/PATCH bodies, most recent last.
    pub writes: Arc<Mutex<Vec<Value>>>,
    /// When set, create/update/delete answer with this status and body.
    pub forced_failure: Arc<Mutex<Option<(u16, Value)>>>,
}

impl MockBackend {
    pub fn with_visas(visas: Vec<VisaRecord>) -> Self {
        Self {
            visas: Arc::new(Mutex::new(visas)),
            ..Default::default()
        }
    }

    pub fn force_failure(&self, status: u16, body: Value) {
        *self.forced_failure.lock().unwrap() = Some((status, body));
    }

    fn failure(&self) -> Option<(StatusCode, Json<Value>)> {
        self.forced_failure
            .lock()
            .unwrap()
            .clone()
            .map(|(status, body)| (StatusCode::from_u16(status).unwrap(), Json(body)))
    }
}

/// A record the backend could plausibly return, with transport-format
/// dates.
pub fn sample_visa(id: &str, family_name: &str) -> VisaRecord {
    let mut record = VisaRecord::default();
    record.id = Some(id.to_string());
    record.family_name = family_name.to_string();
    record.given_names = "Jane".to_string();
    record.document_number = "X123".to_string();
    record.visa_grant_number = "G1".to_string();
    record.visa_grant_date = "2024-01-01T00:00:00.000Z".to_string();
    record.visa_expiry_date = "2025-01-01T00:00:00.000Z".to_string();
    record
}

async fn list_visas(State(backend): State<MockBackend>) -> Json<Vec<VisaRecord>> {
    Json(backend.visas.lock().unwrap().clone())
}

async fn get_visa(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let visas = backend.visas.lock().unwrap();
    match visas.iter().find(|v| v.id.as_deref() == Some(id.as_str())) {
        Some(visa) => (StatusCode::OK, Json(serde_json::to_value(visa).unwrap())),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "Visa not found" })),
        ),
    }
}

async fn create_visa(
    State(backend): State<MockBackend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.writes.lock().unwrap().push(body.clone());
    if let Some(response) = backend.failure() {
        return response;
    }
    let mut record: VisaRecord = serde_json::from_value(body).unwrap();
    record.id = Some(uuid::Uuid::new_v4().to_string());
    backend.visas.lock().unwrap().push(record.clone());
    (
        StatusCode::CREATED,
        Json(serde_json::to_value(&record).unwrap()),
    )
}

async fn update_visa(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.writes.lock().unwrap().push(body.clone());
    if let Some(response) = backend.failure() {
        return response;
    }
    let mut visas = backend.visas.lock().unwrap();
    match visas
        .iter_mut()
        .find(|v| v.id.as_deref() == Some(id.as_str()))
    {
        Some(slot) => {
            let mut record: VisaRecord = serde_json::from_value(body).unwrap();
            record.id = Some(id);
            *slot = record.clone();
            (StatusCode::OK, Json(serde_json::to_value(&record).unwrap()))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "Visa not found" })),
        ),
    }
}

async fn delete_visa(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    if let Some(response) = backend.failure() {
        return response;
    }
    let mut visas = backend.visas.lock().unwrap();
    let before = visas.len();
    visas.retain(|v| v.id.as_deref() != Some(id.as_str()));
    if visas.len() == before {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "Visa not found" })),
        )
    } else {
        (StatusCode::OK, Json(json!({})))
    }
}

async fn countries() -> Json<Value> {
    Json(json!({
        "IN": { "name": "India" },
        "AU": { "name": "Australia" },
        "NZ": { "name": "New Zealand" },
    }))
}

/// Binds the mock on an ephemeral port and returns its base URL.
pub async fn spawn(backend: MockBackend) -> String {
    let app = Router::new()
        .route("/api/visas", get(list_visas).post(create_visa))
        .route(
            "/api/visas/:id",
            get(get_visa).patch(update_visa).delete(delete_visa),
        )
        .route("/countries.json", get(countries))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
