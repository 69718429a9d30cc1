// butler-client/tests/common/mod.rs
// In-process fakes of the legacy API and of Spoolman

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

/// One mutating request seen by a fake
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

#[derive(Default)]
pub struct Store {
    pub vendors: Vec<Value>,
    pub filaments: Vec<Value>,
    pub spools: Vec<Value>,
    pub filament_types: Vec<Value>,
    pub requests: Vec<Recorded>,
    /// Last query string map per path
    pub queries: HashMap<String, HashMap<String, String>>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, method: &'static str, path: impl Into<String>, body: &Value) {
        self.requests.push(Recorded {
            method,
            path: path.into(),
            body: body.clone(),
        });
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }
}

pub type Shared = Arc<Mutex<Store>>;

/// A running fake server
pub struct FakeServer {
    pub addr: SocketAddr,
    pub store: Shared,
}

impl FakeServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn find(items: &[Value], id: i64) -> Option<usize> {
    items.iter().position(|v| v["id"].as_i64() == Some(id))
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (k, v) in patch {
            target.insert(k.clone(), v.clone());
        }
    }
}

// ========== Spoolman ==========

fn spoolman_missing(kind: &str, id: i64) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("No {kind} with ID {id} found.") })),
    )
}

/// Expand `vendor_id` into the nested vendor the way Spoolman answers
fn hydrate_filament(store: &Store, mut filament: Value) -> Value {
    if let Some(vendor_id) = filament.get("vendor_id").and_then(Value::as_i64) {
        if let Some(i) = find(&store.vendors, vendor_id) {
            filament["vendor"] = store.vendors[i].clone();
        }
    }
    if let Some(object) = filament.as_object_mut() {
        object.remove("vendor_id");
    }
    filament
}

fn hydrate_spool(store: &Store, mut spool: Value) -> Value {
    if let Some(filament_id) = spool.get("filament_id").and_then(Value::as_i64) {
        if let Some(i) = find(&store.filaments, filament_id) {
            spool["filament"] = store.filaments[i].clone();
        }
    }
    if let Some(object) = spool.as_object_mut() {
        object.remove("filament_id");
    }
    let initial = spool["initial_weight"].as_f64().unwrap_or(0.0);
    let remaining = spool["remaining_weight"].as_f64().unwrap_or(initial);
    spool["remaining_weight"] = json!(remaining);
    spool["used_weight"] = json!((initial - remaining).max(0.0));
    spool
}

async fn spoolman_info() -> Json<Value> {
    Json(json!({
        "version": "0.22.1",
        "debug_mode": false,
        "automatic_backups": true,
        "data_dir": "/home/app/.local/share/spoolman",
        "logs_dir": "/home/app/.local/share/spoolman",
        "backups_dir": "/home/app/.local/share/spoolman/backups",
        "db_type": "sqlite",
        "git_commit": "a1b2c3d",
        "build_date": "2025-01-10T12:00:00Z"
    }))
}

/// One comma-separated `name` term: quoted is exact, else case-insensitive substring
fn name_matches(name: &str, term: &str) -> bool {
    match term.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(exact) => name == exact,
        None => name.to_lowercase().contains(&term.to_lowercase()),
    }
}

async fn list_vendors(
    State(store): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.queries.insert("/vendor".into(), query.clone());
    let vendors: Vec<Value> = store
        .vendors
        .iter()
        .filter(|v| match query.get("name") {
            Some(terms) => {
                let name = v["name"].as_str().unwrap_or_default();
                terms.split(',').any(|term| name_matches(name, term))
            }
            None => true,
        })
        .cloned()
        .collect();
    Json(Value::Array(vendors))
}

async fn create_vendor(State(store): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.record("POST", "/vendor", &body);
    let mut vendor = body;
    vendor["id"] = json!(store.next_id());
    vendor["registered"] = json!("2025-02-01T10:00:00Z");
    vendor["extra"] = json!({});
    store.vendors.push(vendor.clone());
    Json(vendor)
}

async fn list_filaments(
    State(store): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.queries.insert("/filament".into(), query);
    Json(Value::Array(store.filaments.clone()))
}

async fn get_filament(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let store = store.lock().unwrap();
    match find(&store.filaments, id) {
        Some(i) => Ok(Json(store.filaments[i].clone())),
        None => Err(spoolman_missing("filament", id)),
    }
}

async fn create_filament(State(store): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.record("POST", "/filament", &body);
    let mut filament = body;
    filament["id"] = json!(store.next_id());
    filament["registered"] = json!("2025-02-01T10:00:00Z");
    filament["extra"] = json!({});
    let filament = hydrate_filament(&store, filament);
    store.filaments.push(filament.clone());
    Json(filament)
}

async fn update_filament(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("PATCH", format!("/filament/{id}"), &body);
    let Some(i) = find(&store.filaments, id) else {
        return Err(spoolman_missing("filament", id));
    };
    let mut filament = store.filaments[i].clone();
    merge(&mut filament, &body);
    let filament = hydrate_filament(&store, filament);
    store.filaments[i] = filament.clone();
    Ok(Json(filament))
}

async fn delete_filament(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("DELETE", format!("/filament/{id}"), &Value::Null);
    let Some(i) = find(&store.filaments, id) else {
        return Err(spoolman_missing("filament", id));
    };
    store.filaments.remove(i);
    Ok(Json(json!({ "message": "Success!" })))
}

async fn list_spools(
    State(store): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.queries.insert("/spool".into(), query.clone());
    let allow_archived = query.get("allow_archived").is_some_and(|v| v == "true");
    let filament_id = query.get("filament.id").and_then(|v| v.parse::<i64>().ok());
    let spools: Vec<Value> = store
        .spools
        .iter()
        .filter(|s| allow_archived || !s["archived"].as_bool().unwrap_or(false))
        .filter(|s| filament_id.is_none_or(|id| s["filament"]["id"].as_i64() == Some(id)))
        .cloned()
        .collect();
    Json(Value::Array(spools))
}

async fn get_spool(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let store = store.lock().unwrap();
    match find(&store.spools, id) {
        Some(i) => Ok(Json(store.spools[i].clone())),
        None => Err(spoolman_missing("spool", id)),
    }
}

async fn create_spool(State(store): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("POST", "/spool", &body);
    let Some(filament_id) = body["filament_id"].as_i64() else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["body", "filament_id"], "msg": "field required" }] })),
        ));
    };
    if find(&store.filaments, filament_id).is_none() {
        return Err(spoolman_missing("filament", filament_id));
    }
    let mut spool = body;
    spool["id"] = json!(store.next_id());
    spool["registered"] = json!("2025-02-01T10:00:00Z");
    spool["extra"] = json!({});
    if spool.get("archived").is_none() {
        spool["archived"] = json!(false);
    }
    let spool = hydrate_spool(&store, spool);
    store.spools.push(spool.clone());
    Ok(Json(spool))
}

async fn update_spool(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("PATCH", format!("/spool/{id}"), &body);
    let Some(i) = find(&store.spools, id) else {
        return Err(spoolman_missing("spool", id));
    };
    let mut spool = store.spools[i].clone();
    if let Some(object) = spool.as_object_mut() {
        object.remove("used_weight");
    }
    merge(&mut spool, &body);
    let spool = hydrate_spool(&store, spool);
    store.spools[i] = spool.clone();
    Ok(Json(spool))
}

async fn use_spool(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("PUT", format!("/spool/{id}/use"), &body);
    let Some(i) = find(&store.spools, id) else {
        return Err(spoolman_missing("spool", id));
    };
    let used = body["use_weight"].as_f64().unwrap_or(0.0);
    let spool = &mut store.spools[i];
    let remaining = spool["remaining_weight"].as_f64().unwrap_or(0.0) - used;
    let total_used = spool["used_weight"].as_f64().unwrap_or(0.0) + used;
    spool["remaining_weight"] = json!(remaining);
    spool["used_weight"] = json!(total_used);
    Ok(Json(spool.clone()))
}

async fn delete_spool(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("DELETE", format!("/spool/{id}"), &Value::Null);
    let Some(i) = find(&store.spools, id) else {
        return Err(spoolman_missing("spool", id));
    };
    store.spools.remove(i);
    Ok(Json(json!({ "message": "Success!" })))
}

/// Start a fake Spoolman exposing `/api/v1`
pub async fn spoolman() -> FakeServer {
    let store: Shared = Arc::new(Mutex::new(Store::default()));
    let api = Router::new()
        .route("/info", get(spoolman_info))
        .route("/health", get(|| async { Json(json!({ "status": "healthy" })) }))
        .route("/vendor", get(list_vendors).post(create_vendor))
        .route("/filament", get(list_filaments).post(create_filament))
        .route(
            "/filament/{id}",
            get(get_filament).patch(update_filament).delete(delete_filament),
        )
        .route("/spool", get(list_spools).post(create_spool))
        .route(
            "/spool/{id}",
            get(get_spool).patch(update_spool).delete(delete_spool),
        )
        .route("/spool/{id}/use", put(use_spool))
        .with_state(store.clone());

    let app = Router::new().nest("/api/v1", api);
    FakeServer {
        addr: serve(app).await,
        store,
    }
}

/// Seed a vendor and return its id
pub fn seed_vendor(store: &Shared, name: &str) -> i64 {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    store.vendors.push(json!({
        "id": id,
        "registered": "2024-06-01T08:00:00Z",
        "name": name,
        "extra": {}
    }));
    id
}

/// Seed a stored filament (already in response shape) and return its id
pub fn seed_filament(store: &Shared, mut filament: Value) -> i64 {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    filament["id"] = json!(id);
    if filament.get("registered").is_none() {
        filament["registered"] = json!("2024-06-01T08:00:00Z");
    }
    store.filaments.push(filament);
    id
}

/// Seed a spool of `filament_id` and return its id
pub fn seed_spool(store: &Shared, filament_id: i64, mut spool: Value) -> i64 {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    spool["id"] = json!(id);
    spool["filament_id"] = json!(filament_id);
    if spool.get("archived").is_none() {
        spool["archived"] = json!(false);
    }
    if spool.get("registered").is_none() {
        spool["registered"] = json!("2024-06-01T08:00:00Z");
    }
    let spool = hydrate_spool(&store, spool);
    store.spools.push(spool);
    id
}

// ========== Legacy ==========

fn legacy_missing(what: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found") })),
    )
}

async fn legacy_health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": "2025-02-01T10:00:00.000Z" }))
}

async fn list_filament_types(State(store): State<Shared>) -> Json<Value> {
    let store = store.lock().unwrap();
    let types: Vec<Value> = store
        .filament_types
        .iter()
        .map(|t| {
            let id = t["id"].as_i64();
            let count = store
                .spools
                .iter()
                .filter(|s| s["filamentTypeId"].as_i64() == id)
                .count();
            let mut t = t.clone();
            // Postgres COUNT arrives as a string
            t["spoolCount"] = json!(count.to_string());
            t
        })
        .collect();
    Json(Value::Array(types))
}

async fn get_filament_type(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let store = store.lock().unwrap();
    match find(&store.filament_types, id) {
        Some(i) => Ok(Json(store.filament_types[i].clone())),
        None => Err(legacy_missing("Filament type")),
    }
}

async fn create_filament_type(State(store): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("POST", "/api/filament-types", &body);
    if body["name"].as_str().is_none_or(str::is_empty) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name is required" })),
        ));
    }
    let mut created = body;
    created["id"] = json!(store.next_id());
    created["createdAt"] = json!("2025-02-01T10:00:00.000Z");
    created["updatedAt"] = json!("2025-02-01T10:00:00.000Z");
    store.filament_types.push(created.clone());
    Ok(Json(created))
}

async fn update_filament_type(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("PUT", format!("/api/filament-types/{id}"), &body);
    let Some(i) = find(&store.filament_types, id) else {
        return Err(legacy_missing("Filament type"));
    };
    merge(&mut store.filament_types[i], &body);
    Ok(Json(store.filament_types[i].clone()))
}

async fn delete_filament_type(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut store = store.lock().unwrap();
    let Some(i) = find(&store.filament_types, id) else {
        return Err(legacy_missing("Filament type"));
    };
    store.filament_types.remove(i);
    store.spools.retain(|s| s["filamentTypeId"].as_i64() != Some(id));
    Ok(Json(json!({ "message": "Filament type deleted successfully" })))
}

/// Spools with the included type under the legacy `FilamentType` key
fn legacy_spool(store: &Store, spool: &Value) -> Value {
    let mut spool = spool.clone();
    if let Some(type_id) = spool["filamentTypeId"].as_i64() {
        if let Some(i) = find(&store.filament_types, type_id) {
            spool["FilamentType"] = store.filament_types[i].clone();
        }
    }
    spool
}

async fn list_legacy_spools(
    State(store): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut store = store.lock().unwrap();
    store.queries.insert("/api/spools".into(), query.clone());
    let type_id = query.get("filamentTypeId").and_then(|v| v.parse::<i64>().ok());
    let is_empty = query.get("isEmpty").map(|v| v == "true");
    let spools: Vec<Value> = store
        .spools
        .iter()
        .filter(|s| type_id.is_none_or(|id| s["filamentTypeId"].as_i64() == Some(id)))
        .filter(|s| is_empty.is_none_or(|e| s["isEmpty"].as_bool() == Some(e)))
        .map(|s| legacy_spool(&store, s))
        .collect();
    Json(Value::Array(spools))
}

async fn get_legacy_spool(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let store = store.lock().unwrap();
    match find(&store.spools, id) {
        Some(i) => Ok(Json(legacy_spool(&store, &store.spools[i]))),
        None => Err(legacy_missing("Spool")),
    }
}

async fn create_legacy_spool(State(store): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("POST", "/api/spools", &body);
    let mut created = body;
    created["id"] = json!(store.next_id());
    created["createdAt"] = json!("2025-02-01T10:00:00.000Z");
    created["updatedAt"] = json!("2025-02-01T10:00:00.000Z");
    store.spools.push(created.clone());
    Ok(Json(legacy_spool(&store, &created)))
}

async fn update_legacy_spool(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut store = store.lock().unwrap();
    store.record("PUT", format!("/api/spools/{id}"), &body);
    let Some(i) = find(&store.spools, id) else {
        return Err(legacy_missing("Spool"));
    };
    merge(&mut store.spools[i], &body);
    let spool = store.spools[i].clone();
    Ok(Json(legacy_spool(&store, &spool)))
}

async fn delete_legacy_spool(State(store): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut store = store.lock().unwrap();
    let Some(i) = find(&store.spools, id) else {
        return Err(legacy_missing("Spool"));
    };
    store.spools.remove(i);
    Ok(Json(json!({ "message": "Spool deleted successfully" })))
}

/// Start a fake legacy FilamentButler API
pub async fn legacy() -> FakeServer {
    let store: Shared = Arc::new(Mutex::new(Store::default()));
    let app = Router::new()
        .route("/api/health", get(legacy_health))
        .route(
            "/api/filament-types",
            get(list_filament_types).post(create_filament_type),
        )
        .route(
            "/api/filament-types/{id}",
            get(get_filament_type)
                .put(update_filament_type)
                .delete(delete_filament_type),
        )
        .route("/api/spools", get(list_legacy_spools).post(create_legacy_spool))
        .route(
            "/api/spools/{id}",
            get(get_legacy_spool)
                .put(update_legacy_spool)
                .delete(delete_legacy_spool),
        )
        .with_state(store.clone());

    FakeServer {
        addr: serve(app).await,
        store,
    }
}

/// Seed a legacy filament type (camelCase) and return its id
pub fn seed_filament_type(store: &Shared, mut filament_type: Value) -> i64 {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    filament_type["id"] = json!(id);
    filament_type["createdAt"] = json!("2024-05-01T08:00:00.000Z");
    filament_type["updatedAt"] = json!("2024-05-01T08:00:00.000Z");
    store.filament_types.push(filament_type);
    id
}

/// Seed a legacy spool (camelCase) and return its id
pub fn seed_legacy_spool(store: &Shared, mut spool: Value) -> i64 {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    spool["id"] = json!(id);
    if spool.get("isEmpty").is_none() {
        spool["isEmpty"] = json!(false);
    }
    store.spools.push(spool);
    id
}

pub fn object(value: &Value) -> &Map<String, Value> {
    value.as_object().unwrap()
}
