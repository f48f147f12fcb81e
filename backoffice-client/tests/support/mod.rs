//! In-process mock backend for integration tests
//!
//! An axum router that records every request (method, path, decoded query,
//! bearer token, JSON body) and answers from a programmable plan: an
//! ordered queue of one-shot responses per route, falling back to a sticky
//! default. Responses can be delayed to exercise overlapping fetches.

// Each test binary compiles its own copy; not every helper is used by all.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: Value,
    pub delay: Option<Duration>,
}

impl Canned {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body,
            delay: None,
        }
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Default)]
struct Plan {
    queue: VecDeque<Canned>,
    default: Option<Canned>,
}

#[derive(Debug, Default)]
pub struct BackendState {
    plans: Mutex<HashMap<(String, String), Plan>>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: Arc<BackendState>,
}

static TRACING: std::sync::Once = std::sync::Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

impl MockBackend {
    pub async fn start() -> Self {
        init_tracing();
        let state = Arc::new(BackendState::default());
        let router = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    /// Sticky response for every request to `method path`
    pub fn stub(&self, method: &str, path: &str, canned: Canned) {
        let mut plans = self.state.plans.lock().unwrap();
        plans.entry(key(method, path)).or_default().default = Some(canned);
    }

    /// One-shot response, consumed in order before the sticky default
    pub fn enqueue(&self, method: &str, path: &str, canned: Canned) {
        let mut plans = self.state.plans.lock().unwrap();
        plans.entry(key(method, path)).or_default().queue.push_back(canned);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, method: &str, path: &str) -> Vec<Recorded> {
        let path = format!("/api{}", path);
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

fn key(method: &str, path: &str) -> (String, String) {
    (method.to_string(), format!("/api{}", path))
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        bearer,
        body: serde_json::from_slice(&body).ok(),
    });

    let canned = {
        let mut plans = state.plans.lock().unwrap();
        plans
            .get_mut(&(method.to_string(), uri.path().to_string()))
            .and_then(|plan| plan.queue.pop_front().or_else(|| plan.default.clone()))
    };

    let Some(canned) = canned else {
        return (StatusCode::NOT_FOUND, axum::Json(Value::Null)).into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(canned.status).expect("valid status"),
        axum::Json(canned.body),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Canned payloads shared by the test suites
// ---------------------------------------------------------------------------

use serde_json::json;
use shared::models::{Client, Debtor, DebtorStatus, Product, TermType, User, UserRole};

pub fn bare_page(items: Value, number: u32, size: u32, total: u64) -> Value {
    json!({
        "content": items,
        "number": number,
        "size": size,
        "totalElements": total,
    })
}

pub fn wrapped_page(items: Value, number: u32, size: u32, total: u64) -> Value {
    json!({ "result": bare_page(items, number, size, total) })
}

pub fn client_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "surname": "Asanov",
        "patronymic": "",
        "inn": "12345678901234",
        "documentId": "AN1234567",
        "phone": null,
        "address": null,
        "isActive": true,
    })
}

pub fn debtor_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "surname": "Asanov",
        "patronymic": "",
        "debt": 1500.5,
        "balance": 0.0,
        "registrationAmount": 2000.0,
        "productDescription": "gold ring",
        "note": "",
        "status": "ACTIVE",
        "client": client_json(id + 100, name),
    })
}

pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "fullname": "Admin Adminov",
        "email": "admin@example.com",
        "username": username,
        "role": "ROLE_ADMIN",
        "active": true,
    })
}

pub fn product_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "isActive": true,
        "minSum": 1000.0,
        "maxSum": 50000.0,
        "minInterestRate": 1.5,
        "maxInterestRate": 4.0,
        "minTerm": 7,
        "maxTerm": 90,
        "termType": "DAY",
    })
}

pub fn sample_client(id: Option<i64>) -> Client {
    Client {
        id,
        name: "Aibek".into(),
        surname: "Toktogulov".into(),
        patronymic: "".into(),
        inn: "12345678901234".into(),
        document_id: "AN1234567".into(),
        phone: None,
        address: None,
        is_active: true,
    }
}

pub fn sample_debtor(id: Option<i64>) -> Debtor {
    Debtor {
        id,
        name: "Nur".into(),
        surname: "Asanov".into(),
        patronymic: "".into(),
        debt: "1500.5".parse().unwrap(),
        balance: "0".parse().unwrap(),
        registration_amount: "2000".parse().unwrap(),
        product_description: "gold ring".into(),
        note: "".into(),
        status: DebtorStatus::Active,
        client: sample_client(id.map(|i| i + 100)),
    }
}

pub fn sample_user(id: Option<i64>) -> User {
    User {
        id,
        fullname: "Admin Adminov".into(),
        email: "admin@example.com".into(),
        username: "admin".into(),
        role: UserRole::Admin,
        active: true,
        password: None,
    }
}

pub fn sample_product(id: Option<i64>) -> Product {
    Product {
        id,
        name: "express".into(),
        is_active: true,
        min_sum: "1000".parse().unwrap(),
        max_sum: "50000".parse().unwrap(),
        min_interest_rate: 1.5,
        max_interest_rate: 4.0,
        min_term: 7,
        max_term: 90,
        term_type: TermType::Day,
    }
}
