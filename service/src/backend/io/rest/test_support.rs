//! In-process HTTP test helpers.

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use crate::backend::domain::{FixedClock, OpenRecordPolicy};
use crate::backend::storage::csv::test_utils::RepositoryTestHelper;
use crate::backend::AppState;

/// App state over a temporary data directory seeded with two employees:
/// sbx001 (Ada, Sales) and sbx002 (Grace, Engineering).
pub struct TestApp {
    pub helper: RepositoryTestHelper,
    pub clock: Arc<FixedClock>,
    pub state: AppState,
}

impl TestApp {
    pub async fn new(now: NaiveDateTime) -> Self {
        let helper = RepositoryTestHelper::new().await.expect("test environment");
        helper.create_test_employee("sbx001", "Ada", "Sales").await.expect("seed sbx001");
        helper.create_test_employee("sbx002", "Grace", "Engineering").await.expect("seed sbx002");

        let clock = Arc::new(FixedClock::new(now));
        let state = AppState::new(
            Arc::new(helper.employee_repo.clone()),
            Arc::new(helper.attendance_repo.clone()),
            clock.clone(),
            OpenRecordPolicy::MostRecentOpen,
        );

        Self { helper, clock, state }
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    app.oneshot(request).await.expect("infallible router")
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&body).expect("json body")
}
