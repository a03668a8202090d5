//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::StoreError;
use crate::item::{NewWorkItem, ScheduleEntry, WorkItem};
use crate::metrics;
use crate::stats::{aggregate, StatsSummary};
use crate::store::ObjectStore;

/// Service name reported on the banner endpoints.
pub const SERVICE_NAME: &str = "worktrack";

/// Crate version reported on the banner endpoints.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application state shared with handlers.
///
/// The store handle is passed in explicitly so tests can substitute a
/// failing implementation.
#[derive(Clone)]
pub struct AppState {
    /// Object store handle.
    pub store: Arc<dyn ObjectStore>,
    /// Deployment environment name.
    pub environment: String,
    /// Last successfully computed stats, served with a degraded flag when
    /// the store is unreachable.
    pub last_good_stats: Arc<tokio::sync::RwLock<Option<StatsSummary>>>,
    /// Prometheus render handle, when the recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state around a store handle.
    pub fn new(store: Arc<dyn ObjectStore>, environment: impl Into<String>) -> Self {
        Self {
            store,
            environment: environment.into(),
            last_good_stats: Arc::new(tokio::sync::RwLock::new(None)),
            metrics: None,
        }
    }

    /// Attach a Prometheus render handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Structured error body for 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error kind.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            StoreError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_failed"),
            StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            StoreError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
        };

        let body = ErrorResponse {
            error: kind,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Service banner response.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Always "ok" when the process is serving.
    pub status: &'static str,
    /// Current time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Routable endpoints.
    pub endpoints: Vec<&'static str>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", or "degraded" when the store probe fails.
    pub status: &'static str,
    /// Store probe result.
    pub store: String,
    /// Current time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Deployment environment name.
    pub environment: String,
}

/// Object listing response.
#[derive(Debug, Serialize)]
pub struct ObjectsResponse {
    /// Every stored work item, newest first.
    pub objects: Vec<WorkItem>,
    /// Number of items in `objects`.
    pub count: usize,
}

/// Statistics response: the summary plus an explicit degraded flag, so a
/// fallback snapshot is never mistaken for live data.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Aggregate summary.
    #[serde(flatten)]
    pub summary: StatsSummary,
    /// True when the store was unreachable and `summary` is the last known
    /// good snapshot (or all zeros).
    pub degraded: bool,
}

/// Deployment info response.
#[derive(Debug, Serialize)]
pub struct EnvironmentResponse {
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Deployment environment name.
    pub environment: String,
    /// Current time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// One entry in the self-documentation listing.
#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    /// Route path.
    pub path: &'static str,
    /// HTTP method.
    pub method: &'static str,
    /// What the endpoint does.
    pub description: &'static str,
}

/// Self-documentation response.
#[derive(Debug, Serialize)]
pub struct DocsResponse {
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Documented endpoints.
    pub endpoints: Vec<EndpointDoc>,
}

/// The routable API surface, used by the banner and docs endpoints.
pub fn endpoint_docs() -> Vec<EndpointDoc> {
    vec![
        EndpointDoc {
            path: "/",
            method: "GET",
            description: "Service banner",
        },
        EndpointDoc {
            path: "/api/health",
            method: "GET",
            description: "Health check, degraded when the store is unreachable",
        },
        EndpointDoc {
            path: "/api/objects",
            method: "GET",
            description: "All work items, newest first",
        },
        EndpointDoc {
            path: "/api/objects/:id",
            method: "GET",
            description: "One work item by id",
        },
        EndpointDoc {
            path: "/api/objects",
            method: "POST",
            description: "Create a work item",
        },
        EndpointDoc {
            path: "/api/stats",
            method: "GET",
            description: "Aggregate statistics",
        },
        EndpointDoc {
            path: "/api/schedule",
            method: "GET",
            description: "Timeline schedule entries",
        },
        EndpointDoc {
            path: "/api/environment",
            method: "GET",
            description: "Deployment info",
        },
        EndpointDoc {
            path: "/docs",
            method: "GET",
            description: "This listing",
        },
        EndpointDoc {
            path: "/metrics",
            method: "GET",
            description: "Prometheus metrics",
        },
    ]
}

/// Service banner handler.
pub async fn root() -> impl IntoResponse {
    Json(ServiceInfoResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        status: "ok",
        timestamp: OffsetDateTime::now_utc(),
        endpoints: endpoint_docs().into_iter().map(|e| e.path).collect(),
    })
}

/// Health check handler. Always 200; the degraded signal lives in the body.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (status, store) = match state.store.count() {
        Ok(count) => ("healthy", format!("healthy ({count} objects)")),
        Err(e) => {
            warn!("health probe failed: {}", e);
            metrics::inc_store_errors();
            ("degraded", format!("error: {e}"))
        }
    };

    Json(HealthResponse {
        status,
        store,
        timestamp: OffsetDateTime::now_utc(),
        environment: state.environment.clone(),
    })
}

/// List all work items, newest first.
pub async fn list_objects(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    let response = match state.store.list_all() {
        Ok(objects) => {
            let count = objects.len();
            Json(ObjectsResponse { objects, count }).into_response()
        }
        Err(e) => {
            metrics::inc_store_errors();
            e.into_response()
        }
    };

    metrics::record_http_latency(started, "/api/objects");
    response
}

/// Fetch one work item by id.
pub async fn get_object(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let started = Instant::now();

    let response = match state.store.get(id) {
        Ok(item) => Json(item).into_response(),
        Err(e @ StoreError::NotFound { .. }) => e.into_response(),
        Err(e) => {
            metrics::inc_store_errors();
            e.into_response()
        }
    };

    metrics::record_http_latency(started, "/api/objects/:id");
    response
}

/// Create a work item. 201 with the stored record, 400 on validation
/// failure.
pub async fn create_object(
    State(state): State<AppState>,
    Json(payload): Json<NewWorkItem>,
) -> Response {
    let started = Instant::now();

    let response = match state.store.insert(payload) {
        Ok(item) => {
            metrics::inc_items_created();
            (StatusCode::CREATED, Json(item)).into_response()
        }
        Err(e @ StoreError::Validation { .. }) => {
            metrics::inc_items_rejected();
            e.into_response()
        }
        Err(e) => {
            metrics::inc_store_errors();
            e.into_response()
        }
    };

    metrics::record_http_latency(started, "/api/objects");
    response
}

/// Aggregate statistics over the current snapshot.
///
/// When the snapshot cannot be read, responds with the last known good
/// summary (or zeros) and `degraded: true` instead of propagating the error.
pub async fn get_stats(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    let response = match state.store.list_all() {
        Ok(items) => {
            let summary = {
                let _timer = metrics::timer_stats_aggregation();
                aggregate(&items)
            };
            *state.last_good_stats.write().await = Some(summary.clone());
            Json(StatsResponse {
                summary,
                degraded: false,
            })
        }
        Err(e) => {
            warn!("stats snapshot unavailable, serving fallback: {}", e);
            metrics::inc_store_errors();
            metrics::inc_stats_fallbacks();

            let summary = state
                .last_good_stats
                .read()
                .await
                .clone()
                .unwrap_or_default();
            Json(StatsResponse {
                summary,
                degraded: true,
            })
        }
    };

    metrics::record_http_latency(started, "/api/stats");
    response.into_response()
}

/// List timeline schedule entries.
pub async fn get_schedule(State(state): State<AppState>) -> Response {
    match state.store.list_schedule() {
        Ok(entries) => Json::<Vec<ScheduleEntry>>(entries).into_response(),
        Err(e) => {
            metrics::inc_store_errors();
            e.into_response()
        }
    }
}

/// Deployment info handler.
pub async fn get_environment(State(state): State<AppState>) -> impl IntoResponse {
    Json(EnvironmentResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        environment: state.environment.clone(),
        timestamp: OffsetDateTime::now_utc(),
    })
}

/// Self-documentation handler.
pub async fn docs() -> impl IntoResponse {
    Json(DocsResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        endpoints: endpoint_docs(),
    })
}

/// Prometheus exposition handler.
pub async fn metrics_text(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed",
        )
            .into_response(),
    }
}
