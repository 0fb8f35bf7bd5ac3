use crate::data_structures::{AppState, HealthResponse, SharedDashboard};
use crate::error::ApiError;
use axum::{
    extract::{FromRef, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::Query;
use serde::Deserialize;
use stockdash::{
    api::{ChartRequest, Controls},
    models::{ChartKind, ChartRender},
    utils::{parse_request_date, split_list},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, instrument, warn};

impl FromRef<AppState> for SharedDashboard {
    fn from_ref(app_state: &AppState) -> SharedDashboard {
        app_state.dashboard.clone()
    }
}

/// Query string of `GET /chart`; every field is optional and falls back to the control default.
///
/// `weekdays` may repeat (`weekdays=Monday&weekdays=Friday`) or be comma-separated. A present but
/// blank `weekdays=` selects no weekday at all.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub chart: Option<String>,
    pub year: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub weekdays: Vec<String>,
}

impl ChartQuery {
    pub fn into_request(self) -> Result<ChartRequest, ApiError> {
        let chart = non_blank(self.chart)
            .map(|c| c.parse::<ChartKind>())
            .transpose()?;
        let year = non_blank(self.year)
            .map(|y| {
                y.trim()
                    .parse::<i32>()
                    .map_err(|_| ApiError::BadRequest(format!("invalid year '{}'", y)))
            })
            .transpose()?;
        let start_date = non_blank(self.start)
            .map(|d| parse_request_date(&d))
            .transpose()?;
        let end_date = non_blank(self.end)
            .map(|d| parse_request_date(&d))
            .transpose()?;
        let weekdays = if self.weekdays.is_empty() {
            None
        } else {
            Some(split_list(&self.weekdays))
        };

        Ok(ChartRequest {
            chart,
            year,
            start_date,
            end_date,
            weekdays,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/controls", get(controls_handler))
        .route("/chart", get(chart_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[instrument(skip(state))]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        node: state.node_name.to_string(),
        rows: state.dashboard.table().len(),
    })
}

#[instrument(skip(dashboard))]
pub async fn controls_handler(State(dashboard): State<SharedDashboard>) -> Json<Controls> {
    debug!("Received request for controls");
    Json(dashboard.controls().clone())
}

#[instrument(skip(dashboard))]
pub async fn chart_handler(
    State(dashboard): State<SharedDashboard>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartRender>, ApiError> {
    let request = query.into_request().inspect_err(|e| warn!(error = %e, "Rejected chart query"))?;

    let chart = dashboard.render(&request).map_err(|e| {
        warn!(error = %e, "Chart render failed");
        ApiError::from(e)
    })?;

    info!(
        kind = %chart.kind,
        rows = chart.row_count,
        empty = chart.empty,
        "Rendered chart"
    );
    Ok(Json(chart))
}
