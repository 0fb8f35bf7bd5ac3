use serde::Serialize;
use std::sync::Arc;
use stockdash::api::Dashboard;

// --- Type Aliases for Shared State ---

// Loaded once at startup and only read afterwards, so no lock
pub type SharedDashboard = Arc<Dashboard>;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: SharedDashboard,
    pub node_name: Arc<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub node: String,
    pub rows: usize,
}
