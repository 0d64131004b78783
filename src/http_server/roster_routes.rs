//! Roster HTTP Routes
//!
//! The two read endpoints over the class roster:
//!
//! - `GET /list-rows?table=` (also `/students`) - every record in a class
//! - `GET /lookup-id?table=&secondary_id=` (also `/get-tag`, `prn=`) - row id
//!   for one student

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{error, info, warn};

use crate::store::{Record, RosterStore, StoreError, TableName};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Roster state shared across handlers
pub struct RosterState {
    pub store: Arc<dyn RosterStore>,
}

impl RosterState {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }
}

// ==================
// Roster Routes
// ==================

/// Create roster routes
pub fn roster_routes(state: Arc<RosterState>) -> Router {
    Router::new()
        .route("/list-rows", get(list_rows_handler))
        .route("/students", get(list_rows_handler))
        .route("/lookup-id", get(lookup_id_handler))
        .route("/get-tag", get(lookup_id_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Query parameters in request order; repeated keys are kept
type QueryPairs = Vec<(String, String)>;

/// First occurrence of each name, in `names` order, skipping empty values.
///
/// A repeated key resolves to its first occurrence.
fn param<'a>(params: &'a [(String, String)], names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| params.iter().find(|(key, _)| key == name))
        .map(|(_, value)| value.as_str())
        .find(|value| !value.is_empty())
}

fn list_error(table: &TableName, err: StoreError) -> ApiError {
    warn!(table = %table, error = %err, "list rows failed");
    match err {
        err if err.is_missing_table() => ApiError::NoSuchClass,
        StoreError::Scan { .. } => ApiError::ScanFailed,
        _ => ApiError::Internal,
    }
}

// ==================
// Handlers
// ==================

async fn list_rows_handler(
    State(state): State<Arc<RosterState>>,
    Query(params): Query<QueryPairs>,
) -> ApiResult<Json<Vec<Record>>> {
    let table = param(&params, &["table"]).ok_or(ApiError::TableRequired)?;
    let table = TableName::new(table).map_err(|_| ApiError::TableRequired)?;

    let store = Arc::clone(&state.store);
    let query_table = table.clone();
    let result = tokio::task::spawn_blocking(move || store.list_records(&query_table)).await;

    match result {
        Ok(Ok(records)) => Ok(Json(records)),
        Ok(Err(err)) => Err(list_error(&table, err)),
        Err(err) => {
            error!(table = %table, error = %err, "list rows task failed");
            Err(ApiError::Internal)
        }
    }
}

async fn lookup_id_handler(
    State(state): State<Arc<RosterState>>,
    Query(params): Query<QueryPairs>,
) -> ApiResult<String> {
    let table = param(&params, &["table"]);
    let secondary_id = param(&params, &["secondary_id", "prn"]);
    info!(
        table = table.unwrap_or_default(),
        secondary_id = secondary_id.unwrap_or_default(),
        "lookup id"
    );

    let (Some(table), Some(secondary_id)) = (table, secondary_id) else {
        return Err(ApiError::LookupParamsRequired);
    };
    let table = TableName::new(table).map_err(|_| ApiError::LookupParamsRequired)?;
    let secondary_id = secondary_id.to_string();

    let store = Arc::clone(&state.store);
    let result =
        tokio::task::spawn_blocking(move || store.lookup_row_id(&table, &secondary_id)).await;

    match result {
        Ok(Ok(Some(row_id))) => Ok(row_id.to_string()),
        Ok(Ok(None)) => Err(ApiError::NotFound),
        Ok(Err(err)) => {
            error!(error = %err, "lookup id failed");
            Err(ApiError::Database)
        }
        Err(err) => {
            error!(error = %err, "lookup id task failed");
            Err(ApiError::Database)
        }
    }
}
