use axum::{
    extract::State,
    Json,
};
use tempdash_core::PluginMetadata;

use crate::state::AppState;

pub async fn list_plugins(State(state): State<AppState>) -> Json<Vec<PluginMetadata>> {
    Json(state.plugins.as_ref().clone())
}
