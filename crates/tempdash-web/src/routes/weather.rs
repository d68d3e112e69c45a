use axum::{
    extract::{
        Path,
        State,
    },
    Json,
};
use tempdash_core::CityTemperature;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn city_temperature(
    State(state): State<AppState>, Path(city): Path<String>,
) -> ApiResult<Json<CityTemperature>> {
    let reading = state.weather_service.temperature(&city).await?;
    Ok(Json(reading))
}
