use axum::{extract::State, Json};

use crate::common::VendorsResponse;
use crate::server::AppState;

pub async fn list_vendors(State(state): State<AppState>) -> Json<VendorsResponse> {
    Json(VendorsResponse {
        vendors: state.vendors.records().to_vec(),
    })
}
