//! Package endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde::Serialize;

use crate::db::repos::PaqueteRepo;
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CrearPaqueteRequest, NuevoPaquete};

/// Creation response: the store-generated id.
#[derive(Debug, Serialize)]
pub struct PaqueteCreado {
    pub ok: bool,
    pub id_paquete: i32,
}

/// POST /paquetes - insert one package record
async fn crear_paquete(
    State(state): State<AppState>,
    Json(req): Json<CrearPaqueteRequest>,
) -> Result<(StatusCode, Json<PaqueteCreado>), ApiError> {
    // Validation runs before any store access
    let paquete = NuevoPaquete::from_request(req)?;

    let id = inserta(&state, paquete)
        .await
        .map_err(|e| ApiError::db("Error creando paquete", e))?;

    Ok((
        StatusCode::CREATED,
        Json(PaqueteCreado {
            ok: true,
            id_paquete: id,
        }),
    ))
}

async fn inserta(state: &AppState, paquete: NuevoPaquete) -> Result<i32, DbError> {
    let pool = state.db.acquire().await?;
    PaqueteRepo::new(&pool).create(paquete).await
}

/// Package routes
pub fn router() -> Router<AppState> {
    Router::new().route("/paquetes", post(crear_paquete))
}
