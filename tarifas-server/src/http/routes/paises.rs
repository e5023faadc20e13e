//! Country endpoints

use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::db::repos::{Pais, PaisRepo};
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /paises - list every country ordered by name
async fn list_paises(State(state): State<AppState>) -> Result<Json<Vec<Pais>>, ApiError> {
    let filas = list_filas(&state)
        .await
        .map_err(|e| ApiError::db("Error consultando países", e))?;
    Ok(Json(filas))
}

async fn list_filas(state: &AppState) -> Result<Vec<Pais>, DbError> {
    let pool = state.db.acquire().await?;
    PaisRepo::new(&pool).list().await
}

/// Country routes
pub fn router() -> Router<AppState> {
    Router::new().route("/paises", get(list_paises))
}
