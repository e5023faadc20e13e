//! Client endpoints

use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::db::repos::{Cliente, ClienteRepo};
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::ClienteId;
use crate::http::server::AppState;

/// GET /clientes - list up to 50 clients ordered by id
async fn list_clientes(State(state): State<AppState>) -> Result<Json<Vec<Cliente>>, ApiError> {
    let filas = list_filas(&state)
        .await
        .map_err(|e| ApiError::db("Error consultando clientes", e))?;
    Ok(Json(filas))
}

async fn list_filas(state: &AppState) -> Result<Vec<Cliente>, DbError> {
    let pool = state.db.acquire().await?;
    ClienteRepo::new(&pool).list().await
}

/// GET /clientes/{id} - look up one client by primary key
async fn get_cliente(
    State(state): State<AppState>,
    ClienteId(id): ClienteId,
) -> Result<Json<Cliente>, ApiError> {
    let cliente = get_fila(&state, id).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::NotFound {
            message: "Cliente no encontrado",
        },
        e => ApiError::db("Error consultando cliente", e),
    })?;
    Ok(Json(cliente))
}

async fn get_fila(state: &AppState, id: i32) -> Result<Cliente, DbError> {
    let pool = state.db.acquire().await?;
    ClienteRepo::new(&pool).get(id).await
}

/// Client routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(list_clientes))
        .route("/clientes/{id}", get(get_cliente))
}
