//! Client repository
//!
//! Read-only: this service never writes the `cliente` table.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Row cap for the client listing.
const MAX_CLIENTES: i64 = 50;

/// Client record, serialized with the column names the front-end expects.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cliente {
    pub id_cliente: i32,
    pub nombre: String,
    pub tipo: String,
    pub descuento_pct: Decimal,
    pub activo: bool,
}

/// Client repository
pub struct ClienteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClienteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List clients ordered by id, capped at 50 rows.
    pub async fn list(&self) -> Result<Vec<Cliente>, DbError> {
        let filas = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id_cliente, nombre, tipo, descuento_pct, activo
            FROM cliente
            ORDER BY id_cliente
            LIMIT $1
            "#,
        )
        .bind(MAX_CLIENTES)
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }

    /// Look up a single client by primary key.
    pub async fn get(&self, id: i32) -> Result<Cliente, DbError> {
        sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id_cliente, nombre, tipo, descuento_pct, activo
            FROM cliente
            WHERE id_cliente = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "cliente",
            id,
        })
    }
}
