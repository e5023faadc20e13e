//! Country repository
//!
//! Read-only reference data for dropdowns and destination rates.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Country record with its shipping rate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pais {
    pub id_pais: i32,
    pub nombre: String,
    pub region: String,
    pub tarifa: Decimal,
}

/// Country repository
pub struct PaisRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PaisRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every country, ordered by name. No row cap.
    pub async fn list(&self) -> Result<Vec<Pais>, DbError> {
        let filas = sqlx::query_as::<_, Pais>(
            r#"
            SELECT id_pais, nombre, region, tarifa
            FROM pais
            ORDER BY nombre
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(filas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p tarifas-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pais (
                id_pais serial PRIMARY KEY,
                nombre  text NOT NULL,
                region  text NOT NULL,
                tarifa  numeric(10, 2) NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("schema setup failed");

        sqlx::query("TRUNCATE pais RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate failed");

        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_by_name() {
        let pool = test_pool().await;

        for (nombre, region, tarifa) in [
            ("Uruguay", "America del Sur", "8.00"),
            ("Argentina", "America del Sur", "5.50"),
            ("Mexico", "America del Norte", "7.25"),
        ] {
            sqlx::query("INSERT INTO pais (nombre, region, tarifa) VALUES ($1, $2, $3::numeric)")
                .bind(nombre)
                .bind(region)
                .bind(tarifa)
                .execute(&pool)
                .await
                .expect("insert failed");
        }

        let filas = PaisRepo::new(&pool).list().await.expect("list failed");

        let nombres: Vec<&str> = filas.iter().map(|p| p.nombre.as_str()).collect();
        assert_eq!(nombres, ["Argentina", "Mexico", "Uruguay"]);
    }
}
