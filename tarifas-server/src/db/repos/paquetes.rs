//! Package repository
//!
//! Insert-only: packages are created through the API and never updated
//! or deleted by it.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::NuevoPaquete;

/// Package repository
pub struct PaqueteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PaqueteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one package, returning the generated id in the same round
    /// trip. Foreign keys are not checked here; a violation surfaces as
    /// a store error.
    pub async fn create(&self, paquete: NuevoPaquete) -> Result<i32, DbError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO detalle_paquete
                (peso, ancho, alto, largo, id_pais_origen, id_pais_destino, id_cliente, total)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_paquete
            "#,
        )
        .bind(paquete.peso.into_inner())
        .bind(paquete.ancho.into_inner())
        .bind(paquete.alto.into_inner())
        .bind(paquete.largo.into_inner())
        .bind(paquete.id_pais_origen)
        .bind(paquete.id_pais_destino)
        .bind(paquete.id_cliente)
        .bind(paquete.total.into_inner())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
