//! Factor rows — the 29 weighting values attached to every calificacion.

use califica_core::FactorSet;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgExecutor};
use uuid::Uuid;

/// One weighting factor of a calificacion.
#[derive(Debug, Clone, FromRow)]
pub struct Factor {
    pub id: Uuid,
    pub calificacion: Uuid,
    /// Catalog name ("Factor 8" .. "Factor 37").
    pub nombre: String,
    /// NUMERIC(8,4).
    pub valor: Decimal,
}

impl Factor {
    /// Insert the complete factor set for a freshly created calificacion in
    /// one statement. Runs inside the creation transaction.
    pub async fn insertar_set<'e, E>(
        executor: E,
        calificacion: Uuid,
        set: &FactorSet,
    ) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (nombres, valores): (Vec<String>, Vec<Decimal>) = set
            .iter()
            .map(|(nombre, valor)| (nombre.to_string(), valor))
            .unzip();

        sqlx::query(
            r"
            INSERT INTO factores (calificacion, nombre, valor)
            SELECT $1, nombre, valor
            FROM UNNEST($2::text[], $3::numeric[]) AS t (nombre, valor)
            ",
        )
        .bind(calificacion)
        .bind(&nombres)
        .bind(&valores)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// The factors of one calificacion, ordered by name as the panels
    /// render them.
    pub async fn listar_por_calificacion<'e, E>(
        executor: E,
        calificacion: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            "SELECT id, calificacion, nombre, valor FROM factores \
             WHERE calificacion = $1 ORDER BY nombre",
        )
        .bind(calificacion)
        .fetch_all(executor)
        .await
    }

    /// Apply value updates to factor rows by id, scoped to the owning
    /// calificacion. The ids come from rows this service just loaded, never
    /// from the client.
    pub async fn actualizar_valores(
        conn: &mut PgConnection,
        calificacion: Uuid,
        cambios: &[(Uuid, Decimal)],
    ) -> Result<(), sqlx::Error> {
        for (id, valor) in cambios {
            sqlx::query("UPDATE factores SET valor = $3 WHERE id = $1 AND calificacion = $2")
                .bind(id)
                .bind(calificacion)
                .bind(valor)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }
}
