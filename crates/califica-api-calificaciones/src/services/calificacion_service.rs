//! Rating lifecycle service.
//!
//! Creation inserts the rating, its 29 factors and the log entry in one
//! transaction; a reader never sees a partially populated rating. Factor
//! edits and review decisions follow the same write-plus-log transaction
//! shape.

use crate::error::ApiCalificacionesError;
use crate::models::{CrearCalificacionRequest, EditarFactoresRequest, FactorValor};
use califica_auth::SessionClaims;
use califica_core::{Estado, FactorSet};
use califica_db::{
    Calificacion, CalificacionConCreador, Factor, LogAccion, LogConUsuario, LogEntry,
    NuevaCalificacion, Notificacion,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// NUMERIC(8,4) admits absolute values below 10_000.
const FACTOR_MAX_ABS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// How many log rows the auditor panel shows.
const PANEL_LOGS: i64 = 100;

/// Review policy: whether a terminal status may be decided again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevisionPolicy {
    /// Allow re-deciding an already Aprobada/Rechazada rating. Off by
    /// default: terminal means terminal.
    pub permitir_re_revision: bool,
}

/// Rating lifecycle service.
pub struct CalificacionService {
    pool: PgPool,
    policy: RevisionPolicy,
}

impl CalificacionService {
    #[must_use]
    pub fn new(pool: PgPool, policy: RevisionPolicy) -> Self {
        Self { pool, policy }
    }

    fn factor_set_de(
        factores: Option<&[FactorValor]>,
    ) -> Result<FactorSet, ApiCalificacionesError> {
        let Some(factores) = factores else {
            return Ok(FactorSet::zeroed());
        };

        let set = FactorSet::from_pairs(
            factores
                .iter()
                .map(|f| (f.nombre.clone(), f.valor)),
        )
        .map_err(|e| ApiCalificacionesError::Validacion(e.to_string()))?;

        for (nombre, valor) in set.iter() {
            if valor.abs() >= FACTOR_MAX_ABS {
                return Err(ApiCalificacionesError::Validacion(format!(
                    "Valor fuera de rango para {nombre}: {valor}"
                )));
            }
        }
        Ok(set)
    }

    /// Create a rating with its complete factor set.
    ///
    /// Validation failures persist nothing. A storage failure inside the
    /// transaction rolls everything back and surfaces as the generic
    /// [`ApiCalificacionesError::ErrorAlGuardar`].
    pub async fn crear(
        &self,
        claims: &SessionClaims,
        request: &CrearCalificacionRequest,
    ) -> Result<(Calificacion, Vec<Factor>), ApiCalificacionesError> {
        let set = Self::factor_set_de(request.factores.as_deref())?;

        let nueva = NuevaCalificacion {
            mercado: request.mercado.clone(),
            instrumento: request.instrumento.clone(),
            evento_capital: request.evento_capital.clone(),
            descripcion: request.descripcion.clone(),
            valor_historico: request.valor_historico,
            secuencia_evento: request.secuencia_evento,
            anio: request.anio,
            fecha_pago: request.fecha_pago,
        };

        let creada = self
            .crear_tx(&nueva, &set, claims)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, instrumento = %nueva.instrumento,
                    "Fallo al guardar la calificación; transacción revertida");
                ApiCalificacionesError::ErrorAlGuardar
            })?;

        let factores = Factor::listar_por_calificacion(&self.pool, creada.id).await?;

        tracing::info!(id = %creada.id, instrumento = %creada.instrumento,
            "Calificación creada");
        Ok((creada, factores))
    }

    async fn crear_tx(
        &self,
        nueva: &NuevaCalificacion,
        set: &FactorSet,
        claims: &SessionClaims,
    ) -> Result<Calificacion, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let creada = Calificacion::insertar(&mut *tx, nueva, claims.sub.as_uuid()).await?;
        Factor::insertar_set(&mut *tx, creada.id, set).await?;
        LogEntry::registrar(
            &mut *tx,
            Some(claims.sub.as_uuid()),
            LogAccion::CreacionCalificacion,
            format!(
                "Corredor creó la calificación: {} ({}).",
                creada.instrumento, creada.id
            ),
        )
        .await?;

        tx.commit().await?;
        Ok(creada)
    }

    /// A rating with its factors, scoped to the owning corredor. Ownership
    /// mismatches read as not-found.
    pub async fn detalle_propio(
        &self,
        claims: &SessionClaims,
        id: Uuid,
    ) -> Result<(Calificacion, Vec<Factor>), ApiCalificacionesError> {
        let calificacion =
            Calificacion::find_by_id_y_creador(&self.pool, id, claims.sub.as_uuid())
                .await?
                .ok_or(ApiCalificacionesError::NoEncontrado)?;
        let factores = Factor::listar_por_calificacion(&self.pool, id).await?;
        Ok((calificacion, factores))
    }

    /// Update the factor values of an own, still pending rating.
    ///
    /// The request must cover the full catalog; the rows to update are
    /// re-derived from storage by name, so client-supplied identifiers are
    /// never trusted.
    pub async fn editar_factores(
        &self,
        claims: &SessionClaims,
        id: Uuid,
        request: &EditarFactoresRequest,
    ) -> Result<Vec<Factor>, ApiCalificacionesError> {
        let calificacion =
            Calificacion::find_by_id_y_creador(&self.pool, id, claims.sub.as_uuid())
                .await?
                .ok_or(ApiCalificacionesError::NoEncontrado)?;

        if calificacion.estado_enum() != Some(Estado::Pendiente) {
            return Err(ApiCalificacionesError::NoEditable);
        }

        let set = Self::factor_set_de(Some(request.factores.as_slice()))?;

        let filas = Factor::listar_por_calificacion(&self.pool, id).await?;
        let cambios: Vec<(Uuid, Decimal)> = filas
            .iter()
            .map(|fila| {
                califica_core::factores::indice_de(&fila.nombre)
                    .map(|idx| (fila.id, set.valor(idx)))
                    .ok_or_else(|| {
                        ApiCalificacionesError::Interno(format!(
                            "factor fuera de catálogo en almacenamiento: {}",
                            fila.nombre
                        ))
                    })
            })
            .collect::<Result<_, _>>()?;

        let mut tx = self.pool.begin().await?;
        Factor::actualizar_valores(&mut tx, id, &cambios)
            .await?;
        LogEntry::registrar(
            &mut *tx,
            Some(claims.sub.as_uuid()),
            LogAccion::EdicionFactores,
            format!(
                "Corredor editó los factores de la calificación: {} ({id}).",
                calificacion.instrumento
            ),
        )
        .await?;
        tx.commit().await?;

        Ok(Factor::listar_por_calificacion(&self.pool, id).await?)
    }

    /// A rating with its factors, unscoped — any auditor may review any
    /// rating.
    pub async fn detalle_para_revision(
        &self,
        id: Uuid,
    ) -> Result<(Calificacion, Vec<Factor>), ApiCalificacionesError> {
        let calificacion = Calificacion::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiCalificacionesError::NoEncontrado)?;
        let factores = Factor::listar_por_calificacion(&self.pool, id).await?;
        Ok((calificacion, factores))
    }

    /// Apply an auditor decision.
    ///
    /// `nuevo_estado` must be Aprobada or Rechazada; any other token is
    /// rejected with no state change. An already resolved rating is only
    /// re-decidable when the policy allows it.
    pub async fn decidir(
        &self,
        claims: &SessionClaims,
        id: Uuid,
        nuevo_estado: &str,
    ) -> Result<Calificacion, ApiCalificacionesError> {
        let decision: Estado = nuevo_estado
            .parse()
            .ok()
            .filter(Estado::is_decision)
            .ok_or(ApiCalificacionesError::EstadoInvalido)?;

        let actual = Calificacion::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiCalificacionesError::NoEncontrado)?;

        let estado_actual = actual.estado_enum().ok_or_else(|| {
            ApiCalificacionesError::Interno(format!("estado fuera de catálogo: {}", actual.estado))
        })?;
        if estado_actual.is_terminal() && !self.policy.permitir_re_revision {
            return Err(ApiCalificacionesError::ReRevisionNoPermitida);
        }

        let mut tx = self.pool.begin().await?;

        let actualizada = Calificacion::actualizar_estado(&mut *tx, id, decision)
            .await?
            .ok_or(ApiCalificacionesError::NoEncontrado)?;

        LogEntry::registrar(
            &mut *tx,
            Some(claims.sub.as_uuid()),
            LogAccion::Revision(decision),
            format!(
                "Auditor {} cambió el estado de {} ({id}) a {decision}.",
                claims.nombre, actualizada.instrumento
            ),
        )
        .await?;

        Notificacion::crear(
            &mut *tx,
            actualizada.usuario_creador,
            "Revisión",
            format!(
                "La calificación {} ({id}) fue marcada como {decision}.",
                actualizada.instrumento
            ),
        )
        .await?;

        tx.commit().await?;

        tracing::info!(id = %id, decision = %decision, auditor = %claims.email,
            "Calificación revisada");
        Ok(actualizada)
    }

    /// The corredor panel: own ratings, newest first.
    pub async fn panel_corredor(
        &self,
        claims: &SessionClaims,
        q: Option<&str>,
    ) -> Result<Vec<Calificacion>, ApiCalificacionesError> {
        Ok(Calificacion::listar_por_creador(&self.pool, claims.sub.as_uuid(), q).await?)
    }

    /// The auditor panel: every rating with its creator plus the recent
    /// activity trail.
    pub async fn panel_auditor(
        &self,
        q: Option<&str>,
    ) -> Result<(Vec<CalificacionConCreador>, Vec<LogConUsuario>), ApiCalificacionesError> {
        let calificaciones = Calificacion::listar_con_creador(&self.pool, q).await?;
        let logs = LogEntry::listar_recientes(&self.pool, q, PANEL_LOGS).await?;
        Ok((calificaciones, logs))
    }
}
