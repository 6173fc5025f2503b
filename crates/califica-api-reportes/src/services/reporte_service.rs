//! CSV report generation.
//!
//! The row-to-record functions are pure so the exact CSV shape is testable
//! without a database; the service wraps them with the queries and the
//! report-generated log entry, appended only after the body is complete.

use crate::error::ApiReportesError;
use califica_auth::SessionClaims;
use califica_db::{Calificacion, CalificacionConCreador, LogAccion, LogConUsuario, LogEntry};
use sqlx::PgPool;

/// Timestamp format shared by both reports.
const FECHA_FORMATO: &str = "%Y-%m-%d %H:%M:%S";

/// Column headers of the ratings report, in order.
pub const COLUMNAS_CALIFICACIONES: [&str; 9] = [
    "ID Calificacion",
    "Instrumento",
    "Mercado",
    "Valor Historico",
    "Años",
    "Estado",
    "Fecha Creacion",
    "Usuario Creador",
    "Email Creador",
];

/// Column headers of the activity-log report, in order.
pub const COLUMNAS_LOGS: [&str; 6] = [
    "ID Log",
    "Fecha y Hora",
    "Accion",
    "Usuario ID",
    "Usuario Email",
    "Detalle del Cambio",
];

/// Render the ratings report body.
pub fn csv_calificaciones(
    filas: &[CalificacionConCreador],
) -> Result<String, ApiReportesError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(COLUMNAS_CALIFICACIONES)
        .map_err(|e| ApiReportesError::Csv(e.to_string()))?;

    for fila in filas {
        writer
            .write_record([
                fila.id.to_string(),
                fila.instrumento.clone(),
                fila.mercado.clone(),
                fila.valor_historico.to_string(),
                fila.anio.to_string(),
                fila.estado.clone(),
                fila.fecha_creacion.format(FECHA_FORMATO).to_string(),
                fila.creador_nombre.clone(),
                fila.creador_email.clone(),
            ])
            .map_err(|e| ApiReportesError::Csv(e.to_string()))?;
    }

    terminar(writer)
}

/// Render the activity-log report body. A deleted actor renders as
/// "N/A"/"Sistema"; embedded line breaks in the detail collapse to spaces.
pub fn csv_logs(filas: &[LogConUsuario]) -> Result<String, ApiReportesError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(COLUMNAS_LOGS)
        .map_err(|e| ApiReportesError::Csv(e.to_string()))?;

    for fila in filas {
        let usuario_id = fila
            .usuario_id
            .map_or_else(|| "N/A".to_string(), |id| id.to_string());
        let usuario_email = fila
            .usuario_email
            .clone()
            .unwrap_or_else(|| "Sistema".to_string());

        writer
            .write_record([
                fila.id.to_string(),
                fila.fecha_hora.format(FECHA_FORMATO).to_string(),
                fila.accion.clone(),
                usuario_id,
                usuario_email,
                fila.detalle_cambio.replace(['\n', '\r'], " "),
            ])
            .map_err(|e| ApiReportesError::Csv(e.to_string()))?;
    }

    terminar(writer)
}

fn terminar(writer: csv::Writer<Vec<u8>>) -> Result<String, ApiReportesError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ApiReportesError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ApiReportesError::Csv(e.to_string()))
}

/// Report export service.
pub struct ReporteService {
    pool: PgPool,
}

impl ReporteService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The ratings CSV: full table scan, newest first.
    pub async fn reporte_calificaciones(
        &self,
        claims: &SessionClaims,
    ) -> Result<String, ApiReportesError> {
        let filas = Calificacion::listar_con_creador(&self.pool, None).await?;
        let cuerpo = csv_calificaciones(&filas)?;

        LogEntry::registrar(
            &self.pool,
            Some(claims.sub.as_uuid()),
            LogAccion::GeneracionReporte,
            "Auditor generó el Reporte CSV de Calificaciones.".to_string(),
        )
        .await?;

        tracing::info!(filas = filas.len(), auditor = %claims.email,
            "Reporte de calificaciones generado");
        Ok(cuerpo)
    }

    /// The activity-log CSV: full trail, newest first.
    pub async fn reporte_logs(&self, claims: &SessionClaims) -> Result<String, ApiReportesError> {
        let filas = LogEntry::listar_para_reporte(&self.pool).await?;
        let cuerpo = csv_logs(&filas)?;

        LogEntry::registrar(
            &self.pool,
            Some(claims.sub.as_uuid()),
            LogAccion::GeneracionReporte,
            "Auditor generó el Reporte CSV de Logs de Actividad.".to_string(),
        )
        .await?;

        tracing::info!(filas = filas.len(), auditor = %claims.email,
            "Reporte de logs generado");
        Ok(cuerpo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn fila_calificacion(instrumento: &str) -> CalificacionConCreador {
        CalificacionConCreador {
            id: Uuid::new_v4(),
            instrumento: instrumento.to_string(),
            mercado: "US".to_string(),
            valor_historico: Decimal::new(105_225_000_000, 8),
            anio: 2024,
            estado: "Pendiente".to_string(),
            fecha_creacion: Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap(),
            creador_nombre: "Beto Corredor".to_string(),
            creador_email: "b@x.com".to_string(),
        }
    }

    #[test]
    fn calificaciones_n_filas_mas_encabezado() {
        let filas = vec![fila_calificacion("BOND1"), fila_calificacion("BOND2")];
        let csv = csv_calificaciones(&filas).unwrap();
        let lineas: Vec<&str> = csv.lines().collect();
        assert_eq!(lineas.len(), 3);
        assert_eq!(
            lineas[0],
            "ID Calificacion,Instrumento,Mercado,Valor Historico,Años,Estado,\
             Fecha Creacion,Usuario Creador,Email Creador"
        );
        assert!(lineas[1].contains("BOND1"));
        assert!(lineas[1].contains("2024-03-15 14:30:05"));
        assert!(lineas[1].contains("1052.25000000"));
    }

    #[test]
    fn logs_sin_actor_rinden_na_y_sistema() {
        let filas = vec![LogConUsuario {
            id: Uuid::new_v4(),
            fecha_hora: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            accion: "Generación de Reporte".to_string(),
            usuario_id: None,
            usuario_nombre: None,
            usuario_email: None,
            detalle_cambio: "línea uno\nlínea dos\rfin".to_string(),
        }];
        let csv = csv_logs(&filas).unwrap();
        let lineas: Vec<&str> = csv.lines().collect();
        assert_eq!(lineas.len(), 2);
        assert_eq!(
            lineas[0],
            "ID Log,Fecha y Hora,Accion,Usuario ID,Usuario Email,Detalle del Cambio"
        );
        assert!(lineas[1].contains("N/A"));
        assert!(lineas[1].contains("Sistema"));
        assert!(lineas[1].contains("línea uno línea dos fin"));
        assert!(lineas[1].contains("2024-01-02 03:04:05"));
    }

    #[test]
    fn tabla_vacia_es_solo_el_encabezado() {
        let csv = csv_calificaciones(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
