//! Integration tests for the rating lifecycle: atomic creation, ownership
//! scoping, factor edits and the review state machine.
//!
//! Run with: `cargo test -p califica-api-calificaciones -- --ignored`
//! (requires `DATABASE_URL` pointing at a disposable Postgres database).

mod common;

use califica_api_calificaciones::models::{EditarFactoresRequest, FactorValor};
use califica_api_calificaciones::{ApiCalificacionesError, CalificacionService, RevisionPolicy};
use califica_core::{Rol, NOMBRES_FACTORES};
use common::*;
use rust_decimal::Decimal;

fn service(pool: &sqlx::PgPool) -> CalificacionService {
    CalificacionService::new(pool.clone(), RevisionPolicy::default())
}

fn factores_completos(valor: Decimal) -> Vec<FactorValor> {
    NOMBRES_FACTORES
        .iter()
        .map(|n| FactorValor {
            nombre: (*n).to_string(),
            valor,
        })
        .collect()
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn crear_produce_29_factores_en_cero_estado_pendiente_origen_manual() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;

    let (calificacion, factores) = service
        .crear(&corredor, &request_basica("BOND1"))
        .await
        .unwrap();

    assert_eq!(calificacion.estado, "Pendiente");
    assert_eq!(calificacion.origen, "Manual");
    assert_eq!(calificacion.usuario_creador, corredor.sub.as_uuid());
    assert_eq!(factores.len(), 29);

    let mut nombres: Vec<&str> = factores.iter().map(|f| f.nombre.as_str()).collect();
    nombres.sort_unstable();
    let mut esperados: Vec<&str> = NOMBRES_FACTORES.to_vec();
    esperados.sort_unstable();
    assert_eq!(nombres, esperados);
    assert!(factores.iter().all(|f| f.valor == Decimal::ZERO));

    assert_eq!(
        contar_logs(&pool, "Creación de Calificación", &calificacion.id.to_string()).await,
        1
    );
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn factores_invalidos_no_persisten_nada() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;

    let mut request = request_basica("BOND2");
    let mut factores = factores_completos(Decimal::ZERO);
    factores[5].nombre = "Factor 99".to_string();
    request.factores = Some(factores);

    let resultado = service.crear(&corredor, &request).await;
    assert!(matches!(
        resultado,
        Err(ApiCalificacionesError::Validacion(_))
    ));
    assert_eq!(
        contar_calificaciones_de(&pool, corredor.sub.as_uuid()).await,
        0
    );

    let mut corto = request_basica("BOND2B");
    corto.factores = Some(factores_completos(Decimal::ZERO)[..10].to_vec());
    assert!(matches!(
        service.crear(&corredor, &corto).await,
        Err(ApiCalificacionesError::Validacion(_))
    ));
    assert_eq!(
        contar_calificaciones_de(&pool, corredor.sub.as_uuid()).await,
        0
    );
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn factores_enviados_se_persisten_con_su_valor() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;

    let mut request = request_basica("BOND3");
    request.factores = Some(factores_completos(Decimal::new(125, 3)));

    let (_, factores) = service.crear(&corredor, &request).await.unwrap();
    assert_eq!(factores.len(), 29);
    assert!(factores.iter().all(|f| f.valor == Decimal::new(125, 3)));
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn otro_corredor_ve_no_encontrado() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let duenio = usuario_con_claims(&pool, Rol::Corredor, "Duenio").await;
    let intruso = usuario_con_claims(&pool, Rol::Corredor, "Intruso").await;

    let (calificacion, _) = service.crear(&duenio, &request_basica("BOND4")).await.unwrap();

    let resultado = service.detalle_propio(&intruso, calificacion.id).await;
    assert!(matches!(
        resultado,
        Err(ApiCalificacionesError::NoEncontrado)
    ));

    let edicion = service
        .editar_factores(
            &intruso,
            calificacion.id,
            &EditarFactoresRequest {
                factores: factores_completos(Decimal::ONE),
            },
        )
        .await;
    assert!(matches!(edicion, Err(ApiCalificacionesError::NoEncontrado)));
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn editar_factores_actualiza_valores_y_registra_log() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;

    let (calificacion, _) = service.crear(&corredor, &request_basica("BOND5")).await.unwrap();

    let nuevos = service
        .editar_factores(
            &corredor,
            calificacion.id,
            &EditarFactoresRequest {
                factores: factores_completos(Decimal::new(25, 1)),
            },
        )
        .await
        .unwrap();

    assert_eq!(nuevos.len(), 29);
    assert!(nuevos.iter().all(|f| f.valor == Decimal::new(25, 1)));
    assert_eq!(
        contar_logs(&pool, "Edición de Factores", &calificacion.id.to_string()).await,
        1
    );
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn decision_invalida_no_cambia_el_estado() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;
    let auditor = usuario_con_claims(&pool, Rol::Auditor, "Alba Auditora").await;

    let (calificacion, _) = service.crear(&corredor, &request_basica("BOND6")).await.unwrap();

    for invalido in ["Anulada", "Pendiente", "aprobada", ""] {
        let resultado = service.decidir(&auditor, calificacion.id, invalido).await;
        assert!(matches!(
            resultado,
            Err(ApiCalificacionesError::EstadoInvalido)
        ));
    }

    let (actual, _) = service.detalle_para_revision(calificacion.id).await.unwrap();
    assert_eq!(actual.estado, "Pendiente");
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn aprobar_cambia_estado_registra_log_y_notifica() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;
    let auditor = usuario_con_claims(&pool, Rol::Auditor, "Alba Auditora").await;

    let (calificacion, _) = service.crear(&corredor, &request_basica("BOND7")).await.unwrap();

    let aprobada = service
        .decidir(&auditor, calificacion.id, "Aprobada")
        .await
        .unwrap();
    assert_eq!(aprobada.estado, "Aprobada");

    // Exactly one review log row naming auditor, instrument, id and status.
    assert_eq!(
        contar_logs(
            &pool,
            "Revisión de Calificación (Aprobada)",
            &calificacion.id.to_string()
        )
        .await,
        1
    );
    assert_eq!(
        contar_logs(&pool, "Revisión de Calificación (Aprobada)", "BOND7").await,
        1
    );
    assert_eq!(
        contar_logs(&pool, "Revisión de Calificación (Aprobada)", "Alba Auditora").await,
        1
    );

    let notificaciones: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM notificaciones WHERE usuario = $1")
            .bind(corredor.sub.as_uuid())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(notificaciones, 1);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn estado_terminal_bloquea_re_revision_por_defecto() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;
    let auditor = usuario_con_claims(&pool, Rol::Auditor, "Alba Auditora").await;

    let (calificacion, _) = service.crear(&corredor, &request_basica("BOND8")).await.unwrap();
    service
        .decidir(&auditor, calificacion.id, "Rechazada")
        .await
        .unwrap();

    let reintento = service.decidir(&auditor, calificacion.id, "Aprobada").await;
    assert!(matches!(
        reintento,
        Err(ApiCalificacionesError::ReRevisionNoPermitida)
    ));
    let (actual, _) = service.detalle_para_revision(calificacion.id).await.unwrap();
    assert_eq!(actual.estado, "Rechazada");

    // With the flag on, the correction applies.
    let permisivo = CalificacionService::new(
        pool.clone(),
        RevisionPolicy {
            permitir_re_revision: true,
        },
    );
    let corregida = permisivo
        .decidir(&auditor, calificacion.id, "Aprobada")
        .await
        .unwrap();
    assert_eq!(corregida.estado, "Aprobada");
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn calificacion_revisada_no_admite_edicion_de_factores() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;
    let auditor = usuario_con_claims(&pool, Rol::Auditor, "Alba Auditora").await;

    let (calificacion, _) = service.crear(&corredor, &request_basica("BOND9")).await.unwrap();
    service
        .decidir(&auditor, calificacion.id, "Aprobada")
        .await
        .unwrap();

    let resultado = service
        .editar_factores(
            &corredor,
            calificacion.id,
            &EditarFactoresRequest {
                factores: factores_completos(Decimal::ONE),
            },
        )
        .await;
    assert!(matches!(resultado, Err(ApiCalificacionesError::NoEditable)));
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn paneles_listan_lo_que_corresponde() {
    let pool = create_test_pool().await;
    let service = service(&pool);
    let corredor = usuario_con_claims(&pool, Rol::Corredor, "Beto Corredor").await;
    let otro = usuario_con_claims(&pool, Rol::Corredor, "Otra Corredora").await;

    service.crear(&corredor, &request_basica("PROPIA1")).await.unwrap();
    service.crear(&corredor, &request_basica("PROPIA2")).await.unwrap();
    service.crear(&otro, &request_basica("AJENA")).await.unwrap();

    let propias = service.panel_corredor(&corredor, None).await.unwrap();
    assert_eq!(propias.len(), 2);
    assert!(propias.iter().all(|c| c.usuario_creador == corredor.sub.as_uuid()));

    let filtradas = service.panel_corredor(&corredor, Some("PROPIA1")).await.unwrap();
    assert_eq!(filtradas.len(), 1);

    let (todas, logs) = service.panel_auditor(Some("Beto Corredor")).await.unwrap();
    assert!(todas.len() >= 2);
    assert!(todas.iter().all(|c| c.creador_nombre == "Beto Corredor"));
    assert!(!logs.is_empty());
}
