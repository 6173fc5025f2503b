//! Integration tests for the admin user CRUD flows.
//!
//! Run with: `cargo test -p califica-api-users -- --ignored`
//! (requires `DATABASE_URL` pointing at a disposable Postgres database).

mod common;

use califica_api_users::models::{
    ActualizarUsuarioRequest, CrearUsuarioRequest, ListarUsuariosQuery,
};
use califica_api_users::{ApiUsersError, UsuarioService};
use califica_core::Rol;
use common::*;

fn crear_request(email: String, rol: &str) -> CrearUsuarioRequest {
    CrearUsuarioRequest {
        nombre: "Carla Prueba".to_string(),
        email,
        password: "clave-segura".to_string(),
        rol: rol.to_string(),
    }
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn crear_usuario_normaliza_email_y_registra_log() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_id = insertar_usuario(&pool, Rol::Administrador, &unique_email("admin")).await;
    let admin = claims_de(admin_id, "Admin", "admin@example.com", Rol::Administrador);

    let local = format!("carla-{}", uuid::Uuid::new_v4());
    let request = crear_request(format!("{local}@EXAMPLE.COM"), "Corredor");

    let usuario = service.crear(&admin, &request).await.unwrap();
    assert_eq!(usuario.email, format!("{local}@example.com"));
    assert_eq!(usuario.rol, "Corredor");
    assert!(usuario.is_active);
    assert!(!usuario.is_staff);
    assert!(usuario.password_hash.starts_with("$argon2id$"));

    assert_eq!(
        contar_logs(&pool, "Creación de Usuario", &usuario.email).await,
        1
    );
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn email_duplicado_es_conflicto() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_id = insertar_usuario(&pool, Rol::Administrador, &unique_email("admin")).await;
    let admin = claims_de(admin_id, "Admin", "admin@example.com", Rol::Administrador);

    let email = unique_email("repetido");
    service
        .crear(&admin, &crear_request(email.clone(), "Auditor"))
        .await
        .unwrap();

    let resultado = service.crear(&admin, &crear_request(email, "Corredor")).await;
    assert!(matches!(resultado, Err(ApiUsersError::EmailConflicto)));
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn editar_sin_password_conserva_el_hash() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_id = insertar_usuario(&pool, Rol::Administrador, &unique_email("admin")).await;
    let admin = claims_de(admin_id, "Admin", "admin@example.com", Rol::Administrador);

    let usuario = service
        .crear(&admin, &crear_request(unique_email("edita"), "Corredor"))
        .await
        .unwrap();

    let sin_password = ActualizarUsuarioRequest {
        nombre: "Nuevo Nombre".to_string(),
        email: usuario.email.clone(),
        rol: "Auditor".to_string(),
        password: None,
    };
    let editado = service.editar(&admin, usuario.id, &sin_password).await.unwrap();
    assert_eq!(editado.nombre, "Nuevo Nombre");
    assert_eq!(editado.rol, "Auditor");
    assert_eq!(editado.password_hash, usuario.password_hash);

    let con_password = ActualizarUsuarioRequest {
        nombre: "Nuevo Nombre".to_string(),
        email: usuario.email.clone(),
        rol: "Auditor".to_string(),
        password: Some("otra-clave".to_string()),
    };
    let rehasheado = service.editar(&admin, usuario.id, &con_password).await.unwrap();
    assert_ne!(rehasheado.password_hash, usuario.password_hash);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn password_vacia_en_edicion_tambien_conserva_el_hash() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_id = insertar_usuario(&pool, Rol::Administrador, &unique_email("admin")).await;
    let admin = claims_de(admin_id, "Admin", "admin@example.com", Rol::Administrador);

    let usuario = service
        .crear(&admin, &crear_request(unique_email("vacia"), "Corredor"))
        .await
        .unwrap();

    let request = ActualizarUsuarioRequest {
        nombre: usuario.nombre.clone(),
        email: usuario.email.clone(),
        rol: "Corredor".to_string(),
        password: Some(String::new()),
    };
    let editado = service.editar(&admin, usuario.id, &request).await.unwrap();
    assert_eq!(editado.password_hash, usuario.password_hash);
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn auto_eliminacion_es_rechazada_y_la_fila_sigue() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_email = unique_email("admin");
    let admin_id = insertar_usuario(&pool, Rol::Administrador, &admin_email).await;
    let admin = claims_de(admin_id, "Admin", &admin_email, Rol::Administrador);

    let resultado = service.eliminar(&admin, admin_id).await;
    assert!(matches!(resultado, Err(ApiUsersError::AutoEliminacion)));

    let sigue = califica_db::Usuario::find_by_id(&pool, admin_id).await.unwrap();
    assert!(sigue.is_some(), "self-deletion must leave the row intact");
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn eliminar_otro_usuario_borra_y_registra_log() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_id = insertar_usuario(&pool, Rol::Administrador, &unique_email("admin")).await;
    let admin = claims_de(admin_id, "Admin", "admin@example.com", Rol::Administrador);

    let victima = service
        .crear(&admin, &crear_request(unique_email("victima"), "Corredor"))
        .await
        .unwrap();

    service.eliminar(&admin, victima.id).await.unwrap();

    let borrado = califica_db::Usuario::find_by_id(&pool, victima.id).await.unwrap();
    assert!(borrado.is_none());
    assert_eq!(
        contar_logs(&pool, "Eliminación de Usuario", &victima.id.to_string()).await,
        1
    );
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn listado_filtra_por_rol_y_texto() {
    let pool = create_test_pool().await;
    let service = UsuarioService::new(pool.clone());

    let admin_id = insertar_usuario(&pool, Rol::Administrador, &unique_email("admin")).await;
    let admin = claims_de(admin_id, "Admin", "admin@example.com", Rol::Administrador);

    let marca = uuid::Uuid::new_v4().simple().to_string();
    let email_corredor = format!("corredor-{marca}@example.com");
    service
        .crear(&admin, &crear_request(email_corredor.clone(), "Corredor"))
        .await
        .unwrap();
    service
        .crear(
            &admin,
            &crear_request(format!("auditor-{marca}@example.com"), "Auditor"),
        )
        .await
        .unwrap();

    let solo_corredores = service
        .listar(&ListarUsuariosQuery {
            rol: Some("Corredor".to_string()),
            q: Some(marca.clone()),
        })
        .await
        .unwrap();
    assert_eq!(solo_corredores.len(), 1);
    assert_eq!(solo_corredores[0].email, email_corredor);

    let todos = service
        .listar(&ListarUsuariosQuery {
            rol: Some("Todos".to_string()),
            q: Some(marca),
        })
        .await
        .unwrap();
    assert_eq!(todos.len(), 2);

    let desconocido = service
        .listar(&ListarUsuariosQuery {
            rol: Some("SinRol".to_string()),
            q: None,
        })
        .await;
    assert!(matches!(desconocido, Err(ApiUsersError::Validacion(_))));
}
