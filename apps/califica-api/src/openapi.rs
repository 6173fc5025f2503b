//! OpenAPI document aggregation and Swagger UI.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// Adds the bearer-token security scheme referenced by the handlers.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// The aggregated API document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Califica API",
        description = "Gestión de calificaciones tributarias con control de acceso por rol"
    ),
    paths(
        crate::public::bienvenida_handler,
        crate::public::formato_archivo_handler,
        crate::health::health_handler,
        califica_api_auth::handlers::login::login_handler,
        califica_api_auth::handlers::logout::logout_handler,
        califica_api_auth::handlers::notificaciones::listar_notificaciones_handler,
        califica_api_auth::handlers::notificaciones::marcar_leida_handler,
        califica_api_users::handlers::list::listar_usuarios_handler,
        califica_api_users::handlers::roles::listar_roles_handler,
        califica_api_users::handlers::create::crear_usuario_handler,
        califica_api_users::handlers::update::editar_usuario_handler,
        califica_api_users::handlers::delete::eliminar_usuario_handler,
        califica_api_calificaciones::handlers::crear::crear_calificacion_handler,
        califica_api_calificaciones::handlers::factores::ver_factores_handler,
        califica_api_calificaciones::handlers::factores::editar_factores_handler,
        califica_api_calificaciones::handlers::revisar::ver_revision_handler,
        califica_api_calificaciones::handlers::revisar::revisar_calificacion_handler,
        califica_api_calificaciones::handlers::paneles::panel_corredor_handler,
        califica_api_calificaciones::handlers::paneles::panel_auditor_handler,
        califica_api_reportes::handlers::reportes::panel_reportes_handler,
        califica_api_reportes::handlers::reportes::reporte_calificaciones_handler,
        califica_api_reportes::handlers::reportes::reporte_logs_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Público", description = "Páginas informativas"),
        (name = "Autenticación", description = "Sesiones y notificaciones"),
        (name = "Usuarios", description = "Gestión de usuarios (Administrador)"),
        (name = "Calificaciones", description = "Ciclo de vida de calificaciones"),
        (name = "Reportes", description = "Exportes CSV (Auditor)"),
        (name = "Sistema", description = "Salud del servicio"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, JSON document at `/api-docs/openapi.json`.
pub fn swagger_routes() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
