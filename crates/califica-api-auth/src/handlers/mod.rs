pub mod login;
pub mod logout;
pub mod notificaciones;

pub use login::login_handler;
pub use logout::logout_handler;
pub use notificaciones::{listar_notificaciones_handler, marcar_leida_handler};
