pub mod create;
pub mod delete;
pub mod list;
pub mod roles;
pub mod update;

pub use create::crear_usuario_handler;
pub use delete::eliminar_usuario_handler;
pub use list::listar_usuarios_handler;
pub use roles::listar_roles_handler;
pub use update::editar_usuario_handler;
