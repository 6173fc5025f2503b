//! One module per table.

pub mod calificacion;
pub mod factor;
pub mod log;
pub mod notificacion;
pub mod rol;
pub mod usuario;

/// Escape LIKE metacharacters in user-supplied filter text.
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_neutraliza_comodines() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
    }
}
