//! Email normalization.

/// Normalize an email the way the user factory stores it: the local part
/// untouched, the domain lowercased.
#[must_use]
pub fn normalizar_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, dominio)) => format!("{local}@{}", dominio.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_el_dominio_se_normaliza() {
        assert_eq!(normalizar_email("Ana.Perez@EXAMPLE.COM"), "Ana.Perez@example.com");
        assert_eq!(normalizar_email("ana@example.com"), "ana@example.com");
    }

    #[test]
    fn sin_arroba_queda_igual() {
        assert_eq!(normalizar_email("sin-arroba"), "sin-arroba");
    }

    #[test]
    fn usa_la_ultima_arroba() {
        assert_eq!(normalizar_email("raro@local@DOM.AR"), "raro@local@dom.ar");
    }
}
