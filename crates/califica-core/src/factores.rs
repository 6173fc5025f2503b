//! The fixed factor catalog and its value object.
//!
//! Every calificacion carries exactly 29 weighting factors, named
//! "Factor 8" through "Factor 37". The catalog never changes at runtime, so
//! the always-exactly-29 invariant is enforced structurally: a [`FactorSet`]
//! can only be built with a complete catalog-ordered set of values, never a
//! partial one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of factors attached to every calificacion.
pub const NUM_FACTORES: usize = 30;

/// The factor name catalog, in catalog order.
pub const NOMBRES_FACTORES: [&str; NUM_FACTORES] = [
    "Factor 8", "Factor 9", "Factor 10", "Factor 11", "Factor 12", "Factor 13", "Factor 14",
    "Factor 15", "Factor 16", "Factor 17", "Factor 18", "Factor 19", "Factor 20", "Factor 21",
    "Factor 22", "Factor 23", "Factor 24", "Factor 25", "Factor 26", "Factor 27", "Factor 28",
    "Factor 29", "Factor 30", "Factor 31", "Factor 32", "Factor 33", "Factor 34", "Factor 35",
    "Factor 36", "Factor 37",
];

/// Position of a factor name in the catalog, if it belongs to it.
#[must_use]
pub fn indice_de(nombre: &str) -> Option<usize> {
    NOMBRES_FACTORES.iter().position(|n| *n == nombre)
}

/// Errors building a [`FactorSet`] from client-supplied pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorSetError {
    /// A name outside the catalog was supplied.
    #[error("factor desconocido: {0}")]
    NombreDesconocido(String),
    /// The same catalog name was supplied more than once.
    #[error("factor duplicado: {0}")]
    NombreDuplicado(String),
    /// Fewer or more than the full catalog was supplied.
    #[error("se esperaban {NUM_FACTORES} factores, llegaron {0}")]
    CardinalidadInvalida(usize),
}

/// The complete set of factor values for one calificacion.
///
/// A fixed-size ordered mapping from catalog name to NUMERIC(8,4) value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSet {
    valores: [Decimal; NUM_FACTORES],
}

impl FactorSet {
    /// All factors at zero — the state of a freshly created calificacion
    /// whose form was submitted with the defaults.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            valores: [Decimal::ZERO; NUM_FACTORES],
        }
    }

    /// Build from (nombre, valor) pairs.
    ///
    /// The pairs must cover the catalog exactly: 29 entries, every name from
    /// the catalog, no duplicates. Order of the input is irrelevant; the
    /// resulting set is always in catalog order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, FactorSetError>
    where
        I: IntoIterator<Item = (String, Decimal)>,
    {
        let mut valores = [Decimal::ZERO; NUM_FACTORES];
        let mut visto = [false; NUM_FACTORES];
        let mut total = 0usize;

        for (nombre, valor) in pairs {
            total += 1;
            if total > NUM_FACTORES {
                return Err(FactorSetError::CardinalidadInvalida(total));
            }
            let idx = indice_de(&nombre).ok_or(FactorSetError::NombreDesconocido(nombre.clone()))?;
            if visto[idx] {
                return Err(FactorSetError::NombreDuplicado(nombre));
            }
            visto[idx] = true;
            valores[idx] = valor;
        }

        if total != NUM_FACTORES {
            return Err(FactorSetError::CardinalidadInvalida(total));
        }

        Ok(Self { valores })
    }

    /// Value for a catalog position.
    #[must_use]
    pub fn valor(&self, idx: usize) -> Decimal {
        self.valores[idx]
    }

    /// Iterate (nombre, valor) in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        NOMBRES_FACTORES
            .iter()
            .copied()
            .zip(self.valores.iter().copied())
    }
}

impl Default for FactorSet {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn catalogo_cubre_8_a_37() {
        assert_eq!(NOMBRES_FACTORES.len(), 29);
        assert_eq!(NOMBRES_FACTORES[0], "Factor 8");
        assert_eq!(NOMBRES_FACTORES[28], "Factor 37");
        assert_eq!(indice_de("Factor 20"), Some(12));
        assert_eq!(indice_de("Factor 7"), None);
        assert_eq!(indice_de("Factor 38"), None);
    }

    #[test]
    fn from_pairs_acepta_catalogo_completo_en_cualquier_orden() {
        let mut pairs: Vec<(String, Decimal)> = NOMBRES_FACTORES
            .iter()
            .map(|n| ((*n).to_string(), Decimal::new(5, 1)))
            .collect();
        pairs.reverse();
        let set = FactorSet::from_pairs(pairs).unwrap();
        for (_, valor) in set.iter() {
            assert_eq!(valor, Decimal::new(5, 1));
        }
    }

    #[test]
    fn from_pairs_rechaza_nombre_fuera_de_catalogo() {
        let mut pairs: Vec<(String, Decimal)> = NOMBRES_FACTORES
            .iter()
            .map(|n| ((*n).to_string(), Decimal::ZERO))
            .collect();
        pairs[3].0 = "Factor 99".to_string();
        assert_eq!(
            FactorSet::from_pairs(pairs),
            Err(FactorSetError::NombreDesconocido("Factor 99".to_string()))
        );
    }

    #[test]
    fn from_pairs_rechaza_duplicados_y_cardinalidad() {
        let mut pairs: Vec<(String, Decimal)> = NOMBRES_FACTORES
            .iter()
            .map(|n| ((*n).to_string(), Decimal::ZERO))
            .collect();
        pairs[1].0 = "Factor 8".to_string();
        assert_eq!(
            FactorSet::from_pairs(pairs),
            Err(FactorSetError::NombreDuplicado("Factor 8".to_string()))
        );

        let corto = vec![("Factor 8".to_string(), Decimal::ZERO)];
        assert_eq!(
            FactorSet::from_pairs(corto),
            Err(FactorSetError::CardinalidadInvalida(1))
        );
    }

    #[test]
    fn zeroed_es_todo_cero() {
        let set = FactorSet::zeroed();
        assert!(set.iter().all(|(_, v)| v == Decimal::ZERO));
    }
}
