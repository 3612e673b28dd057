//! Erreurs de calcul et de lecture des données

use std::fmt;

/// Table de valeurs forfaitaires consultée par le moteur
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Table {
    /// Solar coverage fraction table
    FECS,
    /// Distribution yield table
    RD,
    /// Resistive generation yield table
    RG,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error type of the library
#[derive(Debug, PartialEq)]
pub enum EcsError {
    /// Value could not be parsed
    ParseError(String),
    /// Table line or document could not be parsed
    TableParseError(String),
    /// Input value out of its valid range
    Precondition(String),
    /// No tabulated value matches the key
    MissingValue {
        /// Table that was consulted
        table: Table,
        /// Key fields used in the lookup
        key: String,
    },
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EcsError::*;
        match self {
            ParseError(v) => write!(f, "Erreur de lecture de la valeur \"{}\"", v),
            TableParseError(v) => write!(f, "Erreur de lecture de la table: \"{}\"", v),
            Precondition(desc) => write!(f, "Donnée d'entrée non valide: {}", desc),
            MissingValue { table, key } => write!(
                f,
                "Valeur forfaitaire {} non trouvée pour la clé ({})",
                table, key
            ),
        }
    }
}

impl std::error::Error for EcsError {}

impl From<std::num::ParseFloatError> for EcsError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EcsError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for EcsError {
    fn from(err: std::num::ParseIntError) -> Self {
        EcsError::ParseError(err.to_string())
    }
}

impl From<std::str::ParseBoolError> for EcsError {
    fn from(err: std::str::ParseBoolError) -> Self {
        EcsError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_names_table_and_key() {
        let err = EcsError::MissingValue {
            table: Table::RD,
            key: "collective: false".into(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("RD"));
        assert!(msg.contains("collective: false"));
    }

    #[test]
    fn parse_errors_convert() {
        let err: EcsError = "x1".parse::<f32>().unwrap_err().into();
        assert!(matches!(err, EcsError::ParseError(_)));
    }
}
