use serde::Serialize;

/// Errors returned when a flag value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagError {
    /// A map entry has no `:` separating its key from its value.
    #[error("malformed pair {pair:?}: expected key:value")]
    MalformedPair { pair: String },
}

impl FlagError {
    /// Serialize for `--output json` diagnostics.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FlagError::MalformedPair { pair } => serde_json::json!({
                "error":   "malformed_pair",
                "message": self.to_string(),
                "pair":    pair,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_pair_message_names_the_pair() {
        let err = FlagError::MalformedPair {
            pair: "novalue".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "malformed pair \"novalue\": expected key:value"
        );
    }

    #[test]
    fn json_rendering() {
        let err = FlagError::MalformedPair {
            pair: "x".to_owned(),
        };
        let json = err.to_json_value();
        assert_eq!(json["error"], "malformed_pair");
        assert_eq!(json["pair"], "x");

        let tagged = serde_json::to_value(&err).unwrap();
        assert_eq!(tagged["kind"], "malformed_pair");
    }
}
