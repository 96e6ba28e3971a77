//! The hat record served by the producer and read by the consumer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a hat. Any integer can be looked up; only positive values
/// are stored.
pub type HatId = i64;

/// A purchasable hat.
///
/// The JSON shape (`id`, `name`, `size`, `color`) is the wire contract
/// between the producer and its consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hat {
    pub id: HatId,
    pub name: String,
    pub size: u32,
    pub color: String,
}

impl Hat {
    pub fn new(id: HatId, name: impl Into<String>, size: u32, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            color: color.into(),
        }
    }

    /// Check the record against the data model.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Error::InvalidHat {
            id: self.id,
            message: message.to_string(),
        };

        if self.id <= 0 {
            return Err(invalid("id must be a positive integer"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if self.size == 0 {
            return Err(invalid("size must be a positive integer"));
        }
        if self.color.trim().is_empty() {
            return Err(invalid("color cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_contract_field_names() {
        let hat = Hat::new(1, "Sombrero", 30, "red");
        let value = serde_json::to_value(&hat).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Sombrero", "size": 30, "color": "red"})
        );
    }

    #[test]
    fn deserialize_restores_identical_record() {
        let hat = Hat::new(2, "Beanie", 5, "blue");
        let json = serde_json::to_string(&hat).unwrap();
        let back: Hat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hat);
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        assert!(Hat::new(7, "Fedora", 12, "grey").validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_id() {
        let err = Hat::new(0, "Fedora", 12, "grey").validate().unwrap_err();
        assert!(err.to_string().contains("id must be a positive integer"));
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let err = Hat::new(4, "  ", 12, "grey").validate().unwrap_err();
        assert!(err.to_string().contains("name"));

        let err = Hat::new(4, "Fedora", 12, "").validate().unwrap_err();
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn validate_rejects_zero_size() {
        let err = Hat::new(4, "Fedora", 0, "grey").validate().unwrap_err();
        match err {
            Error::InvalidHat { id, message } => {
                assert_eq!(id, 4);
                assert!(message.contains("size"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
