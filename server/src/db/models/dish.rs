//! Dish Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// Unique identifier, immutable once created
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in currency units, always > 0
    pub price: f64,
    pub image_url: String,
}

/// Raw wire payload for dish create/update
///
/// Every field is optional at the wire level; `price` stays an untyped
/// JSON value so the validation chain can distinguish "missing" from
/// "wrong type" and report each with its own message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub image_url: Option<String>,
}

/// The validated field set shared by create and update
#[derive(Debug, Clone)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Dish {
    /// Build a dish from validated fields and a generated id
    pub fn from_fields(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Replace the mutable fields in place; the id is preserved
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> DishFields {
        DishFields {
            name: "Pad Thai".to_string(),
            description: "Rice noodles".to_string(),
            price: 12.5,
            image_url: "https://example.com/pad-thai.png".to_string(),
        }
    }

    #[test]
    fn test_from_fields() {
        let dish = Dish::from_fields("d1".to_string(), fields());
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Pad Thai");
        assert_eq!(dish.price, 12.5);
    }

    #[test]
    fn test_apply_preserves_id() {
        let mut dish = Dish::from_fields("d1".to_string(), fields());
        let mut updated = fields();
        updated.name = "Green Curry".to_string();
        updated.price = 14.0;
        dish.apply(updated);
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Green Curry");
        assert_eq!(dish.price, 14.0);
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: DishPayload = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("x"));
        assert!(payload.price.is_none());
    }
}
