//! Dish request validation
//!
//! The checks run in a fixed order and the first failure halts the chain
//! with a 400 carrying the message for that check. A non-numeric price
//! never reaches the range comparison.

use serde_json::Value;

use crate::db::models::{DishFields, DishPayload};
use crate::utils::{AppError, AppResult};

/// Field presence, type and range checks, in order: name, description,
/// image_url, price present, price numeric, price > 0.
pub fn data_fields(payload: &DishPayload) -> AppResult<DishFields> {
    let name = require_text(payload.name.as_deref(), "name")?;
    let description = require_text(payload.description.as_deref(), "description")?;
    let image_url = require_text(payload.image_url.as_deref(), "image_url")?;
    let price = price(payload.price.as_ref())?;

    Ok(DishFields {
        name,
        description,
        price,
        image_url,
    })
}

/// The body may only assert the id the path already names
pub fn id_matches(path_id: &str, body_id: Option<&str>) -> AppResult<()> {
    match body_id {
        Some(id) if id != path_id => Err(AppError::validation(format!(
            "Body id does not match route id: {id}, {path_id}"
        ))),
        _ => Ok(()),
    }
}

fn require_text(value: Option<&str>, field: &str) -> AppResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::validation(format!(
            "A '{field}' field is required"
        ))),
    }
}

fn price(value: Option<&Value>) -> AppResult<f64> {
    let Some(value) = value else {
        return Err(AppError::validation("A 'price' field is required"));
    };
    let Some(price) = value.as_f64() else {
        return Err(AppError::validation(
            "The 'price' field needs to be an integer",
        ));
    };
    if price <= 0.0 {
        return Err(AppError::validation(
            "The 'price' field needs to be greater than 0",
        ));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> DishPayload {
        serde_json::from_value(json!({
            "name": "Pad Thai",
            "description": "Rice noodles",
            "price": 12.5,
            "image_url": "https://example.com/p.png"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_payload() {
        let fields = data_fields(&payload()).unwrap();
        assert_eq!(fields.name, "Pad Thai");
        assert_eq!(fields.price, 12.5);
    }

    #[test]
    fn test_missing_fields_in_order() {
        let mut p = payload();
        p.name = None;
        // A fully empty payload reports the first check in the chain
        let empty = DishPayload::default();
        assert_eq!(
            data_fields(&empty).unwrap_err().message,
            "A 'name' field is required"
        );
        assert_eq!(
            data_fields(&p).unwrap_err().message,
            "A 'name' field is required"
        );

        let mut p = payload();
        p.description = None;
        assert_eq!(
            data_fields(&p).unwrap_err().message,
            "A 'description' field is required"
        );

        let mut p = payload();
        p.image_url = Some(String::new());
        assert_eq!(
            data_fields(&p).unwrap_err().message,
            "A 'image_url' field is required"
        );

        let mut p = payload();
        p.price = None;
        assert_eq!(
            data_fields(&p).unwrap_err().message,
            "A 'price' field is required"
        );
    }

    #[test]
    fn test_image_url_checked_before_price() {
        let mut p = payload();
        p.image_url = None;
        p.price = None;
        assert_eq!(
            data_fields(&p).unwrap_err().message,
            "A 'image_url' field is required"
        );
    }

    #[test]
    fn test_price_type_check_halts_chain() {
        let mut p = payload();
        p.price = Some(json!("12.5"));
        assert_eq!(
            data_fields(&p).unwrap_err().message,
            "The 'price' field needs to be an integer"
        );
    }

    #[test]
    fn test_price_must_be_positive() {
        for bad in [json!(0), json!(-4)] {
            let mut p = payload();
            p.price = Some(bad);
            assert_eq!(
                data_fields(&p).unwrap_err().message,
                "The 'price' field needs to be greater than 0"
            );
        }
    }

    #[test]
    fn test_integer_price_accepted() {
        let mut p = payload();
        p.price = Some(json!(7));
        assert_eq!(data_fields(&p).unwrap().price, 7.0);
    }

    #[test]
    fn test_id_match() {
        assert!(id_matches("5", None).is_ok());
        assert!(id_matches("5", Some("5")).is_ok());

        let err = id_matches("5", Some("6")).unwrap_err();
        assert_eq!(err.message, "Body id does not match route id: 6, 5");
    }
}
