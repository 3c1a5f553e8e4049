//! Wire envelope types
//!
//! Request and response bodies wrap their payload in a `data` field:
//!
//! ```json
//! { "data": { "name": "Pad Thai", "price": 12.5 } }
//! ```
//!
//! On the request side every payload field is optional at the wire level;
//! an absent or empty `data` wrapper degrades to a default payload so the
//! validation chain can reject it field by field instead of the
//! deserializer rejecting the request wholesale.

use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Data<T> {
    /// The wrapped payload
    #[serde(default)]
    pub data: T,
}

impl<T> Data<T> {
    /// Wrap a payload
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwrap the payload
    pub fn into_inner(self) -> T {
        self.data
    }
}
