use serde_json::{Map, Value};

/// One row as the store returned it, keyed by column name in column order.
pub type Record = Map<String, Value>;
