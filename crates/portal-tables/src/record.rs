//! Record type shared by every table view

use serde_json::Value;
use std::collections::HashMap;

/// One row's underlying data, as an opaque field-to-value mapping
///
/// The engine never assumes a specific entity shape: library books, store
/// orders, and user accounts all flow through the same type.
pub type Record = HashMap<String, Value>;
