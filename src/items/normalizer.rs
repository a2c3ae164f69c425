use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::models::item::Item;
use crate::items::request::ItemRequest;

/// Wire representation of a persisted item. Timestamps stay optional so a
/// row that somehow lacks one serializes as null instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    pub data: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Build an `ItemRequest` from loose request parameters (query string, path
/// segment, and JSON body merged by the handler).
///
/// Malformed values are silently dropped rather than rejected; whether a
/// missing field matters is the validator's call, not this one's. Total: any
/// input map yields a request.
pub fn item_request_from_params(params: &Map<String, Value>) -> ItemRequest {
    let mut request = ItemRequest::default();

    if let Some(id) = params.get("id").and_then(as_strict_i64) {
        request.id = Some(id);
    }

    if let Some(Value::String(data)) = params.get("data") {
        request.data = Some(data.clone());
    }

    request
}

/// Strict integer read: a JSON integer, or a string that parses as a whole
/// i64 in full. Floats, numeric-prefixed strings ("7abc"), arrays and
/// objects are all rejected.
fn as_strict_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Map a persisted item to its wire form. Pure and total; `None` timestamps
/// pass through unchanged.
pub fn item_to_record(item: &Item) -> ItemRecord {
    ItemRecord {
        data: item.data.clone(),
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}
