/// Caller-supplied item fields, one value per request. Never persisted.
///
/// Fields are either absent or present with the correct type; the normalizer
/// drops anything malformed instead of storing a wrong-typed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRequest {
    pub id: Option<i64>,
    pub data: Option<String>,
}
