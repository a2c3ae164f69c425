use crate::items::error::ItemError;
use crate::items::request::ItemRequest;

pub const ERROR_NO_DATA_PARAMETER: &str = "No data parameter";

/// Create requires `data`; `id` is irrelevant (the store assigns one).
/// Returns the data so callers never re-unwrap a field already checked.
pub fn validate_on_create(request: &ItemRequest) -> Result<&str, ItemError> {
    match request.data.as_deref() {
        Some(data) => Ok(data),
        None => Err(ItemError::Validation(ERROR_NO_DATA_PARAMETER.to_string())),
    }
}

/// Delete requires `id`. The error message is the same literal as the
/// create path even though the missing field is the id; clients match on
/// that exact string, so the inherited wording stays.
pub fn validate_on_delete(request: &ItemRequest) -> Result<i64, ItemError> {
    match request.id {
        Some(id) => Ok(id),
        None => Err(ItemError::Validation(ERROR_NO_DATA_PARAMETER.to_string())),
    }
}

/// Update requires both fields; id is checked first.
pub fn validate_on_update(request: &ItemRequest) -> Result<(i64, &str), ItemError> {
    let id = validate_on_delete(request)?;
    let data = validate_on_create(request)?;

    Ok((id, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: Option<i64>, data: Option<&str>) -> ItemRequest {
        ItemRequest {
            id,
            data: data.map(str::to_string),
        }
    }

    fn assert_no_data_parameter(err: ItemError) {
        match err {
            ItemError::Validation(msg) => assert_eq!(msg, ERROR_NO_DATA_PARAMETER),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn create_accepts_data_without_id() {
        assert_eq!(validate_on_create(&request(None, Some("data"))).unwrap(), "data");
    }

    #[test]
    fn create_rejects_missing_data() {
        assert_no_data_parameter(validate_on_create(&request(Some(1), None)).unwrap_err());
    }

    #[test]
    fn delete_accepts_id_without_data() {
        assert_eq!(validate_on_delete(&request(Some(777), None)).unwrap(), 777);
    }

    #[test]
    fn delete_rejects_missing_id_with_inherited_message() {
        assert_no_data_parameter(validate_on_delete(&request(None, Some("data"))).unwrap_err());
    }

    #[test]
    fn update_requires_both_fields() {
        assert_eq!(
            validate_on_update(&request(Some(5), Some("new"))).unwrap(),
            (5, "new")
        );
        assert_no_data_parameter(validate_on_update(&request(None, Some("new"))).unwrap_err());
        assert_no_data_parameter(validate_on_update(&request(Some(5), None)).unwrap_err());
    }

    #[test]
    fn update_checks_id_before_data() {
        // Both absent still reports through the id path first; the message is
        // shared, so observable behavior is the same error either way.
        assert_no_data_parameter(validate_on_update(&request(None, None)).unwrap_err());
    }
}
