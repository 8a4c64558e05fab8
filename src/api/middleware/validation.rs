use validator::Validate;

use crate::api::errors::ApiError;

/// Field error details
#[derive(Debug, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validate a payload and turn failures into a 400 listing every field error
pub fn validate_and_respond<T>(payload: &T) -> Result<(), ApiError>
where
    T: Validate,
{
    payload.validate().map_err(|validation_errors| {
        let mut field_errors: Vec<FieldError> = validation_errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|cow| cow.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();
        // HashMap iteration order; sort for a stable message
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        let message = field_errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        ApiError::bad_request(message)
    })
}
