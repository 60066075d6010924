//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldError};

/// Flatten validator errors into field errors, sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Convert validation errors to AppError, keeping every failing field.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    AppError::InvalidFields(field_errors(&errors))
}

/// Treat empty or whitespace-only strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_validation_error_uses_field_message() {
        let errors = Sample { name: String::new() }.validate().unwrap_err();

        let err = validation_error(errors);
        assert_eq!(err.to_string(), "Validation error: name: Name is required");
        match err {
            AppError::InvalidFields(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "name");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[derive(Validate)]
    struct Pair {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_validation_error_keeps_all_fields_sorted() {
        let errors = Pair {
            name: String::new(),
            email: "not-an-email".into(),
        }
        .validate()
        .unwrap_err();

        match validation_error(errors) {
            AppError::InvalidFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["email", "name"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("ana".into())), Some("ana".to_string()));
    }
}
