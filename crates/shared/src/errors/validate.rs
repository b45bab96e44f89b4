use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "required" => "required".to_string(),
                    _ => "invalid value".to_string(),
                });

            // schema-level checks are reported under a synthetic field name
            if field == "__all__" {
                messages.push(message);
            } else {
                messages.push(format!("{field}: {message}"));
            }
        }
    }

    if messages.is_empty() {
        messages.push("Validation failed".to_string());
    }

    messages.sort();
    messages
}
