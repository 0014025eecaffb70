use crate::errors::ApiError;

/// Degrade-on-failure policy for screens that must always render something.
///
/// Passes a successful result through. On any error the error is logged as a warning and
/// replaced by `placeholder()`, so the caller cannot tell the two apart.
pub fn degrade_on_failure<T>(
    what: &str,
    result: Result<T, ApiError>,
    placeholder: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "Using placeholder {} data", what);
            placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn success_passes_through() {
        let value = degrade_on_failure("counter", Ok(3), || 0);
        assert_eq!(value, 3);
    }

    #[test]
    fn every_error_kind_is_replaced() {
        let request_err = Err(ApiError::Request {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        });
        assert_eq!(degrade_on_failure("counter", request_err, || 7), 7);

        let parse_err = Err(ApiError::Parse("expected value".to_string()));
        assert_eq!(degrade_on_failure("counter", parse_err, || 7), 7);
    }
}
