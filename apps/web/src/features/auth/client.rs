//! Client wrappers for the Prefabrica auth API. These helpers keep
//! credential handling in one place; route code never touches the wire
//! format and passwords are never logged.

use crate::app_lib::{ApiClient, ApiError};
use crate::features::auth::types::{LoginRequest, LoginResponse};
use serde::Deserialize;

/// Exchanges credentials for a session token. Server-side failures come
/// back with the server's own message when the body carries one.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    api.post_json("/login", &request)
        .await
        .map_err(extract_server_message)
}

#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

/// The API wraps auth failures as `{"message": "..."}`. Surface that
/// message instead of the raw body when it parses; other errors pass
/// through untouched.
fn extract_server_message(err: ApiError) -> ApiError {
    match err {
        ApiError::Http { status, message } => {
            let message = serde_json::from_str::<ServerMessage>(&message)
                .map(|payload| payload.message)
                .unwrap_or(message);
            ApiError::Http { status, message }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_replaces_raw_body() {
        let err = ApiError::Http {
            status: 401,
            message: "{\"message\":\"Credenciales incorrectas\"}".to_string(),
        };

        match extract_server_message(err) {
            ApiError::Http { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Credenciales incorrectas");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_kept_as_is() {
        let err = ApiError::Http {
            status: 500,
            message: "<html>¡Ups!</html>".to_string(),
        };

        match extract_server_message(err) {
            ApiError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "<html>¡Ups!</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_http_errors_pass_through() {
        let err = ApiError::Timeout("Inténtalo de nuevo.".to_string());
        assert!(matches!(extract_server_message(err), ApiError::Timeout(_)));
    }
}
