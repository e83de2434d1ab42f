use std::fmt;

/// Failures surfaced by the API client. `Display` is user-facing Spanish;
/// the wrapped messages carry the underlying cause, which for `Http` is
/// the server's own (already Spanish) payload.
#[derive(Clone, Debug)]
pub enum ApiError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(message) => {
                write!(formatter, "Error de configuración: {message}")
            }
            ApiError::Network(message) => write!(formatter, "Error de conexión: {message}"),
            ApiError::Timeout(message) => {
                write!(formatter, "Tiempo de espera agotado: {message}")
            }
            ApiError::Http { status, message } => {
                write!(formatter, "Error del servidor ({status}): {message}")
            }
            ApiError::Parse(message) => write!(formatter, "Respuesta inválida: {message}"),
            ApiError::Serialization(message) => {
                write!(formatter, "Solicitud inválida: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_display_status_and_server_message() {
        let err = ApiError::Http {
            status: 401,
            message: "Credenciales incorrectas".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error del servidor (401): Credenciales incorrectas"
        );
    }

    #[test]
    fn timeout_display_reads_as_one_sentence() {
        let err = ApiError::Timeout("Inténtalo de nuevo.".to_string());
        assert_eq!(
            err.to_string(),
            "Tiempo de espera agotado: Inténtalo de nuevo."
        );
    }
}
