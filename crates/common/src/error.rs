use thiserror::Error;

#[derive(Debug, Error)]
pub enum RollcallError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

pub type RollcallResult<T> = Result<T, RollcallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_variant() {
        let err = RollcallError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");

        let err = RollcallError::Config("DB_HOST is required but not set".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: DB_HOST is required but not set"
        );
    }
}
