use thiserror::Error;

/// Failures surfaced by the board engine and the transports feeding it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("failed to decode snapshot: {0}")]
    Decode(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("no slot selected")]
    NoSlotSelected,
    #[error("unknown board action `{0}`")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_code() {
        assert_eq!(
            BoardError::Status(503).to_string(),
            "server responded with status 503"
        );
    }
}
