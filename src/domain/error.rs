use std::{error::Error, fmt};

/// What the user sees when the asset collection could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch cryptocurrency data.";

/// The only error the asset view knows about.
///
/// The variant records why the fetch failed so it can be logged, but every
/// variant shows the same message to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Connection, DNS, TLS or timeout problem before a response arrived.
    Network(String),
    /// Response arrived with a non-2xx status.
    Status(u16),
    /// Body could not be read or was not the expected JSON.
    Decode(String),
}

impl FetchFailure {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchFailure::Network(msg) => write!(f, "network error: {}", msg),
            FetchFailure::Status(code) => write!(f, "unexpected HTTP status {}", code),
            FetchFailure::Decode(msg) => write!(f, "malformed response body: {}", msg),
        }
    }
}

impl Error for FetchFailure {}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            FetchFailure::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchFailure::Status(status.as_u16())
        } else {
            FetchFailure::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cause_shares_one_user_message() {
        let causes = [
            FetchFailure::Network("connection refused".into()),
            FetchFailure::Status(503),
            FetchFailure::Decode("expected value at line 1".into()),
        ];
        for cause in &causes {
            assert_eq!(cause.user_message(), FETCH_FAILED_MESSAGE);
        }
    }

    #[test]
    fn user_message_is_fixed_text() {
        assert_eq!(FETCH_FAILED_MESSAGE, "Failed to fetch cryptocurrency data.");
        assert_eq!(
            FetchFailure::Decode(String::new()).user_message(),
            "Failed to fetch cryptocurrency data."
        );
    }

    #[test]
    fn display_keeps_the_cause_for_logs() {
        assert_eq!(
            FetchFailure::Status(429).to_string(),
            "unexpected HTTP status 429"
        );
    }
}
