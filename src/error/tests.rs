//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod footy_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // A URL without a host fails before any network access
        let client = reqwest::Client::new();
        let result = client.get("http://").send().await;
        let reqwest_error = result.unwrap_err();
        let footy_error = FootyError::from(reqwest_error);

        match footy_error {
            FootyError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let footy_error = FootyError::from(json_error);

        match footy_error {
            FootyError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let footy_error = FootyError::from(io_error);

        match footy_error {
            FootyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let footy_error = FootyError::from(header_error);

        match footy_error {
            FootyError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_missing_token_error() {
        let error = FootyError::MissingToken {
            env_var: "X_AUTH_TOKEN".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API token not provided"));
        assert!(error_string.contains("X_AUTH_TOKEN"));
    }

    #[test]
    fn test_unknown_competition_error() {
        let error = FootyError::UnknownCompetition {
            name: "eredivisie".to_string(),
        };

        assert_eq!(error.to_string(), "Unknown competition: eredivisie");
    }

    #[test]
    fn test_error_debug_format() {
        let error = FootyError::UnknownCompetition {
            name: "mls".to_string(),
        };

        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("UnknownCompetition"));
        assert!(debug_string.contains("mls"));
    }
}
