//! Path parameter types and parsing for HTTP endpoints.
//!
//! Path segments are extracted as raw strings so that a non-integer
//! identifier becomes a 400 problem response instead of axum's plain-text
//! rejection.

use hats_lib::HatId;
use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Route of the producer's lookup endpoint.
pub const HATS_ROUTE: &str = hats_lib::contract::HAT_PATH_TEMPLATE;

/// Route of the consumer's greeting endpoint.
pub const WEARHAT_ROUTE: &str = "/api/v1/wearhat/{hatId}";

/// Parsing trait for path parameter types.
///
/// Implementations turn raw path segments into typed values and return a
/// `ProblemDetails` error for malformed input.
pub trait PathParams {
    /// The typed value carried by the path.
    type Output;

    /// Parse the path parameters.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn parse(&self, request_id: &str) -> Result<Self::Output, Box<ProblemDetails>>;
}

/// Path parameters of `GET /api/v1/hats/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HatPath {
    /// Raw hat identifier segment.
    pub id: String,
}

impl PathParams for HatPath {
    type Output = HatId;

    fn parse(&self, request_id: &str) -> Result<HatId, Box<ProblemDetails>> {
        parse_hat_id("id", &self.id, request_id)
    }
}

/// Path parameters of `GET /api/v1/wearhat/{hatId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearHatPath {
    /// Raw hat identifier segment.
    #[serde(rename = "hatId")]
    pub hat_id: String,
}

impl PathParams for WearHatPath {
    type Output = HatId;

    fn parse(&self, request_id: &str) -> Result<HatId, Box<ProblemDetails>> {
        parse_hat_id("hatId", &self.hat_id, request_id)
    }
}

fn parse_hat_id(field: &str, raw: &str, request_id: &str) -> Result<HatId, Box<ProblemDetails>> {
    raw.trim().parse::<HatId>().map_err(|_| {
        Box::new(ProblemDetails::bad_request(
            format!("The '{}' path parameter must be an integer, got '{}'", field, raw),
            request_id,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hat_path_parses_integer() {
        let path = HatPath { id: "1".to_string() };
        assert_eq!(path.parse("req-1").unwrap(), 1);
    }

    #[test]
    fn test_hat_path_accepts_out_of_catalog_values() {
        let path = HatPath { id: "-17".to_string() };
        assert_eq!(path.parse("req-2").unwrap(), -17);
    }

    #[test]
    fn test_hat_path_rejects_non_integer() {
        let path = HatPath { id: "abc".to_string() };
        let problem = path.parse("req-3").unwrap_err();

        assert_eq!(problem.status, 400);
        assert_eq!(problem.instance.as_deref(), Some("req-3"));
        assert!(problem.detail.as_deref().unwrap().contains("'id'"));
        assert!(problem.detail.as_deref().unwrap().contains("abc"));
    }

    #[test]
    fn test_hat_path_rejects_overflow() {
        let path = HatPath {
            id: "99999999999999999999".to_string(),
        };
        assert!(path.parse("req-4").is_err());
    }

    #[test]
    fn test_wear_hat_path_uses_camel_case_name() {
        let path: WearHatPath = serde_json::from_str(r#"{"hatId":"2"}"#).unwrap();
        assert_eq!(path.parse("req-5").unwrap(), 2);

        let bad = WearHatPath {
            hat_id: "1.5".to_string(),
        };
        let problem = bad.parse("req-6").unwrap_err();
        assert!(problem.detail.as_deref().unwrap().contains("'hatId'"));
    }
}
