//! Open Trivia DB wire format.
//!
//! # Request
//!
//! ```text
//! GET https://opentdb.com/api.php?type=multiple[&difficulty=hard][&category=18]&amount=4
//! ```
//!
//! # Response
//!
//! ```json
//! { "response_code": 0, "results": [ { "question": "...", "correct_answer": "...", ... } ] }
//! ```

use super::error::{OpenTdbError, Result};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use trivia_domain::{FetchDescriptor, RawQuestion};

/// Public Open Trivia DB endpoint
pub const DEFAULT_BASE_URL: &str = "https://opentdb.com/api.php";

/// The public endpoint answers requests closer together than this with
/// [`ResponseCode::RateLimit`]
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(5);

/// How often a rate-limited request is sent again
pub const RATE_LIMIT_RETRIES: u32 = 2;

/// Only multiple-choice questions are requested
pub const QUESTION_TYPE: &str = "multiple";

/// Provider status carried in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    NoResults,
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    RateLimit,
    Unknown(u8),
}

impl ResponseCode {
    pub fn code(&self) -> u8 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::NoResults => 1,
            ResponseCode::InvalidParameter => 2,
            ResponseCode::TokenNotFound => 3,
            ResponseCode::TokenEmpty => 4,
            ResponseCode::RateLimit => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::NoResults => "not enough questions for the query",
            ResponseCode::InvalidParameter => "invalid parameter",
            ResponseCode::TokenNotFound => "session token does not exist",
            ResponseCode::TokenEmpty => "session token has returned all questions",
            ResponseCode::RateLimit => "too many requests",
            ResponseCode::Unknown(_) => "unknown response code",
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> Self {
        match code {
            0 => ResponseCode::Success,
            1 => ResponseCode::NoResults,
            2 => ResponseCode::InvalidParameter,
            3 => ResponseCode::TokenNotFound,
            4 => ResponseCode::TokenEmpty,
            5 => ResponseCode::RateLimit,
            other => ResponseCode::Unknown(other),
        }
    }
}

/// Response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

impl ApiResponse {
    /// Unwrap the records, turning a non-success code into an error
    pub fn into_results(self) -> Result<Vec<RawQuestion>> {
        match ResponseCode::from(self.response_code) {
            ResponseCode::Success => Ok(self.results),
            other => Err(OpenTdbError::ResponseCode {
                code: other.code(),
                description: other.description(),
            }),
        }
    }
}

/// Parse and check a base URL
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    Url::parse(base_url).map_err(|e| OpenTdbError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// Render a descriptor as a request URL on top of `base`
pub fn request_url(base: &Url, descriptor: &FetchDescriptor) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("type", QUESTION_TYPE);
        if let Some(difficulty) = descriptor.difficulty() {
            query.append_pair("difficulty", difficulty.as_str());
        }
        if let Some(category) = descriptor.sub_category() {
            query.append_pair("category", &category.to_string());
        }
        query.append_pair("amount", &descriptor.amount().to_string());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{Difficulty, SubCategoryId};

    fn base() -> Url {
        parse_base_url(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_random_mixed_url() {
        let d = FetchDescriptor::new(None, None, 10).unwrap();
        assert_eq!(
            request_url(&base(), &d).as_str(),
            "https://opentdb.com/api.php?type=multiple&amount=10"
        );
    }

    #[test]
    fn test_filtered_url_parameter_order() {
        let d = FetchDescriptor::new(Some(SubCategoryId::new(18)), Some(Difficulty::Hard), 4)
            .unwrap();
        assert_eq!(
            request_url(&base(), &d).as_str(),
            "https://opentdb.com/api.php?type=multiple&difficulty=hard&category=18&amount=4"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(OpenTdbError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_success_response() {
        let json = r#"{
            "response_code": 0,
            "results": [{
                "type": "multiple",
                "difficulty": "easy",
                "category": "Entertainment: Books",
                "question": "Who wrote &quot;Dune&quot;?",
                "correct_answer": "Frank Herbert",
                "incorrect_answers": ["Isaac Asimov", "Arthur C. Clarke", "Ray Bradbury"]
            }]
        }"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        let results = response.into_results().unwrap();
        assert_eq!(results.len(), 1);
        // Escaping is left for the sanitizer
        assert_eq!(results[0].question, "Who wrote &quot;Dune&quot;?");
    }

    #[test]
    fn test_no_results_response_is_error() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"response_code": 1, "results": []}"#).unwrap();
        match response.into_results() {
            Err(OpenTdbError::ResponseCode { code, .. }) => assert_eq!(code, 1),
            other => panic!("expected response code error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_results_field_defaults_empty() {
        let response: ApiResponse = serde_json::from_str(r#"{"response_code": 5}"#).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(ResponseCode::from(5), ResponseCode::RateLimit);
    }

    #[test]
    fn test_unknown_code_round_trip() {
        let code = ResponseCode::from(42);
        assert_eq!(code, ResponseCode::Unknown(42));
        assert_eq!(code.code(), 42);
    }
}
