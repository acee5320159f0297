//! Status and body handling shared by every Jira request.
//!
//! Jira reports failures as a non-2xx status with a JSON body of
//! `{"errorMessages": [...], "errors": {field: message}}`. Jira Cloud
//! throttles with 429 and a `Retry-After` header in seconds.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::JiraError;

/// Wait Jira Cloud is assumed to ask for when `Retry-After` is unusable.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Turn a non-2xx Jira response into an error; pass 2xx through.
///
/// A 429 becomes [`JiraError::RateLimited`] (reported only, epik makes a
/// single attempt per request). Any other failure status becomes
/// [`JiraError::Api`] carrying Jira's error body verbatim.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JiraError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(JiraError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        status => Err(JiraError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Read the body and decode it as JSON. Decode failures are
/// [`JiraError::Parse`], transport failures while reading stay
/// [`JiraError::Http`].
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, JiraError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| JiraError::Parse(e.to_string()))
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jira_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn throttled(retry_after: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", retry_after)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn retry_after_read_from_header() {
        assert_eq!(retry_after_secs(&throttled("120")), 120);
    }

    #[test]
    fn retry_after_defaults_when_header_missing() {
        let resp = jira_response(429, "");
        assert_eq!(retry_after_secs(&resp), DEFAULT_RETRY_AFTER_SECS);
    }

    #[test]
    fn retry_after_defaults_when_header_not_seconds() {
        let resp = throttled("Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(retry_after_secs(&resp), DEFAULT_RETRY_AFTER_SECS);
    }

    #[tokio::test]
    async fn throttled_response_is_rate_limited() {
        let err = check_response(throttled("30")).await.unwrap_err();
        assert!(matches!(
            err,
            JiraError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn throttled_response_without_header_uses_default() {
        let err = check_response(jira_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            JiraError::RateLimited {
                retry_after_secs: DEFAULT_RETRY_AFTER_SECS
            }
        ));
    }

    #[tokio::test]
    async fn failure_status_keeps_jira_error_body() {
        let resp = jira_response(404, r#"{"errorMessages":["Issue does not exist"],"errors":{}}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            JiraError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("Issue does not exist"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn created_status_passes_through() {
        assert!(check_response(jira_response(201, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_parse_errors() {
        #[derive(Debug, serde::Deserialize)]
        struct Keyed {
            #[allow(dead_code)]
            key: String,
        }

        let resp = jira_response(201, r#"{"id": "10001"}"#);
        let err = decode::<Keyed>(resp).await.unwrap_err();
        assert!(matches!(err, JiraError::Parse(_)));
    }
}
