//! HTTP question bank backed by Open Trivia DB

use super::error::{OpenTdbError, Result};
use super::pacing::{RequestPacer, retry_rate_limited};
use super::protocol::{
    ApiResponse, MIN_REQUEST_INTERVAL, RATE_LIMIT_RETRIES, parse_base_url, request_url,
};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;
use trivia_application::{QuestionBank, QuestionBankError};
use trivia_domain::{FetchDescriptor, RawQuestion};

const USER_AGENT: &str = concat!("trivia-quorum/", env!("CARGO_PKG_VERSION"));

/// [`QuestionBank`] adapter for the Open Trivia DB HTTP API.
///
/// Requests are paced to the public endpoint's rate limit by default, and a
/// request answered with the rate-limit code is sent again a bounded number
/// of times.
pub struct OpenTdbQuestionBank {
    client: reqwest::Client,
    base_url: Url,
    pacer: RequestPacer,
    max_retries: u32,
}

impl OpenTdbQuestionBank {
    /// Create an adapter for `base_url` with an optional request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            pacer: RequestPacer::new(MIN_REQUEST_INTERVAL),
            max_retries: RATE_LIMIT_RETRIES,
        })
    }

    /// Override request spacing and rate-limit retries.
    ///
    /// A zero interval suits self-hosted endpoints without a rate limit.
    pub fn with_pacing(mut self, interval: Duration, max_retries: u32) -> Self {
        self.pacer = RequestPacer::new(interval);
        self.max_retries = max_retries;
        self
    }

    /// The URL a descriptor is fetched from
    pub fn request_url(&self, descriptor: &FetchDescriptor) -> Url {
        request_url(&self.base_url, descriptor)
    }

    async fn send(&self, url: &Url) -> Result<Vec<RawQuestion>> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenTdbError::Status {
                status: status.as_u16(),
            });
        }

        let body: ApiResponse = response.json().await?;
        body.into_results()
    }

    async fn fetch_records(&self, descriptor: &FetchDescriptor) -> Result<Vec<RawQuestion>> {
        let url = self.request_url(descriptor);
        let (this, url) = (self, &url);
        let records =
            retry_rate_limited(&self.pacer, self.max_retries, move || this.send(url)).await?;
        debug!("Received {} record(s) for {}", records.len(), descriptor);
        Ok(records)
    }
}

#[async_trait]
impl QuestionBank for OpenTdbQuestionBank {
    async fn fetch(
        &self,
        descriptor: &FetchDescriptor,
    ) -> std::result::Result<Vec<RawQuestion>, QuestionBankError> {
        self.fetch_records(descriptor).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use trivia_domain::{Difficulty, SubCategoryId};

    const RATE_LIMITED: &str = r#"{"response_code":5,"results":[]}"#;
    const ONE_RECORD: &str = r#"{"response_code":0,"results":[{"question":"Largest planet?","correct_answer":"Jupiter","incorrect_answers":["Mars","Venus","Earth"],"difficulty":"easy","category":"Science &amp; Nature"}]}"#;

    /// Serve one canned JSON body per connection, in order.
    async fn serve(bodies: Vec<&'static str>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let served = Arc::new(AtomicUsize::new(0));
        let counter = served.clone();

        tokio::spawn(async move {
            for body in bodies {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                counter.fetch_add(1, Ordering::SeqCst);
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}/api.php", addr), served)
    }

    #[test]
    fn test_request_url_uses_configured_base() {
        let bank = OpenTdbQuestionBank::new("http://localhost:8080/api.php", None).unwrap();
        let d = FetchDescriptor::new(Some(SubCategoryId::new(9)), Some(Difficulty::Easy), 5)
            .unwrap();
        assert_eq!(
            bank.request_url(&d).as_str(),
            "http://localhost:8080/api.php?type=multiple&difficulty=easy&category=9&amount=5"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            OpenTdbQuestionBank::new("::nope::", None),
            Err(OpenTdbError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_paced_for_public_endpoint_by_default() {
        let bank = OpenTdbQuestionBank::new("http://localhost:8080/api.php", None).unwrap();
        assert_eq!(bank.pacer.interval(), MIN_REQUEST_INTERVAL);
        assert_eq!(bank.max_retries, RATE_LIMIT_RETRIES);
    }

    #[tokio::test]
    async fn test_rate_limited_fetch_is_retried() {
        let (url, served) = serve(vec![RATE_LIMITED, ONE_RECORD]).await;
        let bank = OpenTdbQuestionBank::new(&url, Some(Duration::from_secs(5)))
            .unwrap()
            .with_pacing(Duration::from_millis(20), 2);
        let d = FetchDescriptor::new(Some(SubCategoryId::new(17)), None, 1).unwrap();

        let records = bank.fetch(&d).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].correct_answer, "Jupiter");
        assert_eq!(served.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_persistent_rate_limit_is_rejected() {
        let (url, served) = serve(vec![RATE_LIMITED, RATE_LIMITED]).await;
        let bank = OpenTdbQuestionBank::new(&url, Some(Duration::from_secs(5)))
            .unwrap()
            .with_pacing(Duration::ZERO, 1);
        let d = FetchDescriptor::new(None, None, 5).unwrap();

        let result = bank.fetch(&d).await;

        assert!(matches!(result, Err(QuestionBankError::Rejected(_))));
        assert_eq!(served.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_bank_error() {
        // Nothing listens on the local discard port
        let bank = OpenTdbQuestionBank::new(
            "http://127.0.0.1:9/api.php",
            Some(Duration::from_secs(2)),
        )
        .unwrap()
        .with_pacing(Duration::ZERO, 0);
        let d = FetchDescriptor::new(None, None, 5).unwrap();

        let result = bank.fetch(&d).await;

        assert!(matches!(
            result,
            Err(QuestionBankError::ConnectionError(_)) | Err(QuestionBankError::Timeout)
        ));
    }
}
