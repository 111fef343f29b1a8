//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser;
use advent_core::{Group, split_groups};
use reqwest::header::{COOKIE, HeaderValue};
use std::time::Duration;
use zeroize::{Zeroize, Zeroizing};

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (personal puzzle harness)"
);

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Answer was correct
    Correct,
    /// Answer was rejected as wrong
    Incorrect,
    /// Problem was already completed
    AlreadyCompleted,
    /// Submission was throttled
    Throttled {
        /// Optional wait time before next submission
        wait_time: Option<Duration>,
    },
}

impl SubmissionResult {
    /// Whether the site accepted the answer
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmissionResult::Correct)
    }
}

/// The AOC HTTP client
///
/// Carries the session credential it was built with and attaches it as a
/// cookie to every request.
///
/// # Example
///
/// ```no_run
/// use advent_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .session("your_session_cookie")
///     .build()?;
///
/// let groups = client.fetch_input(2022, 1)?;
/// println!("{} groups", groups.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    session: Option<Zeroizing<String>>,
}

impl std::fmt::Debug for AocClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AocClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AocClient {
    /// Create a client against adventofcode.com with no session configured
    ///
    /// Useful only for inspecting defaults; every request needs a session.
    pub fn new() -> Result<Self, AocError> {
        AocClientBuilder::new().build()
    }

    /// Create a builder for configuring the AOC client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Whether a session credential was configured
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Create a sensitive cookie header value from the configured session
    fn cookie_header(&self) -> Result<HeaderValue, AocError> {
        let session = self.session.as_ref().ok_or(AocError::MissingSession)?;

        let mut cookie_string = format!("session={}", session.as_str());
        let header_value = HeaderValue::from_str(&cookie_string);
        cookie_string.zeroize();

        let mut header_value = header_value.map_err(|_| AocError::InvalidSession)?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }

    /// Build `{base}/{year}/day/{day}/{endpoint}`
    fn day_url(&self, year: u16, day: u8, endpoint: &str) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), endpoint]);
        Ok(url)
    }

    /// Return the body of a 2xx response, or the status and body as an error
    fn read_body(response: reqwest::blocking::Response) -> Result<String, AocError> {
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "response received");

        if !status.is_success() {
            let body = response.text().unwrap_or_default().trim().to_string();
            return Err(AocError::InvalidStatus { status, body });
        }

        response.text().map_err(|_| AocError::Encoding)
    }

    /// Fetch the raw puzzle input for a specific year and day
    ///
    /// # Errors
    ///
    /// * `AocError::MissingSession` - No session configured; nothing is sent
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8) -> Result<String, AocError> {
        let cookie_header = self.cookie_header()?;
        let url = self.day_url(year, day, "input")?;
        tracing::debug!(year, day, %url, "fetching puzzle input");

        let response = self.client.get(url).header(COOKIE, cookie_header).send()?;
        Self::read_body(response)
    }

    /// Fetch the puzzle input and split it into blank-line-delimited groups
    ///
    /// Same errors as [`AocClient::get_input`].
    pub fn fetch_input(&self, year: u16, day: u8) -> Result<Vec<Group>, AocError> {
        let text = self.get_input(year, day)?;
        let groups = split_groups(&text);
        tracing::debug!(year, day, groups = groups.len(), "puzzle input fetched");
        Ok(groups)
    }

    /// Submit an answer for a puzzle part
    ///
    /// A 2xx response is classified by its text; a wrong answer is reported as
    /// `SubmissionResult::Incorrect` even though the request itself succeeded.
    ///
    /// # Errors
    ///
    /// Same as [`AocClient::get_input`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use advent_client::{AocClient, SubmissionResult};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder().session("your_session_cookie").build()?;
    ///
    /// match client.submit_answer(2022, 1, 1, "42")? {
    ///     SubmissionResult::Correct => println!("Correct!"),
    ///     SubmissionResult::Incorrect => println!("Try again"),
    ///     SubmissionResult::AlreadyCompleted => println!("Already done"),
    ///     SubmissionResult::Throttled { wait_time } => println!("Wait: {:?}", wait_time),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
    ) -> Result<SubmissionResult, AocError> {
        let cookie_header = self.cookie_header()?;
        let url = self.day_url(year, day, "answer")?;
        tracing::debug!(year, day, part, %url, "submitting answer");

        let form = [("level", part.to_string()), ("answer", answer.to_string())];
        let response = self
            .client
            .post(url)
            .header(COOKIE, cookie_header)
            .form(&form)
            .send()?;

        let html = Self::read_body(response)?;
        let result = parser::parse_submission_response(&html);
        tracing::debug!(year, day, part, ?result, "submission classified");
        Ok(result)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use advent_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL and timeout, e.g. for a mock server
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .session("abc123")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
    session: Option<Zeroizing<String>>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL for the client
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy is always overridden to `Policy::none()`, so a
    /// redirect surfaces as `AocError::InvalidStatus`.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Set the session cookie value (without the `session=` prefix)
    ///
    /// An empty value counts as no session.
    pub fn session(mut self, session: impl Into<String>) -> Self {
        let session = Zeroizing::new(session.into());
        self.session = (!session.is_empty()).then_some(session);
        self
    }

    /// Build the AOC client with the configured settings
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self.client_builder.unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .use_rustls_tls()
                .user_agent(USER_AGENT)
        });

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            session: self.session,
        })
    }
}
