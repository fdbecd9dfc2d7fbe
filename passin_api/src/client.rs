//! HTTP client for the pass-in event management API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    query::{AttendeeQuery, EventQuery, Query},
    types::{
        Attendee, AttendeeListResponse, AuthPayload, Credentials, Event, EventListResponse,
        ListResult, NewAttendee, NewEvent,
    },
    Error,
};

/// HTTP client for the pass-in REST API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// When the client carries a bearer token it is attached to every request.
pub struct Client {
    /// Base URL for the API. Defaults to the local development server.
    base_api_url: String,
    /// Bearer token from a prior login, if any.
    token: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the local development API.
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:3333")
    }

    /// Creates a new client with a custom base URL. Also used for testing
    /// with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches a bearer token to all subsequent requests.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn parse_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = self.parse_url(path)?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn read_body(resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }
        Ok(body)
    }

    fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
        serde_json::from_str::<T>(body).map_err(|e| {
            let snippet = truncate_body(body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = self.http_client()?;
        let resp = self
            .authorize(client.get(url))
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let body = Self::read_body(resp).await?;
        Self::parse_body(&body)
    }

    /// Posts a JSON body, returning the raw response body on success.
    async fn post<B>(&self, path: &str, body: &B) -> Result<String, Error>
    where
        B: Serialize,
    {
        let url = self.parse_url(path)?;
        let client = self.http_client()?;
        let resp = self
            .authorize(client.post(url))
            .header("accept", "application/json, text/plain, */*")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to post resource: {}", e);
                Error::RequestFailed
            })?;

        Self::read_body(resp).await
    }

    /// Fetches a page of attendees matching the given query.
    pub async fn get_attendees(&self, query: &AttendeeQuery) -> Result<ListResult<Attendee>, Error> {
        let body: AttendeeListResponse = self.get("/attendees", Some(query)).await?;
        Ok(body.into())
    }

    /// Fetches a page of events matching the given query.
    pub async fn get_events(&self, query: &EventQuery) -> Result<ListResult<Event>, Error> {
        let body: EventListResponse = self.get("/events", Some(query)).await?;
        Ok(body.into())
    }

    /// Exchanges credentials for a session token via `POST /auth`.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, Error> {
        let body = self.post("/auth", credentials).await?;
        Self::parse_body(&body)
    }

    /// Registers a new attendee. Any non-2xx response is a failure.
    pub async fn create_attendee(&self, attendee: &NewAttendee) -> Result<(), Error> {
        self.post("/attendees", attendee).await.map(|_| ())
    }

    /// Creates a new event. Any non-2xx response is a failure.
    pub async fn create_event(&self, event: &NewEvent) -> Result<(), Error> {
        self.post("/events", event).await.map(|_| ())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Walk back to a char boundary so multibyte text never splits.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
