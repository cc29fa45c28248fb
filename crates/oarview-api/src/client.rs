use crate::errors::{ApiError, HttpError, Result};
use log::{debug, error, info};
use oarview_core::{JobList, JobResources, SiteStatus};
use reqwest::{Client, Response, StatusCode};

/// Job lifecycle states the tool cares about when listing a queue.
const QUEUE_STATES: &str = "waiting,launching,running,hold";

/// Trait for providing configuration to the API client
/// This allows the main application to implement config without circular dependencies
pub trait ApiConfig {
    type Error;

    /// Get optional basic-auth credentials (username, password).
    ///
    /// On the cluster frontends requests are already authenticated, so
    /// `None` is the common case; credentials are only needed from outside.
    fn get_credentials(&self) -> std::result::Result<Option<(String, String)>, Self::Error>;

    /// Get the base URL for the API (optional, defaults to the official API)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// HTTP client for the OAR resource manager REST API (read-only, GET only).
#[derive(Debug, Clone)]
pub struct OarApiClient {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl OarApiClient {
    /// Create a new API client
    pub fn new(credentials: Option<(String, String)>, base_url: Option<String>) -> Self {
        let client = Client::new();
        let base_url =
            base_url.unwrap_or_else(|| "https://api.grid5000.fr/stable/sites".to_string());

        debug!("Creating OarApiClient");
        debug!("  Base URL: {}", base_url);
        debug!(
            "  Credentials: {}",
            if credentials.is_some() {
                "explicit basic auth"
            } else {
                "none (frontend session)"
            }
        );

        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Create API client from any configuration implementing ApiConfig trait
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
    {
        debug!("Creating OarApiClient from config");
        let credentials = config.get_credentials()?;
        let base_url = config.get_base_url()?;

        if let Some(ref url) = base_url {
            debug!("Got custom base URL from config: {}", url);
        } else {
            debug!("Using default base URL");
        }

        Ok(Self::new(credentials, base_url))
    }

    /// Make a GET request
    async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        debug!("HTTP GET request to: {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send().await.map_err(|e| {
            error!("GET request failed: {:?}", e);
            HttpError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(url, response).await
    }

    /// Handle HTTP response and convert errors
    async fn handle_response(&self, url: String, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("Request to {} failed with status: {}", url, status);
        debug!("Error response body: {}", error_text);

        let api_error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HttpError::AuthenticationFailed,
            StatusCode::NOT_FOUND => HttpError::NotFound(url),
            StatusCode::REQUEST_TIMEOUT => HttpError::Timeout,
            _ => HttpError::HttpError {
                status: status.as_u16(),
                message: error_text,
            },
        };

        Err(ApiError::Http(api_error))
    }

    /// List queued/active jobs for a site, optionally filtered by owner and
    /// capped at `limit` results.
    pub async fn list_jobs(
        &self,
        site: &str,
        user: Option<&str>,
        limit: Option<usize>,
    ) -> Result<JobList> {
        debug!("Fetching job list for site {}", site);

        let mut endpoint = format!("{}/jobs?state={}", site, QUEUE_STATES);
        if let Some(user) = user {
            endpoint.push_str(&format!("&user={}", user));
        }
        if let Some(limit) = limit {
            endpoint.push_str(&format!("&limit={}", limit));
        }

        let response = self.get(&endpoint).await?;
        let jobs: JobList = response.json().await.map_err(HttpError::Request)?;

        info!(
            "Fetched {} of {} jobs for {}",
            jobs.items.len(),
            jobs.total,
            site
        );

        Ok(jobs)
    }

    /// Fetch the per-job resource detail (host/core tokens by resource type).
    pub async fn job_resources(&self, site: &str, uid: u64) -> Result<JobResources> {
        debug!("Fetching resources for job {} on {}", uid, site);

        let endpoint = format!("{}/jobs/{}", site, uid);
        let response = self.get(&endpoint).await?;
        let detail: JobResources = response.json().await.map_err(HttpError::Request)?;

        Ok(detail)
    }

    /// Fetch the node status map for a site.
    pub async fn site_status(&self, site: &str) -> Result<SiteStatus> {
        debug!("Fetching node status for site {}", site);

        let endpoint = format!("{}/status", site);
        let response = self.get(&endpoint).await?;
        let status: SiteStatus = response.json().await.map_err(HttpError::Request)?;

        info!("Fetched status for {} nodes on {}", status.nodes.len(), site);

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticConfig;

    impl ApiConfig for StaticConfig {
        type Error = std::convert::Infallible;

        fn get_credentials(
            &self,
        ) -> std::result::Result<Option<(String, String)>, Self::Error> {
            Ok(Some(("alice".to_string(), "secret".to_string())))
        }

        fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
            Ok(Some("https://oar.example.org/sites/".to_string()))
        }
    }

    #[test]
    fn test_from_config_threads_credentials() {
        let client = OarApiClient::from_config(&StaticConfig).unwrap();
        assert_eq!(
            client.credentials,
            Some(("alice".to_string(), "secret".to_string()))
        );
        assert_eq!(client.base_url, "https://oar.example.org/sites/");
    }

    #[test]
    fn test_default_base_url() {
        let client = OarApiClient::new(None, None);
        assert_eq!(client.base_url, "https://api.grid5000.fr/stable/sites");
        assert!(client.credentials.is_none());
    }
}
