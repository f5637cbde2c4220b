// Switch web API HTTP client
//
// Wraps `reqwest::Client` with URL construction and response checking for
// the switch's JSON endpoints. Endpoint groups (login, VLAN forms, status
// and save) are implemented as inherent methods in separate files to keep
// this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the switch's web configuration API.
///
/// Every configuration endpoint answers HTTP 200 on success and anything
/// else on failure; there is no response envelope to unwrap.
pub struct SwitchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SwitchClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// If the config doesn't already include a cookie jar, one is created
    /// automatically (the session lives in a cookie). The `base_url` is the
    /// switch root, e.g. `https://192.168.2.1`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The switch base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an endpoint path relative to the switch root.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/{}", path.trim_start_matches('/'));
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and deserialize the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint_url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        let resp = Self::check_status(path, resp)?;
        let body = resp.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }

    /// Send a POST request with a JSON body. The response body is ignored.
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        let url = self.endpoint_url(path)?;
        debug!("POST {}", url);

        let resp = self.http.post(url).json(body).send().await?;
        Self::check_status(path, resp)?;
        Ok(())
    }

    /// Anything but HTTP 200 counts as a rejection.
    fn check_status(path: &str, resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status == reqwest::StatusCode::OK {
            return Ok(resp);
        }
        Err(Error::Rejected {
            endpoint: path.trim_start_matches('/').to_owned(),
            status: status.as_u16(),
        })
    }
}
