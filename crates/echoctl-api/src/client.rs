// Device-control service HTTP client
//
// Wraps `reqwest::Client` with session-cookie headers, service URL
// construction, and response decoding. Endpoint groups (devices, commands,
// player, routines) are implemented as inherent methods via separate files
// to keep this module focused on transport mechanics.

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::cookie;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Announcement display titles and text-command routing use this locale.
const DEFAULT_LOCALE: &str = "en-GB";

/// Authenticated HTTP client for the device-control service.
///
/// Construct via [`Client::connect`], which validates the session cookie
/// against the service and reports any rotated cookie value. All requests
/// carry the cookie blob and csrf token as default headers.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    locale: &'static str,
}

/// The result of a successful [`Client::connect`].
///
/// `refreshed_cookie` is `Some` when the service rotated part of the
/// session cookie during validation -- the caller owns persisting it.
#[derive(Debug)]
pub struct Connected {
    pub client: Client,
    pub refreshed_cookie: Option<String>,
}

impl Client {
    /// Validate a session cookie against the service and build a client.
    ///
    /// Performs `GET /api/bootstrap` with the supplied cookie. A 401/403
    /// response means the cookie is stale or revoked. When the csrf token
    /// is not supplied it is derived from the cookie blob itself.
    pub async fn connect(
        base_url: Url,
        cookie: &SecretString,
        csrf: Option<&str>,
        transport: &TransportConfig,
    ) -> Result<Connected, Error> {
        let blob = cookie.expose_secret();
        let csrf = csrf
            .map(str::to_owned)
            .or_else(|| cookie::extract_csrf(blob));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(blob).map_err(|_| Error::Authentication {
                message: "session cookie contains invalid header characters".into(),
            })?,
        );
        if let Some(ref token) = csrf {
            headers.insert(
                "csrf",
                HeaderValue::from_str(token).map_err(|_| Error::Authentication {
                    message: "csrf token contains invalid header characters".into(),
                })?,
            );
        }

        let http = transport.build_client(headers)?;
        let client = Self {
            http,
            base_url,
            locale: DEFAULT_LOCALE,
        };

        let refreshed_cookie = client.bootstrap(blob).await?;
        Ok(Connected {
            client,
            refreshed_cookie,
        })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn locale(&self) -> &'static str {
        self.locale
    }

    /// Validate the session and capture rotated cookie pairs.
    ///
    /// `GET /api/bootstrap?version=0`
    async fn bootstrap(&self, current_cookie: &str) -> Result<Option<String>, Error> {
        let mut url = self.api_url("api/bootstrap");
        url.set_query(Some("version=0"));
        debug!("validating session at {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: format!("session rejected (HTTP {status})"),
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // The service may rotate individual cookie pairs during validation.
        let set_cookies: Vec<String> = resp
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect();

        let refreshed = cookie::merge_set_cookies(current_cookie, &set_cookies);
        if refreshed.is_some() {
            debug!("session cookie rotated by service");
        }
        Ok(refreshed)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for a service path.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}")).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Send a POST request with a JSON body and decode the response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &serde_json::Value,
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        trace!(%body, "request body");
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Send a POST request, expecting no meaningful response body.
    pub(crate) async fn post_ok(&self, url: Url, body: &serde_json::Value) -> Result<(), Error> {
        debug!("POST {}", url);
        trace!(%body, "request body");
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// Map error statuses, then decode the JSON body.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// Translate non-success statuses into typed errors.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: format!("session rejected (HTTP {status})"),
            });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp)
    }
}
