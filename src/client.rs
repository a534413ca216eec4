use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use crate::config::load_config;
use crate::endpoint::Endpoint;
use crate::error::{BartError, Result};
use crate::reply::Reply;

/// Query parameters of one request, in wire order.
pub(crate) type Params = Vec<(&'static str, String)>;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL, `https://api.bart.gov/api` unless overridden.
    pub url: String,
    /// API key sent as the `key` query parameter.
    pub key: String,
    /// Whether to verify TLS certificates.
    pub verify: bool,
}

/// Blocking client for the BART API.
///
/// Holds nothing but the resolved configuration and the HTTP transport, so
/// it can be cloned and shared across threads freely.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    key: String,
    timeout: Duration,
    http: HttpClient,
}

/// Response of the `ver` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersion {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

impl Client {
    /// Creates a client using environment variables and/or `.bartrc`.
    ///
    /// This is equivalent to `Client::new(None, None, None)`.
    pub fn from_env() -> Result<Self> {
        Self::new(None, None, None)
    }

    /// Creates a client using (in order of precedence):
    /// - explicit `url`/`key`/`verify` arguments
    /// - environment variables `BART_API_URL` / `BART_API_KEY`
    /// - config file from `BART_RC` or `.bartrc`
    pub fn new(url: Option<String>, key: Option<String>, verify: Option<bool>) -> Result<Self> {
        Self::from_config(load_config(url, key, verify)?)
    }

    /// Creates a client for the public API endpoint with the given key,
    /// without consulting the environment.
    pub fn with_key(key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig {
            url: crate::config::DEFAULT_URL.to_string(),
            key: key.into(),
            verify: true,
        })
    }

    pub fn from_config(cfg: ClientConfig) -> Result<Self> {
        if cfg.key.trim().is_empty() {
            return Err(BartError::Config("API key must not be empty".to_string()));
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("bartapi-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("bartapi-rs")),
        );

        let mut builder = HttpClient::builder().default_headers(default_headers);
        if !cfg.verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        Ok(Self {
            url: cfg.url,
            key: cfg.key,
            timeout: Duration::from_secs(30),
            http,
        })
    }

    /// Per-request timeout handed to the HTTP transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.url
    }

    /// Issues `cmd` against the endpoint named `endpoint` with arbitrary
    /// parameters. No validation beyond resolving the endpoint name.
    pub fn call(&self, endpoint: &str, cmd: &str, params: &[(&str, &str)]) -> Result<Reply> {
        let endpoint: Endpoint = endpoint.parse()?;
        self.execute(endpoint, cmd, params)
    }

    pub(crate) fn call_api(&self, endpoint: Endpoint, cmd: &str, params: &Params) -> Result<Reply> {
        let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.execute(endpoint, cmd, &params)
    }

    fn execute(&self, endpoint: Endpoint, cmd: &str, params: &[(&str, &str)]) -> Result<Reply> {
        let url = endpoint.url(&self.url);

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        query.push(("cmd", cmd));
        query.push(("key", self.key.as_str()));
        query.extend_from_slice(params);

        debug!(%endpoint, cmd, ?params, "calling BART API");
        let resp = self
            .http
            .get(&url)
            .query(&query)
            .timeout(self.timeout)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        debug!(%endpoint, cmd, status = status.as_u16(), bytes = body.len(), "BART API responded");

        if !status.is_success() {
            return Err(BartError::Transport {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Reply::from_xml(&body)
    }

    /// Commands available on an endpoint, from its `help` command.
    pub fn api_commands(&self, endpoint: &str) -> Result<Vec<String>> {
        let endpoint: Endpoint = endpoint.parse()?;
        let reply = self.call_api(endpoint, "help", &Params::new())?;
        let help = reply
            .message("help")
            .and_then(|h| h.as_str())
            .ok_or_else(|| BartError::Decode("response has no <help> element".to_string()))?;
        parse_help(help)
    }

    /// Current API version as reported by `endpoint`.
    pub fn api_version(&self, endpoint: &str) -> Result<ApiVersion> {
        let endpoint: Endpoint = endpoint.parse()?;
        let reply = self.call_api(endpoint, "ver", &Params::new())?;
        serde_json::from_value(reply.data)
            .map_err(|e| BartError::Decode(format!("unexpected version response: {e}")))
    }
}

/// `"Commands: bsa, count, elev, help, ver"` -> `["bsa", "count", ...]`
fn parse_help(help: &str) -> Result<Vec<String>> {
    let (_, list) = help
        .split_once(": ")
        .ok_or_else(|| BartError::Decode(format!("unexpected help text: {help}")))?;
    Ok(list
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_is_split_into_commands() {
        assert_eq!(
            parse_help("Available commands: bsa, count, elev, help, ver").unwrap(),
            vec!["bsa", "count", "elev", "help", "ver"]
        );
        assert!(parse_help("no commands here").is_err());
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            Client::with_key("  "),
            Err(BartError::Config(_))
        ));
    }

    #[test]
    fn unknown_endpoint_fails_before_io() {
        // Port 9 (discard) is never contacted: resolution fails first.
        let client = Client::from_config(ClientConfig {
            url: "http://127.0.0.1:9".to_string(),
            key: "test".to_string(),
            verify: true,
        })
        .unwrap();
        assert!(matches!(
            client.call("trains", "list", &[]),
            Err(BartError::UnknownEndpoint { .. })
        ));
        assert!(matches!(
            client.api_commands("nope"),
            Err(BartError::UnknownEndpoint { .. })
        ));
    }

    #[test]
    fn version_payload_deserializes() {
        let reply = Reply::from_xml(
            "<root><uri>x</uri><apiVersion>3.10</apiVersion><copyright>BART</copyright><license>Free</license><message/></root>",
        )
        .unwrap();
        let version: ApiVersion = serde_json::from_value(reply.data).unwrap();
        assert_eq!(version.api_version.as_deref(), Some("3.10"));
        assert_eq!(version.license.as_deref(), Some("Free"));
    }
}
