use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HttpConfig;
use crate::resolve::{ResolveError, Resolver, TempFileStore};

/// Build the blocking HTTP client shared by the network resolvers.
pub fn build_client(config: &HttpConfig) -> Result<Client, ResolveError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(ResolveError::Client)
}

/// GET `url` and return the body, failing on any non-2xx status.
pub(crate) fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, ResolveError> {
    tracing::debug!(url = %url, "GET");

    let response = client.get(url).send().map_err(|source| ResolveError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResolveError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(|source| ResolveError::Request {
        url: url.to_string(),
        source,
    })?;
    Ok(body.to_vec())
}

/// `GET:<url>`: the response body as text. Non-UTF-8 bodies are an error.
pub struct HttpGet {
    client: Client,
}

impl HttpGet {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Resolver for HttpGet {
    fn resolve(&self, _name: &str, url: &str) -> Result<String, ResolveError> {
        let body = fetch(&self.client, url)?;
        String::from_utf8(body).map_err(|_| ResolveError::InvalidArgument {
            arg: url.to_string(),
            reason: "response body is not UTF-8".to_string(),
        })
    }
}

/// `GETFILE:<url>`: the response body written to a temp file; yields its path.
pub struct HttpGetFile {
    client: Client,
    store: TempFileStore,
}

impl HttpGetFile {
    pub fn new(client: Client, store: TempFileStore) -> Self {
        Self { client, store }
    }
}

impl Resolver for HttpGetFile {
    fn resolve(&self, name: &str, url: &str) -> Result<String, ResolveError> {
        let body = fetch(&self.client, url)?;
        let path = self.store.materialize(name, &body)?;
        Ok(path.to_string_lossy().into_owned())
    }
}
