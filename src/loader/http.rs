use crate::{traits::Transport, MapError, Result};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Client;

/// Process-wide HTTP client, created on first use
static HTTP_CLIENT: OnceCell<Client> = OnceCell::new();

const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

fn shared_client() -> Result<Client> {
    HTTP_CLIENT
        .get_or_try_init(|| Client::builder().user_agent(USER_AGENT).build())
        .cloned()
        .map_err(MapError::from)
}

/// Fetches feeds over HTTP(S) with reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: shared_client()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Transport(format!("HTTP {} from {}", status, url)));
        }

        let body = response.text().await?;
        log::debug!("received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
