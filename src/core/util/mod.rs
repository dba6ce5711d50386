use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use http::{Request, Response};

/// Generic HTTP client.
///
/// The probe never talks to the network directly: hosts inject their own
/// transport (with its own TLS, proxy and timeout policy) by implementing this
/// trait. An implementation resolves on every completed HTTP exchange,
/// whatever the status code, and fails only when no response was obtained.
#[async_trait]
pub trait AsyncHttpClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>>;
}

#[async_trait]
impl<T> AsyncHttpClient for &T
where
    T: AsyncHttpClient + Sync + ?Sized,
{
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
        (**self).execute(request).await
    }
}

#[derive(Debug)]
pub struct ReqwestClient(reqwest::Client);

impl AsRef<reqwest::Client> for ReqwestClient {
    fn as_ref(&self) -> &reqwest::Client {
        &self.0
    }
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        Self::builder()
            .build()
            .context("unable to build http_client")
            .map(Self)
    }

    /// Like [ReqwestClient::new], but every request is aborted after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::builder()
            .timeout(timeout)
            .build()
            .context("unable to build http_client")
            .map(Self)
    }

    fn builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder().use_rustls_tls()
    }
}

impl From<reqwest::Client> for ReqwestClient {
    fn from(client: reqwest::Client) -> Self {
        Self(client)
    }
}

#[async_trait]
impl AsyncHttpClient for ReqwestClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
        let response = self
            .0
            .execute(request.try_into().context("unable to convert request")?)
            .await
            .context("http request failed")?;

        let mut builder = Response::builder()
            .status(response.status())
            .version(response.version());

        builder
            .extensions_mut()
            .context("unable to set extensions")?
            .extend(response.extensions().clone());

        builder
            .headers_mut()
            .context("unable to set headers")?
            .extend(response.headers().clone());

        builder
            .body(
                response
                    .bytes()
                    .await
                    .context("failed to extract response body")?
                    .to_vec(),
            )
            .context("unable to construct response")
    }
}
