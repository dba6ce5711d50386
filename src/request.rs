use std::fmt;

use anyhow::{Context, Result};
use base64::prelude::*;
use http::{header::AUTHORIZATION, Method, Request};

use crate::{config::BaseUrl, credential::Credential};

/// The API ignores the Basic password, but requires one to be present.
pub const PLACEHOLDER_PASSWORD: &str = "x";

/// HTTP Basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        let token = BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &"<redacted>")
            .field("password", &self.password)
            .finish()
    }
}

/// The single request issued by a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub auth: BasicAuth,
}

impl RequestDescriptor {
    /// Describes a `GET` of the employee directory of `credential`'s company.
    ///
    /// The subdomain is interpolated into the path as-is, without any escaping.
    pub fn employee_directory(base: &BaseUrl, credential: &Credential) -> Self {
        Self {
            method: Method::GET,
            url: format!(
                "{}api/gateway.php/{}/v1/employees/directory",
                base.as_str(),
                credential.subdomain()
            ),
            auth: BasicAuth {
                username: credential.api_key().to_owned(),
                password: PLACEHOLDER_PASSWORD.to_owned(),
            },
        }
    }

    /// Fails if `url` is not a valid URI or the credentials do not fit in a header.
    pub fn to_http_request(&self) -> Result<Request<Vec<u8>>> {
        Request::builder()
            .method(self.method.clone())
            .uri(self.url.as_str())
            .header(AUTHORIZATION, self.auth.header_value())
            .body(Vec::new())
            .with_context(|| format!("failed to construct request for {}", self.url))
    }
}
