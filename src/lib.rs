//! This library checks [BambooHR API] credentials with a single authenticated
//! request.
//!
//! [BambooHR API]: <https://documentation.bamboohr.com/reference>
//!
//! # Usage
//!
//! A [`CredentialValidator`] wraps an HTTP client implementing
//! [`AsyncHttpClient`]. The crate ships [`ReqwestClient`], but hosts are free
//! to inject their own transport.
//!
//! ```ignore
//! use bamboohr_probe::{
//!     core::util::ReqwestClient, credential::Credential, validator::CredentialValidator,
//! };
//!
//! let validator = CredentialValidator::new(ReqwestClient::new()?);
//! let credential = Credential::new("acme", api_key);
//!
//! let result = validator.test_credential(&credential).await;
//! println!("{}", serde_json::to_string(&result)?);
//! // {"status":"OK","message":"Connection successful!"}
//! ```
//!
//! # Probe
//!
//! 1. A [`RequestDescriptor`] is built from the credential: a `GET` of
//!    `https://api.bamboohr.com/api/gateway.php/{subdomain}/v1/employees/directory`,
//!    authenticated with HTTP Basic where the API key is the username and the
//!    password is the placeholder `x`.
//! 2. The request is executed by the injected client.
//! 3. Any 2xx response yields [`ValidationResult::Ok`]. Anything else, be it a
//!    malformed URL, a transport error or an error status, yields
//!    [`ValidationResult::Error`] with the same fixed message.
//!
//! [`CredentialValidator::validate_credentials`] exposes the underlying
//! [`ProbeError`] when the cause matters.
//!
//! [`CredentialValidator`]: crate::validator::CredentialValidator
//! [`CredentialValidator::validate_credentials`]: crate::validator::CredentialValidator::validate_credentials
//! [`AsyncHttpClient`]: crate::core::util::AsyncHttpClient
//! [`ReqwestClient`]: crate::core::util::ReqwestClient
//! [`RequestDescriptor`]: crate::request::RequestDescriptor
//! [`ValidationResult::Ok`]: crate::validator::ValidationResult::Ok
//! [`ValidationResult::Error`]: crate::validator::ValidationResult::Error
//! [`ProbeError`]: crate::validator::ProbeError

pub mod config;
pub mod core;
pub mod credential;
pub mod request;
pub mod validator;
