use anyhow::{bail, Error};
use serde::Deserialize;
use url::Url;

/// Public BambooHR API host.
pub const DEFAULT_BASE_URL: &str = "https://api.bamboohr.com/";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub base: BaseUrl,
}

/// A url that is always a base (can be safely join()'ed with further path elements without
/// mangling).
///
/// Query strings and fragments are rejected, since anything appended to the url would land in
/// them.
#[derive(Deserialize, Debug, Clone, Hash, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct BaseUrl(Url);

impl std::ops::Deref for BaseUrl {
    type Target = Url;

    fn deref(&self) -> &Url {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        // DEFAULT_BASE_URL is a constant absolute URL.
        Self(DEFAULT_BASE_URL.parse().unwrap())
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = Error;

    fn try_from(mut url: String) -> Result<Self, Self::Error> {
        // Make URL a base.
        if !url.ends_with('/') {
            url += "/"
        }
        let parsed: Url = url.parse()?;
        if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
            bail!("'{url}' cannot be used as a base url")
        }
        Ok(Self(parsed))
    }
}

impl std::str::FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_base_is_bamboohr() {
        assert_eq!(Config::default().base.as_str(), "https://api.bamboohr.com/");
    }

    #[test]
    fn base_gains_trailing_slash() {
        let base: BaseUrl = "http://127.0.0.1:8080/sandbox".parse().unwrap();
        assert_eq!(base.as_str(), "http://127.0.0.1:8080/sandbox/");
    }

    #[test]
    fn deserialize() {
        let config: Config =
            serde_json::from_value(json!({ "base": "https://bamboo.example.com" })).unwrap();
        assert_eq!(config.base.as_str(), "https://bamboo.example.com/");

        let config: Config = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, Config::default());

        serde_json::from_value::<Config>(json!({ "base": "not a url" })).unwrap_err();
    }

    #[test]
    fn query_and_fragment_are_rejected() {
        for url in [
            "http://h/p?x=1",
            "http://h/p?",
            "http://h/p#section",
            "mailto:someone@example.com",
        ] {
            url.parse::<BaseUrl>().unwrap_err();
        }
        serde_json::from_value::<Config>(json!({ "base": "http://h/p?x=1" })).unwrap_err();
    }
}
