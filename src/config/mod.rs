use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::env;

const DEFAULT_CACHE_SIZE: usize = 1000;

/// Deployment environment. Unrecognized or missing values silently fall
/// back to `Dev`; nothing downstream ever sees an invalid environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Dev,
    Stage,
    Prod,
}

impl Environment {
    fn parse(value: Option<String>) -> Environment {
        match value.as_deref() {
            Some("dev") => Environment::Dev,
            Some("stage") => Environment::Stage,
            Some("prod") => Environment::Prod,
            _ => Environment::Dev,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Stage => "stage",
            Environment::Prod => "prod",
        }
    }
}

/// Feature flags, all defaulting off.
#[derive(Debug, Clone, Copy, Default)]
pub struct Features {
    pub press: bool,
    pub latest_updates: bool,
}

/// All environment-driven settings, read once at process start and passed
/// by reference to anything that needs them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base API URL, no trailing slash expected.
    pub api_location: String,
    pub api_location_public: String,
    pub api_version: String,
    pub host: String,
    pub port: String,
    pub api_key: String,
    pub api_key_public: String,
    pub cache: bool,
    pub cache_size: usize,
    pub transition_url: String,
    pub classic_url: String,
    pub cms_url: String,
    pub canonical_base: String,
    pub site_orientation_banner: bool,
    /// On iff FEC_WEB_DEBUG is set to any non-empty string. The literal
    /// string "false" still counts as on.
    pub debug: bool,
    pub environment: Environment,
    pub features: Features,
    pub force_https: bool,
    pub use_analytics: bool,
    pub github_token: String,
    pub hmac_secret: String,
    /// Header names covered by request signing, comma-split. Signing itself
    /// happens outside this crate.
    pub hmac_headers: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> AppConfig {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key→value source, so tests never have to
    /// touch process environment variables.
    pub fn from_lookup<F>(lookup: F) -> AppConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        // every boolean flag shares the same rule: any non-empty string is true
        let flag = |key: &str| lookup(key).is_some_and(|value| !value.is_empty());

        let api_location = get("FEC_WEB_API_URL", "http://localhost:5000");
        let api_location_public =
            lookup("FEC_WEB_API_URL_PUBLIC").unwrap_or_else(|| api_location.clone());

        AppConfig {
            api_location_public,
            api_version: get("FEC_WEB_API_VERSION", "v1"),
            host: get("FEC_WEB_HOST", "0.0.0.0"),
            port: get("FEC_WEB_PORT", "3000"),
            api_key: get("FEC_WEB_API_KEY", ""),
            api_key_public: get("FEC_WEB_API_KEY_PUBLIC", ""),
            cache: flag("FEC_WEB_CACHE"),
            cache_size: lookup("FEC_WEB_CACHE_SIZE")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_CACHE_SIZE),
            transition_url: get("FEC_TRANSITION_URL", "https://transition.fec.gov"),
            classic_url: get("FEC_CLASSIC_URL", "http://classic.fec.gov"),
            cms_url: get("FEC_CMS_URL", ""),
            canonical_base: get("CANONICAL_BASE", "https://www.fec.gov"),
            site_orientation_banner: flag("FEC_SITE_ORIENTATION_BANNER"),
            debug: flag("FEC_WEB_DEBUG"),
            environment: Environment::parse(lookup("FEC_WEB_ENVIRONMENT")),
            features: Features {
                press: flag("FEC_FEATURE_PRESS"),
                latest_updates: flag("FEC_FEATURE_UPDATES"),
            },
            force_https: flag("FEC_FORCE_HTTPS"),
            use_analytics: flag("FEC_WEB_GOOGLE_ANALYTICS"),
            github_token: get("FEC_GITHUB_TOKEN", ""),
            hmac_secret: get("HMAC_SECRET", ""),
            hmac_headers: get("HMAC_HEADERS", "")
                .split(',')
                .map(str::to_string)
                .collect(),
            api_location,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("FEC_WEB_API_URL", &self.api_location)?;
        validate_url("FEC_WEB_API_URL_PUBLIC", &self.api_location_public)?;
        validate_positive_number("FEC_WEB_CACHE_SIZE", self.cache_size, 1)?;
        Ok(())
    }
}
