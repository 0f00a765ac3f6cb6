//! Runtime configuration.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STOCKGRID_API_URL` | none | Base URL of the stock API |
//! | `STOCKGRID_TIMEOUT_MS` | `3000` | Per-request timeout |
//! | `STOCKGRID_PAGE_SIZE` | `5` | Initial rows per page (5, 10 or 25) |
//!
//! Explicit overrides (command-line flags) win over the environment.

use crate::table::PageSize;
use crate::ValidationError;

pub const ENV_API_URL: &str = "STOCKGRID_API_URL";
pub const ENV_TIMEOUT_MS: &str = "STOCKGRID_TIMEOUT_MS";
pub const ENV_PAGE_SIZE: &str = "STOCKGRID_PAGE_SIZE";

pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout_ms: u64,
    pub page_size: PageSize,
}

/// Values supplied explicitly by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub page_size: Option<usize>,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let config = Self {
            base_url: normalize_base_url(base_url.into()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            page_size: PageSize::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        self.timeout_ms = timeout_ms;
        self.validate()?;
        Ok(self)
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Resolve from the process environment and `overrides`.
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ValidationError> {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    /// Resolve from an arbitrary variable lookup and `overrides`.
    pub fn resolve<L>(overrides: ConfigOverrides, lookup: L) -> Result<Self, ValidationError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let base_url = overrides
            .base_url
            .or_else(|| lookup(ENV_API_URL))
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::MissingBaseUrl)?;

        let timeout_ms = match overrides.timeout_ms {
            Some(value) => value,
            None => parse_env(&lookup, ENV_TIMEOUT_MS)?.unwrap_or(DEFAULT_TIMEOUT_MS),
        };

        let page_size = match overrides.page_size {
            Some(value) => PageSize::try_from(value)?,
            None => match parse_env::<_, usize>(&lookup, ENV_PAGE_SIZE)? {
                Some(value) => PageSize::try_from(value)?,
                None => PageSize::default(),
            },
        };

        Ok(Self::new(base_url)?
            .with_timeout_ms(timeout_ms)?
            .with_page_size(page_size))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.base_url.as_str();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());

        if !has_scheme || !has_host {
            return Err(ValidationError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

fn normalize_base_url(value: String) -> String {
    value.trim().trim_end_matches('/').to_owned()
}

fn parse_env<L, T>(lookup: &L, name: &'static str) -> Result<Option<T>, ValidationError>
where
    L: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ValidationError::InvalidEnvValue { name, value })
        })
        .transpose()
}
