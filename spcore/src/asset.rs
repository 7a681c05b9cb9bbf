use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
};

use crate::error::UnknownDeployment;

/// Base path used when the site is published under the project pages.
pub const PRODUCTION_BASE_PATH: &str = "/smartpath.github.io";

/// The deployment target the site is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deployment {
    #[default]
    Development,
    Production,
}

impl Deployment {
    /// Resolves the deployment selected at build time through the
    /// `SMARTPATH_DEPLOYMENT` environment variable.  Unset or unknown
    /// values fall back to `Development`.
    pub fn from_build_env() -> Self {
        Self::from_option(option_env!("SMARTPATH_DEPLOYMENT"))
    }

    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::parse::<Self>) {
            Some(Ok(deployment)) => deployment,
            Some(Err(e)) => {
                log::warn!("{e}; falling back to development");
                Self::Development
            }
            None => Self::Development,
        }
    }

    pub fn base_path(&self) -> &'static str {
        match self {
            Self::Development => "",
            Self::Production => PRODUCTION_BASE_PATH,
        }
    }

    pub fn asset_prefix(&self) -> AssetPrefix {
        AssetPrefix::new(self.base_path())
    }
}

impl FromStr for Deployment {
    type Err = UnknownDeployment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(UnknownDeployment(s.to_string())),
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Prefix applied uniformly to every static asset reference.
///
/// The stored base never ends with a slash and, when non-empty, always
/// starts with one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPrefix(String);

impl AssetPrefix {
    pub fn new(base: impl AsRef<str>) -> Self {
        let trimmed = base.as_ref().trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn base(&self) -> &str {
        &self.0
    }

    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl From<Deployment> for AssetPrefix {
    fn from(value: Deployment) -> Self {
        value.asset_prefix()
    }
}

impl fmt::Display for AssetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
