//! Declarative registry configuration
//!
//! A [`RegistryConfig`] is the ordered list of map names per category. It is
//! usually assembled from a package list, where each package contributes the
//! maps it needs:
//!
//! ```yaml
//! packages:
//!   - name: base
//!     character: [latin, digits]
//!     macro: [core]
//!   - name: greek
//!     character: [greek]
//! ```

use crate::tex::error::ConfigError;
use crate::tex::symbols::CategoryKind;
use serde::{Deserialize, Serialize};

/// Ordered map names per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub character: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delimiter: Vec<String>,
    #[serde(default, rename = "macro", skip_serializing_if = "Vec::is_empty")]
    pub macros: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append `names` to the list for `kind`
    pub fn with<I, S>(mut self, kind: CategoryKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names_mut(kind)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn names(&self, kind: CategoryKind) -> &[String] {
        match kind {
            CategoryKind::Character => &self.character,
            CategoryKind::Delimiter => &self.delimiter,
            CategoryKind::Macro => &self.macros,
            CategoryKind::Environment => &self.environment,
        }
    }

    fn names_mut(&mut self, kind: CategoryKind) -> &mut Vec<String> {
        match kind {
            CategoryKind::Character => &mut self.character,
            CategoryKind::Delimiter => &mut self.delimiter,
            CategoryKind::Macro => &mut self.macros,
            CategoryKind::Environment => &mut self.environment,
        }
    }

    /// Append every list of `other` after the matching list of `self`
    pub fn merge(&mut self, other: &RegistryConfig) {
        for kind in CategoryKind::ALL {
            self.names_mut(kind)
                .extend(other.names(kind).iter().cloned());
        }
    }

    pub fn is_empty(&self) -> bool {
        CategoryKind::ALL
            .iter()
            .all(|kind| self.names(*kind).is_empty())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Concatenate the packages' lists in package order
    pub fn from_packages(packages: &[Package]) -> Self {
        let mut config = Self::new();
        for package in packages {
            config.merge(&package.maps);
        }
        config
    }
}

/// A named bundle of maps, enabled as a unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(flatten)]
    pub maps: RegistryConfig,
}

impl Package {
    pub fn new(name: impl Into<String>, maps: RegistryConfig) -> Self {
        Self {
            name: name.into(),
            maps,
        }
    }
}

/// Top-level package list document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageList {
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl PackageList {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Only packages whose name is in `enabled`, in list order
    pub fn select(&self, enabled: &[&str]) -> Vec<&Package> {
        self.packages
            .iter()
            .filter(|package| enabled.contains(&package.name.as_str()))
            .collect()
    }

    pub fn to_config(&self) -> RegistryConfig {
        RegistryConfig::from_packages(&self.packages)
    }
}
