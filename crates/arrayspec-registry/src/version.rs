//! Specification versions: parsing, feature gating, and the version-derived
//! package layout.

use crate::error::RegistryError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Version threshold introducing the `fft` extension.
pub const FFT_MIN_VERSION: &str = "2022.12";

/// Version threshold introducing the `info` module.
pub const INFO_MIN_VERSION: &str = "2023.12";

/// An API specification version such as `2022.12`.
///
/// Ordering is plain string ordering, which is the version-ordering
/// convention of the specification package itself (`2023.12` > `2022.12`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ApiVersion(String);

impl ApiVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(year), Some(month), None)
                if !year.is_empty()
                    && !month.is_empty()
                    && year.bytes().all(|b| b.is_ascii_digit())
                    && month.bytes().all(|b| b.is_ascii_digit())
        );
        if !well_formed {
            return Err(RegistryError::InvalidVersion {
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

/// Which version-gated parts of the standard are active.
///
/// The single consultation point for every version threshold; components
/// never compare version literals themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGates {
    /// The `fft` extension is part of the standard.
    pub fft: bool,
    /// The `info` module is part of the standard.
    pub info: bool,
}

impl FeatureGates {
    pub fn for_version(version: &ApiVersion) -> Self {
        Self {
            fft: version.as_str() >= FFT_MIN_VERSION,
            info: version.as_str() >= INFO_MIN_VERSION,
        }
    }
}

/// The two version-derived directories a specification package must provide.
#[derive(Debug, Clone)]
pub struct SpecLayout {
    /// Human-readable specification documents.
    pub spec_dir: PathBuf,
    /// Machine-readable stub modules.
    pub stubs_dir: PathBuf,
}

impl SpecLayout {
    /// Resolve the layout under `root` and require both directories to exist.
    pub fn resolve(root: &Path, version: &ApiVersion) -> Result<Self, RegistryError> {
        let spec_dir = root
            .join("spec")
            .join(version.as_str())
            .join("API_specification");
        let stubs_dir = root.join("stubs").join(version.as_str());
        if !spec_dir.is_dir() {
            return Err(RegistryError::MissingSpecDir {
                path: spec_dir.display().to_string(),
            });
        }
        if !stubs_dir.is_dir() {
            return Err(RegistryError::MissingStubsDir {
                path: stubs_dir.display().to_string(),
            });
        }
        Ok(Self { spec_dir, stubs_dir })
    }
}
