//! Per-provider pricing table for the farecast ride fare estimator.
//!
//! The default table ships embedded in the binary. Callers that need other
//! rates (tests, what-if comparisons, a `--pricing` file on the command line)
//! build their own [`PricingTable`] and hand it to the estimator.
//!
//! # Example
//!
//! ```
//! use farecast_pricing::PricingTable;
//! use farecast_types::Provider;
//!
//! let table = PricingTable::global();
//!
//! if let Some(profile) = table.get(Provider::Uber) {
//!     println!("{}: base fare {}", profile.display_name(), profile.base_fare());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/farecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use farecast_types::{PricingProfile, Provider};
use serde::Deserialize;

pub use error::{PricingError, Result};

/// The pricing table JSON embedded at compile time.
const PRICING_JSON: &str = include_str!("../data/pricing.json");

/// Global pricing table instance.
static TABLE: OnceLock<PricingTable> = OnceLock::new();

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawPricingTable {
    providers: HashMap<String, RawProfile>,
}

/// Raw pricing profile from JSON.
#[derive(Debug, Deserialize)]
struct RawProfile {
    display_name: Option<String>,
    base_fare: f64,
    per_km: f64,
    per_minute: f64,
}

/// Pricing profiles keyed by provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTable {
    profiles: BTreeMap<Provider, PricingProfile>,
}

impl PricingTable {
    /// Returns the global pricing table.
    ///
    /// The table is parsed lazily from the embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        TABLE.get_or_init(|| {
            Self::from_json(PRICING_JSON).expect("embedded pricing.json should be valid")
        })
    }

    /// Parses a pricing table from a JSON string.
    ///
    /// Provider keys accept the same spellings as [`Provider`]'s `FromStr`
    /// implementation. A missing `display_name` falls back to the provider's
    /// own name.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown provider,
    /// or contains a negative or non-finite rate.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawPricingTable = serde_json::from_str(json)?;

        let profiles = raw
            .providers
            .into_iter()
            .map(|(key, raw_profile)| {
                let provider: Provider = key
                    .parse()
                    .map_err(|_| PricingError::UnknownProvider(key.clone()))?;
                let display_name = raw_profile
                    .display_name
                    .unwrap_or_else(|| provider.display_name().to_string());
                let profile = PricingProfile::new(
                    display_name,
                    raw_profile.base_fare,
                    raw_profile.per_km,
                    raw_profile.per_minute,
                );
                Ok((provider, profile))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_profiles(profiles)
    }

    /// Loads a pricing table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not a
    /// valid pricing table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PricingError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), providers = table.len(), "loaded pricing table");
        Ok(table)
    }

    /// Builds a pricing table from explicit profiles.
    ///
    /// Later entries for the same provider replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if any profile has a negative or non-finite rate.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = (Provider, PricingProfile)>,
    ) -> Result<Self> {
        let mut table = BTreeMap::new();
        for (provider, profile) in profiles {
            profile
                .check_rates()
                .map_err(|source| PricingError::InvalidProfile { provider, source })?;
            table.insert(provider, profile);
        }
        Ok(Self { profiles: table })
    }

    /// Looks up the profile for a provider.
    #[must_use]
    pub fn get(&self, provider: Provider) -> Option<&PricingProfile> {
        self.profiles.get(&provider)
    }

    /// Looks up the profile for a provider, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::MissingProvider`] if the table has no profile
    /// for `provider`.
    pub fn profile(&self, provider: Provider) -> Result<&PricingProfile> {
        self.get(provider)
            .ok_or(PricingError::MissingProvider(provider))
    }

    /// Returns all providers and their profiles in provider order.
    pub fn iter(&self) -> impl Iterator<Item = (Provider, &PricingProfile)> {
        self.profiles.iter().map(|(provider, profile)| (*provider, profile))
    }

    /// Returns the providers present in the table.
    pub fn providers(&self) -> impl Iterator<Item = Provider> + '_ {
        self.profiles.keys().copied()
    }

    /// Returns the number of profiles in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if the table has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::global().clone()
    }
}
