//! Ride provider definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ChoiceParseError;

/// Ride provider a fare is estimated for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Ola cabs.
    #[default]
    Ola,
    /// Uber.
    Uber,
    /// Namma Yatri.
    NammaYatri,
}

impl Provider {
    /// Returns the provider as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ola => "ola",
            Self::Uber => "uber",
            Self::NammaYatri => "namma_yatri",
        }
    }

    /// Returns the human-readable provider name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ola => "Ola",
            Self::Uber => "Uber",
            Self::NammaYatri => "Namma Yatri",
        }
    }

    /// Returns all providers in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ola, Self::Uber, Self::NammaYatri]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Provider {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();

        match normalized.as_str() {
            "ola" => Ok(Self::Ola),
            "uber" => Ok(Self::Uber),
            "nammayatri" | "namma" => Ok(Self::NammaYatri),
            _ => Err(ChoiceParseError::new(
                "provider",
                s,
                "ola, uber, namma-yatri",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!("ola".parse::<Provider>().unwrap(), Provider::Ola);
        assert_eq!("UBER".parse::<Provider>().unwrap(), Provider::Uber);
        assert_eq!(
            "namma-yatri".parse::<Provider>().unwrap(),
            Provider::NammaYatri
        );
        assert_eq!(
            "Namma Yatri".parse::<Provider>().unwrap(),
            Provider::NammaYatri
        );
        assert_eq!(
            "nammaYatri".parse::<Provider>().unwrap(),
            Provider::NammaYatri
        );
        assert!("rapido".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_serde_ids() {
        let json = serde_json::to_string(&Provider::NammaYatri).unwrap();
        assert_eq!(json, "\"namma_yatri\"");

        for provider in Provider::all() {
            let json = format!("\"{}\"", provider.as_str());
            let parsed: Provider = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *provider);
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Provider::NammaYatri.to_string(), "Namma Yatri");
        assert_eq!(Provider::default(), Provider::Ola);
    }
}
