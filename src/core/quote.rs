//! Quote names and their mapping to labels and remote endpoints

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// One of the three dollar quotes published by the remote service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub enum QuoteName {
    #[serde(rename = "blue")]
    Blue,
    #[default]
    #[serde(rename = "oficial", alias = "official")]
    Official,
    #[serde(rename = "mep", alias = "bolsa")]
    Mep,
}

impl QuoteName {
    /// All quotes, in the order they are fetched and displayed.
    pub const ALL: [QuoteName; 3] = [QuoteName::Official, QuoteName::Blue, QuoteName::Mep];

    /// Human-readable name used to label results.
    pub fn label(&self) -> &'static str {
        match self {
            QuoteName::Blue => "Dólar Blue",
            QuoteName::Official => "Dólar Oficial",
            QuoteName::Mep => "Dólar MEP",
        }
    }

    /// Path segment of the quote on the remote service.
    pub fn endpoint_slug(&self) -> &'static str {
        match self {
            QuoteName::Blue => "blue",
            QuoteName::Official => "oficial",
            QuoteName::Mep => "bolsa",
        }
    }

    /// Key accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            QuoteName::Blue => "blue",
            QuoteName::Official => "oficial",
            QuoteName::Mep => "mep",
        }
    }
}

impl Display for QuoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for QuoteName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blue" => Ok(QuoteName::Blue),
            "oficial" | "official" => Ok(QuoteName::Official),
            "mep" | "bolsa" => Ok(QuoteName::Mep),
            _ => Err(anyhow::anyhow!(
                "Invalid quote: {} (expected one of: oficial, blue, mep)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_keys() {
        assert_eq!("blue".parse::<QuoteName>().unwrap(), QuoteName::Blue);
        assert_eq!("Oficial".parse::<QuoteName>().unwrap(), QuoteName::Official);
        assert_eq!("official".parse::<QuoteName>().unwrap(), QuoteName::Official);
        assert_eq!(" MEP ".parse::<QuoteName>().unwrap(), QuoteName::Mep);
        assert_eq!("bolsa".parse::<QuoteName>().unwrap(), QuoteName::Mep);
        assert!("cripto".parse::<QuoteName>().is_err());
    }

    #[test]
    fn test_mep_is_served_from_bolsa_endpoint() {
        assert_eq!(QuoteName::Mep.endpoint_slug(), "bolsa");
        assert_eq!(QuoteName::Mep.key(), "mep");
        assert_eq!(QuoteName::Mep.to_string(), "Dólar MEP");
    }

    #[test]
    fn test_default_is_official() {
        assert_eq!(QuoteName::default(), QuoteName::Official);
    }

    #[test]
    fn test_serde_keys() {
        let quote: QuoteName = serde_yaml::from_str("mep").unwrap();
        assert_eq!(quote, QuoteName::Mep);
        let quote: QuoteName = serde_yaml::from_str("official").unwrap();
        assert_eq!(quote, QuoteName::Official);
        assert_eq!(serde_yaml::to_string(&QuoteName::Blue).unwrap().trim(), "blue");
    }
}
