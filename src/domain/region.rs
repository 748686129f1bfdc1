// Region domain model - the closed set of selectable regions
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Region {
    #[default]
    AllInstances,
    Eu1,
    Eu2,
    Eu3,
    Eu4,
    Eu5,
    Am,
    Ap,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);

impl Region {
    /// Selector order, as shown in the tab strip.
    pub const ALL: [Region; 8] = [
        Region::AllInstances,
        Region::Eu1,
        Region::Eu2,
        Region::Eu3,
        Region::Eu4,
        Region::Eu5,
        Region::Am,
        Region::Ap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::AllInstances => "All Instances",
            Region::Eu1 => "EU1",
            Region::Eu2 => "EU2",
            Region::Eu3 => "EU3",
            Region::Eu4 => "EU4",
            Region::Eu5 => "EU5",
            Region::Am => "AM",
            Region::Ap => "AP",
        }
    }

    /// The region after this one in selector order, wrapping around.
    pub fn next(self) -> Region {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRegion(trimmed.to_string()))
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The region currently chosen in the selector.
///
/// Starts at the configured default and only changes through [`select`] or
/// [`cycle`]; it is never persisted.
///
/// [`select`]: RegionSelection::select
/// [`cycle`]: RegionSelection::cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionSelection {
    current: Region,
}

impl RegionSelection {
    pub fn new(initial: Region) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Region {
        self.current
    }

    pub fn select(&mut self, region: Region) {
        self.current = region;
    }

    pub fn cycle(&mut self) -> Region {
        self.current = self.current.next();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        for region in Region::ALL {
            assert_eq!(region.label().parse::<Region>().unwrap(), region);
        }
        assert_eq!("eu3".parse::<Region>().unwrap(), Region::Eu3);
        assert_eq!("all instances".parse::<Region>().unwrap(), Region::AllInstances);
    }

    #[test]
    fn test_parse_rejects_partial_regions() {
        assert_eq!("EU".parse::<Region>(), Err(UnknownRegion("EU".to_string())));
        assert!("AP1".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_parse_rejects_aliases() {
        for raw in ["all", "all_instances", "e-u-1", "E_U_1", "eu 1"] {
            assert_eq!(
                raw.parse::<Region>(),
                Err(UnknownRegion(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_selection_defaults_to_all_instances() {
        let selection = RegionSelection::default();
        assert_eq!(selection.current(), Region::AllInstances);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut selection = RegionSelection::new(Region::Am);
        assert_eq!(selection.cycle(), Region::Ap);
        assert_eq!(selection.cycle(), Region::AllInstances);
        assert_eq!(selection.cycle(), Region::Eu1);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Region::AllInstances).unwrap();
        assert_eq!(json, "\"All Instances\"");
        let region: Region = serde_json::from_str("\"EU5\"").unwrap();
        assert_eq!(region, Region::Eu5);
    }
}
