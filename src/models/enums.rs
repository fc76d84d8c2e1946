//! Integer codes used by the upstream APIs.
//!
//! Every enum converts with `TryFrom<i32>` (the unknown code is returned as the
//! error) and offers a lenient `parse` returning `None` for unknown codes.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Any,
    Humans,
    Terminids,
    Automaton,
    Illuminate,
}

impl Faction {
    pub fn parse(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }

    /// Parses the faction names used by the community API (`"Humans"`, `"Automaton"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "any" => Some(Faction::Any),
            "humans" | "human" => Some(Faction::Humans),
            "terminids" | "terminid" => Some(Faction::Terminids),
            "automaton" | "automatons" => Some(Faction::Automaton),
            "illuminate" => Some(Faction::Illuminate),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Faction::Any => "Any",
            Faction::Humans => "Humans",
            Faction::Terminids => "Terminids",
            Faction::Automaton => "Automaton",
            Faction::Illuminate => "Illuminate",
        }
    }
}

impl TryFrom<i32> for Faction {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Faction::Any),
            1 => Ok(Faction::Humans),
            2 => Ok(Faction::Terminids),
            3 => Ok(Faction::Automaton),
            4 => Ok(Faction::Illuminate),
            other => Err(other),
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignType {
    LiberationDefense,
    Recon,
    Story,
}

impl CampaignType {
    pub fn parse(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

impl TryFrom<i32> for CampaignType {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CampaignType::LiberationDefense),
            1 => Ok(CampaignType::Recon),
            2 => Ok(CampaignType::Story),
            other => Err(other),
        }
    }
}

/// Meaning of a value inside a major order task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Race,
    Unknown,
    Goal,
    Liberate,
    PlanetIndex,
}

impl ValueType {
    pub fn parse(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

impl TryFrom<i32> for ValueType {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ValueType::Race),
            2 => Ok(ValueType::Unknown),
            3 => Ok(ValueType::Goal),
            11 => Ok(ValueType::Liberate),
            12 => Ok(ValueType::PlanetIndex),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    Medals,
}

impl RewardType {
    pub fn parse(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

impl TryFrom<i32> for RewardType {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(RewardType::Medals),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajorOrderType {
    Eradicate,
    Liberation,
    Defense,
    Control,
}

impl MajorOrderType {
    pub fn parse(code: i32) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

impl TryFrom<i32> for MajorOrderType {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            3 => Ok(MajorOrderType::Eradicate),
            11 => Ok(MajorOrderType::Liberation),
            12 => Ok(MajorOrderType::Defense),
            13 => Ok(MajorOrderType::Control),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_codes() {
        assert_eq!(Faction::parse(0), Some(Faction::Any));
        assert_eq!(Faction::parse(2), Some(Faction::Terminids));
        assert_eq!(Faction::parse(4), Some(Faction::Illuminate));
        assert_eq!(Faction::parse(5), None);
        assert_eq!(Faction::try_from(-1), Err(-1));
    }

    #[test]
    fn test_faction_names() {
        assert_eq!(Faction::from_name("Automaton"), Some(Faction::Automaton));
        assert_eq!(Faction::from_name(" humans "), Some(Faction::Humans));
        assert_eq!(Faction::from_name("Squids"), None);
        assert_eq!(Faction::Terminids.to_string(), "Terminids");
    }

    #[test]
    fn test_value_type_codes() {
        assert_eq!(ValueType::parse(1), Some(ValueType::Race));
        assert_eq!(ValueType::parse(12), Some(ValueType::PlanetIndex));
        assert_eq!(ValueType::parse(4), None);
    }

    #[test]
    fn test_major_order_and_campaign_codes() {
        assert_eq!(MajorOrderType::parse(3), Some(MajorOrderType::Eradicate));
        assert_eq!(MajorOrderType::parse(13), Some(MajorOrderType::Control));
        assert_eq!(MajorOrderType::parse(1), None);
        assert_eq!(CampaignType::parse(1), Some(CampaignType::Recon));
        assert_eq!(RewardType::parse(1), Some(RewardType::Medals));
        assert_eq!(RewardType::parse(2), None);
    }
}
