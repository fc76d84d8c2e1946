use super::enums::CampaignType;
use super::planet::Planet;
use serde::{Deserialize, Serialize};

/// Active campaign from `/api/v1/campaigns`, carrying its planet inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub planet: Planet,
    #[serde(rename = "type", default)]
    pub campaign_type: i32,
    #[serde(default)]
    pub count: u64,
}

impl Campaign {
    pub fn kind(&self) -> Option<CampaignType> {
        CampaignType::parse(self.campaign_type)
    }

    pub fn liberation_percentage(&self) -> f64 {
        self.planet.liberation_percentage()
    }
}
