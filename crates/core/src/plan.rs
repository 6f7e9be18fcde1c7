//! Asset categories, customer plans, and the visibility table between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of financial asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    GovernmentBond,
    Equity,
    Crypto,
}

impl AssetCategory {
    pub const ALL: &'static [AssetCategory] = &[
        AssetCategory::GovernmentBond,
        AssetCategory::Equity,
        AssetCategory::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::GovernmentBond => "GOVERNMENT_BOND",
            AssetCategory::Equity => "EQUITY",
            AssetCategory::Crypto => "CRYPTO",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::BadRequest(format!("Unknown asset category '{s}'")))
    }
}

/// Customer subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    Normal,
    Premium,
}

/// Which categories each plan may see through the gated catalog.
///
/// One row per plan; adding a plan or category is a change to this table only.
const VISIBILITY: &[(Plan, &[AssetCategory])] = &[
    (Plan::Normal, &[AssetCategory::GovernmentBond]),
    (Plan::Premium, AssetCategory::ALL),
];

impl Plan {
    pub const ALL: &'static [Plan] = &[Plan::Normal, Plan::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Normal => "NORMAL",
            Plan::Premium => "PREMIUM",
        }
    }

    /// Categories visible to this plan.
    pub fn visible_categories(&self) -> &'static [AssetCategory] {
        VISIBILITY
            .iter()
            .find(|(plan, _)| plan == self)
            .map(|(_, categories)| *categories)
            .unwrap_or(&[])
    }

    pub fn can_see(&self, category: AssetCategory) -> bool {
        self.visible_categories().contains(&category)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::BadRequest(format!("Unknown plan '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_sees_only_government_bonds() {
        assert!(Plan::Normal.can_see(AssetCategory::GovernmentBond));
        assert!(!Plan::Normal.can_see(AssetCategory::Equity));
        assert!(!Plan::Normal.can_see(AssetCategory::Crypto));
    }

    #[test]
    fn premium_sees_everything() {
        for category in AssetCategory::ALL {
            assert!(Plan::Premium.can_see(*category));
        }
    }

    #[test]
    fn every_plan_has_a_visibility_row() {
        for plan in Plan::ALL {
            assert!(!plan.visible_categories().is_empty(), "{plan} has no row");
        }
    }

    #[test]
    fn string_forms_round_trip() {
        for category in AssetCategory::ALL {
            assert_eq!(category.as_str().parse::<AssetCategory>().unwrap(), *category);
        }
        assert_eq!("PREMIUM".parse::<Plan>().unwrap(), Plan::Premium);
        assert!("premium".parse::<Plan>().is_err());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&AssetCategory::GovernmentBond).unwrap();
        assert_eq!(json, "\"GOVERNMENT_BOND\"");
        let plan: Plan = serde_json::from_str("\"NORMAL\"").unwrap();
        assert_eq!(plan, Plan::Normal);
    }
}
