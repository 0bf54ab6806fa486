//! Product-creation form and its enumerated choices.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Category;

/// Target consumer age bracket.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-60")]
    From46To60,
}

impl AgeGroup {
    /// All brackets in display order.
    pub const ALL: [Self; 4] = [
        Self::From18To25,
        Self::From26To35,
        Self::From36To45,
        Self::From46To60,
    ];

    /// Returns the label used on the wire and on screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::From18To25 => "18-25",
            Self::From26To35 => "26-35",
            Self::From36To45 => "36-45",
            Self::From46To60 => "46-60",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target market region.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    #[serde(rename = "Latin America")]
    LatinAmerica,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Self; 4] = [
        Self::NorthAmerica,
        Self::Europe,
        Self::AsiaPacific,
        Self::LatinAmerica,
    ];

    /// Returns the human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::LatinAmerica => "Latin America",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flavor profile tag.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flavor {
    Sweet,
    Spicy,
    Salty,
    Sour,
    Bitter,
    Umami,
    Fruity,
    Herbal,
}

impl Flavor {
    /// All flavors in display order.
    pub const ALL: [Self; 8] = [
        Self::Sweet,
        Self::Spicy,
        Self::Salty,
        Self::Sour,
        Self::Bitter,
        Self::Umami,
        Self::Fruity,
        Self::Herbal,
    ];

    /// Returns the human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sweet => "Sweet",
            Self::Spicy => "Spicy",
            Self::Salty => "Salty",
            Self::Sour => "Sour",
            Self::Bitter => "Bitter",
            Self::Umami => "Umami",
            Self::Fruity => "Fruity",
            Self::Herbal => "Herbal",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers collected by the product-creation wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WizardForm {
    /// Step 1 answer.
    pub category: Option<Category>,
    /// Step 2 answer.
    pub age_group: Option<AgeGroup>,
    /// Step 2 answer.
    pub region: Option<Region>,
    /// Step 3 answers; at least one is required to fetch suggestions.
    #[serde(default)]
    pub flavors: BTreeSet<Flavor>,
}

impl WizardForm {
    /// Adds the flavor if absent, removes it otherwise. Returns whether it is
    /// now selected.
    pub fn toggle_flavor(&mut self, flavor: Flavor) -> bool {
        if self.flavors.remove(&flavor) {
            false
        } else {
            self.flavors.insert(flavor);
            true
        }
    }

    /// Returns whether the flavor is selected.
    #[must_use]
    pub fn has_flavor(&self, flavor: Flavor) -> bool {
        self.flavors.contains(&flavor)
    }

    /// Returns true when no field has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.age_group.is_none()
            && self.region.is_none()
            && self.flavors.is_empty()
    }
}
