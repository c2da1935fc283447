use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Rounding applied to the match percentage
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PercentRounding {
    /// Nearest integer, halves rounded up (2 of 3 is 67%)
    #[default]
    HalfUp,
    /// Round down (2 of 3 is 66%)
    Floor,
    /// Round up (1 of 3 is 34%)
    Ceil,
}

impl PercentRounding {
    /// `part / whole` as an integer percentage
    ///
    /// A recipe requiring nothing is fully covered, so `whole == 0` gives 100.
    pub fn percentage(self, part: usize, whole: usize) -> u8 {
        if whole == 0 {
            return 100;
        }

        let part = part.min(whole) as u64;
        let whole = whole as u64;

        let percent = match self {
            PercentRounding::HalfUp => (200 * part + whole) / (2 * whole),
            PercentRounding::Floor => 100 * part / whole,
            PercentRounding::Ceil => (100 * part).div_ceil(whole),
        };

        u8::try_from(percent).unwrap_or(100)
    }
}

/// Tunable parameters of recipe matching and ranking
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchSettings {
    #[serde(default)]
    pub rounding: PercentRounding,
    /// Score added per waste-prone inventory item a recipe uses up
    #[serde(default = "default_waste_prone_weight")]
    pub waste_prone_weight: f32,
    /// Score added per inventory item close to its expiration date a recipe uses up
    #[serde(default = "default_expiring_soon_weight")]
    pub expiring_soon_weight: f32,
    /// Items expiring within this many days count as expiring soon
    #[serde(default = "default_expiring_within_days")]
    pub expiring_within_days: u32,
    /// Recipes below this match percentage are dropped from recommendations
    #[serde(default)]
    pub min_match_percentage: u8,
    /// Attach a substitution to each missing ingredient
    #[serde(default = "default_suggest_substitutes")]
    pub suggest_substitutes: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            rounding: PercentRounding::default(),
            waste_prone_weight: default_waste_prone_weight(),
            expiring_soon_weight: default_expiring_soon_weight(),
            expiring_within_days: default_expiring_within_days(),
            min_match_percentage: 0,
            suggest_substitutes: default_suggest_substitutes(),
        }
    }
}

fn default_waste_prone_weight() -> f32 {
    10.0
}

fn default_expiring_soon_weight() -> f32 {
    15.0
}

fn default_expiring_within_days() -> u32 {
    3
}

fn default_suggest_substitutes() -> bool {
    true
}

impl MatchSettings {
    /// Weights must be finite and non-negative so using up perishables can only
    /// raise a recipe's rank
    pub fn validate(&self) -> Result<(), String> {
        if !self.waste_prone_weight.is_finite() || self.waste_prone_weight < 0.0 {
            return Err("Waste-prone weight must be a non-negative number".to_owned());
        }
        if !self.expiring_soon_weight.is_finite() || self.expiring_soon_weight < 0.0 {
            return Err("Expiring-soon weight must be a non-negative number".to_owned());
        }
        if self.min_match_percentage > 100 {
            return Err("Minimum match percentage must be between 0 and 100".to_owned());
        }
        Ok(())
    }
}
