//! Closed category sets for each feature

use std::fmt;

use serde::{Deserialize, Serialize};

/// Eye shape category.
///
/// The first four are base shapes; `Upturned` and `Downturned` describe the
/// direction of the corner line and can combine with a base shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EyeShape {
    Almond,
    Round,
    Monolid,
    Hooded,
    Upturned,
    Downturned,
}

impl EyeShape {
    pub const ALL: [EyeShape; 6] = [
        EyeShape::Almond,
        EyeShape::Round,
        EyeShape::Monolid,
        EyeShape::Hooded,
        EyeShape::Upturned,
        EyeShape::Downturned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EyeShape::Almond => "Almond",
            EyeShape::Round => "Round",
            EyeShape::Monolid => "Monolid",
            EyeShape::Hooded => "Hooded",
            EyeShape::Upturned => "Upturned",
            EyeShape::Downturned => "Downturned",
        }
    }

    /// True for the corner-direction categories
    pub fn is_directional(self) -> bool {
        matches!(self, EyeShape::Upturned | EyeShape::Downturned)
    }

    /// Same shape seen in a horizontally mirrored image
    pub fn mirrored(self) -> Self {
        match self {
            EyeShape::Upturned => EyeShape::Downturned,
            EyeShape::Downturned => EyeShape::Upturned,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoseWidth {
    Narrow,
    Medium,
    Wide,
}

impl NoseWidth {
    pub fn as_str(self) -> &'static str {
        match self {
            NoseWidth::Narrow => "narrow",
            NoseWidth::Medium => "medium",
            NoseWidth::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LipFullness {
    Thin,
    Medium,
    Full,
}

impl LipFullness {
    pub fn as_str(self) -> &'static str {
        match self {
            LipFullness::Thin => "thin",
            LipFullness::Medium => "medium",
            LipFullness::Full => "full",
        }
    }
}

/// Relative thickness of the upper and lower lip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LipBalance {
    #[default]
    Balanced,
    SlightlyUpperDominant,
    SlightlyLowerDominant,
    UpperDominant,
    LowerDominant,
}

impl LipBalance {
    pub fn as_str(self) -> &'static str {
        match self {
            LipBalance::Balanced => "balanced",
            LipBalance::SlightlyUpperDominant => "slightly_upper_dominant",
            LipBalance::SlightlyLowerDominant => "slightly_lower_dominant",
            LipBalance::UpperDominant => "upper_dominant",
            LipBalance::LowerDominant => "lower_dominant",
        }
    }

    /// Human-readable form, e.g. "slightly upper dominant"
    pub fn words(self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn is_dominant(self) -> bool {
        self != LipBalance::Balanced
    }

    pub fn favors_upper(self) -> bool {
        matches!(self, LipBalance::SlightlyUpperDominant | LipBalance::UpperDominant)
    }

    pub fn favors_lower(self) -> bool {
        matches!(self, LipBalance::SlightlyLowerDominant | LipBalance::LowerDominant)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(EyeShape, NoseWidth, LipFullness, LipBalance);
