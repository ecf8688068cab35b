//! Named color categories per feature domain.
//!
//! Each domain has an ordered table of inclusive RGB boxes. Ranges overlap
//! and leave gaps; the first row containing a color wins, so row order is part
//! of the output contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, UNKNOWN_LABEL};

/// Feature whose palette a color is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorDomain {
    Hair,
    Skin,
    Eyes,
    Lips,
}

impl ColorDomain {
    pub const ALL: [ColorDomain; 4] = [
        ColorDomain::Hair,
        ColorDomain::Skin,
        ColorDomain::Eyes,
        ColorDomain::Lips,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorDomain::Hair => "hair",
            ColorDomain::Skin => "skin",
            ColorDomain::Eyes => "eyes",
            ColorDomain::Lips => "lips",
        }
    }

    /// The ordered category table for this domain.
    pub fn table(self) -> &'static [ColorRange] {
        match self {
            ColorDomain::Hair => HAIR_COLORS,
            ColorDomain::Skin => SKIN_TONES,
            ColorDomain::Eyes => EYE_COLORS,
            ColorDomain::Lips => LIP_COLORS,
        }
    }
}

impl fmt::Display for ColorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hair" => Ok(ColorDomain::Hair),
            "skin" => Ok(ColorDomain::Skin),
            "eyes" => Ok(ColorDomain::Eyes),
            "lips" => Ok(ColorDomain::Lips),
            _ => Err(format!("unknown color domain: {s}")),
        }
    }
}

/// One named category: an inclusive box in RGB space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub name: &'static str,
    pub min: [u8; 3],
    pub max: [u8; 3],
}

impl ColorRange {
    const fn new(name: &'static str, min: [u8; 3], max: [u8; 3]) -> Self {
        Self { name, min, max }
    }

    pub fn contains(&self, rgb: Rgb) -> bool {
        rgb.channels()
            .iter()
            .zip(self.min.iter().zip(self.max.iter()))
            .all(|(c, (lo, hi))| lo <= c && c <= hi)
    }
}

const HAIR_COLORS: &[ColorRange] = &[
    ColorRange::new("black", [0, 0, 0], [50, 50, 50]),
    ColorRange::new("brown", [51, 25, 0], [120, 80, 40]),
    ColorRange::new("blonde", [180, 150, 80], [255, 220, 150]),
    ColorRange::new("red", [120, 40, 20], [200, 100, 60]),
    ColorRange::new("gray", [100, 100, 100], [180, 180, 180]),
    ColorRange::new("white", [200, 200, 200], [255, 255, 255]),
];

const SKIN_TONES: &[ColorRange] = &[
    ColorRange::new("fair", [220, 180, 140], [255, 220, 180]),
    ColorRange::new("light", [200, 160, 120], [240, 200, 160]),
    ColorRange::new("medium", [160, 120, 80], [220, 170, 130]),
    ColorRange::new("olive", [140, 120, 80], [180, 150, 110]),
    ColorRange::new("tan", [120, 90, 60], [170, 130, 90]),
    ColorRange::new("dark", [80, 60, 40], [140, 110, 80]),
    ColorRange::new("deep", [40, 30, 20], [100, 80, 60]),
];

const EYE_COLORS: &[ColorRange] = &[
    ColorRange::new("blue", [100, 150, 200], [150, 200, 255]),
    ColorRange::new("green", [80, 120, 80], [120, 180, 120]),
    ColorRange::new("brown", [60, 40, 20], [120, 80, 50]),
    ColorRange::new("hazel", [100, 80, 40], [140, 120, 80]),
    ColorRange::new("gray", [120, 120, 120], [180, 180, 180]),
    ColorRange::new("amber", [180, 120, 40], [220, 160, 80]),
];

const LIP_COLORS: &[ColorRange] = &[
    ColorRange::new("pink", [200, 120, 140], [255, 180, 200]),
    ColorRange::new("red", [180, 80, 80], [255, 140, 140]),
    ColorRange::new("coral", [220, 140, 120], [255, 180, 160]),
    ColorRange::new("nude", [180, 140, 120], [220, 180, 160]),
    ColorRange::new("berry", [120, 60, 80], [180, 120, 140]),
];

/// Name of the first category in `domain` containing `rgb`, or `"unknown"`.
pub fn classify(rgb: Rgb, domain: ColorDomain) -> &'static str {
    domain
        .table()
        .iter()
        .find(|range| range.contains(rgb))
        .map_or(UNKNOWN_LABEL, |range| range.name)
}
