pub mod adjust;
pub mod convert;
pub mod hue_saturation;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AstroError;

pub use convert::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, Component};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    #[default]
    Rgb,
    Hsv,
    Hsl,
}

impl ColorModel {
    pub fn to_rgb<T: Component>(self, color: [T; 3]) -> [T; 3] {
        match self {
            Self::Rgb => color,
            Self::Hsv => hsv_to_rgb(color),
            Self::Hsl => hsl_to_rgb(color),
        }
    }

    pub fn from_rgb<T: Component>(self, color: [T; 3]) -> [T; 3] {
        match self {
            Self::Rgb => color,
            Self::Hsv => rgb_to_hsv(color),
            Self::Hsl => rgb_to_hsl(color),
        }
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "rgb"),
            Self::Hsv => write!(f, "hsv"),
            Self::Hsl => write!(f, "hsl"),
        }
    }
}

impl FromStr for ColorModel {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(Self::Rgb),
            "hsv" => Ok(Self::Hsv),
            "hsl" => Ok(Self::Hsl),
            other => Err(AstroError::InvalidColorModel(other.to_string())),
        }
    }
}

/// Convert a colour between models, going through RGB.
pub fn convert<T: Component>(color: [T; 3], from: ColorModel, to: ColorModel) -> [T; 3] {
    if from == to {
        return color;
    }
    to.from_rgb(from.to_rgb(color))
}
