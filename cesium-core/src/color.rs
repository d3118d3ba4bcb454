use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::literal::{js_number, js_number_args};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("unknown color name: {0}")]
    UnknownName(String),
    #[error("color component {component} must be within [0, 1]: {value}")]
    ComponentOutOfRange { component: &'static str, value: f64 },
}

/// Cesium 预定义颜色表（`Cesium.Color.*` 常量名）。
const NAMED_COLORS: &[&str] = &[
    "ALICEBLUE", "ANTIQUEWHITE", "AQUA", "AQUAMARINE", "AZURE", "BEIGE", "BISQUE", "BLACK",
    "BLANCHEDALMOND", "BLUE", "BLUEVIOLET", "BROWN", "BURLYWOOD", "CADETBLUE", "CHARTREUSE",
    "CHOCOLATE", "CORAL", "CORNFLOWERBLUE", "CORNSILK", "CRIMSON", "CYAN", "DARKBLUE",
    "DARKCYAN", "DARKGOLDENROD", "DARKGRAY", "DARKGREEN", "DARKGREY", "DARKKHAKI",
    "DARKMAGENTA", "DARKOLIVEGREEN", "DARKORANGE", "DARKORCHID", "DARKRED", "DARKSALMON",
    "DARKSEAGREEN", "DARKSLATEBLUE", "DARKSLATEGRAY", "DARKSLATEGREY", "DARKTURQUOISE",
    "DARKVIOLET", "DEEPPINK", "DEEPSKYBLUE", "DIMGRAY", "DIMGREY", "DODGERBLUE", "FIREBRICK",
    "FLORALWHITE", "FORESTGREEN", "FUCHSIA", "GAINSBORO", "GHOSTWHITE", "GOLD", "GOLDENROD",
    "GRAY", "GREEN", "GREENYELLOW", "GREY", "HONEYDEW", "HOTPINK", "INDIANRED", "INDIGO",
    "IVORY", "KHAKI", "LAVENDER", "LAVENDAR_BLUSH", "LAWNGREEN", "LEMONCHIFFON", "LIGHTBLUE",
    "LIGHTCORAL", "LIGHTCYAN", "LIGHTGOLDENRODYELLOW", "LIGHTGRAY", "LIGHTGREEN", "LIGHTGREY",
    "LIGHTPINK", "LIGHTSEAGREEN", "LIGHTSKYBLUE", "LIGHTSLATEGRAY", "LIGHTSLATEGREY",
    "LIGHTSTEELBLUE", "LIGHTYELLOW", "LIME", "LIMEGREEN", "LINEN", "MAGENTA", "MAROON",
    "MEDIUMAQUAMARINE", "MEDIUMBLUE", "MEDIUMORCHID", "MEDIUMPURPLE", "MEDIUMSEAGREEN",
    "MEDIUMSLATEBLUE", "MEDIUMSPRINGGREEN", "MEDIUMTURQUOISE", "MEDIUMVIOLETRED",
    "MIDNIGHTBLUE", "MINTCREAM", "MISTYROSE", "MOCCASIN", "NAVAJOWHITE", "NAVY", "OLDLACE",
    "OLIVE", "OLIVEDRAB", "ORANGE", "ORANGERED", "ORCHID", "PALEGOLDENROD", "PALEGREEN",
    "PALETURQUOISE", "PALEVIOLETRED", "PAPAYAWHIP", "PEACHPUFF", "PERU", "PINK", "PLUM",
    "POWDERBLUE", "PURPLE", "RED", "ROSYBROWN", "ROYALBLUE", "SADDLEBROWN", "SALMON",
    "SANDYBROWN", "SEAGREEN", "SEASHELL", "SIENNA", "SILVER", "SKYBLUE", "SLATEBLUE",
    "SLATEGRAY", "SLATEGREY", "SNOW", "SPRINGGREEN", "STEELBLUE", "TAN", "TEAL", "THISTLE",
    "TOMATO", "TURQUOISE", "VIOLET", "WHEAT", "WHITE", "WHITESMOKE", "YELLOW", "YELLOWGREEN",
    "TRANSPARENT",
];

/// 颜色值：Cesium 具名常量（可附加透明度）或归一化 RGBA 分量。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Color {
    Named {
        name: &'static str,
        alpha: Option<f64>,
    },
    Rgba {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
}

impl Color {
    pub const WHITE: Color = Color::constant("WHITE");
    pub const BLACK: Color = Color::constant("BLACK");
    pub const RED: Color = Color::constant("RED");
    pub const GREEN: Color = Color::constant("GREEN");
    pub const BLUE: Color = Color::constant("BLUE");
    pub const YELLOW: Color = Color::constant("YELLOW");
    pub const ORANGE: Color = Color::constant("ORANGE");
    pub const PURPLE: Color = Color::constant("PURPLE");
    pub const CYAN: Color = Color::constant("CYAN");
    pub const MAGENTA: Color = Color::constant("MAGENTA");
    pub const GRAY: Color = Color::constant("GRAY");
    pub const TRANSPARENT: Color = Color::constant("TRANSPARENT");

    const fn constant(name: &'static str) -> Self {
        Color::Named { name, alpha: None }
    }

    /// 按名称查找预定义颜色，大小写不敏感。
    pub fn named(name: &str) -> Result<Self, ColorError> {
        NAMED_COLORS
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|candidate| Color::constant(*candidate))
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, ColorError> {
        let color = Color::Rgba {
            red,
            green,
            blue,
            alpha,
        };
        color.validate()?;
        Ok(color)
    }

    #[inline]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        Self::rgba(red, green, blue, 1.0)
    }

    /// 0..=255 的字节分量。
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let scale = |value: u8| f64::from(value) / 255.0;
        Color::Rgba {
            red: scale(red),
            green: scale(green),
            blue: scale(blue),
            alpha: scale(alpha),
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        match self {
            Color::Named { name, .. } => Color::Named {
                name,
                alpha: Some(alpha),
            },
            Color::Rgba {
                red, green, blue, ..
            } => Color::Rgba {
                red,
                green,
                blue,
                alpha,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ColorError> {
        match *self {
            Color::Named { name, alpha } => {
                if !NAMED_COLORS.contains(&name) {
                    return Err(ColorError::UnknownName(name.to_string()));
                }
                if let Some(alpha) = alpha {
                    check_component("alpha", alpha)?;
                }
                Ok(())
            }
            Color::Rgba {
                red,
                green,
                blue,
                alpha,
            } => {
                check_component("red", red)?;
                check_component("green", green)?;
                check_component("blue", blue)?;
                check_component("alpha", alpha)
            }
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn check_component(component: &'static str, value: f64) -> Result<(), ColorError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::ComponentOutOfRange { component, value })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Named { name, alpha: None } => write!(f, "Cesium.Color.{name}"),
            Color::Named {
                name,
                alpha: Some(alpha),
            } => write!(f, "Cesium.Color.{name}.withAlpha({})", js_number(alpha)),
            Color::Rgba {
                red,
                green,
                blue,
                alpha,
            } => write!(
                f,
                "new Cesium.Color({})",
                js_number_args(&[red, green, blue, alpha])
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(Color::named("red").unwrap(), Color::RED);
        assert_eq!(Color::named("AliceBlue").unwrap().to_string(), "Cesium.Color.ALICEBLUE");
        assert_eq!(
            Color::named("notacolor").unwrap_err(),
            ColorError::UnknownName("notacolor".to_string())
        );
    }

    #[test]
    fn text_forms() {
        assert_eq!(Color::RED.to_string(), "Cesium.Color.RED");
        assert_eq!(
            Color::BLUE.with_alpha(0.5).to_string(),
            "Cesium.Color.BLUE.withAlpha(0.5)"
        );
        assert_eq!(
            Color::rgba(1.0, 0.0, 0.0, 0.25).unwrap().to_string(),
            "new Cesium.Color(1.0, 0.0, 0.0, 0.25)"
        );
        assert_eq!(
            Color::from_bytes(255, 0, 255, 255).to_string(),
            "new Cesium.Color(1.0, 0.0, 1.0, 1.0)"
        );
    }

    #[test]
    fn validity_predicate_rejects_out_of_range_components() {
        assert!(Color::rgb(0.2, 0.4, 0.6).is_ok());
        assert_eq!(
            Color::rgba(1.5, 0.0, 0.0, 1.0).unwrap_err(),
            ColorError::ComponentOutOfRange {
                component: "red",
                value: 1.5
            }
        );
        assert!(!Color::RED.with_alpha(2.0).is_valid());
        let hand_built = Color::Named {
            name: "NOPE",
            alpha: None,
        };
        assert!(!hand_built.is_valid());
    }
}
