//! Color values and color scales.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Color attribute value.
///
/// Serializes to the CSS string forms the rendering engine accepts:
/// `rgb(r,g,b)`, `rgba(r,g,b,a)`, `#rrggbb` or a named color literal.
///
/// # Example
///
/// ```rust
/// use plotly_schema::Color;
///
/// let line = Color::Rgb(31, 119, 180);
/// assert_eq!(serde_json::to_string(&line).unwrap(), "\"rgb(31, 119, 180)\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    /// 24-bit value interpreted as `0xRRGGBB`.
    Hex(u32),
    /// Named CSS color or any pre-formatted color string.
    Css(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0.0);
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Color::Rgb(r, g, b) => {
                serializer.collect_str(&format_args!("rgb({}, {}, {})", r, g, b))
            }
            Color::Rgba(r, g, b, a) => {
                serializer.collect_str(&format_args!("rgba({}, {}, {}, {})", r, g, b, a))
            }
            Color::Hex(value) => {
                serializer.collect_str(&format_args!("#{:06x}", value & 0x00FF_FFFF))
            }
            Color::Css(name) => serializer.serialize_str(name),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Css(name.to_string())
    }
}

/// Built-in color scale palette. Serializes to the palette name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Palette {
    Greys,
    YlGnBu,
    Greens,
    YlOrRd,
    Bluered,
    RdBu,
    Reds,
    Blues,
    Picnic,
    Rainbow,
    Portland,
    Jet,
    Hot,
    Blackbody,
    Earth,
    Electric,
    Viridis,
    Cividis,
}

/// Color scale attribute: either a built-in palette name or an explicit list
/// of `(normalized level, color)` stops covering at least levels 0 and 1.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    Palette(Palette),
    Custom(Vec<(f64, Color)>),
}

impl Serialize for ColorScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ColorScale::Palette(palette) => palette.serialize(serializer),
            ColorScale::Custom(stops) => {
                let mut seq = serializer.serialize_seq(Some(stops.len()))?;
                for stop in stops {
                    seq.serialize_element(stop)?;
                }
                seq.end()
            }
        }
    }
}

impl From<Palette> for ColorScale {
    fn from(palette: Palette) -> Self {
        ColorScale::Palette(palette)
    }
}

/// Marker coloring: either one concrete color or an array of numbers mapped
/// through the trace's color scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coloring {
    Color(Color),
    Numeric(Vec<f64>),
}

impl From<Color> for Coloring {
    fn from(color: Color) -> Self {
        Coloring::Color(color)
    }
}

impl From<Vec<f64>> for Coloring {
    fn from(values: Vec<f64>) -> Self {
        Coloring::Numeric(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_string_forms() {
        assert_eq!(
            serde_json::to_string(&Color::Rgb(255, 0, 128)).unwrap(),
            "\"rgb(255, 0, 128)\""
        );
        assert_eq!(
            serde_json::to_string(&Color::Rgba(255, 0, 128, 0.5)).unwrap(),
            "\"rgba(255, 0, 128, 0.5)\""
        );
        assert_eq!(
            serde_json::to_string(&Color::Hex(0x1F77B4)).unwrap(),
            "\"#1f77b4\""
        );
        assert_eq!(
            serde_json::to_string(&Color::from("steelblue")).unwrap(),
            "\"steelblue\""
        );
    }

    #[test]
    fn test_hex_masks_to_24_bits() {
        assert_eq!(
            serde_json::to_string(&Color::Hex(0xFF00_00FF)).unwrap(),
            "\"#0000ff\""
        );
    }

    #[test]
    fn test_palette_serializes_to_exact_name() {
        assert_eq!(serde_json::to_string(&Palette::YlGnBu).unwrap(), "\"YlGnBu\"");
        assert_eq!(serde_json::to_string(&Palette::RdBu).unwrap(), "\"RdBu\"");
    }

    #[test]
    fn test_custom_scale_serializes_as_stop_pairs() {
        let scale = ColorScale::Custom(vec![
            (0.0, Color::Rgb(0, 0, 255)),
            (1.0, Color::Rgb(255, 0, 0)),
        ]);
        assert_eq!(
            serde_json::to_string(&scale).unwrap(),
            r#"[[0.0,"rgb(0, 0, 255)"],[1.0,"rgb(255, 0, 0)"]]"#
        );
    }
}
