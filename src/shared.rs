//! Attribute records and enumerations shared between trace types.

use serde::Serialize;

use crate::color::Color;
use crate::options::options;
use crate::value::{ArrayOk, InfoArray};

/// Trace visibility. `LegendOnly` keeps the legend entry without drawing the
/// trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visible {
    True,
    False,
    LegendOnly,
}

/// Calendar system for date-valued coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Gregorian,
    Chinese,
    Coptic,
    DiscWorld,
    Ethiopian,
    Hebrew,
    Islamic,
    Julian,
    Mayan,
    Nanakshahi,
    Nepali,
    Persian,
    Jalali,
    Taiwan,
    Thai,
    UmmAlQura,
}

/// Rule converting numerical marker sizes to rendered pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    Diameter,
    Area,
}

/// Position of text elements relative to their data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextPosition {
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "middle left")]
    MiddleLeft,
    #[serde(rename = "middle center")]
    MiddleCenter,
    #[serde(rename = "middle right")]
    MiddleRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom center")]
    BottomCenter,
    #[serde(rename = "bottom right")]
    BottomRight,
}

/// Horizontal alignment of multi-line hover label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Auto,
}

/// Horizontal anchor binding an `x` position to a side of the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

/// Vertical anchor binding a `y` position to a side of the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

/// Whether a measure is given in plot fraction or in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    Fraction,
    Pixels,
}

/// How tick placement is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    Auto,
    Linear,
    Array,
}

/// Whether ticks are drawn, and on which side of the axis line.
///
/// The "not drawn" choice is the literal empty string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickDrawMode {
    #[serde(rename = "outside")]
    Outside,
    #[serde(rename = "inside")]
    Inside,
    #[serde(rename = "")]
    None,
}

/// Which tick labels carry a prefix/suffix/exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Show {
    All,
    First,
    Last,
    None,
}

/// Formatting rule for tick exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExponentFormat {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "e")]
    SmallE,
    #[serde(rename = "E")]
    CapitalE,
    #[serde(rename = "power")]
    Power,
    #[serde(rename = "SI")]
    SI,
    #[serde(rename = "B")]
    B,
}

/// Location of a color bar title relative to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSide {
    Right,
    Top,
    Bottom,
}

options! {
    /// Drawing mode of a scatter-like trace. If the mode includes `TEXT`,
    /// text elements appear at the coordinates, otherwise on hover.
    pub struct Mode {
        LINES = 0 => "lines",
        MARKERS = 1 => "markers",
        TEXT = 2 => "text",
        NONE = 3 => "none",
    }
}

/// Font settings.
///
/// # Example
///
/// ```rust
/// use plotly_schema::Font;
///
/// let font = Font::new().with_family("Courier New").with_size(12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Font {
    /// HTML font family. Multiple comma-separated families express fallback
    /// preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Style of the hover labels shown for a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct HoverLabel {
    /// Background color of the hover labels.
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ArrayOk<Color>>,
    /// Border color of the hover labels.
    #[serde(rename = "bordercolor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ArrayOk<Color>>,
    /// Font used in the hover labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Horizontal alignment of the label text when it spans multiple lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<ArrayOk<Align>>,
    /// Length limit (in characters) of the trace name in hover labels.
    /// -1 shows the whole name.
    #[serde(rename = "namelength", skip_serializing_if = "Option::is_none")]
    pub name_length: Option<ArrayOk<i64>>,
}

impl HoverLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

/// Link between a trace and a live data stream.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Stream {
    /// Stream id that links the trace with an incoming stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Maximum number of points kept on the plot from the stream.
    #[serde(rename = "maxpoints", skip_serializing_if = "Option::is_none")]
    pub max_points: Option<f64>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Declarative operation applied to the trace data before drawing, for
/// example filtering or sorting. Carried opaquely; serializes as an object.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Transform {}

/// Line style.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Line width in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// Title of a color bar.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TitleSide>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Legacy color bar title attributes, superseded by [`Title`]. Kept as a
/// plain fallback group; no precedence over the replacement is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DeprecatedTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "titlefont", skip_serializing_if = "Option::is_none")]
    pub title_font: Option<Font>,
    #[serde(rename = "titleside", skip_serializing_if = "Option::is_none")]
    pub title_side: Option<TitleSide>,
}

/// One zoom-level-dependent tick format rule.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TickFormatStop {
    /// Whether this stop is used. If `false` the stop is ignored even inside
    /// its `dtickrange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `[min, max]` dtick values describing the zoom level this stop covers.
    #[serde(rename = "dtickrange", skip_serializing_if = "Option::is_none")]
    pub d_tick_range: Option<InfoArray>,
    /// The tick format applied inside the range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Refers to a named item of a template.
    #[serde(rename = "templateitemname", skip_serializing_if = "Option::is_none")]
    pub template_item_name: Option<String>,
}

/// Color bar attached to a continuously colored trace.
///
/// Carries its own tick machinery, mirroring axis tick settings.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ColorBar {
    /// Whether `thickness` is measured in plot fraction or pixels.
    #[serde(rename = "thicknessmode", skip_serializing_if = "Option::is_none")]
    pub thickness_mode: Option<MeasureMode>,
    /// Thickness in the constant-color direction, excluding padding, ticks
    /// and labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Whether `len` is measured in plot fraction or pixels.
    #[serde(rename = "lenmode", skip_serializing_if = "Option::is_none")]
    pub length_mode: Option<MeasureMode>,
    /// Length in the color-variation direction, excluding end padding.
    #[serde(rename = "len", skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Horizontal position in plot fraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(rename = "xanchor", skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<XAnchor>,
    /// Padding along x in px.
    #[serde(rename = "xpad", skip_serializing_if = "Option::is_none")]
    pub x_padding: Option<f64>,
    /// Vertical position in plot fraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "yanchor", skip_serializing_if = "Option::is_none")]
    pub y_anchor: Option<YAnchor>,
    /// Padding along y in px.
    #[serde(rename = "ypad", skip_serializing_if = "Option::is_none")]
    pub y_padding: Option<f64>,
    #[serde(rename = "outlinecolor", skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<Color>,
    #[serde(rename = "outlinewidth", skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(rename = "bordercolor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Width of the border enclosing the color bar, in px.
    #[serde(rename = "borderwidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Color of the padded area.
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    pub tick_mode: Option<TickMode>,
    /// Upper bound on the number of ticks when `tickmode` is `auto`.
    #[serde(rename = "nticks", skip_serializing_if = "Option::is_none")]
    pub n_ticks: Option<i64>,
    /// Placement of the first tick. Use with `dtick`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<crate::value::Any>,
    /// Step between ticks. Accepts numbers as well as the special log/date
    /// strings (`L<f>`, `D1`, `D2`, `M<n>`).
    #[serde(rename = "dtick", skip_serializing_if = "Option::is_none")]
    pub d_tick: Option<crate::value::Any>,
    /// Explicit tick positions when `tickmode` is `array`.
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
    /// Labels shown at the `tickvals` positions.
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
    #[serde(rename = "ticks", skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickDrawMode>,
    /// Tick length in px.
    #[serde(rename = "ticklen", skip_serializing_if = "Option::is_none")]
    pub tick_length: Option<f64>,
    /// Tick width in px.
    #[serde(rename = "tickwidth", skip_serializing_if = "Option::is_none")]
    pub tick_width: Option<f64>,
    #[serde(rename = "tickcolor", skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<Color>,
    #[serde(rename = "showticklabels", skip_serializing_if = "Option::is_none")]
    pub show_tick_labels: Option<bool>,
    #[serde(rename = "tickfont", skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
    /// Angle of the tick labels with respect to the horizontal.
    #[serde(rename = "tickangle", skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<f64>,
    /// d3-format rule for tick labels.
    #[serde(rename = "tickformat", skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
    #[serde(rename = "tickformatstops", skip_serializing_if = "Option::is_none")]
    pub tick_format_stops: Option<Vec<TickFormatStop>>,
    #[serde(rename = "tickprefix", skip_serializing_if = "Option::is_none")]
    pub tick_prefix: Option<String>,
    #[serde(rename = "showtickprefix", skip_serializing_if = "Option::is_none")]
    pub show_tick_prefix: Option<Show>,
    #[serde(rename = "ticksuffix", skip_serializing_if = "Option::is_none")]
    pub tick_suffix: Option<String>,
    #[serde(rename = "showticksuffix", skip_serializing_if = "Option::is_none")]
    pub show_tick_suffix: Option<Show>,
    /// If `true`, even 4-digit integers get a thousands separator.
    #[serde(rename = "separatethousands", skip_serializing_if = "Option::is_none")]
    pub separate_thousands: Option<bool>,
    #[serde(rename = "exponentformat", skip_serializing_if = "Option::is_none")]
    pub exponent_format: Option<ExponentFormat>,
    #[serde(rename = "showexponent", skip_serializing_if = "Option::is_none")]
    pub show_exponent: Option<Show>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Legacy title fields, serialized alongside `title` when assigned.
    #[serde(rename = "_deprecated", skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<DeprecatedTitle>,
    #[serde(rename = "tickvalssrc", skip_serializing_if = "Option::is_none")]
    pub tick_values_src: Option<String>,
    #[serde(rename = "ticktextsrc", skip_serializing_if = "Option::is_none")]
    pub tick_text_src: Option<String>,
}

impl ColorBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_records_serialize_as_empty_objects() {
        assert_eq!(serde_json::to_string(&Font::new()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&Stream::new()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&ColorBar::new()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&Transform::default()).unwrap(), "{}");
    }

    #[test]
    fn test_visible_wire_literals() {
        assert_eq!(serde_json::to_string(&Visible::True).unwrap(), "\"true\"");
        assert_eq!(serde_json::to_string(&Visible::False).unwrap(), "\"false\"");
        assert_eq!(
            serde_json::to_string(&Visible::LegendOnly).unwrap(),
            "\"legendonly\""
        );
    }

    #[test]
    fn test_tick_draw_mode_none_is_empty_string() {
        assert_eq!(serde_json::to_string(&TickDrawMode::None).unwrap(), "\"\"");
        assert_eq!(
            serde_json::to_string(&TickDrawMode::Outside).unwrap(),
            "\"outside\""
        );
    }

    #[test]
    fn test_exponent_format_preserves_case() {
        assert_eq!(serde_json::to_string(&ExponentFormat::SmallE).unwrap(), "\"e\"");
        assert_eq!(
            serde_json::to_string(&ExponentFormat::CapitalE).unwrap(),
            "\"E\""
        );
        assert_eq!(serde_json::to_string(&ExponentFormat::SI).unwrap(), "\"SI\"");
    }

    #[test]
    fn test_text_position_uses_spaced_literals() {
        assert_eq!(
            serde_json::to_string(&TextPosition::TopLeft).unwrap(),
            "\"top left\""
        );
        assert_eq!(
            serde_json::to_string(&TextPosition::BottomRight).unwrap(),
            "\"bottom right\""
        );
    }

    #[test]
    fn test_mode_joins_flags_in_declared_order() {
        let mode = Mode::MARKERS | Mode::LINES;
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"lines+markers\"");
    }

    #[test]
    fn test_color_bar_key_remapping() {
        let bar = ColorBar {
            length_mode: Some(MeasureMode::Fraction),
            length: Some(0.75),
            x_padding: Some(10.0),
            ..ColorBar::default()
        };
        let json = serde_json::to_string(&bar).unwrap();
        assert_eq!(json, r#"{"lenmode":"fraction","len":0.75,"xpad":10.0}"#);
    }

    #[test]
    fn test_deprecated_title_group_serializes_alongside_replacement() {
        let bar = ColorBar::new()
            .with_title(Title::new("Density"))
            .with_thickness(20.0);
        let bar = ColorBar {
            deprecated: Some(DeprecatedTitle {
                title: Some("Density".to_string()),
                ..DeprecatedTitle::default()
            }),
            ..bar
        };
        let json = serde_json::to_string(&bar).unwrap();
        assert!(json.contains(r#""title":{"text":"Density"}"#));
        assert!(json.contains(r#""_deprecated":{"title":"Density"}"#));
    }

    #[test]
    fn test_hover_label_array_ok_fields() {
        let label = HoverLabel {
            background_color: Some(Color::Rgb(0, 0, 0).into()),
            name_length: Some(vec![4, 8].into()),
            ..HoverLabel::default()
        };
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(
            json,
            r#"{"bgcolor":"rgb(0, 0, 0)","namelength":[4,8]}"#
        );
    }

    #[test]
    fn test_tick_format_stop_keys() {
        use crate::value::Any;

        let stop = TickFormatStop {
            enabled: Some(true),
            d_tick_range: Some(vec![Any::from("min"), Any::Number(100.0)]),
            value: Some("%H:%M".to_string()),
            template_item_name: Some("hourly".to_string()),
            ..TickFormatStop::default()
        };
        let json = serde_json::to_string(&stop).unwrap();
        assert_eq!(
            json,
            r#"{"enabled":true,"dtickrange":["min",100.0],"value":"%H:%M","templateitemname":"hourly"}"#
        );
    }
}
