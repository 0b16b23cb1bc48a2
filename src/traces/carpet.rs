//! Carpet trace: a distorted a/b coordinate grid other traces draw onto.

use serde::Serialize;

use crate::color::Color;
use crate::shared::{
    ExponentFormat, Font, Show, Stream, TickFormatStop, TickMode, Visible,
};
use crate::value::{Any, ArrayOk, InfoArray, SubplotId};

/// Axis scale rule. `Auto` (the `-` literal) lets the renderer infer the
/// rule from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisType {
    #[serde(rename = "-")]
    Auto,
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "category")]
    Category,
}

/// Whether the axis range is computed from the data, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRange {
    True,
    False,
    Reversed,
}

/// How the computed range treats zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeMode {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "tozero")]
    ToZero,
    #[serde(rename = "nonnegative")]
    NonNegative,
}

/// Interpretation of cheater values on this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheaterType {
    Index,
    Value,
}

/// Which edge(s) of the carpet show tick labels for this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowTickLabels {
    Start,
    End,
    Both,
    None,
}

/// Ordering of category values along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryOrder {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "category ascending")]
    CategoryAscending,
    #[serde(rename = "category descending")]
    CategoryDescending,
    #[serde(rename = "array")]
    Array,
}

/// Title of a carpet axis.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct AxisTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Offset between the axis and its title, in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

impl AxisTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Legacy axis title attributes, superseded by [`AxisTitle`]. Kept as a
/// plain fallback group; no precedence over the replacement is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DeprecatedAxisTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "titlefont", skip_serializing_if = "Option::is_none")]
    pub title_font: Option<Font>,
    #[serde(rename = "titleoffset", skip_serializing_if = "Option::is_none")]
    pub title_offset: Option<f64>,
}

/// One of the two axes spanning a carpet. Used for both `aaxis` and `baxis`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct CarpetAxis {
    /// Default for the axis line, font, tick and grid colors at once.
    /// Individual pieces can override it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(rename = "autorange", skip_serializing_if = "Option::is_none")]
    pub auto_range: Option<AutoRange>,
    #[serde(rename = "rangemode", skip_serializing_if = "Option::is_none")]
    pub range_mode: Option<RangeMode>,
    /// Explicit axis range. Overrides `autorange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<InfoArray>,
    /// Whether zoom along this axis is disabled.
    #[serde(rename = "fixedrange", skip_serializing_if = "Option::is_none")]
    pub fixed_range: Option<bool>,
    #[serde(rename = "cheatertype", skip_serializing_if = "Option::is_none")]
    pub cheater_type: Option<CheaterType>,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    pub tick_mode: Option<TickMode>,
    /// Upper bound on the number of ticks when `tickmode` is `auto`.
    #[serde(rename = "nticks", skip_serializing_if = "Option::is_none")]
    pub n_ticks: Option<i64>,
    /// Explicit tick positions when `tickmode` is `array`.
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
    /// Labels shown at the `tickvals` positions.
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
    #[serde(rename = "showticklabels", skip_serializing_if = "Option::is_none")]
    pub show_tick_labels: Option<ShowTickLabels>,
    #[serde(rename = "tickfont", skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
    /// Angle of the tick labels with respect to the horizontal.
    #[serde(rename = "tickangle", skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<f64>,
    #[serde(rename = "tickprefix", skip_serializing_if = "Option::is_none")]
    pub tick_prefix: Option<String>,
    #[serde(rename = "showtickprefix", skip_serializing_if = "Option::is_none")]
    pub show_tick_prefix: Option<Show>,
    #[serde(rename = "ticksuffix", skip_serializing_if = "Option::is_none")]
    pub tick_suffix: Option<String>,
    #[serde(rename = "showticksuffix", skip_serializing_if = "Option::is_none")]
    pub show_tick_suffix: Option<Show>,
    #[serde(rename = "showexponent", skip_serializing_if = "Option::is_none")]
    pub show_exponent: Option<Show>,
    #[serde(rename = "exponentformat", skip_serializing_if = "Option::is_none")]
    pub exponent_format: Option<ExponentFormat>,
    /// If `true`, even 4-digit integers get a thousands separator.
    #[serde(rename = "separatethousands", skip_serializing_if = "Option::is_none")]
    pub separate_thousands: Option<bool>,
    /// d3-format rule for tick labels.
    #[serde(rename = "tickformat", skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
    #[serde(rename = "tickformatstops", skip_serializing_if = "Option::is_none")]
    pub tick_format_stops: Option<Vec<TickFormatStop>>,
    #[serde(rename = "categoryorder", skip_serializing_if = "Option::is_none")]
    pub category_order: Option<CategoryOrder>,
    /// Explicit category ordering when `categoryorder` is `array`.
    #[serde(rename = "categoryarray", skip_serializing_if = "Option::is_none")]
    pub category_array: Option<Vec<Any>>,
    /// Padding between the carpet and its axis labels, in px.
    #[serde(rename = "labelpadding", skip_serializing_if = "Option::is_none")]
    pub label_padding: Option<i64>,
    #[serde(rename = "labelprefix", skip_serializing_if = "Option::is_none")]
    pub label_prefix: Option<String>,
    #[serde(rename = "labelsuffix", skip_serializing_if = "Option::is_none")]
    pub label_suffix: Option<String>,
    /// Whether a line is drawn at the final value of this axis.
    #[serde(rename = "showline", skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(rename = "linecolor", skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    /// Axis line width in px.
    #[serde(rename = "linewidth", skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(rename = "gridcolor", skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<Color>,
    #[serde(rename = "gridwidth", skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<f64>,
    /// Whether grid lines are drawn at the axis tick marks.
    #[serde(rename = "showgrid", skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    /// Number of minor grid lines between major ones.
    #[serde(rename = "minorgridcount", skip_serializing_if = "Option::is_none")]
    pub minor_grid_count: Option<i64>,
    #[serde(rename = "minorgridwidth", skip_serializing_if = "Option::is_none")]
    pub minor_grid_width: Option<f64>,
    #[serde(rename = "minorgridcolor", skip_serializing_if = "Option::is_none")]
    pub minor_grid_color: Option<Color>,
    /// Whether a line is drawn at the starting value of this axis.
    #[serde(rename = "startline", skip_serializing_if = "Option::is_none")]
    pub start_line: Option<bool>,
    #[serde(rename = "startlinecolor", skip_serializing_if = "Option::is_none")]
    pub start_line_color: Option<Color>,
    #[serde(rename = "startlinewidth", skip_serializing_if = "Option::is_none")]
    pub start_line_width: Option<f64>,
    /// Whether a line is drawn at the ending value of this axis.
    #[serde(rename = "endline", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<bool>,
    #[serde(rename = "endlinewidth", skip_serializing_if = "Option::is_none")]
    pub end_line_width: Option<f64>,
    #[serde(rename = "endlinecolor", skip_serializing_if = "Option::is_none")]
    pub end_line_color: Option<Color>,
    /// Placement of the first tick. Use with `dtick`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<f64>,
    /// Step between ticks. Use with `tick0`.
    #[serde(rename = "dtick", skip_serializing_if = "Option::is_none")]
    pub d_tick: Option<f64>,
    /// Index of the first tick when ticks refer to array positions.
    #[serde(rename = "arraytick0", skip_serializing_if = "Option::is_none")]
    pub array_tick0: Option<i64>,
    /// Index step between ticks when ticks refer to array positions.
    #[serde(rename = "arraydtick", skip_serializing_if = "Option::is_none")]
    pub array_d_tick: Option<i64>,
    /// Legacy title fields, serialized alongside `title` when assigned.
    #[serde(rename = "_deprecated", skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<DeprecatedAxisTitle>,
    #[serde(rename = "tickvalssrc", skip_serializing_if = "Option::is_none")]
    pub tick_values_src: Option<String>,
    #[serde(rename = "ticktextsrc", skip_serializing_if = "Option::is_none")]
    pub tick_text_src: Option<String>,
    #[serde(rename = "categoryarraysrc", skip_serializing_if = "Option::is_none")]
    pub category_array_src: Option<String>,
}

impl CarpetAxis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: AxisTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_axis_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = Some(axis_type);
        self
    }

    pub fn with_range(mut self, range: InfoArray) -> Self {
        self.range = Some(range);
        self
    }
}

/// Carpet grid trace. `scattercarpet` and `contourcarpet` traces reference
/// it through the shared `carpet` identifier and draw in its a/b space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carpet {
    /// Fixed trace discriminator, always serialized.
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visible>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Trace name, shown in the legend and on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(rename = "customdata", skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Vec<Any>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ArrayOk<Any>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(rename = "uirevision", skip_serializing_if = "Option::is_none")]
    pub ui_revision: Option<Any>,
    /// Identifier matching the `carpet` attribute of the traces drawn onto
    /// this grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carpet: Option<String>,
    /// x coordinates of the carpet points; omitted for cheater plots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    /// y coordinates of the carpet points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    /// a coordinates, one per carpet row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<Vec<f64>>,
    /// Alternative to `a`: starting value of an evenly spaced a sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a0: Option<f64>,
    /// Step of the evenly spaced a sequence started by `a0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub da: Option<f64>,
    /// b coordinates, one per carpet column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<Vec<f64>>,
    /// Alternative to `b`: starting value of an evenly spaced b sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b0: Option<f64>,
    /// Step of the evenly spaced b sequence started by `b0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<f64>,
    /// Slope of the cheater plot x-coordinate distortion.
    #[serde(rename = "cheaterslope", skip_serializing_if = "Option::is_none")]
    pub cheater_slope: Option<f64>,
    #[serde(rename = "aaxis", skip_serializing_if = "Option::is_none")]
    pub a_axis: Option<CarpetAxis>,
    #[serde(rename = "baxis", skip_serializing_if = "Option::is_none")]
    pub b_axis: Option<CarpetAxis>,
    /// Default font for axis and tick labels on this carpet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Default for all colors associated with this carpet at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Cartesian x axis the coordinates refer to (`x`, `x2`, ...).
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<SubplotId>,
    /// Cartesian y axis the coordinates refer to (`y`, `y2`, ...).
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<SubplotId>,
    #[serde(rename = "idssrc", skip_serializing_if = "Option::is_none")]
    pub ids_src: Option<String>,
    #[serde(rename = "customdatasrc", skip_serializing_if = "Option::is_none")]
    pub custom_data_src: Option<String>,
    #[serde(rename = "metasrc", skip_serializing_if = "Option::is_none")]
    pub meta_src: Option<String>,
    #[serde(rename = "xsrc", skip_serializing_if = "Option::is_none")]
    pub x_src: Option<String>,
    #[serde(rename = "ysrc", skip_serializing_if = "Option::is_none")]
    pub y_src: Option<String>,
    #[serde(rename = "asrc", skip_serializing_if = "Option::is_none")]
    pub a_src: Option<String>,
    #[serde(rename = "bsrc", skip_serializing_if = "Option::is_none")]
    pub b_src: Option<String>,
}

impl Carpet {
    pub fn new() -> Self {
        Self {
            kind: "carpet",
            visible: None,
            opacity: None,
            name: None,
            uid: None,
            ids: None,
            custom_data: None,
            meta: None,
            stream: None,
            ui_revision: None,
            carpet: None,
            x: None,
            y: None,
            a: None,
            a0: None,
            da: None,
            b: None,
            b0: None,
            db: None,
            cheater_slope: None,
            a_axis: None,
            b_axis: None,
            font: None,
            color: None,
            x_axis: None,
            y_axis: None,
            ids_src: None,
            custom_data_src: None,
            meta_src: None,
            x_src: None,
            y_src: None,
            a_src: None,
            b_src: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_carpet(mut self, carpet: impl Into<String>) -> Self {
        self.carpet = Some(carpet.into());
        self
    }

    pub fn with_a(mut self, a: Vec<f64>) -> Self {
        self.a = Some(a);
        self
    }

    pub fn with_b(mut self, b: Vec<f64>) -> Self {
        self.b = Some(b);
        self
    }

    pub fn with_y(mut self, y: Vec<f64>) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_a_axis(mut self, axis: CarpetAxis) -> Self {
        self.a_axis = Some(axis);
        self
    }

    pub fn with_b_axis(mut self, axis: CarpetAxis) -> Self {
        self.b_axis = Some(axis);
        self
    }
}

impl Default for Carpet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trace_serializes_type_tag_only() {
        let json = serde_json::to_string(&Carpet::new()).unwrap();
        assert_eq!(json, r#"{"type":"carpet"}"#);
    }

    #[test]
    fn test_axis_type_reserved_key_and_auto_literal() {
        let axis = CarpetAxis::new().with_axis_type(AxisType::Auto);
        let json = serde_json::to_string(&axis).unwrap();
        assert_eq!(json, r#"{"type":"-"}"#);
    }

    #[test]
    fn test_category_order_spaced_literals() {
        assert_eq!(
            serde_json::to_string(&CategoryOrder::CategoryAscending).unwrap(),
            "\"category ascending\""
        );
    }

    #[test]
    fn test_axis_wire_keys() {
        let axis = CarpetAxis {
            auto_range: Some(AutoRange::Reversed),
            fixed_range: Some(true),
            minor_grid_count: Some(2),
            array_tick0: Some(1),
            array_d_tick: Some(3),
            ..CarpetAxis::new()
        };
        let json = serde_json::to_string(&axis).unwrap();
        assert_eq!(
            json,
            r#"{"autorange":"reversed","fixedrange":true,"minorgridcount":2,"arraytick0":1,"arraydtick":3}"#
        );
    }

    #[test]
    fn test_deprecated_axis_title_group() {
        let axis = CarpetAxis {
            title: Some(AxisTitle::new("a")),
            deprecated: Some(DeprecatedAxisTitle {
                title: Some("a".to_string()),
                title_offset: Some(10.0),
                ..DeprecatedAxisTitle::default()
            }),
            ..CarpetAxis::new()
        };
        let json = serde_json::to_string(&axis).unwrap();
        assert_eq!(
            json,
            r#"{"title":{"text":"a"},"_deprecated":{"title":"a","titleoffset":10.0}}"#
        );
    }

    #[test]
    fn test_both_axes_share_the_record_shape() {
        let trace = Carpet::new()
            .with_a_axis(CarpetAxis::new().with_title(AxisTitle::new("a")))
            .with_b_axis(CarpetAxis::new());
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains(r#""aaxis":{"title":{"text":"a"}}"#));
        assert!(json.contains(r#""baxis":{}"#));
    }

    #[test]
    fn test_evenly_spaced_coordinates() {
        let trace = Carpet::new().with_a(vec![4.0, 5.0, 6.0]);
        let trace = Carpet {
            b0: Some(0.0),
            db: Some(0.5),
            cheater_slope: Some(1.0),
            ..trace
        };
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(
            json,
            r#"{"type":"carpet","a":[4.0,5.0,6.0],"b0":0.0,"db":0.5,"cheaterslope":1.0}"#
        );
    }
}
