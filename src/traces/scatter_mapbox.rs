//! Scatter trace drawn on a Mapbox GL geographic map.

use serde::Serialize;

use crate::color::{Color, ColorScale, Coloring};
use crate::options::options;
use crate::shared::{
    Font, HoverLabel, Line, Mode, SizeMode, Stream, TextPosition, Transform, Visible,
};
use crate::value::{Any, ArrayOk, SubplotId};

options! {
    /// Which trace information appears on hover. `NONE` and `SKIP` suppress
    /// the hover box, but with `NONE` click and hover events still fire.
    pub struct HoverInfo {
        LONGITUDE = 0 => "lon",
        LATITUDE = 1 => "lat",
        TEXT = 2 => "text",
        NAME = 3 => "name",
        ALL = 4 => "all",
        NONE = 5 => "none",
        SKIP = 6 => "skip",
    }
}

/// Area fill. `ToSelf` connects the endpoints of the trace into a closed
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    #[serde(rename = "toself")]
    ToSelf,
}

/// Marker symbol settings, including the color-domain attributes shared by
/// continuously colored markers.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SymbolicMarker {
    /// Maki icon name. Arrays of `color` and `size` only apply to `circle`
    /// symbols.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<ArrayOk<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<ArrayOk<f64>>,
    /// Marker size in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ArrayOk<f64>>,
    /// Scale factor applied when `size` is a numerical array.
    #[serde(rename = "sizeref", skip_serializing_if = "Option::is_none")]
    pub size_reference: Option<f64>,
    /// Minimum rendered size in px when `size` is a numerical array.
    #[serde(rename = "sizemin", skip_serializing_if = "Option::is_none")]
    pub size_min: Option<f64>,
    #[serde(rename = "sizemode", skip_serializing_if = "Option::is_none")]
    pub size_mode: Option<SizeMode>,
    /// Marker color, or an array of numbers mapped through the color scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Coloring>,
    /// Whether the color domain is computed from the data or taken from
    /// `cmin`/`cmax`.
    #[serde(rename = "cauto", skip_serializing_if = "Option::is_none")]
    pub c_auto: Option<bool>,
    /// Lower bound of the color domain, in `color` units.
    #[serde(rename = "cmin", skip_serializing_if = "Option::is_none")]
    pub c_min: Option<f64>,
    /// Upper bound of the color domain, in `color` units.
    #[serde(rename = "cmax", skip_serializing_if = "Option::is_none")]
    pub c_max: Option<f64>,
    /// Mid-point of the color domain. No effect when `cauto` is `false`.
    #[serde(rename = "cmid", skip_serializing_if = "Option::is_none")]
    pub c_middle: Option<f64>,
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(rename = "autocolorscale", skip_serializing_if = "Option::is_none")]
    pub auto_color_scale: Option<bool>,
    /// Reverses the color mapping if `true`.
    #[serde(rename = "reversescale", skip_serializing_if = "Option::is_none")]
    pub reverse_scale: Option<bool>,
    /// Whether a color bar is displayed for this marker.
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(rename = "colorbar", skip_serializing_if = "Option::is_none")]
    pub color_bar: Option<crate::shared::ColorBar>,
    /// Reference to a shared color axis declared in the layout.
    #[serde(rename = "coloraxis", skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<SubplotId>,
}

impl SymbolicMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<ArrayOk<String>>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<ArrayOk<f64>>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<Coloring>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Marker overrides applied to points inside or outside a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SelectionMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Style override group for selected or unselected points.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Selection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<SelectionMarker>,
}

/// Scatter points, lines or marker symbols placed by longitude/latitude
/// pairs on a Mapbox map.
///
/// # Example
///
/// ```rust
/// use plotly_schema::ScatterMapbox;
///
/// let trace = ScatterMapbox::new()
///     .with_name("Stations")
///     .with_longitude(vec![11.58, 13.40])
///     .with_latitude(vec![48.14, 52.52]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMapbox {
    /// Fixed trace discriminator, always serialized.
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visible>,
    /// Whether the trace gets a legend item.
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    /// Traces in the same legend group hide and show together.
    #[serde(rename = "legendgroup", skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Trace name, shown in the legend and on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Id providing object constancy across animations and transitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Per-datum id labels for object constancy of data points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    /// Extra per-datum payload delivered with hover, click and selection
    /// events.
    #[serde(rename = "customdata", skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Vec<Any>>,
    /// Extra meta values referenced by `%{meta[i]}` in text attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ArrayOk<Any>>,
    /// Indices of selected points. An empty array means an empty selection.
    #[serde(rename = "selectedpoints", skip_serializing_if = "Option::is_none")]
    pub selected_points: Option<Any>,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transforms: Option<Vec<Transform>>,
    /// Controls persistence of user-driven trace changes. Defaults to
    /// `layout.uirevision`.
    #[serde(rename = "uirevision", skip_serializing_if = "Option::is_none")]
    pub ui_revision: Option<Any>,
    /// Longitude coordinates in degrees East.
    #[serde(rename = "lon", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Vec<f64>>,
    /// Latitude coordinates in degrees North.
    #[serde(rename = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Vec<f64>>,
    /// Drawing mode. With `TEXT` included, text elements appear at the
    /// coordinates instead of on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Text elements per (lon, lat) pair, or one string for all points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ArrayOk<String>>,
    /// Template string for point text, overriding `textinfo`. Uses
    /// `%{variable}` insertion with d3 format suffixes.
    #[serde(rename = "texttemplate", skip_serializing_if = "Option::is_none")]
    pub text_template: Option<ArrayOk<String>>,
    /// Hover text per (lon, lat) pair. Shown when `hoverinfo` contains the
    /// text flag.
    #[serde(rename = "hovertext", skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<ArrayOk<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    /// Whether gaps (missing values) in the data are connected.
    #[serde(rename = "connectgaps", skip_serializing_if = "Option::is_none")]
    pub connect_gaps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<SymbolicMarker>,
    /// Area to fill with a solid color. Use with `fillcolor` if not `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    /// Fill color. Defaults to a half-transparent variant of the line or
    /// marker color.
    #[serde(rename = "fillcolor", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    /// Icon text font. Only applies to `symbol` markers.
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
    /// Mapbox layer id below which this trace's layers are inserted. Set to
    /// `""` to place them above every other layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub below: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unselected: Option<Selection>,
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    pub hover_info: Option<HoverInfo>,
    /// Template string for the hover box, overriding `hoverinfo`.
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<ArrayOk<String>>,
    /// Mapbox subplot the coordinates refer to (`mapbox`, `mapbox2`, ...).
    #[serde(rename = "subplot", skip_serializing_if = "Option::is_none")]
    pub subplot: Option<SubplotId>,
}

impl ScatterMapbox {
    pub fn new() -> Self {
        Self {
            kind: "scattermapbox",
            visible: None,
            show_legend: None,
            legend_group: None,
            opacity: None,
            name: None,
            uid: None,
            ids: None,
            custom_data: None,
            meta: None,
            selected_points: None,
            hover_label: None,
            stream: None,
            transforms: None,
            ui_revision: None,
            longitude: None,
            latitude: None,
            mode: None,
            text: None,
            text_template: None,
            hover_text: None,
            line: None,
            connect_gaps: None,
            marker: None,
            fill: None,
            fill_color: None,
            text_font: None,
            text_position: None,
            below: None,
            selected: None,
            unselected: None,
            hover_info: None,
            hover_template: None,
            subplot: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_longitude(mut self, longitude: Vec<f64>) -> Self {
        self.longitude = Some(longitude);
        self
    }

    pub fn with_latitude(mut self, latitude: Vec<f64>) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_text(mut self, text: impl Into<ArrayOk<String>>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_hover_text(mut self, hover_text: impl Into<ArrayOk<String>>) -> Self {
        self.hover_text = Some(hover_text.into());
        self
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_marker(mut self, marker: SymbolicMarker) -> Self {
        self.marker = Some(marker);
        self
    }
}

impl Default for ScatterMapbox {
    fn default() -> Self {
        Self::new()
    }
}
