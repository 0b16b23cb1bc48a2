//! 2D histogram trace: samples binned on both axes, drawn as a heatmap.

use serde::Serialize;

use crate::color::ColorScale;
use crate::options::options;
use crate::shared::{Calendar, ColorBar, HoverLabel, Stream, Transform, Visible};
use crate::value::{Any, ArrayOk, SubplotId};

options! {
    /// Which trace information appears on hover.
    pub struct HoverInfo {
        X = 0 => "x",
        Y = 1 => "y",
        Z = 2 => "z",
        TEXT = 3 => "text",
        NAME = 4 => "name",
    }
}

/// Histogram normalization.
///
/// The default (span = raw occurrence count) is the literal empty string on
/// the wire, and `ProbabilityDensity` carries an embedded space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistNorm {
    #[serde(rename = "")]
    None,
    #[serde(rename = "percent")]
    Percent,
    #[serde(rename = "probability")]
    Probability,
    #[serde(rename = "density")]
    Density,
    #[serde(rename = "probability density")]
    ProbabilityDensity,
}

/// Aggregation applied to the values inside each bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

/// Smoothing algorithm applied to the binned `z` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZSmooth {
    Fast,
    Best,
    False,
}

/// Bin boundaries for one axis. Start, end and size accept numbers, date
/// strings or the period shorthands (`M<n>`), so all three are free-form.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Bins {
    /// First bin edge. Defaults to the minimum data value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Any>,
    /// Last bin edge target; the final bin may overshoot it by up to `size`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Any>,
    /// Width of each bin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Any>,
}

impl Bins {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker group of a 2D histogram; only carries the aggregation data.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct HistogramMarker {
    /// Aggregation data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<f64>>,
    #[serde(rename = "colorsrc", skip_serializing_if = "Option::is_none")]
    pub color_src: Option<String>,
}

/// Sample data binned on x and y (or pre-aggregated via `z`), visualized as
/// a heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram2D {
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
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    pub hover_info: Option<HoverInfo>,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transforms: Option<Vec<Transform>>,
    #[serde(rename = "uirevision", skip_serializing_if = "Option::is_none")]
    pub ui_revision: Option<Any>,
    /// Sample data binned on the x axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    /// Sample data binned on the y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    /// Aggregation data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<HistogramMarker>,
    #[serde(rename = "histnorm", skip_serializing_if = "Option::is_none")]
    pub hist_norm: Option<HistNorm>,
    #[serde(rename = "histfunc", skip_serializing_if = "Option::is_none")]
    pub hist_func: Option<HistFunc>,
    /// Maximum number of x bins wanted; ignored if `xbins.size` is set.
    #[serde(rename = "nbinsx", skip_serializing_if = "Option::is_none")]
    pub n_bins_x: Option<i64>,
    #[serde(rename = "xbins", skip_serializing_if = "Option::is_none")]
    pub x_bins: Option<Bins>,
    /// Maximum number of y bins wanted; ignored if `ybins.size` is set.
    #[serde(rename = "nbinsy", skip_serializing_if = "Option::is_none")]
    pub n_bins_y: Option<i64>,
    #[serde(rename = "ybins", skip_serializing_if = "Option::is_none")]
    pub y_bins: Option<Bins>,
    /// Obsolete since the bin attributes became auto-determined separately;
    /// still accepted and folded into `xbins` by the renderer.
    #[serde(rename = "autobinx", skip_serializing_if = "Option::is_none")]
    pub auto_bin_x: Option<bool>,
    /// Obsolete counterpart of `autobinx` for the y axis.
    #[serde(rename = "autobiny", skip_serializing_if = "Option::is_none")]
    pub auto_bin_y: Option<bool>,
    /// Default prefix for `xbingroup` and `ybingroup`.
    #[serde(rename = "bingroup", skip_serializing_if = "Option::is_none")]
    pub bin_group: Option<String>,
    /// Group of traces sharing compatible x-bin settings.
    #[serde(rename = "xbingroup", skip_serializing_if = "Option::is_none")]
    pub x_bin_group: Option<String>,
    /// Group of traces sharing compatible y-bin settings.
    #[serde(rename = "ybingroup", skip_serializing_if = "Option::is_none")]
    pub y_bin_group: Option<String>,
    /// Horizontal gap between bricks in px.
    #[serde(rename = "xgap", skip_serializing_if = "Option::is_none")]
    pub x_gap: Option<f64>,
    /// Vertical gap between bricks in px.
    #[serde(rename = "ygap", skip_serializing_if = "Option::is_none")]
    pub y_gap: Option<f64>,
    #[serde(rename = "zsmooth", skip_serializing_if = "Option::is_none")]
    pub z_smooth: Option<ZSmooth>,
    /// d3 format rule applied to `z` values in the hover box.
    #[serde(rename = "zhoverformat", skip_serializing_if = "Option::is_none")]
    pub z_hover_format: Option<String>,
    /// Template string for the hover box, overriding `hoverinfo`.
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<ArrayOk<String>>,
    /// Whether the color domain is computed from `z` or taken from
    /// `zmin`/`zmax`.
    #[serde(rename = "zauto", skip_serializing_if = "Option::is_none")]
    pub z_auto: Option<bool>,
    /// Lower bound of the color domain, in `z` units.
    #[serde(rename = "zmin", skip_serializing_if = "Option::is_none")]
    pub z_min: Option<f64>,
    /// Upper bound of the color domain, in `z` units.
    #[serde(rename = "zmax", skip_serializing_if = "Option::is_none")]
    pub z_max: Option<f64>,
    /// Mid-point of the color domain. No effect when `zauto` is `false`.
    #[serde(rename = "zmid", skip_serializing_if = "Option::is_none")]
    pub z_middle: Option<f64>,
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(rename = "autocolorscale", skip_serializing_if = "Option::is_none")]
    pub auto_color_scale: Option<bool>,
    /// Reverses the color mapping if `true`.
    #[serde(rename = "reversescale", skip_serializing_if = "Option::is_none")]
    pub reverse_scale: Option<bool>,
    /// Whether a color bar is displayed for this trace.
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(rename = "colorbar", skip_serializing_if = "Option::is_none")]
    pub color_bar: Option<ColorBar>,
    /// Reference to a shared color axis declared in the layout.
    #[serde(rename = "coloraxis", skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<SubplotId>,
    /// Calendar system for `x` date data.
    #[serde(rename = "xcalendar", skip_serializing_if = "Option::is_none")]
    pub x_calendar: Option<Calendar>,
    /// Calendar system for `y` date data.
    #[serde(rename = "ycalendar", skip_serializing_if = "Option::is_none")]
    pub y_calendar: Option<Calendar>,
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
    #[serde(rename = "hoverinfosrc", skip_serializing_if = "Option::is_none")]
    pub hover_info_src: Option<String>,
    #[serde(rename = "xsrc", skip_serializing_if = "Option::is_none")]
    pub x_src: Option<String>,
    #[serde(rename = "ysrc", skip_serializing_if = "Option::is_none")]
    pub y_src: Option<String>,
    #[serde(rename = "zsrc", skip_serializing_if = "Option::is_none")]
    pub z_src: Option<String>,
    #[serde(rename = "hovertemplatesrc", skip_serializing_if = "Option::is_none")]
    pub hover_template_src: Option<String>,
}

impl Histogram2D {
    pub fn new() -> Self {
        Self {
            kind: "histogram2d",
            visible: None,
            opacity: None,
            name: None,
            uid: None,
            ids: None,
            custom_data: None,
            meta: None,
            hover_info: None,
            hover_label: None,
            stream: None,
            transforms: None,
            ui_revision: None,
            x: None,
            y: None,
            z: None,
            marker: None,
            hist_norm: None,
            hist_func: None,
            n_bins_x: None,
            x_bins: None,
            n_bins_y: None,
            y_bins: None,
            auto_bin_x: None,
            auto_bin_y: None,
            bin_group: None,
            x_bin_group: None,
            y_bin_group: None,
            x_gap: None,
            y_gap: None,
            z_smooth: None,
            z_hover_format: None,
            hover_template: None,
            z_auto: None,
            z_min: None,
            z_max: None,
            z_middle: None,
            color_scale: None,
            auto_color_scale: None,
            reverse_scale: None,
            show_scale: None,
            color_bar: None,
            color_axis: None,
            x_calendar: None,
            y_calendar: None,
            x_axis: None,
            y_axis: None,
            ids_src: None,
            custom_data_src: None,
            meta_src: None,
            hover_info_src: None,
            x_src: None,
            y_src: None,
            z_src: None,
            hover_template_src: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_x(mut self, x: Vec<f64>) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: Vec<f64>) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_z(mut self, z: Vec<f64>) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_hist_norm(mut self, hist_norm: HistNorm) -> Self {
        self.hist_norm = Some(hist_norm);
        self
    }

    pub fn with_hist_func(mut self, hist_func: HistFunc) -> Self {
        self.hist_func = Some(hist_func);
        self
    }

    pub fn with_x_bins(mut self, bins: Bins) -> Self {
        self.x_bins = Some(bins);
        self
    }

    pub fn with_y_bins(mut self, bins: Bins) -> Self {
        self.y_bins = Some(bins);
        self
    }

    pub fn with_color_scale(mut self, color_scale: impl Into<ColorScale>) -> Self {
        self.color_scale = Some(color_scale.into());
        self
    }

    pub fn with_color_bar(mut self, color_bar: ColorBar) -> Self {
        self.color_bar = Some(color_bar);
        self
    }
}

impl Default for Histogram2D {
    fn default() -> Self {
        Self::new()
    }
}
