//! Figure assembly and JSON emission.

use serde::Serialize;
use tracing::debug;

use crate::traces::AnyTrace;

/// Error during figure encoding.
///
/// The attribute records themselves cannot fail to serialize; the only
/// failure surface is the JSON encoder, whose errors pass through
/// unmodified.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A chart document: the ordered list of traces handed to the renderer.
///
/// # Example
///
/// ```rust
/// use plotly_schema::{Figure, Histogram2D};
///
/// let figure = Figure::new()
///     .add_trace(Histogram2D::new().with_x(vec![1.0, 2.0, 2.0]));
/// let json = figure.to_json().unwrap();
/// assert!(json.starts_with(r#"{"data":["#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Figure {
    pub data: Vec<AnyTrace>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trace. Traces serialize in insertion order.
    pub fn add_trace(mut self, trace: impl Into<AnyTrace>) -> Self {
        self.data.push(trace.into());
        self
    }

    /// Encode the figure as a compact JSON document.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        let json = serde_json::to_string(self)?;
        debug!(traces = self.data.len(), bytes = json.len(), "encoded figure");
        Ok(json)
    }

    /// Encode the figure as a pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String, EncodeError> {
        let json = serde_json::to_string_pretty(self)?;
        debug!(
            traces = self.data.len(),
            bytes = json.len(),
            "encoded figure (pretty)"
        );
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traces::{Carpet, Histogram2D, ScatterMapbox};

    #[test]
    fn test_empty_figure() {
        let json = Figure::new().to_json().unwrap();
        assert_eq!(json, r#"{"data":[]}"#);
    }

    #[test]
    fn test_traces_keep_insertion_order() {
        let figure = Figure::new()
            .add_trace(Carpet::new())
            .add_trace(ScatterMapbox::new())
            .add_trace(Histogram2D::new());
        let json = figure.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"data":[{"type":"carpet"},{"type":"scattermapbox"},{"type":"histogram2d"}]}"#
        );
    }
}
