//! Trace records.
//!
//! Each trace is a flat record of optional attributes plus a fixed `type`
//! discriminator that is always present on the wire.

pub mod carpet;
pub mod histogram2d;
pub mod scatter_mapbox;

pub use carpet::Carpet;
pub use histogram2d::Histogram2D;
pub use scatter_mapbox::ScatterMapbox;

use serde::Serialize;

/// A trace of any supported kind.
///
/// Serializes as the wrapped trace itself; the `type` tag carried by every
/// trace record is what identifies the kind in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyTrace {
    ScatterMapbox(Box<ScatterMapbox>),
    Carpet(Box<Carpet>),
    Histogram2D(Box<Histogram2D>),
}

impl From<ScatterMapbox> for AnyTrace {
    fn from(trace: ScatterMapbox) -> Self {
        AnyTrace::ScatterMapbox(Box::new(trace))
    }
}

impl From<Carpet> for AnyTrace {
    fn from(trace: Carpet) -> Self {
        AnyTrace::Carpet(Box::new(trace))
    }
}

impl From<Histogram2D> for AnyTrace {
    fn from(trace: Histogram2D) -> Self {
        AnyTrace::Histogram2D(Box::new(trace))
    }
}
