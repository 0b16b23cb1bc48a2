//! Typed Plotly plot-schema attribute records
//!
//! Provides strongly typed counterparts of the Plotly chart schema:
//! - Trace records (scatter mapbox, carpet, 2D histogram)
//! - Shared attribute records (fonts, color bars, hover labels, tick settings)
//! - Value types for free-form attributes, colors and color scales
//! - One-way JSON serialization of assembled figures
//!
//! Every attribute is optional. Absent attributes are omitted from the
//! serialized document; attributes that were assigned serialize even when
//! their content is empty (an empty option set becomes `""`, an empty nested
//! record becomes `{}`). Wire keys follow the Plotly schema, not the Rust
//! field names. There is no deserialization path.

pub mod color;
pub mod figure;
pub mod options;
pub mod shared;
pub mod traces;
pub mod value;

// Re-export commonly used types
pub use color::{Color, ColorScale, Palette};
pub use figure::{EncodeError, Figure};
pub use shared::{
    Align, Calendar, ColorBar, Font, HoverLabel, Line, Mode, Stream, TickFormatStop, Title,
    Transform, Visible,
};
pub use traces::{AnyTrace, Carpet, Histogram2D, ScatterMapbox};
pub use value::{Any, ArrayOk, InfoArray, SubplotId};
