//! LCBview Core Library
//!
//! Alignment model, reference reorientation, track reordering, coordinate
//! scales and cross-track cursor mapping for multi-genome LCB viewers.
//! Drawing, hit-testing and gesture capture belong to the rendering surface;
//! this crate only consumes its events and returns positions to draw.

pub mod types;
pub mod error;
pub mod scale;
pub mod model;
pub mod reorient;
pub mod reorder;
pub mod cursor;
pub mod config;
pub mod viewer;

// Re-export commonly used types and functions
pub use types::{GroupId, Region, RegionRef, SeqPos, Strand, Track, TrackIndex};
pub use error::{LoadError, LoadResult};
pub use scale::{Scale, ScaleSet, ZoomTransform};
pub use model::{AlignmentGroup, AlignmentInput, AlignmentModel, ModelSummary, RegionRecord, TrackSpec};
pub use reorient::{set_reference, Reorientation};
pub use reorder::Direction;
pub use cursor::{map_hover, CursorMapping, HoverStatus};
pub use config::ViewerConfig;
pub use viewer::{CursorFrame, PointerEvent, TrackCursor, Viewer};

/// Version information for the LCBview core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
