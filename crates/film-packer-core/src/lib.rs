//! Core library for nesting rectangular pieces onto fixed-size film sheets.
//!
//! - Engines: horizontal and vertical skyline, one generic core (`SkylineSheet`)
//!   so the two layouts are exact transposes of each other
//! - Pipeline: `pack_pieces` expands counts, sorts by descending area, and
//!   fills sheets round by round, opening a new sheet along the stacking axis
//!   when the previous one is full
//! - Data model is serde-serializable; file I/O lives in the CLI crate.
//!
//! Quick example:
//! ```
//! use film_packer_core::prelude::*;
//!
//! let pieces = vec![PieceSpec {
//!     id: "A".into(),
//!     width: 60,
//!     height: 40,
//!     count: 2,
//!     color: None,
//! }];
//! let cfg = PackConfig {
//!     sheet_width: 100,
//!     sheet_height: 100,
//!     ..Default::default()
//! };
//! let layout = pack_pieces(pieces, cfg)?;
//! assert_eq!(layout.placements.len(), 2);
//! assert_eq!(layout.sheets.len(), 1);
//! # Ok::<(), film_packer_core::PackError>(())
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `film_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{LayoutAxis, PackConfig, PackConfigBuilder, SortOrder};
    pub use crate::error::{PackError, Result};
    pub use crate::model::{
        Layout, LayoutMeta, LayoutStats, Piece, PieceSpec, Placement, Sheet, Unplaced,
        UnplacedReason,
    };
    pub use crate::packer::SheetPacker;
    pub use crate::packer::skyline::{HorizontalSheet, SkylineSheet, VerticalSheet};
    pub use crate::pipeline::pack_pieces;
}
