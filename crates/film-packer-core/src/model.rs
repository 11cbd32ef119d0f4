use serde::{Deserialize, Serialize};

use crate::config::{LayoutAxis, SortOrder};

/// One input row: a piece kind with a requested unit count.
///
/// `color` is an opaque display tag (e.g. a CSS color); the core never
/// interprets it, it is copied onto every placement of the piece.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceSpec {
    pub id: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_count() -> u32 {
    1
}

impl PieceSpec {
    /// One unit of this piece kind.
    pub fn unit(&self) -> Piece {
        Piece {
            id: self.id.clone(),
            width: self.width,
            height: self.height,
            color: self.color.clone(),
        }
    }
}

/// A single unit to place, produced by count expansion in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Piece {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub color: Option<String>,
}

impl Piece {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A placed piece. `x, y` are absolute canvas coordinates with the sheet's
/// stacking offset already applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index into [`Layout::sheets`].
    pub sheet: usize,
    pub color: Option<String>,
}

/// One opened sheet: absolute origin plus fixed size, for drawing outlines
/// and labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sheet {
    pub id: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Why a piece ended up in the unplaced list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    /// A dimension exceeds the corresponding sheet dimension; rotation is
    /// never attempted.
    Oversized,
    /// Width or height is zero.
    ZeroArea,
    /// Individually fittable, but no sheet (including a fresh one) accepted it.
    NoFit,
}

/// A piece that could not be placed, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unplaced {
    pub piece: Piece,
    pub reason: UnplacedReason,
}

/// Effective configuration echoed into the layout (for consumers and tooling).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutMeta {
    /// Schema version for the serialized layout; allows downstream tooling
    /// to handle future additive changes.
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub axis: LayoutAxis,
    pub sheet_margin: u32,
    pub sort_order: SortOrder,
}

/// Output of a packing run: sheets, placements, unplaced pieces, metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Layout {
    pub meta: LayoutMeta,
    pub sheets: Vec<Sheet>,
    pub placements: Vec<Placement>,
    pub unplaced: Vec<Unplaced>,
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of sheets opened.
    pub num_sheets: usize,
    /// Number of units placed.
    pub num_placements: usize,
    /// Number of units that could not be placed.
    pub num_unplaced: usize,
    /// Sum of sheet areas.
    pub total_sheet_area: u64,
    /// Sum of placed piece areas.
    pub used_area: u64,
    /// used_area / total_sheet_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl Layout {
    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> LayoutStats {
        let total_sheet_area: u64 = self
            .sheets
            .iter()
            .map(|s| s.width as u64 * s.height as u64)
            .sum();
        let used_area: u64 = self
            .placements
            .iter()
            .map(|p| p.width as u64 * p.height as u64)
            .sum();
        let occupancy = if total_sheet_area > 0 {
            used_area as f64 / total_sheet_area as f64
        } else {
            0.0
        };
        LayoutStats {
            num_sheets: self.sheets.len(),
            num_placements: self.placements.len(),
            num_unplaced: self.unplaced.len(),
            total_sheet_area,
            used_area,
            occupancy,
        }
    }

    /// Maximal occupied coordinate along the stacking axis. Consumers size
    /// their drawing surface with this.
    pub fn used_extent(&self) -> u32 {
        self.placements
            .iter()
            .map(|p| match self.meta.axis {
                LayoutAxis::Horizontal => p.y + p.height,
                LayoutAxis::Vertical => p.x + p.width,
            })
            .max()
            .unwrap_or(0)
    }
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Sheets: {}, Placed: {}, Unplaced: {}, Occupancy: {:.2}%, Total Area: {}, Used Area: {}",
            self.num_sheets,
            self.num_placements,
            self.num_unplaced,
            self.occupancy * 100.0,
            self.total_sheet_area,
            self.used_area,
        )
    }

    /// Returns wasted sheet area.
    pub fn wasted_area(&self) -> u64 {
        self.total_sheet_area.saturating_sub(self.used_area)
    }

    /// Returns wasted sheet area as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_sheet_area > 0 {
            (self.wasted_area() as f64 / self.total_sheet_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
