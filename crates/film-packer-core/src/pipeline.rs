use tracing::{debug, instrument, warn};

use crate::config::{LayoutAxis, PackConfig, SortOrder};
use crate::error::Result;
use crate::model::{
    Layout, LayoutMeta, Piece, PieceSpec, Placement, Sheet, Unplaced, UnplacedReason,
};
use crate::packer::SheetPacker;
use crate::packer::skyline::{HorizontalSheet, VerticalSheet};

#[instrument(skip_all)]
/// Packs `specs` onto film sheets using configuration `cfg`.
///
/// Counts are expanded into units, units are sorted (stable, so equal keys
/// keep their input order), and sheets are filled round by round: each round
/// opens one fresh sheet at the stacking cursor and offers it every
/// remaining unit once, in order. A round that places nothing ends the run;
/// whatever is left is reported as unplaced. Piece-level problems are never
/// errors: oversized and zero-area pieces are diverted up front and packing
/// continues, so every input yields a well-formed [`Layout`].
pub fn pack_pieces(specs: Vec<PieceSpec>, cfg: PackConfig) -> Result<Layout> {
    cfg.validate()?;

    let mut unplaced: Vec<Unplaced> = Vec::new();
    let mut queue = expand_specs(&specs, &cfg, &mut unplaced);
    sort_queue(&mut queue, &cfg.sort_order);

    let mut placements: Vec<Placement> = Vec::new();
    let mut sheets: Vec<Sheet> = Vec::new();
    let mut cursor = 0u32;

    while !queue.is_empty() {
        let mut packer = new_sheet(&cfg, sheets.len(), cursor);
        let before = placements.len();
        let mut rest = Vec::with_capacity(queue.len());
        for piece in queue.drain(..) {
            if !packer.can_place(&piece) {
                rest.push(piece);
                continue;
            }
            match packer.place(&piece) {
                Some(p) => placements.push(p),
                None => rest.push(piece),
            }
        }
        queue = rest;

        if placements.len() == before {
            // Even an empty sheet accepted nothing, so no later sheet can
            // either; the sheet is discarded and the remainder reported.
            for piece in queue.drain(..) {
                warn!(
                    id = %piece.id,
                    width = piece.width,
                    height = piece.height,
                    "piece does not fit on an empty sheet"
                );
                unplaced.push(Unplaced {
                    piece,
                    reason: UnplacedReason::NoFit,
                });
            }
            break;
        }

        let (x, y) = cfg.axis.origin(cursor);
        debug!(
            sheet = sheets.len(),
            x,
            y,
            placed = placements.len() - before,
            remaining = queue.len(),
            "sheet filled"
        );
        sheets.push(Sheet {
            id: sheets.len(),
            x,
            y,
            width: cfg.sheet_width,
            height: cfg.sheet_height,
        });
        cursor += cfg
            .axis
            .stride(cfg.sheet_width, cfg.sheet_height, cfg.sheet_margin);
    }

    let meta = LayoutMeta {
        schema_version: "1".into(),
        app: "film-packer".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        sheet_width: cfg.sheet_width,
        sheet_height: cfg.sheet_height,
        axis: cfg.axis,
        sheet_margin: cfg.sheet_margin,
        sort_order: cfg.sort_order.clone(),
    };
    Ok(Layout {
        meta,
        sheets,
        placements,
        unplaced,
    })
}

/// Expands counts into units, diverting pieces that can never be placed.
/// Oversize is judged per dimension against the sheet; rotation is never
/// attempted.
fn expand_specs(
    specs: &[PieceSpec],
    cfg: &PackConfig,
    unplaced: &mut Vec<Unplaced>,
) -> Vec<Piece> {
    let mut queue = Vec::new();
    for spec in specs {
        let reason = if spec.width == 0 || spec.height == 0 {
            Some(UnplacedReason::ZeroArea)
        } else if spec.width > cfg.sheet_width || spec.height > cfg.sheet_height {
            Some(UnplacedReason::Oversized)
        } else {
            None
        };
        match reason {
            Some(reason) => {
                warn!(
                    id = %spec.id,
                    width = spec.width,
                    height = spec.height,
                    count = spec.count,
                    ?reason,
                    "piece cannot be placed on any sheet"
                );
                for _ in 0..spec.count {
                    unplaced.push(Unplaced {
                        piece: spec.unit(),
                        reason,
                    });
                }
            }
            None => {
                for _ in 0..spec.count {
                    queue.push(spec.unit());
                }
            }
        }
    }
    queue
}

// All orders sort stably so ties keep their input order.
fn sort_queue(queue: &mut [Piece], order: &SortOrder) {
    use std::cmp::Reverse;
    match order {
        SortOrder::None => {}
        SortOrder::AreaDesc => queue.sort_by_key(|p| Reverse(p.area())),
        SortOrder::MaxSideDesc => queue.sort_by_key(|p| Reverse(p.width.max(p.height))),
        SortOrder::HeightDesc => queue.sort_by_key(|p| Reverse(p.height)),
        SortOrder::WidthDesc => queue.sort_by_key(|p| Reverse(p.width)),
    }
}

fn new_sheet(cfg: &PackConfig, index: usize, offset: u32) -> Box<dyn SheetPacker> {
    match cfg.axis {
        LayoutAxis::Horizontal => Box::new(HorizontalSheet::new(cfg, index, offset)),
        LayoutAxis::Vertical => Box::new(VerticalSheet::new(cfg, index, offset)),
    }
}
