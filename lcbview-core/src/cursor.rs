//! Cross-track cursor mapping.
//!
//! Given the region under the pointer and the raw surface coordinate, work out
//! where the equivalent alignment column sits on every other member of the
//! same alignment group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::AlignmentModel;
use crate::scale::ScaleSet;
use crate::types::{GroupId, RegionRef, SeqPos, TrackIndex};

/// Status-bar information for the hovered track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverStatus {
    pub track: TrackIndex,
    /// Nearest integer sequence position under the pointer.
    pub position: SeqPos,
    /// Inclusive length of the hovered block on that track.
    pub block_length: SeqPos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorMapping {
    pub group: GroupId,
    /// Surface position per track. Tracks without a visible member are absent.
    pub positions: BTreeMap<TrackIndex, f64>,
    pub status: HoverStatus,
}

impl CursorMapping {
    pub fn position(&self, track: TrackIndex) -> Option<f64> {
        self.positions.get(&track).copied()
    }
}

/// Map a pointer position on `hovered` onto every other visible member of its
/// group.
///
/// The offset from the hovered region's start is measured in the hovered
/// track's surface units and re-applied on the other tracks: from `start` for
/// members on the same strand, backwards from `end` for members on the
/// opposite strand. Returns `None` when the region does not resolve, is
/// hidden, or has no scale.
pub fn map_hover(
    model: &AlignmentModel,
    hovered: RegionRef,
    raw: f64,
    scales: &ScaleSet,
) -> Option<CursorMapping> {
    let region = model.region(hovered)?;
    if region.hidden {
        return None;
    }
    let own = scales.get(region.track)?;

    let snapped = own.snap(raw);
    let position = own.nearest_position(snapped);
    let rel_offset = snapped - own.position(region.start);

    let mut positions = BTreeMap::new();
    for other in model.group_members(region.group) {
        if other.track == region.track || other.hidden {
            continue;
        }
        let Some(target) = scales.get(other.track) else {
            continue;
        };
        let pos = if other.strand == region.strand {
            target.position(other.start) + rel_offset
        } else {
            target.position(other.end) - rel_offset
        };
        positions.insert(other.track, pos);
    }
    positions.insert(region.track, snapped);

    Some(CursorMapping {
        group: region.group,
        positions,
        status: HoverStatus {
            track: region.track,
            position,
            block_length: region.span(),
        },
    })
}
