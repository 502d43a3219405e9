//! Reference reorientation.
//!
//! Choosing a reference track normalises that track's strand to `+` in every
//! group it belongs to. Each group decides independently: when the reference
//! member was `-`, the whole group is flipped (every member toggles), and
//! otherwise the group is left alone.

use crate::model::{AlignmentGroup, AlignmentModel};
use crate::types::{GroupId, Strand, TrackIndex};

/// Outcome of one reorientation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reorientation {
    pub reference: TrackIndex,
    /// Groups whose strands were toggled, in group order.
    pub flipped: Vec<GroupId>,
}

impl Reorientation {
    pub fn is_noop(&self) -> bool {
        self.flipped.is_empty()
    }
}

/// Normalise `reference` to the forward strand in every group it belongs to.
///
/// Groups without a member on `reference` keep their strands, which also
/// makes an unknown track index a no-op.
pub fn set_reference(groups: &mut [AlignmentGroup], reference: TrackIndex) -> Reorientation {
    let mut flipped = Vec::new();

    for group in groups.iter_mut() {
        let needs_flip = match group.member(reference) {
            Some(region) => region.strand != Strand::Forward,
            None => false,
        };
        if !needs_flip {
            continue;
        }
        for region in group.members_mut() {
            region.strand.toggle();
        }
        flipped.push(group.id());
    }

    log::debug!(
        "Reference set to track {}: {} group(s) flipped",
        reference,
        flipped.len()
    );

    Reorientation { reference, flipped }
}

impl AlignmentModel {
    /// Reorient the whole model around `reference`. Out-of-range indices
    /// change nothing.
    pub fn set_reference(&mut self, reference: TrackIndex) -> Reorientation {
        if !self.contains_track(reference) {
            log::debug!("Ignoring reference change to out-of-range track {}", reference);
            return Reorientation {
                reference,
                flipped: Vec::new(),
            };
        }
        set_reference(self.groups_mut(), reference)
    }
}
