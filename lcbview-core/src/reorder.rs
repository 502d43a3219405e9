//! Track reordering.

use crate::model::AlignmentModel;
use crate::types::TrackIndex;

/// Direction for single-step track moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl AlignmentModel {
    /// Swap two track slots. Every region on `a` is relabelled `b` and vice
    /// versa in all groups, then each group's members are re-sorted so that
    /// iteration follows the visual order. Returns `false` without touching
    /// the model when either index is out of range or both are equal.
    pub fn swap_tracks(&mut self, a: TrackIndex, b: TrackIndex) -> bool {
        if a == b || !self.contains_track(a) || !self.contains_track(b) {
            log::debug!("Ignoring swap of tracks {} and {}", a, b);
            return false;
        }

        self.tracks_mut().swap(a - 1, b - 1);
        for group in self.groups_mut() {
            let mut touched = false;
            for region in group.members_mut() {
                if region.track == a {
                    region.track = b;
                    touched = true;
                } else if region.track == b {
                    region.track = a;
                    touched = true;
                }
            }
            if touched {
                group.sort_members();
            }
        }

        log::debug!("Swapped tracks {} and {}", a, b);
        true
    }

    /// Slot a track would move to, or `None` past the first or last slot.
    pub fn neighbour(&self, track: TrackIndex, direction: Direction) -> Option<TrackIndex> {
        if !self.contains_track(track) {
            return None;
        }
        let target = match direction {
            Direction::Up => track.checked_sub(1)?,
            Direction::Down => track + 1,
        };
        self.contains_track(target).then_some(target)
    }
}
