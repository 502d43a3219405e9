//! Errors raised while building an alignment model.

use thiserror::Error;

use crate::types::{GroupId, SeqPos};

/// Malformed alignment input. Always fatal: initialisation aborts and the
/// caller reports the error instead of rendering a partial model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Alignment input declares no tracks")]
    NoTracks,
    #[error("Duplicate track identifier: {0}")]
    DuplicateTrack(String),
    #[error("Group {group} references unknown track '{track}'")]
    UnknownTrack { group: GroupId, track: String },
    #[error("Group {group} has an inverted region on '{track}': start {start} > end {end}")]
    InvertedRegion {
        group: GroupId,
        track: String,
        start: SeqPos,
        end: SeqPos,
    },
    #[error("Group {group} has more than one region on track '{track}'")]
    DuplicateMember { group: GroupId, track: String },
    #[error("Group {0} has no regions")]
    EmptyGroup(GroupId),
    #[error("Track '{track}' declares length {length} but a region ends at {end}")]
    RegionOutOfBounds {
        track: String,
        length: SeqPos,
        end: SeqPos,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;
