use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer sequence coordinate on a track.
pub type SeqPos = u64;
/// 1-based track slot, renumbered on reorder.
pub type TrackIndex = usize;
/// Alignment group (LCB) identifier, assigned in load order starting at 0.
pub type GroupId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn toggled(self) -> Self {
        match self {
            Strand::Forward => Strand::Reverse,
            Strand::Reverse => Strand::Forward,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_forward(self) -> bool {
        matches!(self, Strand::Forward)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

impl From<bool> for Strand {
    fn from(forward: bool) -> Self {
        if forward {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }
}

impl From<Strand> for bool {
    fn from(strand: Strand) -> Self {
        strand.is_forward()
    }
}

impl From<Strand> for char {
    fn from(strand: Strand) -> Self {
        match strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl TryFrom<char> for Strand {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Strand::Forward),
            '-' => Ok(Strand::Reverse),
            other => Err(other),
        }
    }
}

/// Addresses one region: a group has at most one member per track, so the
/// pair is unique for as long as the track order does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionRef {
    pub group: GroupId,
    pub track: TrackIndex,
}

impl RegionRef {
    pub fn new(group: GroupId, track: TrackIndex) -> Self {
        Self { group, track }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: SeqPos,
    pub end: SeqPos,
    pub strand: Strand,
    pub track: TrackIndex,
    pub group: GroupId,
    #[serde(default)]
    pub hidden: bool,
}

impl Region {
    pub fn new(start: SeqPos, end: SeqPos, strand: Strand, track: TrackIndex, group: GroupId) -> Self {
        Self {
            start,
            end,
            strand,
            track,
            group,
            hidden: false,
        }
    }

    /// Inclusive length in bases, saturating at `SeqPos::MAX`.
    pub fn span(&self) -> SeqPos {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    pub fn contains(&self, pos: SeqPos) -> bool {
        self.start <= pos && pos <= self.end
    }

    pub fn region_ref(&self) -> RegionRef {
        RegionRef::new(self.group, self.track)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub length: SeqPos,
    #[serde(default)]
    pub hidden: bool,
}

impl Track {
    pub fn new(id: String, length: SeqPos) -> Self {
        Self {
            name: id.clone(),
            id,
            length,
            hidden: false,
        }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_toggle() {
        let mut strand = Strand::Forward;
        strand.toggle();
        assert_eq!(strand, Strand::Reverse);
        assert_eq!(strand.toggled(), Strand::Forward);
    }

    #[test]
    fn test_strand_char_conversion() {
        assert_eq!(Strand::try_from('+'), Ok(Strand::Forward));
        assert_eq!(Strand::try_from('-'), Ok(Strand::Reverse));
        assert_eq!(Strand::try_from('x'), Err('x'));
        assert_eq!(char::from(Strand::Reverse), '-');
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn test_region_length_is_inclusive() {
        let region = Region::new(100, 200, Strand::Forward, 1, 0);
        assert_eq!(region.span(), 101);
        assert!(region.contains(100));
        assert!(region.contains(200));
        assert!(!region.contains(201));
    }
}
