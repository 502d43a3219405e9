//! In-memory alignment model: tracks, regions and the alignment groups
//! (locally collinear blocks) that tie one region per track together.
//!
//! The model is built once by [`AlignmentModel::load`] and afterwards only
//! mutated in place by reorientation, reordering and hide/show.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{LoadError, LoadResult};
use crate::types::{GroupId, Region, RegionRef, SeqPos, Strand, Track, TrackIndex};

/// Track declaration as handed over by the data loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<SeqPos>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl TrackSpec {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
            length: None,
            hidden: false,
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_length(mut self, length: SeqPos) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// One aligned segment of a group, keyed by track identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub start: SeqPos,
    pub end: SeqPos,
    pub strand: Strand,
    pub track: String,
}

impl RegionRecord {
    pub fn new<S: Into<String>>(start: SeqPos, end: SeqPos, strand: Strand, track: S) -> Self {
        Self {
            start,
            end,
            strand,
            track: track.into(),
        }
    }
}

/// Loader input: declared tracks plus a sequence of groups of region records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentInput {
    pub tracks: Vec<TrackSpec>,
    pub groups: Vec<Vec<RegionRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentGroup {
    id: GroupId,
    members: Vec<Region>,
}

impl AlignmentGroup {
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Members ordered by track slot.
    pub fn members(&self) -> &[Region] {
        &self.members
    }

    pub fn member(&self, track: TrackIndex) -> Option<&Region> {
        self.members.iter().find(|r| r.track == track)
    }

    pub fn member_mut(&mut self, track: TrackIndex) -> Option<&mut Region> {
        self.members.iter_mut().find(|r| r.track == track)
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Region] {
        &mut self.members
    }

    pub(crate) fn sort_members(&mut self) {
        self.members.sort_by_key(|r| r.track);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSummary {
    pub tracks: usize,
    pub groups: usize,
    pub regions: usize,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tracks, {} alignment groups, {} regions",
            self.tracks, self.groups, self.regions
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentModel {
    tracks: Vec<Track>,
    groups: Vec<AlignmentGroup>,
}

impl AlignmentModel {
    /// Validate loader input and build the model. Track slots follow the
    /// declaration order; group ids follow the input group order.
    pub fn load(input: AlignmentInput) -> LoadResult<Self> {
        if input.tracks.is_empty() {
            return Err(LoadError::NoTracks);
        }

        let mut slots: HashMap<String, TrackIndex> = HashMap::new();
        for (i, spec) in input.tracks.iter().enumerate() {
            if slots.insert(spec.id.clone(), i + 1).is_some() {
                return Err(LoadError::DuplicateTrack(spec.id.clone()));
            }
        }

        let mut max_end: Vec<SeqPos> = vec![0; input.tracks.len()];
        let mut groups = Vec::with_capacity(input.groups.len());

        for (gid, records) in input.groups.into_iter().enumerate() {
            if records.is_empty() {
                return Err(LoadError::EmptyGroup(gid));
            }
            let mut members: Vec<Region> = Vec::with_capacity(records.len());
            for record in records {
                let track = *slots.get(&record.track).ok_or_else(|| LoadError::UnknownTrack {
                    group: gid,
                    track: record.track.clone(),
                })?;
                if record.start > record.end {
                    return Err(LoadError::InvertedRegion {
                        group: gid,
                        track: record.track,
                        start: record.start,
                        end: record.end,
                    });
                }
                if members.iter().any(|r| r.track == track) {
                    return Err(LoadError::DuplicateMember {
                        group: gid,
                        track: record.track,
                    });
                }
                max_end[track - 1] = max_end[track - 1].max(record.end);
                members.push(Region::new(record.start, record.end, record.strand, track, gid));
            }
            let mut group = AlignmentGroup { id: gid, members };
            group.sort_members();
            groups.push(group);
        }

        let mut tracks = Vec::with_capacity(input.tracks.len());
        for (spec, end) in input.tracks.into_iter().zip(max_end) {
            let length = match spec.length {
                Some(length) if length < end => {
                    return Err(LoadError::RegionOutOfBounds {
                        track: spec.id,
                        length,
                        end,
                    });
                }
                Some(length) => length,
                None => end,
            };
            let name = spec.name.unwrap_or_else(|| spec.id.clone());
            let mut track = Track::new(spec.id, length).with_name(name);
            track.hidden = spec.hidden;
            tracks.push(track);
        }

        for group in &mut groups {
            for region in group.members_mut() {
                region.hidden = tracks[region.track - 1].hidden;
            }
        }

        let model = Self { tracks, groups };
        log::info!("Loaded alignment model: {}", model.summary());
        Ok(model)
    }

    /// Export the current region set in loader form, for a full re-render.
    /// Track visibility travels with it.
    pub fn to_input(&self) -> AlignmentInput {
        let tracks = self
            .tracks
            .iter()
            .map(|t| {
                TrackSpec::new(t.id.clone())
                    .with_name(t.name.clone())
                    .with_length(t.length)
                    .with_hidden(t.hidden)
            })
            .collect();
        let groups = self
            .groups
            .iter()
            .map(|g| {
                g.members
                    .iter()
                    .map(|r| {
                        RegionRecord::new(r.start, r.end, r.strand, self.tracks[r.track - 1].id.clone())
                    })
                    .collect()
            })
            .collect();
        AlignmentInput { tracks, groups }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, track: TrackIndex) -> Option<&Track> {
        track.checked_sub(1).and_then(|i| self.tracks.get(i))
    }

    pub fn track_by_id(&self, id: &str) -> Option<TrackIndex> {
        self.tracks.iter().position(|t| t.id == id).map(|i| i + 1)
    }

    pub fn contains_track(&self, track: TrackIndex) -> bool {
        (1..=self.tracks.len()).contains(&track)
    }

    pub fn groups(&self) -> &[AlignmentGroup] {
        &self.groups
    }

    pub fn group(&self, group: GroupId) -> Option<&AlignmentGroup> {
        self.groups.get(group)
    }

    /// Members of one alignment group, at most one per track.
    pub fn group_members(&self, group: GroupId) -> &[Region] {
        self.group(group).map(|g| g.members()).unwrap_or(&[])
    }

    /// Regions on a track in insertion (group) order.
    pub fn regions_for_track(&self, track: TrackIndex) -> impl Iterator<Item = &Region> + '_ {
        self.groups.iter().filter_map(move |g| g.member(track))
    }

    pub fn region(&self, at: RegionRef) -> Option<&Region> {
        self.group(at.group).and_then(|g| g.member(at.track))
    }

    /// First region on `track` whose span contains sequence position `pos`.
    pub fn region_at(&self, track: TrackIndex, pos: SeqPos) -> Option<RegionRef> {
        self.regions_for_track(track)
            .find(|r| r.contains(pos))
            .map(Region::region_ref)
    }

    /// Hide or show a track and every region on it. Group membership is kept.
    pub fn set_hidden(&mut self, track: TrackIndex, hidden: bool) -> bool {
        let Some(slot) = track.checked_sub(1).and_then(|i| self.tracks.get_mut(i)) else {
            log::debug!("Ignoring visibility change for out-of-range track {}", track);
            return false;
        };
        slot.hidden = hidden;
        for group in &mut self.groups {
            if let Some(region) = group.member_mut(track) {
                region.hidden = hidden;
            }
        }
        true
    }

    pub fn is_hidden(&self, track: TrackIndex) -> bool {
        self.track(track).map(|t| t.hidden).unwrap_or(false)
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            tracks: self.tracks.len(),
            groups: self.groups.len(),
            regions: self.groups.iter().map(|g| g.members.len()).sum(),
        }
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [AlignmentGroup] {
        &mut self.groups
    }

    pub(crate) fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Three genomes, four blocks; block 2 skips track "c".
    pub(crate) fn sample_input() -> AlignmentInput {
        AlignmentInput {
            tracks: vec![
                TrackSpec::new("a").with_name("Genome A").with_length(10_000),
                TrackSpec::new("b"),
                TrackSpec::new("c").with_length(8_000),
            ],
            groups: vec![
                vec![
                    RegionRecord::new(100, 200, Strand::Forward, "a"),
                    RegionRecord::new(500, 650, Strand::Forward, "b"),
                    RegionRecord::new(1000, 1100, Strand::Reverse, "c"),
                ],
                vec![
                    RegionRecord::new(300, 900, Strand::Reverse, "b"),
                    RegionRecord::new(1200, 1800, Strand::Forward, "a"),
                    RegionRecord::new(2000, 2600, Strand::Forward, "c"),
                ],
                vec![
                    RegionRecord::new(3000, 3500, Strand::Forward, "a"),
                    RegionRecord::new(4000, 4500, Strand::Reverse, "b"),
                ],
                vec![
                    RegionRecord::new(5000, 5200, Strand::Reverse, "a"),
                    RegionRecord::new(6000, 6200, Strand::Reverse, "b"),
                    RegionRecord::new(7000, 7200, Strand::Forward, "c"),
                ],
            ],
        }
    }

    pub(crate) fn sample_model() -> AlignmentModel {
        AlignmentModel::load(sample_input()).unwrap()
    }

    /// Up to a dozen groups over four tracks `t1..t4`, each group holding a
    /// random subset of tracks on random strands.
    pub(crate) fn arb_input() -> impl Strategy<Value = AlignmentInput> {
        let group = proptest::collection::vec(any::<bool>(), 4).prop_flat_map(|strands| {
            proptest::collection::vec(any::<bool>(), 4).prop_map(move |present| {
                strands
                    .iter()
                    .zip(present)
                    .enumerate()
                    .filter(|(_, (_, present))| *present)
                    .map(|(i, (forward, _))| {
                        RegionRecord::new(10, 20, Strand::from(*forward), format!("t{}", i + 1))
                    })
                    .collect::<Vec<_>>()
            })
        });
        proptest::collection::vec(group, 1..12).prop_map(|groups| AlignmentInput {
            tracks: (1..=4).map(|i| TrackSpec::new(format!("t{}", i))).collect(),
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        })
    }

    #[test]
    fn test_load_assigns_slots_and_lengths() {
        let model = sample_model();
        assert_eq!(model.track_count(), 3);
        assert_eq!(model.track(1).unwrap().name, "Genome A");
        assert_eq!(model.track(2).unwrap().name, "b");
        // undeclared length falls back to the furthest region end
        assert_eq!(model.track(2).unwrap().length, 6200);
        assert_eq!(model.track(3).unwrap().length, 8000);
        assert_eq!(model.track_by_id("c"), Some(3));
        assert!(model.track(0).is_none());
        assert!(model.track(4).is_none());
    }

    #[test]
    fn test_group_members_sorted_by_track() {
        let model = sample_model();
        let tracks: Vec<_> = model.group_members(1).iter().map(|r| r.track).collect();
        assert_eq!(tracks, vec![1, 2, 3]);
        assert_eq!(model.group_members(2).len(), 2);
        assert!(model.group_members(99).is_empty());
    }

    #[test]
    fn test_regions_for_track_in_insertion_order() {
        let model = sample_model();
        let starts: Vec<_> = model.regions_for_track(3).map(|r| r.start).collect();
        assert_eq!(starts, vec![1000, 2000, 7000]);
        assert_eq!(model.regions_for_track(7).count(), 0);
    }

    #[test]
    fn test_region_at() {
        let model = sample_model();
        assert_eq!(model.region_at(2, 650), Some(RegionRef::new(0, 2)));
        assert_eq!(model.region_at(2, 4200), Some(RegionRef::new(2, 2)));
        assert_eq!(model.region_at(2, 3000), None);
    }

    #[test]
    fn test_set_hidden_keeps_membership() {
        let mut model = sample_model();
        assert!(model.set_hidden(2, true));
        assert!(model.is_hidden(2));
        assert!(model.regions_for_track(2).all(|r| r.hidden));
        assert_eq!(model.group_members(0).len(), 3);
        assert!(model.regions_for_track(1).all(|r| !r.hidden));
        assert!(!model.set_hidden(9, true));
    }

    #[test]
    fn test_load_rejects_unknown_track() {
        let mut input = sample_input();
        input.groups[2][1].track = "z".to_string();
        assert_eq!(
            AlignmentModel::load(input),
            Err(LoadError::UnknownTrack {
                group: 2,
                track: "z".to_string()
            })
        );
    }

    #[test]
    fn test_load_rejects_inverted_region() {
        let mut input = sample_input();
        input.groups[0][0] = RegionRecord::new(300, 200, Strand::Forward, "a");
        assert!(matches!(
            AlignmentModel::load(input),
            Err(LoadError::InvertedRegion { group: 0, start: 300, end: 200, .. })
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_member() {
        let mut input = sample_input();
        input.groups[2].push(RegionRecord::new(10, 20, Strand::Forward, "a"));
        assert!(matches!(
            AlignmentModel::load(input),
            Err(LoadError::DuplicateMember { group: 2, .. })
        ));
    }

    #[test]
    fn test_load_rejects_structural_problems() {
        assert_eq!(
            AlignmentModel::load(AlignmentInput::default()),
            Err(LoadError::NoTracks)
        );

        let mut input = sample_input();
        input.tracks.push(TrackSpec::new("b"));
        assert_eq!(
            AlignmentModel::load(input),
            Err(LoadError::DuplicateTrack("b".to_string()))
        );

        let mut input = sample_input();
        input.groups.push(Vec::new());
        assert_eq!(AlignmentModel::load(input), Err(LoadError::EmptyGroup(4)));

        let mut input = sample_input();
        input.tracks[2].length = Some(5000);
        assert!(matches!(
            AlignmentModel::load(input),
            Err(LoadError::RegionOutOfBounds { end: 7200, .. })
        ));
    }

    #[test]
    fn test_single_base_region_loads() {
        let input = AlignmentInput {
            tracks: vec![TrackSpec::new("x"), TrackSpec::new("y")],
            groups: vec![vec![
                RegionRecord::new(42, 42, Strand::Forward, "x"),
                RegionRecord::new(7, 7, Strand::Reverse, "y"),
            ]],
        };
        let model = AlignmentModel::load(input).unwrap();
        assert_eq!(model.region(RegionRef::new(0, 1)).unwrap().span(), 1);
    }

    #[test]
    fn test_region_ending_at_max_position_loads() {
        let input = AlignmentInput {
            tracks: vec![TrackSpec::new("a")],
            groups: vec![vec![RegionRecord::new(0, SeqPos::MAX, Strand::Forward, "a")]],
        };
        let model = AlignmentModel::load(input).unwrap();
        assert_eq!(model.track(1).unwrap().length, SeqPos::MAX);
        assert_eq!(model.region(RegionRef::new(0, 1)).unwrap().span(), SeqPos::MAX);
    }

    #[test]
    fn test_hidden_tracks_survive_export() {
        let mut model = sample_model();
        model.set_hidden(2, true);
        let input = model.to_input();
        assert!(input.tracks[1].hidden);

        let reloaded = AlignmentModel::load(input).unwrap();
        assert!(reloaded.is_hidden(2));
        assert!(reloaded.regions_for_track(2).all(|r| r.hidden));
        assert_eq!(reloaded, model);
    }

    #[test]
    fn test_hidden_flag_from_json() {
        let input: AlignmentInput = serde_json::from_str(
            r#"{"tracks": [{"id": "a"}, {"id": "b", "hidden": true}],
                "groups": [[{"start": 1, "end": 5, "strand": "+", "track": "b"}]]}"#,
        )
        .unwrap();
        let model = AlignmentModel::load(input).unwrap();
        assert!(!model.is_hidden(1));
        assert!(model.region(RegionRef::new(0, 2)).unwrap().hidden);
    }

    #[test]
    fn test_to_input_reloads_identically() {
        let model = sample_model();
        let reloaded = AlignmentModel::load(model.to_input()).unwrap();
        assert_eq!(reloaded, model);
    }

    #[test]
    fn test_summary() {
        let summary = sample_model().summary();
        assert_eq!(summary.regions, 11);
        assert_eq!(summary.to_string(), "3 tracks, 4 alignment groups, 11 regions");
    }
}
