//! Viewer session.
//!
//! A [`Viewer`] exclusively owns the alignment model, the per-track scale set,
//! the current zoom transform and the last applied reference track. The
//! rendering surface feeds it pointer and zoom events one at a time and gets
//! back plain values to draw; structural changes (reference, reorder,
//! hide/show) rebuild the whole scale set synchronously before returning.

use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::cursor::{map_hover, CursorMapping, HoverStatus};
use crate::model::AlignmentModel;
use crate::reorder::Direction;
use crate::reorient::Reorientation;
use crate::scale::{Scale, ScaleSet, ZoomTransform};
use crate::types::{GroupId, RegionRef, TrackIndex};

/// Pointer state reported by the surface's hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Region under the pointer, `None` over background.
    pub over: Option<RegionRef>,
    /// Raw surface coordinate along the track axis.
    pub position: f64,
}

impl PointerEvent {
    pub fn over(region: RegionRef, position: f64) -> Self {
        Self {
            over: Some(region),
            position,
        }
    }

    pub fn background(position: f64) -> Self {
        Self {
            over: None,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackCursor {
    pub track: TrackIndex,
    /// `None` means the cursor is parked outside the visible domain.
    pub position: Option<f64>,
}

/// Everything the surface needs to draw cursors for one pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorFrame {
    pub cursors: Vec<TrackCursor>,
    pub highlight: Option<GroupId>,
    pub status: Option<HoverStatus>,
}

impl CursorFrame {
    /// Frame with every cursor parked and nothing highlighted.
    pub fn parked(track_count: usize) -> Self {
        Self {
            cursors: (1..=track_count)
                .map(|track| TrackCursor {
                    track,
                    position: None,
                })
                .collect(),
            highlight: None,
            status: None,
        }
    }

    fn from_mapping(track_count: usize, mapping: CursorMapping) -> Self {
        let mut frame = Self::parked(track_count);
        for cursor in &mut frame.cursors {
            cursor.position = mapping.position(cursor.track);
        }
        frame.highlight = Some(mapping.group);
        frame.status = Some(mapping.status);
        frame
    }

    pub fn position(&self, track: TrackIndex) -> Option<f64> {
        self.cursors
            .iter()
            .find(|c| c.track == track)
            .and_then(|c| c.position)
    }

    /// True when no cursor is placed.
    pub fn is_empty(&self) -> bool {
        self.cursors.iter().all(|c| c.position.is_none())
    }
}

#[derive(Debug, Clone)]
pub struct Viewer {
    model: AlignmentModel,
    config: ViewerConfig,
    scales: ScaleSet,
    transform: ZoomTransform,
    reference: Option<TrackIndex>,
}

impl Viewer {
    pub fn new(model: AlignmentModel, config: ViewerConfig) -> Self {
        let mut viewer = Self {
            model,
            config,
            scales: ScaleSet::default(),
            transform: ZoomTransform::IDENTITY,
            reference: None,
        };
        viewer.rebuild();
        if let Some(reference) = viewer.config.initial_reference {
            viewer.set_reference(reference);
        }
        viewer
    }

    pub fn model(&self) -> &AlignmentModel {
        &self.model
    }

    pub fn scales(&self) -> &ScaleSet {
        &self.scales
    }

    pub fn scale(&self, track: TrackIndex) -> Option<&Scale> {
        self.scales.get(track)
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Track passed to the last successful [`Viewer::set_reference`].
    pub fn reference(&self) -> Option<TrackIndex> {
        self.reference
    }

    /// Resolve a pointer event into cursor placements for every track.
    pub fn on_pointer(&self, event: PointerEvent) -> CursorFrame {
        let track_count = self.model.track_count();
        let mapping = event
            .over
            .and_then(|region| map_hover(&self.model, region, event.position, &self.scales));
        match mapping {
            Some(mapping) => CursorFrame::from_mapping(track_count, mapping),
            None => CursorFrame::parked(track_count),
        }
    }

    /// Apply a zoom/pan transform from the surface. The factor is clamped to
    /// the configured zoom extent and every scale is re-derived from its base.
    pub fn on_zoom(&mut self, transform: ZoomTransform) -> ZoomTransform {
        let (min_k, max_k) = self.config.zoom_extent();
        self.transform = transform.clamped(min_k, max_k);
        self.scales.apply(&self.transform);
        log::debug!("Zoom k={} x={}", self.transform.k, self.transform.x);
        self.transform
    }

    pub fn reset_zoom(&mut self) {
        self.on_zoom(ZoomTransform::IDENTITY);
    }

    pub fn set_reference(&mut self, track: TrackIndex) -> Reorientation {
        let result = self.model.set_reference(track);
        if self.model.contains_track(track) {
            self.reference = Some(track);
            self.rebuild();
        }
        result
    }

    /// Swap two tracks. The reference, if any, follows its track.
    pub fn swap_tracks(&mut self, a: TrackIndex, b: TrackIndex) -> bool {
        if !self.model.swap_tracks(a, b) {
            return false;
        }
        self.reference = self.reference.map(|r| match r {
            r if r == a => b,
            r if r == b => a,
            r => r,
        });
        self.rebuild();
        true
    }

    /// Move a track one slot up or down. Moves past the first or last slot
    /// are ignored. Returns the track's new slot.
    pub fn move_track(&mut self, track: TrackIndex, direction: Direction) -> Option<TrackIndex> {
        let target = self.model.neighbour(track, direction)?;
        self.swap_tracks(track, target).then_some(target)
    }

    pub fn hide_track(&mut self, track: TrackIndex) -> bool {
        self.set_visibility(track, true)
    }

    pub fn show_track(&mut self, track: TrackIndex) -> bool {
        self.set_visibility(track, false)
    }

    fn set_visibility(&mut self, track: TrackIndex, hidden: bool) -> bool {
        if !self.model.set_hidden(track, hidden) {
            return false;
        }
        self.rebuild();
        true
    }

    /// Rebuild the scale set for the current track order and re-apply the
    /// zoom transform.
    pub fn rebuild(&mut self) {
        let lengths: Vec<_> = self.model.tracks().iter().map(|t| t.length).collect();
        self.scales = ScaleSet::shared(
            &lengths,
            self.config.surface_origin,
            self.config.surface_width,
        );
        self.scales.apply(&self.transform);
        log::debug!("Rebuilt {} track scales", self.scales.len());
    }

    /// Status line for the hovered track, e.g. `Genome A: 151 (block 101 bp)`.
    pub fn describe(&self, status: &HoverStatus) -> String {
        let name = self
            .model
            .track(status.track)
            .map(|t| t.name.as_str())
            .unwrap_or("?");
        format!(
            "{}: {} (block {} bp)",
            name, status.position, status.block_length
        )
    }
}
