//! Hover command - map one sequence position across every track

use anyhow::Result;
use lcbview_core::{CursorFrame, PointerEvent, SeqPos, TrackIndex, Viewer, ZoomTransform};
use std::fmt::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::input::{read_alignment, resolve_track};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &Config,
    input: PathBuf,
    track: String,
    position: SeqPos,
    reference: Option<String>,
    zoom: Option<f64>,
    pan: Option<f64>,
    json: bool,
) -> Result<()> {
    let model = read_alignment(&input)?;
    let mut viewer = Viewer::new(model, config.viewer.clone());

    if let Some(reference) = reference {
        let reference = resolve_track(viewer.model(), &reference)?;
        let result = viewer.set_reference(reference);
        log::info!(
            "Reference track {}: {} group(s) flipped",
            reference,
            result.flipped.len()
        );
    }

    if zoom.is_some() || pan.is_some() {
        let applied = viewer.on_zoom(ZoomTransform::new(zoom.unwrap_or(1.0), pan.unwrap_or(0.0)));
        log::info!("Zoom factor {} with offset {}", applied.k, applied.x);
    }

    let track = resolve_track(viewer.model(), &track)?;
    let frame = hover(&viewer, track, position);

    if json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        print!("{}", render(&viewer, &frame));
    }
    Ok(())
}

/// Stand in for the surface's hit-testing: find the block under `position`
/// and feed the viewer the matching pointer event.
pub fn hover(viewer: &Viewer, track: TrackIndex, position: SeqPos) -> CursorFrame {
    let raw = viewer
        .scale(track)
        .map(|s| s.position(position))
        .unwrap_or_default();
    let over = viewer.model().region_at(track, position);
    if over.is_none() {
        log::info!("No alignment block at position {} on track {}", position, track);
    }
    viewer.on_pointer(PointerEvent { over, position: raw })
}

pub fn render(viewer: &Viewer, frame: &CursorFrame) -> String {
    let mut out = String::new();
    match (frame.highlight, frame.status.as_ref()) {
        (Some(group), Some(status)) => {
            let _ = writeln!(out, "group {}: {}", group, viewer.describe(status));
        }
        _ => {
            let _ = writeln!(out, "no alignment block under cursor");
        }
    }
    for cursor in &frame.cursors {
        let id = viewer
            .model()
            .track(cursor.track)
            .map(|t| t.id.as_str())
            .unwrap_or("?");
        match (cursor.position, viewer.scale(cursor.track)) {
            (Some(pos), Some(scale)) => {
                let _ = write!(
                    out,
                    "{}\t{}\t{:.2}\t{}",
                    cursor.track,
                    id,
                    pos,
                    scale.nearest_position(pos)
                );
                if !scale.in_range(pos) {
                    out.push_str("\toffscreen");
                }
                out.push('\n');
            }
            _ => {
                let _ = writeln!(out, "{}\t{}\tparked\t-", cursor.track, id);
            }
        }
    }
    out
}
