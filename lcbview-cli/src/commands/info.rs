//! Info command - summarise tracks and alignment groups

use anyhow::Result;
use lcbview_core::AlignmentModel;
use std::fmt::Write;
use std::path::PathBuf;

use crate::input::read_alignment;

pub fn execute(input: PathBuf) -> Result<()> {
    let model = read_alignment(&input)?;
    print!("{}", render(&model));
    Ok(())
}

pub fn render(model: &AlignmentModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", model.summary());
    let _ = writeln!(out, "slot\tid\tname\tlength\tregions\thidden");
    for (i, track) in model.tracks().iter().enumerate() {
        let slot = i + 1;
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            slot,
            track.id,
            track.name,
            track.length,
            model.regions_for_track(slot).count(),
            if track.hidden { "yes" } else { "no" }
        );
    }
    out
}
