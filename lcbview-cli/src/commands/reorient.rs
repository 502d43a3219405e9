//! Reorient command - normalise strands around a reference track

use anyhow::Result;
use std::path::PathBuf;

use crate::input::{read_alignment, resolve_track, write_alignment};

pub fn execute(input: PathBuf, reference: String, output: Option<PathBuf>) -> Result<()> {
    let mut model = read_alignment(&input)?;
    let reference = resolve_track(&model, &reference)?;

    let result = model.set_reference(reference);
    if result.is_noop() {
        log::info!("Track {} is already forward in every block", reference);
    } else {
        log::info!(
            "Flipped {} group(s) relative to track {}: {:?}",
            result.flipped.len(),
            reference,
            result.flipped
        );
    }

    write_alignment(&model, output.as_deref())?;
    Ok(())
}
