//! Reading alignment descriptions and writing updated region sets.
//!
//! Input is the JSON form of [`AlignmentInput`]; files ending in `.gz` are
//! decompressed on the fly.

use flate2::read::GzDecoder;
use lcbview_core::{AlignmentInput, AlignmentModel, TrackIndex};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{CliError, CliResult};

pub fn read_alignment(path: &Path) -> CliResult<AlignmentModel> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.to_string_lossy().ends_with(".gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let input: AlignmentInput = serde_json::from_reader(BufReader::new(reader)).map_err(|e| {
        CliError::invalid_format(path.display().to_string(), e.to_string())
    })?;
    log::debug!(
        "Read {} tracks and {} groups from {}",
        input.tracks.len(),
        input.groups.len(),
        path.display()
    );

    Ok(AlignmentModel::load(input)?)
}

/// Write the model's current region set as pretty JSON, to `output` or stdout.
pub fn write_alignment(model: &AlignmentModel, output: Option<&Path>) -> CliResult<()> {
    let input = model.to_input();
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &input)
                .map_err(|e| CliError::io(e.to_string()))?;
            writer.flush()?;
            log::info!("Wrote updated alignment to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &input)
                .map_err(|e| CliError::io(e.to_string()))?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

/// Accept either a 1-based slot number or a track identifier.
pub fn resolve_track(model: &AlignmentModel, spec: &str) -> CliResult<TrackIndex> {
    if let Ok(slot) = spec.parse::<TrackIndex>() {
        if model.contains_track(slot) {
            return Ok(slot);
        }
        return Err(CliError::validation(format!(
            "Track slot {} is out of range (1..={})",
            slot,
            model.track_count()
        )));
    }
    model
        .track_by_id(spec)
        .ok_or_else(|| CliError::validation(format!("Unknown track: {}", spec)))
}
