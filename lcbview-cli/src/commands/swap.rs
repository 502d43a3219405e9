//! Swap command - exchange two track slots

use anyhow::Result;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{read_alignment, resolve_track, write_alignment};

pub fn execute(input: PathBuf, a: String, b: String, output: Option<PathBuf>) -> Result<()> {
    let mut model = read_alignment(&input)?;
    let a = resolve_track(&model, &a)?;
    let b = resolve_track(&model, &b)?;

    if !model.swap_tracks(a, b) {
        return Err(CliError::validation(format!("Cannot swap track {} with itself", a)).into());
    }
    log::info!("Swapped tracks {} and {}", a, b);

    write_alignment(&model, output.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tests::SAMPLE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_swap_writes_new_track_order() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "{}", SAMPLE).unwrap();
        let output = NamedTempFile::new().unwrap();

        execute(
            input.path().to_path_buf(),
            "k12".to_string(),
            "3".to_string(),
            Some(output.path().to_path_buf()),
        )
        .unwrap();

        let model = read_alignment(output.path()).unwrap();
        assert_eq!(model.track(1).unwrap().id, "shigella");
        assert_eq!(model.track(3).unwrap().id, "k12");
        assert_eq!(model.region_at(1, 750).map(|r| r.group), Some(1));
    }

    #[test]
    fn test_swap_with_itself_fails() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "{}", SAMPLE).unwrap();
        let err = execute(input.path().to_path_buf(), "2".into(), "o157".into(), None).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
