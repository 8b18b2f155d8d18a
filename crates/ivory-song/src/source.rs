use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

/// Open a song notation file for sequential reading.
pub fn open_song(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("failed to open song {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn opens_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.txt");
        std::fs::write(&path, "C4 D4 ").unwrap();

        let mut text = String::new();
        open_song(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "C4 D4 ");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = open_song(&path).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
