//! Dataset archive staging

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Extract the dataset archive into `dest` and delete the archive.
///
/// Returns the number of entries extracted. Extraction is all-or-nothing
/// from the caller's point of view: a mid-extraction failure leaves the
/// partially extracted state as-is and propagates, and the archive is
/// only removed after a complete extraction.
pub fn stage_dataset(archive: &Path, dest: &Path) -> Result<usize> {
    if !archive.exists() {
        return Err(Error::MissingInput {
            path: archive.to_path_buf(),
        });
    }

    let file = fs::File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file).map_err(zip_to_io)?;
    let entries = zip.len();

    zip.extract(dest).map_err(zip_to_io)?;

    fs::remove_file(archive)?;

    Ok(entries)
}

fn zip_to_io(e: zip::result::ZipError) -> Error {
    Error::Io(io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;

    fn write_test_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, data) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_stage_dataset_extracts_and_removes_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("signs.zip");
        write_test_archive(
            &archive,
            &[
                ("train/images/hello.jpg", b"jpeg bytes"),
                ("test/images/thanks.jpg", b"more bytes"),
            ],
        );

        let extracted = stage_dataset(&archive, dir.path()).unwrap();

        assert_eq!(extracted, 2);
        assert!(dir.path().join("train/images/hello.jpg").exists());
        assert!(dir.path().join("test/images/thanks.jpg").exists());
        assert!(!archive.exists());
    }

    #[test]
    fn test_stage_dataset_missing_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("absent.zip");

        let err = stage_dataset(&archive, dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
    }

    #[test]
    fn test_stage_dataset_corrupt_archive_is_kept() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("broken.zip");
        fs::write(&archive, b"not a zip file").unwrap();

        let result = stage_dataset(&archive, dir.path());

        assert!(result.is_err());
        // the archive is only deleted after successful extraction
        assert!(archive.exists());
    }

    #[test]
    fn test_stage_dataset_preserves_file_contents() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("signs.zip");
        write_test_archive(&archive, &[("data/labels.txt", b"Hello\nThanks\n")]);

        stage_dataset(&archive, dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("data/labels.txt")).unwrap();
        assert_eq!(content, "Hello\nThanks\n");
    }
}
