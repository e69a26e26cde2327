use super::parser::read_output_file;
use crate::domain::{OutputKind, SrimResult};
use std::path::Path;

pub trait OutputReader: Sized {
    const KIND: OutputKind;

    fn from_bytes(bytes: &[u8]) -> SrimResult<Self>;

    fn from_file(path: impl AsRef<Path>) -> SrimResult<Self> {
        let path = path.as_ref();
        tracing::debug!(kind = Self::KIND.as_str(), path = %path.display(), "reading output file");
        Self::from_bytes(&read_output_file(path)?)
    }

    /// Reads the engine's fixed file name for this kind inside `directory`.
    fn from_dir(directory: impl AsRef<Path>) -> SrimResult<Self> {
        Self::from_file(directory.as_ref().join(Self::KIND.file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::OutputReader;
    use crate::domain::{OutputKind, SrimError, SrimErrorCategory, SrimResult};
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug)]
    struct ByteCount(usize);

    impl OutputReader for ByteCount {
        const KIND: OutputKind = OutputKind::Phonons;

        fn from_bytes(bytes: &[u8]) -> SrimResult<Self> {
            if bytes.is_empty() {
                return Err(SrimError::parse("PARSE.TABLE", "empty file"));
            }
            Ok(Self(bytes.len()))
        }
    }

    #[test]
    fn from_dir_uses_fixed_file_name() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(temp.path().join("PHONON.txt"), b"abc").expect("write phonon");

        let reader = ByteCount::from_dir(temp.path()).expect("reader");
        assert_eq!(reader.0, 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = ByteCount::from_dir(temp.path()).expect_err("missing file");
        assert_eq!(error.category(), SrimErrorCategory::IoSystemError);
        assert!(error.message().contains("PHONON.txt"));
    }

    #[test]
    fn parse_errors_pass_through_unchanged() {
        let temp = TempDir::new().expect("tempdir should be created");
        fs::write(temp.path().join("PHONON.txt"), b"").expect("write phonon");
        let error = ByteCount::from_dir(temp.path()).expect_err("empty file");
        assert_eq!(error.code(), "PARSE.TABLE");
    }
}
