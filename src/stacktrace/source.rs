//! Reading source files for context.

use std::io;

/// Reads a source file in full
///
/// A missing file must surface as `io::ErrorKind::NotFound`; the enricher
/// treats that kind as "no context" and every other kind as fatal.
pub trait SourceReader {
    fn read_source(&self, path: &str) -> io::Result<String>;
}

impl<R: SourceReader + ?Sized> SourceReader for &R {
    fn read_source(&self, path: &str) -> io::Result<String> {
        (**self).read_source(path)
    }
}

/// Reads straight from the local filesystem
///
/// Invalid UTF-8 sequences become U+FFFD instead of failing the read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_source(&self, path: &str) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fs_reader_reads_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\n").unwrap();

        let source = FsSourceReader
            .read_source(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(source, "one\ntwo\n");
    }

    #[test]
    fn test_fs_reader_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.js");

        let err = FsSourceReader
            .read_source(missing.to_str().unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fs_reader_replaces_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9\n").unwrap();

        let source = FsSourceReader
            .read_source(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(source, "caf\u{FFFD}\n");
    }
}
