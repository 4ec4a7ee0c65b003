use crate::error::{CompareError, Result};
use memmap2::MmapOptions;
use std::fs::File;
use std::path::{Path, PathBuf};

/// One opened comparison input: a named, fixed-length, read-only byte
/// sequence.
///
/// Non-empty files are memory mapped so random access stays cheap even for
/// multi-gigabyte images. Empty files fall back to an inline buffer since a
/// zero-length mapping is not portable.
#[derive(Debug)]
pub struct Source {
    path: PathBuf,
    bytes: SourceBytes,
}

#[derive(Debug)]
enum SourceBytes {
    Inline(Vec<u8>),
    Mapped(memmap2::Mmap),
}

impl Source {
    /// Open a regular file for comparison.
    ///
    /// Anything that is not an existing regular file (directories, sockets,
    /// dangling paths) is rejected up front so a run never starts producing
    /// output it cannot finish.
    pub fn open(path: &Path) -> Result<Self> {
        let is_regular = std::fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_regular {
            return Err(CompareError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| CompareError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let len = file
            .metadata()
            .map_err(|source| CompareError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let bytes = if len == 0 {
            SourceBytes::Inline(Vec::new())
        } else {
            let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|source| {
                CompareError::Open {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            SourceBytes::Mapped(mmap)
        };

        Ok(Source {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.bytes {
            SourceBytes::Inline(buf) => buf,
            SourceBytes::Mapped(mmap) => mmap,
        }
    }
}
