pub mod report;

use crate::error::{CompareError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Block sizes evaluated when the user does not ask for specific ones.
pub const DEFAULT_BLOCK_SIZES: [i64; 7] = [8192, 4096, 2048, 1024, 512, 256, 1];

/// The byte range a comparison scans: a start offset plus an optional
/// length. An unbounded window extends to the end of the longer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    offset: u64,
    size: Option<u64>,
}

impl Window {
    /// Build a window from the raw CLI integers, where `size == -1` means
    /// unbounded.
    pub fn new(offset: i64, size: i64) -> Result<Self> {
        if offset < 0 {
            return Err(CompareError::InvalidOffset { offset });
        }
        if size < -1 {
            return Err(CompareError::InvalidSize { size });
        }
        Ok(Window {
            offset: offset as u64,
            size: (size != -1).then_some(size as u64),
        })
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// True when the window covers the inputs in full (no offset, no bound).
    pub fn is_whole(&self) -> bool {
        self.offset == 0 && self.size.is_none()
    }

    /// Half-open scan range over inputs whose longer side has `max_len`
    /// bytes. May be empty when the offset lies past the end.
    fn bounds(&self, max_len: usize) -> (usize, usize) {
        let end = match self.size {
            Some(size) => self.offset.saturating_add(size).min(max_len as u64),
            None => max_len as u64,
        };
        (self.offset as usize, end as usize)
    }
}

/// Validated set of block sizes: deduplicated, ascending, every entry >= 1.
#[derive(Debug, Clone)]
pub struct BlockSizes(Vec<u64>);

impl BlockSizes {
    pub fn new(sizes: impl IntoIterator<Item = i64>) -> Result<Self> {
        let mut set = BTreeSet::new();
        for size in sizes {
            if size < 1 {
                return Err(CompareError::InvalidBlockSize { size });
            }
            set.insert(size as u64);
        }
        Ok(BlockSizes(set.into_iter().collect()))
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockStatus {
    Matched,
    Mismatched,
}

/// Aggregate outcome of one block-size partition over the compared range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReport {
    /// Blocks whose every scanned byte was equal on both sides
    pub matched: u64,
    /// Blocks containing at least one differing or out-of-bounds byte
    pub mismatched: u64,
}

impl BlockReport {
    pub fn total(&self) -> u64 {
        self.matched + self.mismatched
    }

    pub fn percent_matched(&self) -> f64 {
        self.matched as f64 / self.total() as f64 * 100.0
    }
}

/// Compare two byte sequences and tally matched vs. mismatched blocks for
/// every requested block size.
///
/// All partitions are filled during one ascending scan of the window; no
/// byte is read twice. Each index is classified once (`a[i] == b[i]`, with
/// indices past the shorter input counting as mismatches) and the verdict is
/// folded into every partition: a block entry is created lazily when the
/// scan crosses its start, and flips to mismatched the first time a bad byte
/// lands in it. Block entries are only materialized for the window actually
/// scanned, so a narrow window over a huge file stays cheap.
///
/// The returned map is keyed by block size, ascending. A size whose
/// partition ended up with no blocks at all (empty scan range, or a window
/// starting mid-block over purely matching bytes) has no entry; callers
/// surface that as a warning rather than a division by zero.
pub fn compare(a: &[u8], b: &[u8], sizes: &BlockSizes, window: &Window) -> BTreeMap<u64, BlockReport> {
    let min_len = a.len().min(b.len());
    let max_len = a.len().max(b.len());
    let (start, end) = window.bounds(max_len);

    let mut partitions: Vec<(u64, HashMap<u64, BlockStatus>)> =
        sizes.iter().map(|size| (size, HashMap::new())).collect();

    for i in start..end {
        let matched = i < min_len && a[i] == b[i];
        for (size, blocks) in partitions.iter_mut() {
            let size = *size as usize;
            let index = (i / size) as u64;
            if i % size == 0 {
                blocks.entry(index).or_insert(BlockStatus::Matched);
            }
            if !matched {
                blocks.insert(index, BlockStatus::Mismatched);
            }
        }
    }

    let mut reports = BTreeMap::new();
    for (size, blocks) in partitions {
        let total = blocks.len() as u64;
        if total == 0 {
            continue;
        }
        let matched = blocks
            .values()
            .filter(|status| **status == BlockStatus::Matched)
            .count() as u64;
        reports.insert(
            size,
            BlockReport {
                matched,
                mismatched: total - matched,
            },
        );
    }
    reports
}

/// Enumerate which inputs get compared.
///
/// Sequential mode pairs each file with its right neighbor. All-pairs mode
/// walks every unordered combination, left index ascending.
pub fn pair_indices(count: usize, all_pairs: bool) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    if all_pairs {
        for i in 0..count {
            for j in i + 1..count {
                pairs.push((i, j));
            }
        }
    } else {
        for i in 0..count.saturating_sub(1) {
            pairs.push((i, i + 1));
        }
    }
    pairs
}
