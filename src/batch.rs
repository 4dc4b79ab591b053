//! Fixed-size batching of target identifiers.
//!
//! The scan script runs one bazel invocation per batch, so batching
//! bounds the command-line length and lets a failed batch be diagnosed in
//! isolation. Batches partition the input in order; concatenating them
//! reproduces the original list exactly.

use itertools::Itertools;
use serde::Serialize;
use std::num::NonZeroUsize;

/// One bounded group of targets, scanned by a single bazel invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    /// Zero-based position of this batch in the generated script.
    pub index: usize,
    /// Target identifiers in input order.
    pub targets: Vec<String>,
}

/// Partition `targets` into batches of at most `batch_size` entries.
///
/// Every batch except possibly the last is full; a trailing partial batch
/// is always emitted when targets remain. An empty input produces no
/// batches. Earlier revisions of this tool flushed on a strict
/// greater-than check and could overfill a batch by one; `batch_size` is
/// now a hard upper bound.
///
/// # Examples
/// ```
/// use batchscan::batch::partition;
/// use std::num::NonZeroUsize;
///
/// let size = NonZeroUsize::new(2).unwrap();
/// let batches = partition(vec!["a".into(), "b".into(), "c".into()], size);
/// assert_eq!(batches.len(), 2);
/// assert_eq!(batches[1].targets, ["c"]);
/// ```
#[must_use]
pub fn partition(targets: Vec<String>, batch_size: NonZeroUsize) -> Vec<Batch> {
    let groups = targets.into_iter().chunks(batch_size.get());
    groups
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| Batch {
            index,
            targets: chunk.collect(),
        })
        .collect()
}
