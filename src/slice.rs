//! Python-style slice arithmetic and the slicing surface built on it.
//!
//! The index normalization lives in [`indices`], a standalone pure function
//! reproducing CPython's `slice.indices()` exactly: negative indices count
//! from the end, out-of-range indices clamp instead of erroring, and a
//! negative step iterates backwards. `slice`, `take`, `rest`, and `reverse`
//! all go through it.

use crate::collection::Collection;
use crate::error::{CollectionError, CollectionResult};
use crate::types::Items;

/// A normalized slice: the positions it selects are
/// `start, start + step, ..` for `count` steps, all in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    /// First selected position. Meaningless when `count == 0`.
    pub start: isize,
    /// Signed stride between selected positions. Never zero.
    pub step: isize,
    /// Number of selected positions.
    pub count: usize,
}

impl SliceIndices {
    /// The selected positions in slice order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        let (start, step) = (self.start, self.step);
        (0..self.count).map(move |i| (start + i as isize * step) as usize)
    }
}

/// Normalize `[start:stop:step]` against a container of `len` entries.
///
/// A `stop` of `None` means "as far as the step allows": the end for a
/// positive step, past the beginning for a negative one.
///
/// # Panics
///
/// Panics if `step == 0`; callers validate first (see
/// [`Collection::slice`]).
pub fn indices(len: usize, start: isize, stop: Option<isize>, step: isize) -> SliceIndices {
    assert!(step != 0, "slice step cannot be zero");
    let len = len as isize;
    let start = clamp_index(start, len, step);
    let stop = match stop {
        Some(stop) => clamp_index(stop, len, step),
        None if step < 0 => -1,
        None => len,
    };

    let count = if step > 0 && start < stop {
        ((stop - start - 1) / step + 1) as usize
    } else if step < 0 && start > stop {
        ((start - stop - 1) / (-step) + 1) as usize
    } else {
        0
    };

    SliceIndices { start, step, count }
}

// Mirrors CPython's PySlice_AdjustIndices: shift negative indices by len,
// then clamp to [0, len] for a positive step or [-1, len-1] for a negative
// one.
fn clamp_index(index: isize, len: isize, step: isize) -> isize {
    if index < 0 {
        let shifted = index + len;
        if shifted < 0 {
            if step < 0 { -1 } else { 0 }
        } else {
            shifted
        }
    } else if index >= len {
        if step < 0 { len - 1 } else { len }
    } else {
        index
    }
}

impl Collection {
    /// Returns a new collection of the entries selected by
    /// `[start:stop:step]`, with Python slice semantics.
    ///
    /// `start` is mandatory; `stop` and `step` default to "end of slice" and
    /// 1. Indices may be negative or out of range. The only failure is a step
    /// of zero ([`CollectionError::ZeroStep`]).
    ///
    /// Mappings are sliced by position: the ordered key sequence is sliced
    /// with the same arithmetic and the mapping is rebuilt from the selected
    /// entries in slice order, so a negative step reverses a mapping
    /// correctly.
    pub fn slice(
        &self,
        start: isize,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> CollectionResult<Collection> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(CollectionError::ZeroStep);
        }
        Ok(self.sliced(indices(self.count(), start, stop, step)))
    }

    /// The first `limit` entries, or the last `|limit|` entries when `limit`
    /// is negative.
    pub fn take(&self, limit: isize) -> Collection {
        if limit < 0 {
            self.sliced(indices(self.count(), limit, None, 1))
        } else {
            self.sliced(indices(self.count(), 0, Some(limit), 1))
        }
    }

    /// All entries but the first, by position.
    pub fn rest(&self) -> Collection {
        self.sliced(indices(self.count(), 1, None, 1))
    }

    /// All entries in reversed order.
    pub fn reverse(&self) -> Collection {
        self.sliced(indices(self.count(), -1, None, -1))
    }

    fn sliced(&self, ix: SliceIndices) -> Collection {
        let items = match &self.items {
            Items::Sequence(v) => {
                Items::Sequence(ix.positions().map(|i| v[i].clone()).collect())
            }
            Items::FixedSequence(v) => {
                Items::FixedSequence(ix.positions().map(|i| v[i].clone()).collect())
            }
            Items::Mapping(m) => Items::Mapping(
                ix.positions()
                    .filter_map(|i| m.get_index(i))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        };
        Collection::from(items)
    }
}

#[cfg(test)]
mod tests {
    use super::{SliceIndices, indices};

    fn positions(len: usize, start: isize, stop: Option<isize>, step: isize) -> Vec<usize> {
        indices(len, start, stop, step).positions().collect()
    }

    #[test]
    fn forward_slices_match_python() {
        assert_eq!(positions(7, 2, None, 1), vec![2, 3, 4, 5, 6]);
        assert_eq!(positions(7, 0, Some(3), 1), vec![0, 1, 2]);
        assert_eq!(positions(7, 1, Some(-1), 1), vec![1, 2, 3, 4, 5]);
        assert_eq!(positions(7, -5, Some(-2), 1), vec![2, 3, 4]);
        assert_eq!(positions(7, 0, None, 2), vec![0, 2, 4, 6]);
        assert_eq!(positions(7, 1, None, 3), vec![1, 4]);
    }

    #[test]
    fn backward_slices_match_python() {
        assert_eq!(positions(7, 6, None, -1), vec![6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(positions(7, -1, None, -1), vec![6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(positions(7, 5, Some(1), -2), vec![5, 3]);
        assert_eq!(positions(7, -1, Some(-8), -1), vec![6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(positions(7, -2, Some(-5), -1), vec![5, 4, 3]);
        assert_eq!(positions(7, 100, None, -3), vec![6, 3, 0]);
    }

    #[test]
    fn out_of_range_indices_clamp() {
        assert_eq!(positions(7, 100, None, 1), Vec::<usize>::new());
        assert_eq!(positions(7, -100, None, 1), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(positions(7, 0, Some(100), 1), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(positions(7, -100, Some(100), 2), vec![0, 2, 4, 6]);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert_eq!(positions(7, 3, Some(3), 1), Vec::<usize>::new());
        assert_eq!(positions(7, 3, Some(2), 1), Vec::<usize>::new());
        assert_eq!(positions(7, 2, Some(5), -1), Vec::<usize>::new());
        assert_eq!(
            indices(7, 3, Some(3), 1),
            SliceIndices {
                start: 3,
                step: 1,
                count: 0
            }
        );
    }

    #[test]
    fn empty_containers_always_slice_empty() {
        assert_eq!(positions(0, 0, None, 1), Vec::<usize>::new());
        assert_eq!(positions(0, -1, None, -1), Vec::<usize>::new());
        assert_eq!(positions(0, -5, Some(5), 2), Vec::<usize>::new());
    }

    #[test]
    #[should_panic(expected = "step cannot be zero")]
    fn zero_step_is_a_contract_violation() {
        let _ = indices(7, 0, None, 0);
    }
}
