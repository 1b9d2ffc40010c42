use std::collections::HashSet;

use log::trace;

use crate::alphagram::*;
use crate::error::*;
use crate::types::*;

/// Iterates over all subsets of a sequence of letters, one for every value
/// of an N-bit counter running from 0 to 2^N - 1. Position `j` is part of the
/// subset iff bit `j` of the counter is set. Selected letters keep their
/// relative order.
///
/// Subsets are yielded per position set, so repeated letters lead to
/// repeated subsets; use `enumerate_subsets()` for the deduplicated form.
///
/// # Examples
///
/// ```
/// # use scrabbler::*;
/// let subsets: Vec<String> = SubsetIterator::new("ab").unwrap().collect();
/// assert_eq!(subsets, vec!["", "a", "b", "ab"]);
/// ```
pub struct SubsetIterator {
    letters: Vec<char>,
    ///Next counter value, None once the counter is exhausted
    mask: Option<u64>,
    last: u64,
}

impl SubsetIterator {
    pub fn new(letters: &str) -> Result<SubsetIterator, SolveError> {
        let letters: Vec<char> = letters.chars().collect();
        let n = letters.len();
        if n > MAX_LETTERS {
            return Err(SolveError::InputTooLong {
                length: n,
                max: MAX_LETTERS,
            });
        }
        let last = if n == MAX_LETTERS {
            u64::MAX
        } else {
            (1u64 << n) - 1
        };
        Ok(SubsetIterator {
            letters,
            mask: Some(0),
            last,
        })
    }

    ///Number of subsets this iterator yields in total (2^N), saturating at usize::MAX
    pub fn total(&self) -> usize {
        usize::try_from(self.last)
            .ok()
            .and_then(|last| last.checked_add(1))
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for SubsetIterator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.mask?;
        self.mask = if mask == self.last {
            None
        } else {
            Some(mask + 1)
        };
        let subset = self
            .letters
            .iter()
            .enumerate()
            .filter(|(j, _)| mask & (1u64 << j) != 0)
            .map(|(_, c)| *c)
            .collect();
        Some(subset)
    }
}

///Collect the alphagrams of all subsets of the given letters, deduplicated by
///content. The empty alphagram and the alphagram of the full input are always
///included. Fails if there are more letters than `max_letters` (or MAX_LETTERS).
pub fn enumerate_subsets(letters: &str, max_letters: usize) -> Result<HashSet<Alphagram>, SolveError> {
    let length = letters.chars().count();
    let max = max_letters.min(MAX_LETTERS);
    if length > max {
        return Err(SolveError::InputTooLong { length, max });
    }

    //sorting up front means every selected subsequence is already an alphagram
    let iter = SubsetIterator::new(&letters.alphagram())?;
    let mut subsets: HashSet<Alphagram> = HashSet::with_capacity(iter.total().min(1 << 20));
    subsets.extend(iter);
    trace!("(enumerated {} distinct subsets of {})", subsets.len(), letters);
    Ok(subsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterator_follows_counter_order() {
        let subsets: Vec<String> = SubsetIterator::new("abc").unwrap().collect();
        assert_eq!(subsets, vec!["", "a", "b", "ab", "c", "ac", "bc", "abc"]);
    }

    #[test]
    fn iterator_empty_input() {
        let subsets: Vec<String> = SubsetIterator::new("").unwrap().collect();
        assert_eq!(subsets, vec![""]);
    }

    #[test]
    fn iterator_total() {
        assert_eq!(SubsetIterator::new("abcd").unwrap().total(), 16);
        let full: String = std::iter::repeat('a').take(MAX_LETTERS).collect();
        assert_eq!(SubsetIterator::new(&full).unwrap().total(), usize::MAX);
    }

    #[test]
    fn iterator_rejects_overlong_input() {
        let letters: String = std::iter::repeat('a').take(MAX_LETTERS + 1).collect();
        assert!(matches!(
            SubsetIterator::new(&letters),
            Err(SolveError::InputTooLong { length: 65, max: 64 })
        ));
    }

    #[test]
    fn repeated_letters_collapse() {
        let subsets = enumerate_subsets("aab", MAX_LETTERS).unwrap();
        let mut subsets: Vec<_> = subsets.into_iter().collect();
        subsets.sort();
        assert_eq!(subsets, vec!["", "a", "aa", "aab", "ab", "b"]);
    }
}
