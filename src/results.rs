use std::collections::HashSet;

use serde::Serialize;

use crate::index::*;
use crate::types::*;

///The outcome of solving a single input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<'a> {
    ///The normalised letters of the input line (unsorted)
    pub letters: String,

    ///All matching words, sorted
    pub words: Vec<&'a str>,

    pub count: usize,

    pub buckets: LengthBuckets<'a>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<WordGroup<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest: Option<WordGroup<'a>>,
}

impl<'a> QueryResult<'a> {
    ///Assemble the result and all derived statistics from the (unsorted) matches
    pub fn new(letters: String, mut words: Vec<&'a str>) -> Self {
        words.sort_unstable();
        let buckets = length_buckets(&words);
        let shortest = buckets.iter().next().map(|(length, words)| WordGroup {
            length: *length,
            words: words.clone(),
        });
        let longest = buckets.iter().next_back().map(|(length, words)| WordGroup {
            length: *length,
            words: words.clone(),
        });
        QueryResult {
            letters,
            count: words.len(),
            words,
            buckets,
            shortest,
            longest,
        }
    }

    ///True when no dictionary word could be formed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

///Gather all dictionary words whose alphagram is among the subset keys.
///The order follows the iteration order of the set and is not meaningful.
pub fn match_subsets<'a>(subsets: &HashSet<Alphagram>, index: &'a DictionaryIndex) -> Vec<&'a str> {
    subsets
        .iter()
        .flat_map(|key| index.lookup(key).iter().map(String::as_str))
        .collect()
}

///Group words by their length in characters, each group sorted
pub fn length_buckets<'a>(words: &[&'a str]) -> LengthBuckets<'a> {
    let mut buckets = LengthBuckets::new();
    for word in words {
        buckets.entry(word.chars().count()).or_insert_with(Vec::new).push(*word);
    }
    for words in buckets.values_mut() {
        words.sort_unstable();
    }
    buckets
}
