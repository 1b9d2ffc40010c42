use std::collections::BTreeMap;

use serde::Serialize;

///A dictionary word, lower-cased when it enters the index
pub type Word = String;

///The canonical key of a word: its lower-cased characters in ascending order.
///Two words are anagrams iff their alphagrams are equal.
pub type Alphagram = String;

///Maps a word length (in chars) to the sorted words of that length
pub type LengthBuckets<'a> = BTreeMap<usize, Vec<&'a str>>;

///Upper bound on the number of letters in a single query, imposed by the
///width of the subset counter (u64)
pub const MAX_LETTERS: usize = 64;

///How the statistics of a query are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    ///All matches grouped by length
    Buckets,
    ///Only the shortest and longest matches
    Extremes,
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation::Buckets
    }
}

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Maximum number of letters (after normalisation) accepted on a single line. Longer lines are
    /// rejected. Can not exceed MAX_LETTERS.
    pub max_letters: usize,

    /// Use only a single thread instead of spreading input lines over multiple cores
    pub single_thread: bool,

    /// Which statistics the report shows
    pub presentation: Presentation,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_letters: MAX_LETTERS,
            single_thread: false,
            presentation: Presentation::default(),
        }
    }
}

impl SolverParams {
    pub fn with_max_letters(mut self, max_letters: usize) -> Self {
        self.max_letters = max_letters;
        self
    }
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }
}

///A group of words that share the same (extreme) length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordGroup<'a> {
    pub length: usize,
    pub words: Vec<&'a str>,
}
