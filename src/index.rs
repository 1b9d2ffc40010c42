use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::SystemTime;

use log::{debug, trace};

use crate::alphagram::*;
use crate::types::*;
use crate::vocab::*;

///The main index, mapping alphagrams to all dictionary words that instantiate them
#[derive(Debug, Default, Clone)]
pub struct DictionaryIndex {
    buckets: HashMap<Alphagram, Vec<Word>>,

    ///Total number of words, duplicates included
    word_count: usize,
}

impl DictionaryIndex {
    ///Build the index from a sequence of words. Every word is lower-cased and
    ///appended to the bucket of its alphagram, preserving input order (and duplicates).
    pub fn build<I, S>(words: I) -> DictionaryIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let begintime = SystemTime::now();
        let mut index = DictionaryIndex::default();
        for word in words {
            index.insert(word.as_ref());
        }
        if let Ok(duration) = SystemTime::now().duration_since(begintime) {
            debug!(
                "indexed {} words under {} alphagrams in {} ms",
                index.word_count,
                index.buckets.len(),
                duration.as_millis()
            );
        }
        index
    }

    ///Read a whitespace separated word list and build the index from it
    pub fn from_file(filename: impl AsRef<Path>) -> Result<DictionaryIndex, std::io::Error> {
        let filename = filename.as_ref();
        debug!("reading dictionary from {}", filename.display());
        let f = File::open(filename)?;
        let words = read_wordlist_from(BufReader::new(f))?;
        Ok(DictionaryIndex::build(words))
    }

    fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        let key = word.alphagram();
        trace!(" -- adding {} under {}", word, key);
        self.buckets.entry(key).or_insert_with(Vec::new).push(word);
        self.word_count += 1;
    }

    ///Returns all words sharing this alphagram, in dictionary order (empty if none)
    pub fn lookup(&self, key: &str) -> &[Word] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    ///All anagrams of the given text present in the dictionary (the text itself included, if known)
    pub fn anagrams(&self, text: &str) -> &[Word] {
        self.lookup(&text.alphagram())
    }

    ///Tests if the dictionary has a specific word
    pub fn contains(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.anagrams(&text).iter().any(|word| *word == text)
    }

    ///Number of words in the index, duplicates included
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    ///Number of distinct alphagrams
    pub fn num_keys(&self) -> usize {
        self.buckets.len()
    }

    ///Iterate over all (alphagram, words) pairs, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Alphagram, &Vec<Word>)> {
        self.buckets.iter()
    }
}
