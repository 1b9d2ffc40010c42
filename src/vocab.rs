use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::*;

///Read a word list from any buffered reader. Words are separated by arbitrary
///whitespace (spaces, tabs, newlines); no further validation takes place.
pub fn read_wordlist_from(reader: impl BufRead) -> Result<Vec<Word>, std::io::Error> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(words)
}

///Read a word list from file
pub fn read_wordlist(filename: impl AsRef<Path>) -> Result<Vec<Word>, std::io::Error> {
    let f = File::open(filename)?;
    read_wordlist_from(BufReader::new(f))
}
