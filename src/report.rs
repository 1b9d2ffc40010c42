use std::io::Write;

use bitflags::bitflags;
use serde::Serialize;

use crate::error::*;
use crate::results::*;
use crate::types::*;

bitflags! {
    ///The sections of a plain text report
    pub struct Sections: u8 {
        const LETTERS = 0b00001;
        const POSSIBLE = 0b00010;
        const BUCKETS = 0b00100;
        const SHORTEST = 0b01000;
        const LONGEST = 0b10000;
        const EXTREMES = Self::SHORTEST.bits | Self::LONGEST.bits;
    }
}

impl From<Presentation> for Sections {
    fn from(presentation: Presentation) -> Self {
        match presentation {
            Presentation::Buckets => Sections::LETTERS | Sections::POSSIBLE | Sections::BUCKETS,
            Presentation::Extremes => Sections::LETTERS | Sections::POSSIBLE | Sections::EXTREMES,
        }
    }
}

fn write_group(out: &mut impl Write, words: &[&str]) -> std::io::Result<()> {
    writeln!(out, "{}", words.join(" "))
}

///Write a human readable report for one input line
pub fn write_text(out: &mut impl Write, result: &QueryResult, sections: Sections) -> std::io::Result<()> {
    if sections.contains(Sections::LETTERS) {
        writeln!(out, "Original {} letters: {}", result.letters.chars().count(), result.letters)?;
    }
    if sections.contains(Sections::POSSIBLE) {
        if result.is_empty() {
            writeln!(out, "No possible words found.")?;
        } else {
            write!(out, "\t{} possible words: ", result.count)?;
            write_group(out, &result.words)?;
        }
    }
    if sections.contains(Sections::BUCKETS) {
        for (length, words) in result.buckets.iter() {
            write!(out, "\t{} words of length {}: ", words.len(), length)?;
            write_group(out, words)?;
        }
    }
    if sections.contains(Sections::SHORTEST) {
        match &result.shortest {
            Some(group) => {
                write!(out, "\t{} shortest words of length {}: ", group.words.len(), group.length)?;
                write_group(out, &group.words)?;
            }
            None => writeln!(out, "No shortest words found.")?,
        }
    }
    if sections.contains(Sections::LONGEST) {
        match &result.longest {
            Some(group) => {
                write!(out, "\t{} longest words of length {}: ", group.words.len(), group.length)?;
                write_group(out, &group.words)?;
            }
            None => writeln!(out, "No longest words found.")?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonEntry<'r, 'a> {
    input: &'r str,
    #[serde(flatten)]
    result: Option<&'r QueryResult<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

///Streams one JSON array, with one object per input line
pub struct JsonReport<W: Write> {
    out: W,
    seqnr: usize,
}

impl<W: Write> JsonReport<W> {
    pub fn begin(mut out: W) -> std::io::Result<Self> {
        writeln!(out, "[")?;
        Ok(JsonReport { out, seqnr: 0 })
    }

    pub fn write(&mut self, input: &str, result: &Result<QueryResult, SolveError>) -> std::io::Result<()> {
        let entry = match result {
            Ok(result) => JsonEntry {
                input,
                result: Some(result),
                error: None,
            },
            Err(e) => JsonEntry {
                input,
                result: None,
                error: Some(e.to_string()),
            },
        };
        if self.seqnr > 0 {
            writeln!(self.out, ",")?;
        }
        self.seqnr += 1;
        write!(self.out, "    ")?;
        serde_json::to_writer(&mut self.out, &entry)?;
        Ok(())
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        if self.seqnr > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "]")?;
        Ok(self.out)
    }
}
