use crate::types::*;

///Trait for objects that can be reduced to an alphagram (string-like)
pub trait Alphagrammable {
    fn alphagram(&self) -> Alphagram;
    fn letters(&self) -> String;
}

impl Alphagrammable for str {
    ///Compute the canonical key: all characters lower-cased and sorted by code point.
    ///Any permutation of the same characters yields the same alphagram.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrabbler::*;
    /// assert_eq!("Stressed".alphagram(), "desserts".alphagram());
    /// assert_eq!("cat".alphagram(), "act");
    /// ```
    fn alphagram(&self) -> Alphagram {
        let mut chars: Vec<char> = self.chars().flat_map(char::to_lowercase).collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }

    ///Strip everything that is not an ASCII letter and lower-case the rest.
    ///The order of the remaining letters is kept, no sorting takes place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrabbler::*;
    /// assert_eq!("C-a.t!".letters(), "cat");
    /// assert_eq!("1234".letters(), "");
    /// ```
    fn letters(&self) -> String {
        self.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
