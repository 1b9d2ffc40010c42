use thiserror::Error;

use crate::types::MAX_LETTERS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    ///The normalised input has more letters than can be enumerated
    #[error("input has {length} letters, at most {max} are supported")]
    InputTooLong { length: usize, max: usize },

    ///The configured letter limit is outside of 1..=MAX_LETTERS
    #[error("letter limit {requested} is out of range (must be between 1 and {})", MAX_LETTERS)]
    InvalidLimit { requested: usize },
}
