use std::time::SystemTime;

use log::debug;
use rayon::prelude::*;

pub mod types;
pub mod error;
pub mod alphagram;
pub mod index;
pub mod vocab;
pub mod powerset;
pub mod results;
pub mod report;

pub use crate::types::*;
pub use crate::error::*;
pub use crate::alphagram::*;
pub use crate::index::*;
pub use crate::vocab::*;
pub use crate::powerset::*;
pub use crate::results::*;
pub use crate::report::*;


pub struct Solver {
    ///The dictionary, read-only once the solver exists
    pub index: DictionaryIndex,

    pub params: SolverParams,
}

impl Solver {
    pub fn new(index: DictionaryIndex, params: SolverParams) -> Result<Solver, SolveError> {
        if params.max_letters == 0 || params.max_letters > MAX_LETTERS {
            return Err(SolveError::InvalidLimit {
                requested: params.max_letters,
            });
        }
        Ok(Solver { index, params })
    }

    ///Find all dictionary words that can be formed from a subset of the letters on this line.
    ///Anything that is not a letter is ignored.
    pub fn solve_line(&self, input: &str) -> Result<QueryResult, SolveError> {
        solve_line_with(input, &self.index, self.params.max_letters)
    }

    ///Solve many lines, in parallel unless `single_thread` is set. Results are
    ///returned in input order.
    pub fn solve_lines<S>(&self, inputs: &[S]) -> Vec<Result<QueryResult, SolveError>>
    where
        S: AsRef<str> + Sync,
    {
        if self.params.single_thread {
            inputs.iter().map(|input| self.solve_line(input.as_ref())).collect()
        } else {
            inputs.par_iter().map(|input| self.solve_line(input.as_ref())).collect()
        }
    }
}

///Solve a single line against the index with the default letter limit
pub fn solve_line<'a>(input: &str, index: &'a DictionaryIndex) -> Result<QueryResult<'a>, SolveError> {
    solve_line_with(input, index, MAX_LETTERS)
}

fn solve_line_with<'a>(input: &str, index: &'a DictionaryIndex, max_letters: usize) -> Result<QueryResult<'a>, SolveError> {
    let begintime = SystemTime::now();
    let letters = input.letters();
    let subsets = enumerate_subsets(&letters, max_letters)?;
    let words = match_subsets(&subsets, index);
    if let Ok(duration) = SystemTime::now().duration_since(begintime) {
        debug!(
            "(found {} words over {} subsets of {} in {} μs)",
            words.len(),
            subsets.len(),
            letters,
            duration.as_micros()
        );
    }
    Ok(QueryResult::new(letters, words))
}
