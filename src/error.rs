use thiserror::Error;

/// Errors raised outside of the search itself. Searching and ranking never fail,
/// an unmatchable query simply produces no words.
#[derive(Error, Debug)]
pub enum AnagramError {
    #[error("node {0} is not an ancestor of node {1}")]
    NotAnAncestor(usize, usize),

    #[error("no vertical path between node {0} and leaf {1}")]
    NoVerticalPath(usize, usize),

    #[error("failed to read word list: {0}")]
    WordList(std::io::Error),

    #[error("cache i/o failed: {0}")]
    CacheIo(#[from] std::io::Error),

    #[error("cache encoding failed: {0}")]
    CacheEncoding(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, AnagramError>;
