use thiserror::Error;

/// Errors raised while building a [`SubstitutionTable`](crate::SubstitutionTable).
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate substitution key {0:?}")]
    DuplicateKey(char),
    #[error("failed to build substitution automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

/// Reasons a string is rejected as a [`Slug`](crate::Slug).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug can't be blank")]
    Blank,
    #[error("slug can't contain whitespace")]
    ContainsWhitespace,
}
