use core::fmt::{Display, Formatter, Result};

use thiserror::Error;

/// Error raised when a grammar descriptor cannot be turned into a `Language`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct LanguageError {
    pub kind: LanguageErrorKind,
    /// Name of the rejected grammar, if the descriptor was present
    pub grammar: Option<&'static str>,
}

impl LanguageError {
    pub fn new(kind: LanguageErrorKind) -> Self {
        LanguageError {
            kind,
            grammar: None,
        }
    }

    pub fn in_grammar(mut self, grammar: &'static str) -> Self {
        self.grammar = Some(grammar);
        self
    }
}

impl From<LanguageErrorKind> for LanguageError {
    fn from(kind: LanguageErrorKind) -> Self {
        LanguageError::new(kind)
    }
}

impl Display for LanguageError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.grammar {
            Some(grammar) => write!(f, "failed to load grammar `{grammar}`: {}", self.kind),
            None => write!(f, "failed to load grammar: {}", self.kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageErrorKind {
    #[error("no grammar descriptor was provided")]
    MissingDescriptor,
    #[error("ABI version {version} is outside of the supported range {min}..={max}")]
    IncompatibleVersion { version: u32, min: u32, max: u32 },
    #[error("`{0}` is not a valid grammar name")]
    InvalidName(&'static str),
    #[error("the symbol table is empty")]
    EmptySymbolTable,
    #[error("{0} symbols exceed the addressable symbol range")]
    TooManySymbols(usize),
    #[error("symbol 0 is not the hidden `end` symbol")]
    MissingEndSymbol,
    #[error("symbol {0} has an empty name")]
    InvalidSymbol(usize),
    #[error("symbol `{name}` (named: {named}) is declared twice")]
    DuplicateSymbol { name: &'static str, named: bool },
    #[error("{role} refers to unknown symbol `{name}`")]
    UnknownSymbol { role: &'static str, name: &'static str },
    #[error("word token `{0}` has no lex rule")]
    InvalidWordToken(&'static str),
    #[error("keyword `{0}` is declared twice")]
    DuplicateKeyword(&'static str),
    #[error("keyword `{0}` is not recognized by any lex rule")]
    UnlexableKeyword(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_rejected_grammar() {
        let error = LanguageError::new(LanguageErrorKind::EmptySymbolTable).in_grammar("asn1");
        assert_eq!(
            error.to_string(),
            "failed to load grammar `asn1`: the symbol table is empty"
        );
    }

    #[test]
    fn displays_missing_descriptor() {
        let error: LanguageError = LanguageErrorKind::MissingDescriptor.into();
        assert_eq!(
            error.to_string(),
            "failed to load grammar: no grammar descriptor was provided"
        );
    }
}
