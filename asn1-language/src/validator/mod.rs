//! The `validator` module ensures that a grammar descriptor
//! is well-formed before a `Language` is built from it.
//! Among other things, the `validator` checks the grammar name,
//! the reserved `end` symbol, and that no symbol is declared twice.
//! Checks that depend on the loader's configuration, like the
//! supported ABI versions, are left to the loader.
use std::collections::HashSet;

use asn1_descriptor::{GrammarDescriptor, SymbolMetadata, END_SYMBOL_NAME};

use crate::{
    error::{LanguageError, LanguageErrorKind},
    symbol::ERROR_SYMBOL,
};

pub trait Validate {
    fn validate(&self) -> Result<(), LanguageError>;
}

impl Validate for GrammarDescriptor {
    fn validate(&self) -> Result<(), LanguageError> {
        if self.name.is_empty()
            || !self
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(LanguageErrorKind::InvalidName(self.name).into());
        }
        self.symbols.validate()
    }
}

impl Validate for [SymbolMetadata] {
    fn validate(&self) -> Result<(), LanguageError> {
        let end = match self.first() {
            Some(end) => end,
            None => return Err(LanguageErrorKind::EmptySymbolTable.into()),
        };
        // The error symbol id must stay unused.
        if self.len() >= usize::from(ERROR_SYMBOL) {
            return Err(LanguageErrorKind::TooManySymbols(self.len()).into());
        }
        if end.name != END_SYMBOL_NAME || end.visible {
            return Err(LanguageErrorKind::MissingEndSymbol.into());
        }
        let mut declared = HashSet::with_capacity(self.len());
        for (id, symbol) in self.iter().enumerate() {
            if symbol.name.is_empty() {
                return Err(LanguageErrorKind::InvalidSymbol(id).into());
            }
            if !declared.insert((symbol.name, symbol.named)) {
                return Err(LanguageErrorKind::DuplicateSymbol {
                    name: symbol.name,
                    named: symbol.named,
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_grammar::{leak, CALC};

    use super::*;

    #[test]
    fn accepts_a_well_formed_descriptor() {
        assert_eq!(CALC.validate(), Ok(()));
    }

    #[test]
    fn rejects_invalid_grammar_names() {
        for name in ["", "Calc", "calc-lang", "calc lang"] {
            let descriptor = GrammarDescriptor { name, ..CALC };
            assert_eq!(
                descriptor.validate().unwrap_err().kind,
                LanguageErrorKind::InvalidName(name)
            );
        }
        let descriptor = GrammarDescriptor {
            name: "calc_2",
            ..CALC
        };
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_symbol_table() {
        let symbols: &[SymbolMetadata] = &[];
        assert_eq!(
            symbols.validate().unwrap_err().kind,
            LanguageErrorKind::EmptySymbolTable
        );
    }

    #[test]
    fn requires_a_hidden_end_symbol() {
        let visible_end = [SymbolMetadata::named("end")];
        assert_eq!(
            visible_end[..].validate().unwrap_err().kind,
            LanguageErrorKind::MissingEndSymbol
        );
        let misplaced_end = [SymbolMetadata::named("expression"), SymbolMetadata::END];
        assert_eq!(
            misplaced_end[..].validate().unwrap_err().kind,
            LanguageErrorKind::MissingEndSymbol
        );
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let symbols = [
            SymbolMetadata::END,
            SymbolMetadata::named("expression"),
            SymbolMetadata::anonymous("expression"),
            SymbolMetadata::named("expression"),
        ];
        assert_eq!(
            symbols[..].validate().unwrap_err().kind,
            LanguageErrorKind::DuplicateSymbol {
                name: "expression",
                named: true
            }
        );
    }

    #[test]
    fn rejects_unnamed_symbols() {
        let symbols = [SymbolMetadata::END, SymbolMetadata::anonymous("")];
        assert_eq!(
            symbols[..].validate().unwrap_err().kind,
            LanguageErrorKind::InvalidSymbol(1)
        );
    }

    #[test]
    fn rejects_oversized_symbol_tables() {
        let symbols = vec![SymbolMetadata::END; usize::from(ERROR_SYMBOL)];
        let descriptor = leak(GrammarDescriptor {
            symbols: Vec::leak(symbols),
            ..CALC
        });
        assert_eq!(
            descriptor.validate().unwrap_err().kind,
            LanguageErrorKind::TooManySymbols(usize::from(ERROR_SYMBOL))
        );
    }
}
