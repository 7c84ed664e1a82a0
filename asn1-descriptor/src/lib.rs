//! The `asn1-descriptor` crate describes the layout of a compiled grammar.
//! A generated grammar module exports a single [`GrammarDescriptor`], and the
//! language runtime consumes it to build a `Language` handle.
//!
//! The descriptor is plain `'static` data. It carries the symbol table, the
//! reserved words, the token that keywords are extracted from, and a table
//! of lexical recognizers for the grammar's named terminals.
//!
//! ## Example
//!
//! ```rust
//! # use asn1_descriptor::*;
//! # use nom::{character::complete::digit1, IResult};
//! fn number<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
//!     digit1(input)
//! }
//!
//! static SYMBOLS: [SymbolMetadata; 3] = [
//!     SymbolMetadata::END,
//!     SymbolMetadata::named("expression"),
//!     SymbolMetadata::named("number"),
//! ];
//! static LEXER: [LexRule; 1] = [LexRule::new("number", number)];
//!
//! static CALC: GrammarDescriptor = GrammarDescriptor {
//!     abi_version: LANGUAGE_VERSION,
//!     name: "calc",
//!     symbols: &SYMBOLS,
//!     root: "expression",
//!     word: None,
//!     extras: &[],
//!     keywords: &[],
//!     lexer: &LEXER,
//! };
//! assert_eq!(CALC.symbol_count(), 3);
//! ```
#![no_std]

use core::fmt::{Debug, Formatter, Result};

use nom::IResult;

/// The descriptor layout version produced by the current grammar generator.
pub const LANGUAGE_VERSION: u32 = 15;

/// The oldest descriptor layout the runtime still knows how to read.
pub const MIN_COMPATIBLE_LANGUAGE_VERSION: u32 = 13;

/// Name of the built-in symbol that marks the end of input.
pub const END_SYMBOL_NAME: &'static str = "end";

/// Name reported for input that no lexical rule recognizes.
pub const ERROR_SYMBOL_NAME: &'static str = "ERROR";

/// A lexical recognizer for a single terminal.
///
/// On success the recognizer returns the remaining input and the recognized
/// slice. Recognizers never skip leading whitespace.
pub type LexFn = for<'a> fn(&'a str) -> IResult<&'a str, &'a str>;

/// Metadata of a single grammar symbol.
///
/// Named symbols correspond to grammar rules, anonymous symbols to string
/// literals such as keywords and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMetadata {
    pub name: &'static str,
    pub visible: bool,
    pub named: bool,
}

impl SymbolMetadata {
    /// The hidden end-of-input symbol, always stored at index 0.
    pub const END: SymbolMetadata = SymbolMetadata {
        name: END_SYMBOL_NAME,
        visible: false,
        named: true,
    };

    pub const fn named(name: &'static str) -> Self {
        SymbolMetadata {
            name,
            visible: true,
            named: true,
        }
    }

    pub const fn anonymous(name: &'static str) -> Self {
        SymbolMetadata {
            name,
            visible: true,
            named: false,
        }
    }
}

/// Binds a named terminal of the symbol table to its recognizer.
#[derive(Clone, Copy)]
pub struct LexRule {
    pub symbol: &'static str,
    pub lex: LexFn,
}

impl LexRule {
    pub const fn new(symbol: &'static str, lex: LexFn) -> Self {
        LexRule { symbol, lex }
    }
}

impl Debug for LexRule {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.debug_struct("LexRule")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

/// The compiled representation of a grammar.
#[derive(Debug, Clone, Copy)]
pub struct GrammarDescriptor {
    /// Layout version the descriptor was generated for
    pub abi_version: u32,
    /// Grammar name, lower-case ASCII letters, digits and underscores
    pub name: &'static str,
    /// Symbol table; the index of an entry is its symbol id
    pub symbols: &'static [SymbolMetadata],
    /// Name of the start rule
    pub root: &'static str,
    /// Name of the terminal keywords are extracted from
    pub word: Option<&'static str>,
    /// Terminals that may appear between any two tokens
    pub extras: &'static [&'static str],
    /// Reserved words, each backed by an anonymous symbol of the same text
    pub keywords: &'static [&'static str],
    /// Recognizers for the named terminals
    pub lexer: &'static [LexRule],
}

impl GrammarDescriptor {
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Looks up the recognizer of a named terminal.
    pub fn lex_rule(&self, symbol: &str) -> Option<&'static LexRule> {
        self.lexer.iter().find(|rule| rule.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use nom::{bytes::complete::tag, IResult};

    use super::*;

    fn hello<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
        tag("hello")(input)
    }

    static SYMBOLS: [SymbolMetadata; 3] = [
        SymbolMetadata::END,
        SymbolMetadata::named("greeting"),
        SymbolMetadata::anonymous("hello"),
    ];

    static LEXER: [LexRule; 1] = [LexRule::new("greeting", hello)];

    static GREETING: GrammarDescriptor = GrammarDescriptor {
        abi_version: LANGUAGE_VERSION,
        name: "greeting",
        symbols: &SYMBOLS,
        root: "greeting",
        word: None,
        extras: &[],
        keywords: &[],
        lexer: &LEXER,
    };

    #[test]
    fn end_symbol_is_hidden() {
        assert!(!SymbolMetadata::END.visible);
        assert!(SymbolMetadata::END.named);
        assert_eq!(SymbolMetadata::END.name, "end");
    }

    #[test]
    fn finds_lex_rules_by_symbol() {
        let rule = GREETING.lex_rule("greeting").unwrap();
        assert_eq!((rule.lex)("hello world"), Ok((" world", "hello")));
        assert!(GREETING.lex_rule("farewell").is_none());
    }

    #[test]
    fn counts_symbols() {
        assert_eq!(GREETING.symbol_count(), 3);
    }
}
