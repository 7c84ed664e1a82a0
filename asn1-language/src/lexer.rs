use asn1_descriptor::ERROR_SYMBOL_NAME;
use nom::bytes::complete::take_while;
use tracing::trace;

use crate::{symbol::ERROR_SYMBOL, Language, Symbol};

/// A lexeme recognized in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub symbol: Symbol,
    pub kind: &'static str,
    pub text: &'a str,
    pub start_byte: usize,
    pub end_byte: usize,
    /// Set for tokens like comments, that may appear between any two tokens
    pub is_extra: bool,
}

impl Token<'_> {
    pub fn is_error(&self) -> bool {
        self.symbol == ERROR_SYMBOL
    }
}

impl Language {
    /// Recognizes the token following `offset` in `source`.
    /// Returns `None` once only whitespace remains.
    ///
    /// The longest match wins. Among matches of equal length, lex rules win
    /// over punctuation, and earlier lex rules win over later ones.
    /// Text that no rule recognizes is returned one character at a time
    /// as an `ERROR` token.
    pub fn lex<'a>(&self, source: &'a str, offset: usize) -> Option<Token<'a>> {
        let input = source.get(offset..)?;
        let (rest, _) = take_while::<_, _, ()>(is_whitespace)(input).ok()?;
        let start_byte = source.len() - rest.len();
        let first = rest.chars().next()?;

        let mut longest: Option<(Symbol, usize)> = None;
        for (symbol, lex) in &self.0.lexer {
            if let Ok((remaining, _)) = lex(rest) {
                let length = rest.len() - remaining.len();
                if length > 0 && longest.map_or(true, |(_, best)| length > best) {
                    longest = Some((*symbol, length));
                }
            }
        }
        for (symbol, literal) in &self.0.literals {
            if rest.starts_with(literal) && longest.map_or(true, |(_, best)| literal.len() > best) {
                longest = Some((*symbol, literal.len()));
            }
        }

        let (symbol, length) = match longest {
            Some((symbol, length)) => (self.keyword_or(symbol, &rest[..length]), length),
            None => {
                trace!(offset = start_byte, character = %first, "unrecognized input");
                (ERROR_SYMBOL, first.len_utf8())
            }
        };
        Some(Token {
            symbol,
            kind: self.node_kind_for_id(symbol).unwrap_or(ERROR_SYMBOL_NAME),
            text: &rest[..length],
            start_byte,
            end_byte: start_byte + length,
            is_extra: self.is_extra(symbol),
        })
    }

    /// Iterates over all tokens of `source`.
    pub fn tokenize<'l, 'a>(&'l self, source: &'a str) -> Tokens<'l, 'a> {
        Tokens {
            language: self,
            source,
            offset: 0,
        }
    }

    fn keyword_or(&self, symbol: Symbol, text: &str) -> Symbol {
        self.0.keywords.get(text).copied().unwrap_or(symbol)
    }
}

/// ASCII whitespace, vertical tab included.
fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Iterator returned by [`Language::tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'l, 'a> {
    language: &'l Language,
    source: &'a str,
    offset: usize,
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.language.lex(self.source, self.offset)?;
        self.offset = token.end_byte;
        Some(token)
    }
}
