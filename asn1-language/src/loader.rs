use std::{collections::HashMap, ops::RangeInclusive, sync::Arc};

use asn1_descriptor::{
    GrammarDescriptor, LexFn, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION,
};
use tracing::{debug, warn};

use crate::{
    error::{LanguageError, LanguageErrorKind},
    symbol::{Symbol, SymbolTable},
    validator::Validate,
    Language, LanguageInner,
};

/// Builder for loading grammar descriptors into [`Language`] handles.
///
/// ```rust
/// # use asn1_language::Language;
/// let loader = Language::loader()
///     .abi_versions(14..=15)  // Accept descriptors of these layout versions only
///     .verify_keywords(false); // Skip checking that every keyword is lexable
/// # let _ = loader;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLoader {
    abi_versions: RangeInclusive<u32>,
    verify_keywords: bool,
}

impl Default for LanguageLoader {
    fn default() -> Self {
        LanguageLoader {
            abi_versions: MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION,
            verify_keywords: true,
        }
    }
}

impl LanguageLoader {
    /// Set the range of descriptor layout versions the loader accepts.
    /// Defaults to `MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION`.
    pub fn abi_versions(mut self, versions: RangeInclusive<u32>) -> LanguageLoader {
        self.abi_versions = versions;
        self
    }

    /// Require every keyword to be recognized in full by one of the grammar's
    /// lex rules. Enabled by default.
    pub fn verify_keywords(mut self, verify: bool) -> LanguageLoader {
        self.verify_keywords = verify;
        self
    }

    /// Loads a grammar descriptor.
    /// Returns a Result wrapping the loading result:
    /// * _Ok_  - Handle of the loaded language
    /// * _Err_ - The descriptor is absent or malformed, no handle was created
    pub fn load<D>(&self, descriptor: D) -> Result<Language, LanguageError>
    where
        D: Into<Option<&'static GrammarDescriptor>>,
    {
        let descriptor = match descriptor.into() {
            Some(descriptor) => descriptor,
            None => {
                warn!("no grammar descriptor to load");
                return Err(LanguageErrorKind::MissingDescriptor.into());
            }
        };
        match self.build(descriptor) {
            Ok(language) => {
                debug!(
                    grammar = descriptor.name,
                    abi_version = descriptor.abi_version,
                    symbols = descriptor.symbols.len(),
                    keywords = descriptor.keywords.len(),
                    "loaded grammar"
                );
                Ok(language)
            }
            Err(error) => {
                let error = error.in_grammar(descriptor.name);
                warn!(%error, "rejected grammar descriptor");
                Err(error)
            }
        }
    }

    fn build(&self, descriptor: &'static GrammarDescriptor) -> Result<Language, LanguageError> {
        if !self.abi_versions.contains(&descriptor.abi_version) {
            return Err(LanguageErrorKind::IncompatibleVersion {
                version: descriptor.abi_version,
                min: *self.abi_versions.start(),
                max: *self.abi_versions.end(),
            }
            .into());
        }
        descriptor.validate()?;

        let symbols = SymbolTable::new(descriptor.symbols);
        let root = resolve(&symbols, "root", descriptor.root)?;
        let word = match descriptor.word {
            Some(word) => {
                let symbol = resolve(&symbols, "word", word)?;
                if descriptor.lex_rule(word).is_none() {
                    return Err(LanguageErrorKind::InvalidWordToken(word).into());
                }
                Some(symbol)
            }
            None => None,
        };
        let extras = descriptor
            .extras
            .iter()
            .map(|&extra| resolve(&symbols, "extra", extra))
            .collect::<Result<Vec<_>, _>>()?;
        let lexer = descriptor
            .lexer
            .iter()
            .map(|rule| Ok((resolve(&symbols, "lex rule", rule.symbol)?, rule.lex)))
            .collect::<Result<Vec<(Symbol, LexFn)>, LanguageError>>()?;
        let keywords = self.keywords(descriptor, &symbols, &lexer)?;
        let literals = punctuation(&symbols);

        Ok(Language(Arc::new(LanguageInner {
            descriptor,
            symbols,
            root,
            word,
            extras,
            keywords,
            lexer,
            literals,
        })))
    }

    fn keywords(
        &self,
        descriptor: &'static GrammarDescriptor,
        symbols: &SymbolTable,
        lexer: &[(Symbol, LexFn)],
    ) -> Result<HashMap<&'static str, Symbol>, LanguageError> {
        let mut keywords = HashMap::with_capacity(descriptor.keywords.len());
        for &keyword in descriptor.keywords {
            let symbol = symbols.id(keyword, false).ok_or(LanguageErrorKind::UnknownSymbol {
                role: "keyword",
                name: keyword,
            })?;
            if keywords.insert(keyword, symbol).is_some() {
                return Err(LanguageErrorKind::DuplicateKeyword(keyword).into());
            }
            if self.verify_keywords && !lexer.iter().any(|(_, lex)| lexes_whole(*lex, keyword)) {
                return Err(LanguageErrorKind::UnlexableKeyword(keyword).into());
            }
        }
        Ok(keywords)
    }
}

fn resolve(
    symbols: &SymbolTable,
    role: &'static str,
    name: &'static str,
) -> Result<Symbol, LanguageError> {
    symbols
        .id(name, true)
        .ok_or_else(|| LanguageErrorKind::UnknownSymbol { role, name }.into())
}

fn lexes_whole(lex: LexFn, text: &str) -> bool {
    matches!(lex(text), Ok((rest, _)) if rest.is_empty())
}

/// Anonymous symbols that are matched verbatim, longest first.
fn punctuation(symbols: &SymbolTable) -> Vec<(Symbol, &'static str)> {
    let mut literals = symbols
        .iter()
        .filter(|(_, symbol)| !symbol.named)
        .filter(|(_, symbol)| {
            symbol
                .name
                .chars()
                .next()
                .map_or(false, |c| !c.is_alphanumeric())
        })
        .map(|(id, symbol)| (id, symbol.name))
        .collect::<Vec<_>>();
    literals.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));
    literals
}
