//! The `asn1-language` library loads compiled grammar descriptors into
//! [`Language`] handles.
//!
//! A descriptor is checked for a compatible ABI version and a consistent
//! symbol table before a handle is created. Loading never panics: a missing
//! or malformed descriptor is reported as a [`LanguageError`].
//!
//! ```rust
//! # use asn1_language::Language;
//! # fn main() {
//! # let descriptor: Option<&'static asn1_language::asn1_descriptor::GrammarDescriptor> = None;
//! match Language::new(descriptor) {
//!     Ok(language) => println!("loaded {}", language.name()),
//!     Err(error) => eprintln!("{error}"),
//! }
//! # }
//! ```
mod error;
mod lexer;
mod loader;
mod symbol;
#[cfg(test)]
mod test_grammar;
mod validator;

use std::{collections::HashMap, fmt, ptr, sync::Arc};

use asn1_descriptor::{GrammarDescriptor, LexFn, SymbolMetadata};

pub use asn1_descriptor;
pub use error::{LanguageError, LanguageErrorKind};
pub use lexer::{Token, Tokens};
pub use loader::LanguageLoader;
pub use symbol::{Symbol, ERROR_SYMBOL};
pub use validator::Validate;

/// Handle of a loaded grammar.
///
/// Handles are cheap to clone. Two handles are equal if they were loaded
/// from the same descriptor.
#[derive(Clone)]
pub struct Language(pub(crate) Arc<LanguageInner>);

pub(crate) struct LanguageInner {
    pub(crate) descriptor: &'static GrammarDescriptor,
    pub(crate) symbols: symbol::SymbolTable,
    pub(crate) root: Symbol,
    pub(crate) word: Option<Symbol>,
    pub(crate) extras: Vec<Symbol>,
    pub(crate) keywords: HashMap<&'static str, Symbol>,
    pub(crate) lexer: Vec<(Symbol, LexFn)>,
    pub(crate) literals: Vec<(Symbol, &'static str)>,
}

impl Language {
    /// Loads a grammar descriptor with the default [`LanguageLoader`].
    pub fn new<D>(descriptor: D) -> Result<Language, LanguageError>
    where
        D: Into<Option<&'static GrammarDescriptor>>,
    {
        LanguageLoader::default().load(descriptor)
    }

    /// Returns a loader with the default settings, to be configured
    /// before loading a descriptor.
    pub fn loader() -> LanguageLoader {
        LanguageLoader::default()
    }

    pub fn name(&self) -> &'static str {
        self.0.descriptor.name
    }

    pub fn abi_version(&self) -> u32 {
        self.0.descriptor.abi_version
    }

    pub fn descriptor(&self) -> &'static GrammarDescriptor {
        self.0.descriptor
    }

    /// Number of symbols in the grammar, the `end` symbol included.
    pub fn node_kind_count(&self) -> usize {
        self.0.symbols.len()
    }

    pub fn node_kind_for_id(&self, id: Symbol) -> Option<&'static str> {
        self.metadata(id).map(|symbol| symbol.name)
    }

    pub fn id_for_node_kind(&self, kind: &str, named: bool) -> Option<Symbol> {
        self.0.symbols.id(kind, named)
    }

    pub fn node_kind_is_named(&self, id: Symbol) -> bool {
        self.metadata(id).map_or(false, |symbol| symbol.named)
    }

    pub fn node_kind_is_visible(&self, id: Symbol) -> bool {
        self.metadata(id).map_or(false, |symbol| symbol.visible)
    }

    pub fn metadata(&self, id: Symbol) -> Option<&'static SymbolMetadata> {
        self.0.symbols.get(id)
    }

    /// Symbol every complete input reduces to.
    pub fn root_symbol(&self) -> Symbol {
        self.0.root
    }

    /// Token whose matches are checked against the keyword list.
    pub fn word_symbol(&self) -> Option<Symbol> {
        self.0.word
    }

    /// Symbols that may appear anywhere between tokens, like comments.
    pub fn extras(&self) -> &[Symbol] {
        &self.0.extras
    }

    pub fn is_extra(&self, id: Symbol) -> bool {
        self.0.extras.contains(&id)
    }

    pub fn keyword_count(&self) -> usize {
        self.0.keywords.len()
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.0.keywords.contains_key(text)
    }

    /// Keywords in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        self.0.descriptor.keywords.iter().copied()
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0.descriptor, other.0.descriptor)
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("name", &self.name())
            .field("abi_version", &self.abi_version())
            .field("node_kind_count", &self.node_kind_count())
            .field("keyword_count", &self.keyword_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_grammar::{leak, CALC};

    use super::*;

    #[test]
    fn answers_symbol_queries() {
        let language = Language::new(&CALC).unwrap();
        assert_eq!(language.node_kind_count(), 12);
        assert_eq!(language.node_kind_for_id(0), Some("end"));
        assert_eq!(language.node_kind_for_id(3), Some("identifier"));
        assert_eq!(language.node_kind_for_id(12), None);
        assert_eq!(language.id_for_node_kind("number", true), Some(2));
        assert_eq!(language.id_for_node_kind("number", false), None);
        assert_eq!(language.id_for_node_kind("+", false), Some(7));
        assert!(language.node_kind_is_named(1));
        assert!(!language.node_kind_is_named(7));
        assert!(!language.node_kind_is_visible(0));
        assert!(language.node_kind_is_visible(7));
        assert!(!language.node_kind_is_visible(ERROR_SYMBOL));
    }

    #[test]
    fn resolves_grammar_roles() {
        let language = Language::new(&CALC).unwrap();
        assert_eq!(language.root_symbol(), 1);
        assert_eq!(language.word_symbol(), Some(3));
        assert_eq!(language.extras(), &[4]);
        assert!(language.is_extra(4));
        assert!(!language.is_extra(3));
    }

    #[test]
    fn answers_keyword_queries() {
        let language = Language::new(&CALC).unwrap();
        assert_eq!(language.keyword_count(), 2);
        assert!(language.is_keyword("LET"));
        assert!(!language.is_keyword("let"));
        assert_eq!(language.keywords().collect::<Vec<_>>(), vec!["LET", "IN"]);
    }

    #[test]
    fn compares_handles_by_descriptor() {
        let first = Language::new(&CALC).unwrap();
        let second = Language::new(&CALC).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, first.clone());
        let copy = Language::new(leak(CALC)).unwrap();
        assert_ne!(first, copy);
    }

    #[test]
    fn debug_output_names_the_grammar() {
        let language = Language::new(&CALC).unwrap();
        assert!(format!("{language:?}").contains("\"calc\""));
    }
}
