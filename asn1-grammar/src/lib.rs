//! The `asn1-grammar` crate is the compiled ASN.1 grammar.
//! It exports the grammar as a [`GrammarDescriptor`]: the symbol table of
//! the grammar's rules and literals, the ASN.1 reserved words, and the
//! recognizers of the grammar's terminals.
//!
//! The descriptor is turned into a usable [`Language`] handle by
//! [`asn1_language::Language::new`], or directly with [`language`].
//!
//! ## Example
//!
//! ```rust
//! let language = asn1_grammar::language().expect("Error loading ASN.1 grammar");
//! assert_eq!(language.name(), "asn1");
//! assert!(language.is_keyword("SEQUENCE"));
//! ```
pub mod lexical;
pub mod symbols;
mod util;

use asn1_descriptor::{GrammarDescriptor, LexRule, LANGUAGE_VERSION};
use asn1_language::{Language, LanguageError};

use self::{lexical::*, symbols::SYMBOLS};

// Comment tokens
pub const BLOCK_COMMENT_START: &'static str = "/*";
pub const BLOCK_COMMENT_END: &'static str = "*/";
pub const LINE_COMMENT: &'static str = "--";

// Lexical tokens
pub const AMPERSAND: char = '&';
pub const FULL_STOP: char = '.';
pub const HYPHEN: char = '-';
pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const BSTRING_SUFFIX: &'static str = "'B";
pub const HSTRING_SUFFIX: &'static str = "'H";

// Module tokens
pub const DEFINITIONS: &'static str = "DEFINITIONS";
pub const BEGIN: &'static str = "BEGIN";
pub const END: &'static str = "END";
pub const EXPLICIT: &'static str = "EXPLICIT";
pub const IMPLICIT: &'static str = "IMPLICIT";
pub const AUTOMATIC: &'static str = "AUTOMATIC";
pub const TAGS: &'static str = "TAGS";
pub const EXTENSIBILITY: &'static str = "EXTENSIBILITY";
pub const IMPLIED: &'static str = "IMPLIED";
pub const INSTRUCTIONS: &'static str = "INSTRUCTIONS";
pub const EXPORTS: &'static str = "EXPORTS";
pub const IMPORTS: &'static str = "IMPORTS";
pub const FROM: &'static str = "FROM";
pub const ALL: &'static str = "ALL";
pub const WITH: &'static str = "WITH";
pub const SUCCESSORS: &'static str = "SUCCESSORS";
pub const DESCENDANTS: &'static str = "DESCENDANTS";
pub const ENCODING_CONTROL: &'static str = "ENCODING-CONTROL";

// Type tokens
pub const BOOLEAN: &'static str = "BOOLEAN";
pub const INTEGER: &'static str = "INTEGER";
pub const ENUMERATED: &'static str = "ENUMERATED";
pub const REAL: &'static str = "REAL";
pub const BIT: &'static str = "BIT";
pub const OCTET: &'static str = "OCTET";
pub const STRING: &'static str = "STRING";
pub const NULL: &'static str = "NULL";
pub const SEQUENCE: &'static str = "SEQUENCE";
pub const SET: &'static str = "SET";
pub const OF: &'static str = "OF";
pub const CHOICE: &'static str = "CHOICE";
pub const OBJECT: &'static str = "OBJECT";
pub const IDENTIFIER: &'static str = "IDENTIFIER";
pub const RELATIVE_OID: &'static str = "RELATIVE-OID";
pub const OID_IRI: &'static str = "OID-IRI";
pub const RELATIVE_OID_IRI: &'static str = "RELATIVE-OID-IRI";
pub const EMBEDDED: &'static str = "EMBEDDED";
pub const PDV: &'static str = "PDV";
pub const EXTERNAL: &'static str = "EXTERNAL";
pub const CHARACTER: &'static str = "CHARACTER";
pub const INSTANCE: &'static str = "INSTANCE";
pub const OBJECT_DESCRIPTOR: &'static str = "ObjectDescriptor";

// Time tokens
pub const TIME: &'static str = "TIME";
pub const DATE: &'static str = "DATE";
pub const TIME_OF_DAY: &'static str = "TIME-OF-DAY";
pub const DATE_TIME: &'static str = "DATE-TIME";
pub const DURATION: &'static str = "DURATION";
pub const UTC_TIME: &'static str = "UTCTime";
pub const GENERALIZED_TIME: &'static str = "GeneralizedTime";

// Character string tokens
pub const BMP_STRING: &'static str = "BMPString";
pub const GENERAL_STRING: &'static str = "GeneralString";
pub const GRAPHIC_STRING: &'static str = "GraphicString";
pub const IA5_STRING: &'static str = "IA5String";
pub const ISO646_STRING: &'static str = "ISO646String";
pub const NUMERIC_STRING: &'static str = "NumericString";
pub const PRINTABLE_STRING: &'static str = "PrintableString";
pub const TELETEX_STRING: &'static str = "TeletexString";
pub const T61_STRING: &'static str = "T61String";
pub const UNIVERSAL_STRING: &'static str = "UniversalString";
pub const UTF8_STRING: &'static str = "UTF8String";
pub const VIDEOTEX_STRING: &'static str = "VideotexString";
pub const VISIBLE_STRING: &'static str = "VisibleString";

// Tagging tokens
pub const UNIVERSAL: &'static str = "UNIVERSAL";
pub const APPLICATION: &'static str = "APPLICATION";
pub const PRIVATE: &'static str = "PRIVATE";

// Value tokens
pub const TRUE: &'static str = "TRUE";
pub const FALSE: &'static str = "FALSE";
pub const PLUS_INFINITY: &'static str = "PLUS-INFINITY";
pub const MINUS_INFINITY: &'static str = "MINUS-INFINITY";
pub const NOT_A_NUMBER: &'static str = "NOT-A-NUMBER";
pub const INF: &'static str = "INF";
pub const CONTAINING: &'static str = "CONTAINING";
pub const ENCODED: &'static str = "ENCODED";
pub const BY: &'static str = "BY";

// Subtyping tokens
pub const SIZE: &'static str = "SIZE";
pub const MIN: &'static str = "MIN";
pub const MAX: &'static str = "MAX";
pub const INCLUDES: &'static str = "INCLUDES";
pub const EXCEPT: &'static str = "EXCEPT";
pub const UNION: &'static str = "UNION";
pub const INTERSECTION: &'static str = "INTERSECTION";
pub const PATTERN: &'static str = "PATTERN";
pub const SETTINGS: &'static str = "SETTINGS";
pub const CONSTRAINED: &'static str = "CONSTRAINED";
pub const COMPONENT: &'static str = "COMPONENT";
pub const COMPONENTS: &'static str = "COMPONENTS";
pub const PRESENT: &'static str = "PRESENT";
pub const ABSENT: &'static str = "ABSENT";
pub const OPTIONAL: &'static str = "OPTIONAL";
pub const DEFAULT: &'static str = "DEFAULT";

// Information object tokens
pub const CLASS: &'static str = "CLASS";
pub const UNIQUE: &'static str = "UNIQUE";
pub const SYNTAX: &'static str = "SYNTAX";
pub const TYPE_IDENTIFIER: &'static str = "TYPE-IDENTIFIER";
pub const ABSTRACT_SYNTAX: &'static str = "ABSTRACT-SYNTAX";

/// The reserved words of the grammar.
/// A word-like token whose text is listed here is reported as a keyword.
pub const KEYWORDS: [&'static str; 94] = [
    DEFINITIONS, BEGIN, END, EXPLICIT, IMPLICIT, AUTOMATIC, TAGS, EXTENSIBILITY, IMPLIED,
    INSTRUCTIONS, EXPORTS, IMPORTS, FROM, ALL, WITH, SUCCESSORS, DESCENDANTS, ENCODING_CONTROL,
    BOOLEAN, INTEGER, ENUMERATED, REAL, BIT, OCTET, STRING, NULL, SEQUENCE, SET, OF, CHOICE,
    OBJECT, IDENTIFIER, RELATIVE_OID, OID_IRI, RELATIVE_OID_IRI, EMBEDDED, PDV, EXTERNAL,
    CHARACTER, INSTANCE, OBJECT_DESCRIPTOR, TIME, DATE, TIME_OF_DAY, DATE_TIME, DURATION,
    UTC_TIME, GENERALIZED_TIME, BMP_STRING, GENERAL_STRING, GRAPHIC_STRING, IA5_STRING,
    ISO646_STRING, NUMERIC_STRING, PRINTABLE_STRING, TELETEX_STRING, T61_STRING,
    UNIVERSAL_STRING, UTF8_STRING, VIDEOTEX_STRING, VISIBLE_STRING, UNIVERSAL, APPLICATION,
    PRIVATE, TRUE, FALSE, PLUS_INFINITY, MINUS_INFINITY, NOT_A_NUMBER, CONTAINING, ENCODED, BY,
    SIZE, MIN, MAX, INCLUDES, EXCEPT, UNION, INTERSECTION, PATTERN, SETTINGS, CONSTRAINED,
    COMPONENT, COMPONENTS, PRESENT, ABSENT, OPTIONAL, DEFAULT, CLASS, UNIQUE, SYNTAX,
    TYPE_IDENTIFIER, ABSTRACT_SYNTAX, INF,
];

pub const EXTRAS: [&'static str; 2] = ["line_comment", "block_comment"];

/// Recognizers of the grammar's terminals. On equally long matches the
/// earlier entry wins.
pub static LEXER: [LexRule; 13] = [
    LexRule::new("block_comment", block_comment),
    LexRule::new("line_comment", line_comment),
    LexRule::new("realnumber", realnumber),
    LexRule::new("number", number),
    LexRule::new("bstring", bstring),
    LexRule::new("hstring", hstring),
    LexRule::new("tstring", tstring),
    LexRule::new("cstring", cstring),
    LexRule::new("uppercased_field_ref", uppercased_field_ref),
    LexRule::new("lowercased_field_ref", lowercased_field_ref),
    LexRule::new("uppercased_identifier", uppercased_identifier),
    LexRule::new("lowercased_identifier", lowercased_identifier),
    LexRule::new("yellcased_identifier", yellcased_identifier),
];

pub static ASN1_GRAMMAR: GrammarDescriptor = GrammarDescriptor {
    abi_version: LANGUAGE_VERSION,
    name: "asn1",
    symbols: &SYMBOLS,
    root: "source_file",
    word: Some("yellcased_identifier"),
    extras: &EXTRAS,
    keywords: &KEYWORDS,
    lexer: &LEXER,
};

/// Returns the compiled ASN.1 grammar.
pub fn descriptor() -> &'static GrammarDescriptor {
    &ASN1_GRAMMAR
}

/// Loads the compiled ASN.1 grammar into a [`Language`] handle.
pub fn language() -> Result<Language, LanguageError> {
    Language::new(descriptor())
}
