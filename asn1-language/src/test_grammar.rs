//! A small arithmetic grammar used by the unit tests.
use asn1_descriptor::{GrammarDescriptor, LexRule, SymbolMetadata, LANGUAGE_VERSION};
use nom::{
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, digit1},
    combinator::recognize,
    sequence::pair,
    IResult,
};

pub fn number<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    digit1(input)
}

pub fn identifier<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    alpha1(input)
}

pub fn comment<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(pair(tag("#"), take_while(|c: char| c != '\n')))(input)
}

pub static SYMBOLS: [SymbolMetadata; 12] = [
    SymbolMetadata::END,
    SymbolMetadata::named("program"),
    SymbolMetadata::named("number"),
    SymbolMetadata::named("identifier"),
    SymbolMetadata::named("comment"),
    SymbolMetadata::anonymous("LET"),
    SymbolMetadata::anonymous("IN"),
    SymbolMetadata::anonymous("+"),
    SymbolMetadata::anonymous("::="),
    SymbolMetadata::anonymous(":"),
    SymbolMetadata::anonymous(".."),
    SymbolMetadata::anonymous("..."),
];

pub static LEXER: [LexRule; 3] = [
    LexRule::new("comment", comment),
    LexRule::new("number", number),
    LexRule::new("identifier", identifier),
];

pub static CALC: GrammarDescriptor = GrammarDescriptor {
    abi_version: LANGUAGE_VERSION,
    name: "calc",
    symbols: &SYMBOLS,
    root: "program",
    word: Some("identifier"),
    extras: &["comment"],
    keywords: &["LET", "IN"],
    lexer: &LEXER,
};

pub fn leak(descriptor: GrammarDescriptor) -> &'static GrammarDescriptor {
    Box::leak(Box::new(descriptor))
}
