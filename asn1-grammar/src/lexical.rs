//! The `lexical` module contains the recognizers of the grammar's named
//! terminals. Every recognizer matches at the very start of its input and
//! returns the recognized slice, whitespace handling is left to the runtime.
use nom::{
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::{
    util::{hyphenated, is_alphanumeric, is_upper_or_digit},
    AMPERSAND, BLOCK_COMMENT_END, BLOCK_COMMENT_START, BSTRING_SUFFIX, DOUBLE_QUOTE, FULL_STOP,
    HSTRING_SUFFIX, LINE_COMMENT, SINGLE_QUOTE,
};

/// Recognizes an all-caps identifier such as `ABSTRACT-SYNTAX`.
/// This is the token reserved words are extracted from.
pub fn yellcased_identifier<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    hyphenated(|c: char| c.is_ascii_uppercase(), is_upper_or_digit)(input)
}

/// Recognizes an identifier starting with an upper-case letter, as used for
/// type references, module references and object set references.
///
/// #### X.680
/// _12.2 A "typereference" shall consist of an arbitrary number (one or more) of
/// letters, digits, and hyphens. The initial character shall be an upper-case
/// letter. A hyphen shall not be the last character. A hyphen shall not be
/// immediately followed by another hyphen._
pub fn uppercased_identifier<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    hyphenated(|c: char| c.is_ascii_uppercase(), is_alphanumeric)(input)
}

/// Recognizes an identifier starting with a lower-case letter, as used for
/// value references, identifiers and object references.
pub fn lowercased_identifier<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    hyphenated(|c: char| c.is_ascii_lowercase(), is_alphanumeric)(input)
}

pub fn uppercased_field_ref<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(preceded(char(AMPERSAND), uppercased_identifier))(input)
}

pub fn lowercased_field_ref<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(preceded(char(AMPERSAND), lowercased_identifier))(input)
}

pub fn number<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    digit1(input)
}

/// Recognizes a real number in decimal notation with an optional exponent,
/// e.g. `3.14` or `6.02E23`.
pub fn realnumber<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        digit1,
        char(FULL_STOP),
        digit1,
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Recognizes a binary string such as `'0101'B`.
pub fn bstring<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        char(SINGLE_QUOTE),
        take_while(|c: char| c == '0' || c == '1'),
        tag(BSTRING_SUFFIX),
    )))(input)
}

/// Recognizes a hexadecimal string such as `'0FA1'H`.
pub fn hstring<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        char(SINGLE_QUOTE),
        take_while(|c: char| c.is_ascii_hexdigit()),
        tag(HSTRING_SUFFIX),
    )))(input)
}

/// Recognizes a character string. Quotes inside the string are not supported.
pub fn cstring<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(delimited(
        char(DOUBLE_QUOTE),
        take_while(|c: char| c != DOUBLE_QUOTE),
        char(DOUBLE_QUOTE),
    ))(input)
}

/// Recognizes a time string such as `"2023-10-01T12:00:00Z"`.
pub fn tstring<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(delimited(
        char(DOUBLE_QUOTE),
        take_while1(|c: char| c.is_ascii_digit() || ":.+-ZT".contains(c)),
        char(DOUBLE_QUOTE),
    ))(input)
}

/// Recognizes an ASN1 line comment, which runs until the end of the line.
pub fn line_comment<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(pair(tag(LINE_COMMENT), take_while(|c: char| c != '\n')))(input)
}

/// Recognizes a C-style block comment. Block comments do not nest, the first
/// `*/` closes the comment.
pub fn block_comment<'a>(input: &'a str) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        tag(BLOCK_COMMENT_START),
        take_until(BLOCK_COMMENT_END),
        tag(BLOCK_COMMENT_END),
    )))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yellcased_identifiers() {
        assert_eq!(yellcased_identifier("SEQUENCE {"), Ok((" {", "SEQUENCE")));
        assert_eq!(
            yellcased_identifier("TYPE-IDENTIFIER.&id"),
            Ok((".&id", "TYPE-IDENTIFIER"))
        );
        assert_eq!(yellcased_identifier("END-"), Ok(("-", "END")));
        assert!(yellcased_identifier("sequence").is_err());
    }

    #[test]
    fn parses_valid_identifiers() {
        assert_eq!(uppercased_identifier("EEE-DDD"), Ok(("", "EEE-DDD")));
        assert_eq!(uppercased_identifier("GenericLane "), Ok((" ", "GenericLane")));
        assert_eq!(lowercased_identifier("regional "), Ok((" ", "regional")));
        assert_eq!(uppercased_identifier("NodeXY64"), Ok(("", "NodeXY64")));
        assert_eq!(
            uppercased_identifier("Sub-Cause-Code  "),
            Ok(("  ", "Sub-Cause-Code"))
        );
    }

    #[test]
    fn handles_invalid_identifiers() {
        assert_eq!(uppercased_identifier("EEE--DDD"), Ok(("--DDD", "EEE")));
        assert!(uppercased_identifier("-GenericLane").is_err());
        assert!(uppercased_identifier("64NodeXY").is_err());
        assert!(lowercased_identifier("&regional").is_err());
        assert!(lowercased_identifier("Regional").is_err());
        assert_eq!(
            uppercased_identifier("Sub-Cause-Code-"),
            Ok(("-", "Sub-Cause-Code"))
        );
    }

    #[test]
    fn parses_field_references() {
        assert_eq!(uppercased_field_ref("&Type,"), Ok((",", "&Type")));
        assert_eq!(lowercased_field_ref("&id UNIQUE"), Ok((" UNIQUE", "&id")));
        assert!(uppercased_field_ref("&id").is_err());
        assert!(lowercased_field_ref("id").is_err());
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(number("255)"), Ok((")", "255")));
        assert_eq!(number("0..7"), Ok(("..7", "0")));
        assert!(number("-1").is_err());
    }

    #[test]
    fn parses_real_numbers() {
        assert_eq!(realnumber("3.14,"), Ok((",", "3.14")));
        assert_eq!(realnumber("6.02E23"), Ok(("", "6.02E23")));
        assert_eq!(realnumber("1.5e-3 "), Ok((" ", "1.5e-3")));
        assert_eq!(realnumber("1.5e"), Ok(("e", "1.5")));
        assert!(realnumber("1..5").is_err());
    }

    #[test]
    fn parses_binary_and_hex_strings() {
        assert_eq!(bstring("'0101'B,"), Ok((",", "'0101'B")));
        assert_eq!(bstring("''B"), Ok(("", "''B")));
        assert!(bstring("'0102'B").is_err());
        assert!(bstring("'0101'H").is_err());
        assert_eq!(hstring("'0FA1'H"), Ok(("", "'0FA1'H")));
        assert!(hstring("'0FG1'H").is_err());
    }

    #[test]
    fn parses_character_and_time_strings() {
        assert_eq!(cstring(r#""hello world" "#), Ok((" ", r#""hello world""#)));
        assert_eq!(cstring(r#""""#), Ok(("", r#""""#)));
        assert!(cstring(r#""unterminated"#).is_err());
        assert_eq!(
            tstring(r#""2023-10-01T12:00:00Z""#),
            Ok(("", r#""2023-10-01T12:00:00Z""#))
        );
        assert!(tstring(r#""noon""#).is_err());
        assert!(tstring(r#""""#).is_err());
    }

    #[test]
    fn parses_line_comment() {
        let line = r#"-- Test, one, two, three/
next"#;
        assert_eq!(
            line_comment(line),
            Ok(("\nnext", "-- Test, one, two, three/"))
        );
        assert_eq!(line_comment("--"), Ok(("", "--")));
        assert!(line_comment("- not a comment").is_err());
    }

    #[test]
    fn parses_block_comment() {
        assert_eq!(
            block_comment(
                r#"/* Test, one, two, three
and one */ rest"#
            ),
            Ok((
                " rest",
                r#"/* Test, one, two, three
and one */"#
            ))
        );
        assert_eq!(block_comment("/**/"), Ok(("", "/**/")));
        assert!(block_comment("/* unterminated").is_err());
    }

    #[test]
    fn closes_block_comment_at_first_terminator() {
        assert_eq!(
            block_comment("/* outer /* inner */ tail */"),
            Ok((" tail */", "/* outer /* inner */"))
        );
    }
}
