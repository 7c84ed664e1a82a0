use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::recognize,
    multi::many0,
    sequence::{pair, tuple},
    IResult,
};

use crate::HYPHEN;

/// Recognizes a word of the shape `first rest* (- rest+)*`.
///
/// The word never ends with a hyphen and never contains two adjacent hyphens,
/// a trailing or doubled hyphen is left in the remaining input.
pub fn hyphenated<'a, F, G>(first: F, rest: G) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str>
where
    F: Fn(char) -> bool + Copy,
    G: Fn(char) -> bool + Copy,
{
    recognize(tuple((
        satisfy(first),
        take_while(rest),
        many0(pair(char(HYPHEN), take_while1(rest))),
    )))
}

pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_upper_or_digit(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_before_dangling_hyphens() {
        let mut word = hyphenated(|c: char| c.is_ascii_lowercase(), is_alphanumeric);
        assert_eq!(word("item-code "), Ok((" ", "item-code")));
        assert_eq!(word("item-"), Ok(("-", "item")));
        assert_eq!(word("item--code"), Ok(("--code", "item")));
        assert!(word("Item").is_err());
    }
}
