use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res, rest};
use nom::sequence::separated_pair;
use nom::IResult;

use crate::error::TraceError;

fn hex_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_hexdigit())(input)
}

pub fn hex_u8(input: &str) -> IResult<&str, u8> {
    map_res(hex_digits, |s| u8::from_str_radix(s, 16))(input)
}

pub fn hex_u16(input: &str) -> IResult<&str, u16> {
    map_res(hex_digits, |s| u16::from_str_radix(s, 16))(input)
}

pub fn dec_u64(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |s: &str| s.parse::<u64>())(input)
}

// <label>:<value>, the value may be empty
pub fn labelled(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_while(|c: char| c != ':'), char(':'), rest)(input)
}

/// Runs `parser` over the whole of `text`, anything left over is an error.
pub fn decode<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    text: &'a str,
    line: usize,
    field: &'static str,
) -> Result<O, TraceError> {
    match all_consuming(parser)(text) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(TraceError::MalformedNumber {
            line,
            field,
            text: text.to_string(),
        }),
    }
}
