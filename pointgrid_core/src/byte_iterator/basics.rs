//! Parsing helpers built on top of [`ByteIterator`](super::ByteIterator).
//!
//! Together these cover exactly the subset of JSON needed by this workspace:
//! - `parse_tag` matches fixed ASCII keywords (`true`, `false`, `null`)
//! - `parse_quoted_json_string` handles string literals with escapes
//! - `parse_number_as_string` / `parse_number_as<T>` handle the JSON number
//!   grammar
//! - `parse_object_entries` / `parse_array_entries` walk object and array
//!   contents, leaving the value parsing to a caller-supplied closure
//!
//! All helpers leave the iterator positioned directly after the token they
//! consumed.

use super::ByteIterator;
use anyhow::{Error, Result, bail};
use std::str::FromStr;

/// Matches a fixed ASCII tag at the current position, erroring on the first
/// mismatching byte.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

/// Parses a JSON string literal, including the standard escapes
/// (`\" \\ \/ \b \f \n \r \t`) and `\uXXXX` escapes for BMP code points.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	let mut hex = [0u8; 4];

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					for digit in &mut hex {
						*digit = iter.expect_next_byte()?;
					}
					let code_point = u16::from_str_radix(std::str::from_utf8(&hex).unwrap_or(""), 16)
						.map_err(|_| iter.format_error("invalid unicode escape"))?;
					bytes.extend_from_slice(
						&String::from_utf16(&[code_point])
							.map_err(|_| iter.format_error("invalid unicode escape"))?
							.into_bytes(),
					);
				}
				c => bytes.push(c),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

/// Parses a JSON number and returns its textual representation: optional
/// sign, integer part, optional fraction, optional exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut integer_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		integer_digits = true;
		number.push(iter.expect_next_byte()?);
	}
	if !integer_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fraction_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fraction_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Parses a JSON number and converts it to `R` via `FromStr`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks the entries of a JSON object, calling `parse_value` with each key and
/// the iterator positioned at the start of the corresponding value.
pub fn parse_object_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	loop {
		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b'}' => {
				iter.advance();
				break;
			}
			b'"' => {
				let key = parse_quoted_json_string(iter)?;

				iter.skip_whitespace();
				if iter.expect_next_byte()? != b':' {
					return Err(iter.format_error("expected ':'"));
				}

				iter.skip_whitespace();
				parse_value(key, iter)?;

				iter.skip_whitespace();
				match iter.expect_next_byte()? {
					b',' => continue,
					b'}' => break,
					_ => return Err(iter.format_error("expected ',' or '}'")),
				}
			}
			_ => return Err(iter.format_error("parsing object, expected '\"' or '}'")),
		}
	}
	Ok(())
}

/// Walks the entries of a JSON array, collecting the results of `parse_value`.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => {
				iter.skip_whitespace();
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_tag() {
		fn parse(text: &str, tag: &str) -> bool {
			let mut iter = ByteIterator::from_str(text);
			parse_tag(&mut iter, tag).is_ok()
		}
		assert!(parse("null", "null"));
		assert!(!parse("nuul", "null"));
		assert!(parse("something", "some"));
		assert!(!parse("nul", "null"));
	}

	#[test]
	fn test_parse_quoted_json_string() {
		fn parse(text: &str) -> Result<String> {
			let mut iter = ByteIterator::from_str(text);
			parse_quoted_json_string(&mut iter)
		}

		assert_eq!(parse(" \"hello\" ").unwrap(), "hello");
		assert_eq!(parse(" \"he\\nllo\" ").unwrap(), "he\nllo");
		assert_eq!(parse(" \"he\\u0041llo\" ").unwrap(), "heAllo");
		assert_eq!(parse(" \"he\\b\\f\\n\\r\\tllo\" ").unwrap(), "he\x08\x0C\n\r\tllo");
		assert_eq!(parse(" \"hello \\\"world\\\"\" ").unwrap(), "hello \"world\"");

		assert!(parse(" \"he\\u004Gllo\" ").is_err());
		assert!(parse(" \"unterminated string ").is_err());
		assert!(parse("no quote").is_err());
	}

	#[test]
	fn test_parse_number_as_string() -> Result<()> {
		fn parse(text: &str) -> Result<String> {
			let mut iter = ByteIterator::from_str(text);
			parse_number_as_string(&mut iter)
		}

		assert_eq!(parse("123")?, "123");
		assert_eq!(parse("-123")?, "-123");
		assert_eq!(parse("0.456")?, "0.456");
		assert_eq!(parse("3e4")?, "3e4");
		assert_eq!(parse("123E-10")?, "123E-10");
		assert_eq!(parse("-123.45E+6")?, "-123.45E+6");

		// stops at the first byte that is not part of the number
		assert_eq!(parse("123 ")?, "123");
		assert_eq!(parse("123.45,")?, "123.45");

		assert!(parse("123..45").is_err());
		assert!(parse("123e").is_err());
		assert!(parse("-").is_err());
		assert!(parse("123.").is_err());
		Ok(())
	}

	#[test]
	fn test_parse_number_as() -> Result<()> {
		fn parse<T: std::str::FromStr>(text: &str) -> Result<T> {
			let mut iter = ByteIterator::from_str(text);
			parse_number_as::<T>(&mut iter)
		}

		assert_eq!(parse::<i32>("-123")?, -123);
		assert_eq!(parse::<f64>("12.34")?, 12.34);
		assert_eq!(parse::<f64>("-0.123E3")?, -123.0);
		assert!(parse::<i32>("abc").is_err());
		assert!(parse::<i32>("12.34").is_err());
		Ok(())
	}

	#[test]
	fn test_parse_object_entries() {
		let mut iter = ByteIterator::from_str("{\"key1\":\"value1\", \"key2\":\"value2\"}");

		let mut entries = Vec::new();
		parse_object_entries(&mut iter, |key, iter| {
			let value = parse_quoted_json_string(iter)?;
			entries.push((key, value));
			Ok(())
		})
		.unwrap();

		assert_eq!(
			entries,
			vec![
				("key1".to_string(), "value1".to_string()),
				("key2".to_string(), "value2".to_string())
			]
		);
	}

	#[test]
	fn test_parse_object_entries_missing_colon() {
		let mut iter = ByteIterator::from_str("{\"key\" \"value\"}");
		let result = parse_object_entries(&mut iter, |_, iter| parse_quoted_json_string(iter));
		assert!(result.unwrap_err().to_string().contains("expected ':'"));
	}

	#[test]
	fn test_parse_array_entries() {
		let mut iter = ByteIterator::from_str("[\"val1\", \"val2\", \"val3\"]");
		let result = parse_array_entries(&mut iter, parse_quoted_json_string).unwrap();
		assert_eq!(result, vec!["val1", "val2", "val3"]);
	}

	#[test]
	fn test_parse_array_entries_empty() {
		let mut iter = ByteIterator::from_str("[ ]");
		let result = parse_array_entries(&mut iter, parse_number_as::<i32>).unwrap();
		assert!(result.is_empty());
	}

	#[test]
	fn test_parse_array_entries_unclosed() {
		let mut iter = ByteIterator::from_str("[1, 2");
		let result = parse_array_entries(&mut iter, parse_number_as::<i32>);
		assert!(result.is_err());
	}
}
