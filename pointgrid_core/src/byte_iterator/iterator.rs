//! A byte-level cursor over an in-memory buffer.
//!
//! `ByteIterator` drives all JSON parsing in this workspace. It supports
//! peeking at the current byte without consuming it, advancing one byte at a
//! time, and building error messages that quote the input around the position
//! where parsing failed.

use anyhow::{Error, Result, anyhow};

const ERROR_SNIPPET_LENGTH: usize = 16;

pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` positioned at the start of `input`.
	#[must_use]
	pub fn from_str(input: &'a str) -> Self {
		ByteIterator {
			bytes: input.as_bytes(),
			position: 0,
		}
	}

	/// Returns the current absolute position in the input.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the current byte without consuming it, or `None` at the end of
	/// the input.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Moves the cursor one byte forward.
	#[inline]
	pub fn advance(&mut self) {
		self.position += 1;
	}

	/// Returns the current byte and moves the cursor forward.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		if byte.is_some() {
			self.position += 1;
		}
		byte
	}

	/// Like [`consume`](Self::consume), but reaching the end of the input is
	/// an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Like [`peek`](Self::peek), but reaching the end of the input is an
	/// error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Advances past any ASCII whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Builds an error that quotes the input leading up to the current
	/// position, so parse failures point at the offending bytes.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(ERROR_SNIPPET_LENGTH);
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.position >= self.bytes.len() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snippet}", self.position)
	}
}
