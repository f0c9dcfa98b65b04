//! JSON object type that preserves key insertion order.
//!
//! Backed by a `Vec<(String, JsonValue)>` instead of a map: parsed documents
//! keep their key order through serialization, and equality is order
//! sensitive. Lookups are linear scans, which is fine for the small objects
//! (features, properties, configuration) this workspace handles.

use crate::json::*;
use anyhow::Result;
use std::fmt::{Debug, Display};

#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(Vec<(String, JsonValue)>);

impl JsonObject {
	/// Creates a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the raw `JsonValue` stored under `key`, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Returns the string stored under `key`; errors if the value exists but
	/// is not a string.
	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(|v| v.as_str().map(str::to_owned)).transpose()
	}

	/// Returns the number stored under `key`; errors if the value exists but
	/// is not a number.
	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	/// Returns the array stored under `key`; errors if the value exists but is
	/// not an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	/// Sets `key` to `value`. An existing key keeps its position; a new key is
	/// appended.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		let value = JsonValue::from(value);
		if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
			entry.1 = value;
		} else {
			self.0.push((key.to_owned(), value));
		}
	}

	/// Serializes to a compact JSON string, keys in insertion order.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Parses a JSON string, erroring on invalid JSON or a non-object root.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Iterates over the key-value pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter().map(|(k, v)| (k, v))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl FromIterator<(String, JsonValue)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(input: I) -> Self {
		JsonObject(input.into_iter().collect())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}
