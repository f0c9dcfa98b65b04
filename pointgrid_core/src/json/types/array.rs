//! JSON array type backed by a `Vec<JsonValue>`.

use crate::json::*;
use anyhow::{Result, anyhow};
use std::fmt::Debug;

#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Serializes the array to a compact string, e.g. `[1,2]`.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Returns a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Converts all elements to `f64`, erroring if any element is not a
	/// number.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}

	/// Converts the elements to a fixed-size array of numbers, erroring on a
	/// length mismatch or non-numeric elements.
	pub fn as_number_array<const N: usize>(&self) -> Result<[f64; N]> {
		self
			.as_number_vec()?
			.try_into()
			.map_err(|e: Vec<f64>| anyhow!("expected {N} numbers, found {}", e.len()))
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(v.clone())).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(*v)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify() {
		let array = JsonArray(vec![JsonValue::from(1), JsonValue::from("two"), JsonValue::Null]);
		assert_eq!(array.stringify(), "[1,\"two\",null]");
		assert_eq!(JsonArray::default().stringify(), "[]");
	}

	#[test]
	fn from_vec_and_array() {
		assert_eq!(JsonArray::from(vec![1, 2]).stringify(), "[1,2]");
		assert_eq!(JsonArray::from([1.5, 2.5]).stringify(), "[1.5,2.5]");
		assert_eq!(JsonArray::from(&[3, 4]).stringify(), "[3,4]");
	}

	#[test]
	fn as_number_vec() {
		let array = JsonArray::from(vec![1, 2, 3]);
		assert_eq!(array.as_number_vec().unwrap(), vec![1.0, 2.0, 3.0]);

		let mixed = JsonArray(vec![JsonValue::from(1), JsonValue::from("x")]);
		assert!(mixed.as_number_vec().is_err());
	}

	#[test]
	fn as_number_array() {
		let array = JsonArray::from(vec![1, 2]);
		assert_eq!(array.as_number_array::<2>().unwrap(), [1.0, 2.0]);
		assert!(array.as_number_array::<3>().is_err());
	}

	#[test]
	fn len_and_is_empty() {
		assert!(JsonArray::default().is_empty());
		assert_eq!(JsonArray::from(vec![1, 2]).len(), 2);
	}
}
