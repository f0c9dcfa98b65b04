//! `From` implementations creating `JsonValue::Number` from Rust numeric
//! types.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

/// Numeric types with a lossless f64 conversion.
macro_rules! impl_from_number_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

/// Numeric types that may lose precision when cast to f64.
macro_rules! impl_from_number_lossy {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(input as f64)
				}
			}
		)+
	};
}

impl_from_number_lossless!(f32, u8, u16, u32, i8, i16, i32);
impl_from_number_lossy!(u64, usize, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_integers() {
		assert_eq!(JsonValue::from(255u8), JsonValue::Number(255.0));
		assert_eq!(JsonValue::from(-32768i16), JsonValue::Number(-32768.0));
		assert_eq!(JsonValue::from(1_000_000_000u32), JsonValue::Number(1e9));
		assert_eq!(JsonValue::from(-4_000_000_000i64), JsonValue::Number(-4e9));
	}

	#[test]
	fn from_floats() {
		assert_eq!(JsonValue::from(-1.5f32), JsonValue::Number(-1.5));
		assert_eq!(JsonValue::from(3.25f64), JsonValue::Number(3.25));
	}
}
