use crate::cim::{CimError, Result};

/// Scalar property value kinds observed at the management-source boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Boolean value.
	Bool(bool),
	/// Signed integer value.
	I64(i64),
	/// Unsigned integer value.
	U64(u64),
	/// 32-bit float value.
	F32(f32),
	/// 64-bit float value.
	F64(f64),
	/// Text value.
	Str(Box<str>),
	/// Datetime in its source text encoding, kept verbatim.
	DateTime(Box<str>),
	/// Embedded object reference with no text form.
	Object,
}

impl Scalar {
	/// Short kind label for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Scalar::Bool(_) => "bool",
			Scalar::I64(_) => "i64",
			Scalar::U64(_) => "u64",
			Scalar::F32(_) => "f32",
			Scalar::F64(_) => "f64",
			Scalar::Str(_) => "string",
			Scalar::DateTime(_) => "datetime",
			Scalar::Object => "object",
		}
	}

	/// Coerce to display text, `None` for kinds without a text form.
	pub fn to_text(&self) -> Option<String> {
		match self {
			Scalar::Bool(value) => Some(value.to_string()),
			Scalar::I64(value) => Some(value.to_string()),
			Scalar::U64(value) => Some(value.to_string()),
			Scalar::F32(value) => Some(value.to_string()),
			Scalar::F64(value) => Some(value.to_string()),
			Scalar::Str(value) => Some(value.to_string()),
			Scalar::DateTime(value) => Some(value.to_string()),
			Scalar::Object => None,
		}
	}
}

/// Property value as retrieved from the management source.
///
/// A value is exclusively owned by the read that produced it; rendering
/// consumes it, so nothing downstream can retain foreign data.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
	/// Property exists but carries no value.
	Empty,
	/// Explicit null marker.
	Null,
	/// Single scalar value.
	Scalar(Scalar),
	/// Ordered scalar sequence, lower bound first.
	Array(Vec<Scalar>),
}

/// Render a raw value to its canonical display text.
///
/// `Empty` and `Null` render as the empty string without any coercion
/// attempt. Arrays render as their elements' texts in index order,
/// joined with `", "`; an array containing an element kind with no
/// text form renders as the empty string. That narrowing is a known
/// limitation carried over from the source type system and is the
/// documented contract here, not silent data loss. A bare scalar
/// without a text form fails with [`CimError::ValueNotCoercible`].
pub fn render(value: RawValue) -> Result<Box<str>> {
	match value {
		RawValue::Empty | RawValue::Null => Ok(Box::from("")),
		RawValue::Scalar(scalar) => match scalar.to_text() {
			Some(text) => Ok(text.into_boxed_str()),
			None => Err(CimError::ValueNotCoercible { kind: scalar.kind() }),
		},
		RawValue::Array(elements) => {
			let mut texts = Vec::with_capacity(elements.len());
			for element in &elements {
				match element.to_text() {
					Some(text) => texts.push(text),
					None => return Ok(Box::from("")),
				}
			}
			Ok(texts.join(", ").into_boxed_str())
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::cim::{CimError, RawValue, Scalar, render};

	#[test]
	fn empty_and_null_render_as_empty_string() {
		assert_eq!(render(RawValue::Empty).expect("empty renders").as_ref(), "");
		assert_eq!(render(RawValue::Null).expect("null renders").as_ref(), "");
	}

	#[test]
	fn scalars_render_as_canonical_text() {
		assert_eq!(render(RawValue::Scalar(Scalar::I64(42))).expect("int renders").as_ref(), "42");
		assert_eq!(render(RawValue::Scalar(Scalar::U64(7))).expect("uint renders").as_ref(), "7");
		assert_eq!(render(RawValue::Scalar(Scalar::Bool(true))).expect("bool renders").as_ref(), "true");
		assert_eq!(render(RawValue::Scalar(Scalar::Bool(false))).expect("bool renders").as_ref(), "false");
		assert_eq!(render(RawValue::Scalar(Scalar::Str(Box::from("idle")))).expect("text renders").as_ref(), "idle");
		assert_eq!(
			render(RawValue::Scalar(Scalar::DateTime(Box::from("20190401000000.000000+000"))))
				.expect("datetime renders")
				.as_ref(),
			"20190401000000.000000+000"
		);
	}

	#[test]
	fn array_elements_join_with_comma_space() {
		let value = RawValue::Array(vec![
			Scalar::Str(Box::from("a")),
			Scalar::Str(Box::from("b")),
			Scalar::Str(Box::from("c")),
		]);
		assert_eq!(render(value).expect("array renders").as_ref(), "a, b, c");
	}

	#[test]
	fn mixed_kind_array_coerces_each_element() {
		let value = RawValue::Array(vec![Scalar::U64(1), Scalar::Bool(false), Scalar::Str(Box::from("x"))]);
		assert_eq!(render(value).expect("array renders").as_ref(), "1, false, x");
	}

	#[test]
	fn array_of_objects_renders_as_empty_string() {
		let value = RawValue::Array(vec![Scalar::Object, Scalar::Object]);
		assert_eq!(render(value).expect("object array degrades").as_ref(), "");
	}

	#[test]
	fn bare_object_scalar_is_not_coercible() {
		let err = render(RawValue::Scalar(Scalar::Object)).expect_err("object has no text form");
		match err {
			CimError::ValueNotCoercible { kind } => assert_eq!(kind, "object"),
			other => panic!("unexpected error: {other}"),
		}
	}
}
