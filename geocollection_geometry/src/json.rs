use anyhow::{Result, anyhow};
use serde_json::Value;

/// Borrows the elements of a JSON array, naming `what` in the error otherwise.
pub(crate) fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("{what} must be an array, but found {}", type_name(value)))
}

/// Parses every element of a JSON array with `parse`.
pub(crate) fn parse_array<T>(value: &Value, what: &str, parse: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	as_array(value, what)?.iter().map(parse).collect()
}

pub(crate) fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parse_array_collects_all_entries() -> Result<()> {
		let values = parse_array(&json!([1, 2, 3]), "list", |v| Ok(v.as_u64().unwrap_or(0)))?;
		assert_eq!(values, vec![1, 2, 3]);
		Ok(())
	}

	#[test]
	fn as_array_names_the_offending_type() {
		let err = as_array(&json!({"a": 1}), "coordinates").unwrap_err();
		assert_eq!(err.to_string(), "coordinates must be an array, but found an object");
	}
}
