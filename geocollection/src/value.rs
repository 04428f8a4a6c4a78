use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};
use std::{
	cmp::Ordering,
	fmt::{Debug, Display},
	hash::Hash,
};

/// A property value, mirroring the JSON value model.
///
/// Integers are kept apart from doubles: non-negative integers are `UInt`, negative ones `Int`,
/// and every number with a fraction or exponent is a `Double`. Equality, hashing and ordering
/// compare the stored variant, so `5` and `5.0` are different values. Objects compare their
/// entries in order.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	/// Entries in source order.
	Object(Vec<(String, GeoValue)>),
	String(String),
	UInt(u64),
}

/// The runtime kind of a [`GeoValue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
	Array,
	Bool,
	Double,
	Int,
	Null,
	Object,
	String,
	UInt,
}

impl PropertyKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			PropertyKind::Array => "array",
			PropertyKind::Bool => "bool",
			PropertyKind::Double => "double",
			PropertyKind::Int => "int",
			PropertyKind::Null => "null",
			PropertyKind::Object => "object",
			PropertyKind::String => "string",
			PropertyKind::UInt => "uint",
		}
	}
}

impl Display for PropertyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl GeoValue {
	pub fn kind(&self) -> PropertyKind {
		match self {
			GeoValue::Array(_) => PropertyKind::Array,
			GeoValue::Bool(_) => PropertyKind::Bool,
			GeoValue::Double(_) => PropertyKind::Double,
			GeoValue::Int(_) => PropertyKind::Int,
			GeoValue::Null => PropertyKind::Null,
			GeoValue::Object(_) => PropertyKind::Object,
			GeoValue::String(_) => PropertyKind::String,
			GeoValue::UInt(_) => PropertyKind::UInt,
		}
	}

	pub fn to_json(&self) -> Value {
		match self {
			GeoValue::Array(a) => Value::Array(a.iter().map(GeoValue::to_json).collect()),
			GeoValue::Bool(v) => Value::Bool(*v),
			GeoValue::Double(v) => Value::from(*v),
			GeoValue::Int(v) => Value::from(*v),
			GeoValue::Null => Value::Null,
			GeoValue::Object(o) => Value::Object(o.iter().map(|(k, v)| (k.clone(), v.to_json())).collect::<Map<_, _>>()),
			GeoValue::String(v) => Value::String(v.clone()),
			GeoValue::UInt(v) => Value::from(*v),
		}
	}

	fn variant_order(&self) -> u8 {
		match self {
			GeoValue::String(_) => 0,
			GeoValue::Double(_) => 1,
			GeoValue::Int(_) => 2,
			GeoValue::UInt(_) => 3,
			GeoValue::Bool(_) => 4,
			GeoValue::Array(_) => 5,
			GeoValue::Object(_) => 6,
			GeoValue::Null => 7,
		}
	}

	/// Interprets a bare string, e.g. a command line argument, as the most specific value.
	pub fn parse_str(value: &str) -> Self {
		lazy_static! {
			static ref REG_DOUBLE: Regex = RegexBuilder::new(r"^-?\d*\.\d+$").build().unwrap();
			static ref REG_INT: Regex = RegexBuilder::new(r"^\-\d+$").build().unwrap();
			static ref REG_UINT: Regex = RegexBuilder::new(r"^\d+$").build().unwrap();
		}

		match value {
			"" => GeoValue::String(String::new()),
			"true" => GeoValue::Bool(true),
			"false" => GeoValue::Bool(false),
			"null" => GeoValue::Null,
			_ => {
				if REG_DOUBLE.is_match(value) {
					value.parse::<f64>().map_or_else(|_| GeoValue::from(value), GeoValue::Double)
				} else if REG_INT.is_match(value) {
					value.parse::<i64>().map_or_else(|_| GeoValue::from(value), GeoValue::Int)
				} else if REG_UINT.is_match(value) {
					value.parse::<u64>().map_or_else(|_| GeoValue::from(value), GeoValue::UInt)
				} else {
					GeoValue::String(value.to_string())
				}
			}
		}
	}
}

impl From<&Value> for GeoValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(v) => GeoValue::Bool(*v),
			Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					GeoValue::UInt(v)
				} else if let Some(v) = n.as_i64() {
					GeoValue::Int(v)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(v) => GeoValue::String(v.clone()),
			Value::Array(a) => GeoValue::Array(a.iter().map(GeoValue::from).collect()),
			Value::Object(o) => GeoValue::Object(o.iter().map(|(k, v)| (k.clone(), GeoValue::from(v))).collect()),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		if value < 0 {
			GeoValue::Int(value)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl<T> From<Vec<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		GeoValue::Array(value.into_iter().map(GeoValue::from).collect())
	}
}

impl Eq for GeoValue {}

impl Hash for GeoValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			GeoValue::Array(v) => v.hash(state),
			GeoValue::Bool(v) => v.hash(state),
			// 0.0 and -0.0 compare equal, so they must hash alike
			GeoValue::Double(v) => (if *v == 0.0 { 0.0f64 } else { *v }).to_bits().hash(state),
			GeoValue::Int(v) => v.hash(state),
			GeoValue::Null => (),
			GeoValue::Object(v) => v.hash(state),
			GeoValue::String(v) => v.hash(state),
			GeoValue::UInt(v) => v.hash(state),
		}
	}
}

impl PartialOrd for GeoValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for GeoValue {
	fn cmp(&self, other: &Self) -> Ordering {
		use GeoValue::*;
		match (self, other) {
			(String(a), String(b)) => a.cmp(b),
			(Double(a), Double(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
			(Int(a), Int(b)) => a.cmp(b),
			(UInt(a), UInt(b)) => a.cmp(b),
			(Bool(a), Bool(b)) => a.cmp(b),
			(Array(a), Array(b)) => a.cmp(b),
			(Object(a), Object(b)) => a.cmp(b),
			_ => self.variant_order().cmp(&other.variant_order()),
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Array(_) | GeoValue::Object(_) => write!(f, "{}", self.to_json()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::collections::HashSet;

	#[test]
	fn ordering_within_and_across_variants() {
		// within the same variant
		assert!(GeoValue::from("a") < GeoValue::from("b"));
		assert!(GeoValue::from(1.0) < GeoValue::from(2.0));
		assert!(GeoValue::from(-2) < GeoValue::from(-1));
		assert!(GeoValue::from(1u64) < GeoValue::from(2u64));
		assert!(GeoValue::from(false) < GeoValue::from(true));

		// between different variants
		assert!(GeoValue::from("a") < GeoValue::from(1.0));
		assert!(GeoValue::from(1.0) < GeoValue::from(-1));
		assert!(GeoValue::from(1u64) < GeoValue::from(false));
		assert!(GeoValue::from(false) < GeoValue::Null);
	}

	#[rstest]
	#[case(json!(null), GeoValue::Null)]
	#[case(json!(true), GeoValue::Bool(true))]
	#[case(json!(42), GeoValue::UInt(42))]
	#[case(json!(-7), GeoValue::Int(-7))]
	#[case(json!(2.5), GeoValue::Double(2.5))]
	#[case(json!("Nice"), GeoValue::from("Nice"))]
	#[case(json!([1, "a"]), GeoValue::Array(vec![GeoValue::UInt(1), GeoValue::from("a")]))]
	fn from_json_value(#[case] json: Value, #[case] expected: GeoValue) {
		let value = GeoValue::from(&json);
		assert_eq!(value, expected);
		assert_eq!(value.to_json(), json);
	}

	#[test]
	fn nested_object_survives() {
		let json = json!({"name": "Nice", "tags": {"sea": true, "rank": [1, 2.5]}});
		let value = GeoValue::from(&json);
		assert_eq!(value.kind(), PropertyKind::Object);
		assert_eq!(value.to_json(), json);
	}

	#[test]
	fn object_keys_keep_their_order() -> anyhow::Result<()> {
		let json: Value = serde_json::from_str(r#"{"z": 1, "a": [true, {"q": null, "b": 2}]}"#)?;
		assert_eq!(GeoValue::from(&json).to_string(), r#"{"z":1,"a":[true,{"q":null,"b":2}]}"#);
		Ok(())
	}

	#[test]
	fn integer_and_double_are_distinct() {
		assert_ne!(GeoValue::from(&json!(5)), GeoValue::from(&json!(5.0)));
	}

	#[test]
	fn hash_agrees_with_eq() {
		let set: HashSet<GeoValue> = [GeoValue::Double(0.0), GeoValue::Double(-0.0), GeoValue::from(1)]
			.into_iter()
			.collect();
		assert_eq!(set.len(), 2);
	}

	#[rstest]
	#[case("", GeoValue::from(""))]
	#[case("true", GeoValue::Bool(true))]
	#[case("null", GeoValue::Null)]
	#[case("20", GeoValue::UInt(20))]
	#[case("-3", GeoValue::Int(-3))]
	#[case("1.5", GeoValue::Double(1.5))]
	#[case("-0.5", GeoValue::Double(-0.5))]
	#[case("Berlin", GeoValue::from("Berlin"))]
	#[case("99999999999999999999999", GeoValue::from("99999999999999999999999"))]
	fn parse_str(#[case] input: &str, #[case] expected: GeoValue) {
		assert_eq!(GeoValue::parse_str(input), expected);
	}

	#[test]
	fn display() {
		assert_eq!(GeoValue::from("x").to_string(), "x");
		assert_eq!(GeoValue::from(-4).to_string(), "-4");
		assert_eq!(GeoValue::Null.to_string(), "null");
		assert_eq!(GeoValue::from(vec![1, 2]).to_string(), "[1,2]");
		assert_eq!(PropertyKind::UInt.to_string(), "uint");
	}
}
