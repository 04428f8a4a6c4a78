use crate::json::{as_array, type_name};
use anyhow::{Result, anyhow, ensure};
use serde_json::{Number, Value};
use std::fmt::Debug;

/// A single GeoJSON position: at least two ordinates, `x` and `y`, optionally followed by more
/// (e.g. an elevation).
///
/// Extra ordinates are kept so that they survive a round trip, but only `x` and `y` take part in
/// bounding box computation. A position read from JSON remembers its numbers as written, so
/// `[1, 2]` is written back as `[1, 2]` and large integers keep every digit. Equality compares the
/// ordinates as `f64`.
#[derive(Clone)]
pub struct Position {
	ordinates: Vec<f64>,
	numbers: Option<Vec<Number>>,
}

impl Position {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			ordinates: vec![x, y],
			numbers: None,
		}
	}

	/// Creates a position from all of its ordinates.
	///
	/// # Errors
	/// Fails if fewer than two ordinates are given.
	pub fn from_ordinates(ordinates: Vec<f64>) -> Result<Self> {
		ensure!(
			ordinates.len() >= 2,
			"a position must have at least two values, but has {}",
			ordinates.len()
		);
		Ok(Self {
			ordinates,
			numbers: None,
		})
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.ordinates[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.ordinates[1]
	}

	/// Number of ordinates, 2 for plain `[x, y]` positions.
	#[must_use]
	pub fn dimension(&self) -> usize {
		self.ordinates.len()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.ordinates
	}

	pub fn from_json(value: &Value) -> Result<Self> {
		let numbers = as_array(value, "a position")?
			.iter()
			.map(|v| match v {
				Value::Number(n) => Ok(n.clone()),
				_ => Err(anyhow!("a position must contain numbers, but found {}", type_name(v))),
			})
			.collect::<Result<Vec<Number>>>()?;
		let ordinates = numbers.iter().map(|n| n.as_f64().unwrap_or(f64::NAN)).collect();
		let mut position = Self::from_ordinates(ordinates)?;
		position.numbers = Some(numbers);
		Ok(position)
	}

	/// The position as JSON array, using the numbers as read if the position came from JSON.
	#[must_use]
	pub fn to_json(&self) -> Value {
		match &self.numbers {
			Some(numbers) => Value::Array(numbers.iter().cloned().map(Value::Number).collect()),
			None => Value::from(self.ordinates.clone()),
		}
	}
}

impl PartialEq for Position {
	fn eq(&self, other: &Self) -> bool {
		self.ordinates == other.ordinates
	}
}

impl<T, const N: usize> From<[T; N]> for Position
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; N]) -> Self {
		const { assert!(N >= 2, "a position needs at least two values") };
		Position {
			ordinates: value.iter().map(|v| (*v).into()).collect(),
			numbers: None,
		}
	}
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Position
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; N]) -> Self {
		Position::from(*value)
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Position::new(value.0, value.1)
	}
}

impl From<&Position> for geo::Coord<f64> {
	fn from(value: &Position) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.ordinates.fmt(f)
	}
}
