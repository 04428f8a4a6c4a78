use super::GeoValue;

/// A row-per-feature projection of some property keys, in feature id order.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyTable {
	keys: Vec<String>,
	rows: Vec<Vec<GeoValue>>,
}

impl PropertyTable {
	pub(crate) fn new(keys: Vec<String>, rows: Vec<Vec<GeoValue>>) -> Self {
		debug_assert!(rows.iter().all(|row| row.len() == keys.len()));
		Self { keys, rows }
	}

	pub fn keys(&self) -> &[String] {
		&self.keys
	}

	/// `(rows, columns)`
	pub fn shape(&self) -> (usize, usize) {
		(self.rows.len(), self.keys.len())
	}

	pub fn get(&self, row: usize, column: usize) -> Option<&GeoValue> {
		self.rows.get(row)?.get(column)
	}

	pub fn row(&self, index: usize) -> Option<&[GeoValue]> {
		self.rows.get(index).map(Vec::as_slice)
	}

	pub fn rows(&self) -> &[Vec<GeoValue>] {
		&self.rows
	}

	pub fn column(&self, index: usize) -> Option<Vec<GeoValue>> {
		if index >= self.keys.len() {
			return None;
		}
		Some(self.rows.iter().map(|row| row[index].clone()).collect())
	}

	pub fn column_by_key(&self, key: &str) -> Option<Vec<GeoValue>> {
		self.column(self.keys.iter().position(|k| k == key)?)
	}

	/// All values in row-major order.
	pub fn flatten(&self) -> Vec<GeoValue> {
		self.rows.iter().flatten().cloned().collect()
	}

	pub fn into_rows(self) -> Vec<Vec<GeoValue>> {
		self.rows
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> PropertyTable {
		PropertyTable::new(
			vec!["id".to_string(), "name".to_string()],
			vec![
				vec![GeoValue::from(10), GeoValue::from("a")],
				vec![GeoValue::from(20), GeoValue::from("b")],
			],
		)
	}

	#[test]
	fn shape_and_access() {
		let table = sample();
		assert_eq!(table.shape(), (2, 2));
		assert_eq!(table.get(1, 1), Some(&GeoValue::from("b")));
		assert_eq!(table.get(2, 0), None);
		assert_eq!(table.row(0), Some(&[GeoValue::from(10), GeoValue::from("a")][..]));
		assert_eq!(table.keys(), &["id".to_string(), "name".to_string()]);
	}

	#[test]
	fn columns() {
		let table = sample();
		assert_eq!(table.column(0), Some(vec![GeoValue::from(10), GeoValue::from(20)]));
		assert_eq!(table.column_by_key("name"), Some(vec![GeoValue::from("a"), GeoValue::from("b")]));
		assert_eq!(table.column(2), None);
		assert_eq!(table.column_by_key("missing"), None);
	}

	#[test]
	fn flatten_is_row_major() {
		assert_eq!(
			sample().flatten(),
			vec![GeoValue::from(10), GeoValue::from("a"), GeoValue::from(20), GeoValue::from("b")]
		);
		assert_eq!(sample().into_rows().len(), 2);
	}
}
