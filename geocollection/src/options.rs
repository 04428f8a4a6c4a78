/// Options applied while loading a [`crate::FeatureCollection`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
	/// Property to adopt as id variable once all features are read.
	/// It goes through the same uniqueness check as [`crate::FeatureCollection::set_id_variable`].
	pub id_variable: Option<String>,
}

impl LoadOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id_variable(mut self, key: impl Into<String>) -> Self {
		self.id_variable = Some(key.into());
		self
	}
}
