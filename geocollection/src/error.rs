use crate::GeoValue;
use thiserror::Error;

/// Errors of building and querying a [`crate::FeatureCollection`].
///
/// They are raised as `anyhow::Error`; use `downcast_ref::<CollectionError>()` to tell them apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
	#[error("unknown geometry type '{0}'")]
	UnknownGeometryType(String),

	#[error("'{0}' is not uniquely valued and cannot be used as id variable")]
	NonUniqueIdVariable(String),

	#[error("value '{0}' not found in the id variable")]
	ValueNotFound(GeoValue),

	#[error("no id variable is set")]
	IdVariableNotSet,

	#[error("feature {id} has no property '{key}'")]
	MissingPropertyKey { key: String, id: usize },
}
