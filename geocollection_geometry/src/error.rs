use thiserror::Error;

/// Errors raised while dispatching a geometry from its type tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
	#[error("unknown geometry type '{0}'")]
	UnknownType(String),
}
