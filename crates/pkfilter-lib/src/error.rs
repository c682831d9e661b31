//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// A filter token outside the known vocabulary.
	#[error("invalid filter: {0}")]
	InvalidFilter(String),
}
