/*!
# Argtree: Errors.

These cover mistakes made while _declaring_ arguments. Problems with the
user-supplied CLI input are reported separately, as an
[`ErrorCode`](crate::ErrorCode).
*/

use crate::Kind;
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Error!
pub enum ArgTreeError {
	/// # Invalid Kind Combination.
	InvalidKind(Kind),

	/// # Unknown Datatype.
	UnknownDataType,
}

impl std::error::Error for ArgTreeError {}

impl fmt::Display for ArgTreeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidKind(k) => write!(f, "Invalid argument kind: {k}"),
			Self::UnknownDataType => f.write_str(self.as_str()),
		}
	}
}

impl ArgTreeError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidKind(_) => "Invalid argument kind.",
			Self::UnknownDataType => "Unknown datatype; expected int, string, file, url, or custom.",
		}
	}
}
