/*!
# Argtree: Error Codes.

Parsing never fails outright. Every problem encountered along the way is
instead recorded as a bit in an [`ErrorCode`], and the (possibly several)
bits are handed back together once the pass is complete.
*/

use std::{
	fmt,
	ops::{
		BitAnd,
		BitOr,
		BitOrAssign,
	},
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Error Code.
///
/// This is a bitmask of independent problem flags. Multiple flags can be
/// set at once, so checks should generally use [`ErrorCode::contains`]
/// rather than direct comparison.
///
/// The one exception is success: [`ErrorCode::NO_ERR`] has a value of `1`,
/// not zero, and every code the parser produces carries that base bit. A
/// clean run is one where _nothing else_ is set; use [`ErrorCode::is_ok`]
/// rather than comparing the raw value against zero.
///
/// ## Examples
///
/// ```
/// use argtree::ErrorCode;
///
/// let code = ErrorCode::NO_ERR | ErrorCode::WRONG_DATA;
/// assert!(! code.is_ok());
/// assert!(code.contains(ErrorCode::WRONG_DATA));
/// assert_eq!(code.exit_code(), 17);
/// ```
pub struct ErrorCode(u8);

impl BitAnd for ErrorCode {
	type Output = Self;
	#[inline]
	fn bitand(self, other: Self) -> Self::Output { Self(self.0 & other.0) }
}

impl BitOr for ErrorCode {
	type Output = Self;
	#[inline]
	fn bitor(self, other: Self) -> Self::Output { self.with(other) }
}

impl BitOrAssign for ErrorCode {
	#[inline]
	fn bitor_assign(&mut self, other: Self) { *self = *self | other; }
}

impl Default for ErrorCode {
	#[inline]
	fn default() -> Self { Self::NO_ERR }
}

impl fmt::Display for ErrorCode {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.describe())
	}
}

impl From<ErrorCode> for i32 {
	#[inline]
	fn from(src: ErrorCode) -> Self { src.exit_code() }
}

impl From<ErrorCode> for u8 {
	#[inline]
	fn from(src: ErrorCode) -> Self { src.0 }
}

impl ErrorCode {
	/// # No Error.
	pub const NO_ERR: Self =              Self(0b0000_0001);

	/// # Unknown Input.
	pub const UNKNOWN_INPUT: Self =       Self(0b0000_0010);

	/// # Invalid Input.
	pub const INVALID_INPUT: Self =       Self(0b0000_0100);

	/// # Required Argument Not Found.
	pub const REQ_ARG_NOT_FOUND: Self =   Self(0b0000_1000);

	/// # Wrong Data(type).
	pub const WRONG_DATA: Self =          Self(0b0001_0000);

	/// # Help Wildcard.
	///
	/// Help was requested.
	pub const HELP_WILDCARD: Self =       Self(0b0010_0000);

	/// # Not Found.
	///
	/// An optional argument did not match.
	pub const NOT_FOUND: Self =           Self(0b0100_0000);

	/// # Required Parameter Not Found.
	pub const REQ_PARAM_NOT_FOUND: Self = Self(0b1000_0000);

	#[must_use]
	#[inline]
	/// # From `u8`.
	pub const fn from_u8(num: u8) -> Self { Self(num) }

	#[must_use]
	#[inline]
	/// # As `u8`.
	pub const fn as_u8(self) -> u8 { self.0 }

	#[must_use]
	#[inline]
	/// # Exit Code.
	///
	/// Return the raw mask as a process exit code. Remember that `1` means
	/// success here!
	pub const fn exit_code(self) -> i32 { self.0 as i32 }

	#[must_use]
	#[inline]
	/// # Contains Flag?
	///
	/// Returns `true` if all of `other`'s bits are set in `self`.
	pub const fn contains(self, other: Self) -> bool {
		other.0 != 0 && other.0 == self.0 & other.0
	}

	#[must_use]
	#[inline]
	/// # Contains Any Part of Flag?
	pub const fn intersects(self, other: Self) -> bool { 0 != self.0 & other.0 }

	#[must_use]
	#[inline]
	/// # With Flag Bits.
	///
	/// This is equivalent to `self | other`, but constant.
	pub const fn with(self, other: Self) -> Self { Self(self.0 | other.0) }

	#[must_use]
	#[inline]
	/// # Without Flag Bits.
	pub const fn without(self, other: Self) -> Self { Self(self.0 & ! other.0) }

	#[must_use]
	#[inline]
	/// # Is Ok?
	///
	/// Returns `true` if the code is exactly [`ErrorCode::NO_ERR`].
	pub const fn is_ok(self) -> bool { self.0 == Self::NO_ERR.0 }

	#[must_use]
	#[inline]
	/// # Wants Help?
	pub const fn wants_help(self) -> bool { self.intersects(Self::HELP_WILDCARD) }

	#[must_use]
	/// # Describe.
	///
	/// Return a human-readable summary of the most important problem
	/// recorded by the code. Help requests take priority (and get their own
	/// prefix); after that, invalid input, then missing required arguments,
	/// wrong data, and finally missing required parameters.
	///
	/// ## Examples
	///
	/// ```
	/// use argtree::ErrorCode;
	///
	/// assert_eq!(ErrorCode::NO_ERR.describe(), "No Error.");
	/// assert_eq!(
	///     (ErrorCode::NO_ERR | ErrorCode::REQ_ARG_NOT_FOUND).describe(),
	///     "Required Argument could not be found.",
	/// );
	/// ```
	pub const fn describe(self) -> &'static str {
		if self.wants_help() {
			let rest = self.without(Self::HELP_WILDCARD.with(Self::NO_ERR));
			if rest.0 == 0 { return "<Help - Wildcard> No Error."; }
			if self.intersects(Self::INVALID_INPUT) {
				return "<Help - Wildcard> Invalid Input.";
			}
			if self.intersects(Self::REQ_ARG_NOT_FOUND) {
				return "<Help - Wildcard> Required Argument could not be found.";
			}
			if self.intersects(Self::WRONG_DATA) {
				return "<Help - Wildcard> The input data(type) is incorrect.";
			}
			if self.intersects(Self::REQ_PARAM_NOT_FOUND) {
				return "<Help - Wildcard> Required Parameter could not be found.";
			}
		}

		if self.without(Self::NO_ERR).0 == 0 { "No Error." }
		else if self.intersects(Self::INVALID_INPUT) { "Invalid Input." }
		else if self.intersects(Self::REQ_ARG_NOT_FOUND) {
			"Required Argument could not be found."
		}
		else if self.intersects(Self::WRONG_DATA) { "The input data(type) is incorrect." }
		else if self.intersects(Self::REQ_PARAM_NOT_FOUND) {
			"Required Parameter could not be found."
		}
		else if self.intersects(Self::UNKNOWN_INPUT) { "Unknown Input." }
		else {
			"No error description found; try again with --verboseCLI for more information."
		}
	}
}
