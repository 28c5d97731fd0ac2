/*!
# Argtree: Argument Kinds.
*/

use std::{
	fmt,
	ops::{
		BitAnd,
		BitOr,
		BitOrAssign,
	},
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Argument Kind.
///
/// This is a small bitflag set describing what an [`Argument`](crate::Argument)
/// is, and by extension, how it is matched against raw tokens:
///
/// * [`Kind::OPTION`] matches `--long` or `-short`;
/// * [`Kind::WILDCARD`] matches the same way, but signals a pipeline-ending action like help;
/// * [`Kind::METHOD`] matches `long` or `short` verbatim;
/// * [`Kind::PARAM`] matches (validated) values;
/// * [`Kind::NULL`] matches nothing; it is reserved for the tree root;
///
/// Only a few combinations make sense. `METHOD`, `PARAM`, and `NULL` must
/// stand alone; `OPTION` and `WILDCARD` may be combined with each other. See
/// [`Kind::is_valid`].
///
/// ## Examples
///
/// ```
/// use argtree::Kind;
///
/// let help = Kind::OPTION | Kind::WILDCARD;
/// assert!(help.is_valid());
/// assert_eq!(help.to_string(), "Option:Wildcard");
///
/// assert!(! (Kind::PARAM | Kind::OPTION).is_valid());
/// ```
pub struct Kind(u8);

impl BitAnd for Kind {
	type Output = Self;
	#[inline]
	fn bitand(self, other: Self) -> Self::Output { Self(self.0 & other.0) }
}

impl BitOr for Kind {
	type Output = Self;
	#[inline]
	fn bitor(self, other: Self) -> Self::Output { self.with(other) }
}

impl BitOrAssign for Kind {
	#[inline]
	fn bitor_assign(&mut self, other: Self) { *self = *self | other; }
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut any = false;
		for (flag, label) in [
			(Self::METHOD, "Method"),
			(Self::OPTION, "Option"),
			(Self::PARAM, "Param"),
			(Self::WILDCARD, "Wildcard"),
			(Self::NULL, "Null"),
		] {
			if self.contains(flag) {
				if any { f.write_str(":")?; }
				f.write_str(label)?;
				any = true;
			}
		}
		Ok(())
	}
}

impl From<Kind> for u8 {
	#[inline]
	fn from(src: Kind) -> Self { src.0 }
}

impl Kind {
	/// # Option.
	pub const OPTION: Self =   Self(0b0000_0001);

	/// # Parameter.
	pub const PARAM: Self =    Self(0b0000_0010);

	/// # Wildcard.
	pub const WILDCARD: Self = Self(0b0000_0100);

	/// # Method.
	pub const METHOD: Self =   Self(0b0000_1000);

	/// # Null.
	pub const NULL: Self =     Self(0b0001_0000);

	/// # All Bits.
	const ALL: u8 =            0b0001_1111;

	#[must_use]
	/// # From `u8`.
	///
	/// Bits outside the defined range are dropped.
	pub const fn from_u8(num: u8) -> Self { Self(num & Self::ALL) }

	#[must_use]
	#[inline]
	/// # As `u8`.
	pub const fn as_u8(self) -> u8 { self.0 }

	#[must_use]
	#[inline]
	/// # Contains Flag?
	///
	/// Returns `true` if `self` is or comprises `other`.
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
	/// # Valid Combination?
	///
	/// Returns `true` if the bits form a combination the parser knows how to
	/// work with:
	/// * `METHOD` on its own;
	/// * `OPTION`, optionally with `WILDCARD`;
	/// * `WILDCARD`, optionally with `OPTION`;
	/// * `PARAM` on its own;
	/// * `NULL` on its own;
	///
	/// Empty sets are not valid.
	pub const fn is_valid(self) -> bool {
		let loners = Self::METHOD.0 | Self::PARAM.0 | Self::NULL.0;
		let pair = Self::OPTION.0 | Self::WILDCARD.0;

		// Nothing at all.
		if self.0 == 0 || self.0 & ! Self::ALL != 0 { false }
		// A loner has to be alone.
		else if self.0 & loners != 0 { self.0.count_ones() == 1 }
		// What's left can only be options and wildcards.
		else { self.0 & ! pair == 0 }
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_is_valid() {
		// Every combination of the five bits, checked against the rules
		// written out longhand.
		for raw in 0..=Kind::ALL {
			let kind = Kind::from_u8(raw);
			let expected = matches!(
				raw,
				0b0000_0001 | // Option.
				0b0000_0100 | // Wildcard.
				0b0000_0101 | // Option + Wildcard.
				0b0000_0010 | // Param.
				0b0000_1000 | // Method.
				0b0001_0000   // Null.
			);
			assert_eq!(kind.is_valid(), expected, "Kind validity mismatch: {raw:08b}");
		}
	}

	#[test]
	fn t_contains() {
		let help = Kind::OPTION | Kind::WILDCARD;
		assert!(help.contains(Kind::OPTION));
		assert!(help.contains(Kind::WILDCARD));
		assert!(help.contains(help));
		assert!(! help.contains(Kind::PARAM));
		assert!(! help.contains(Kind::default()));

		assert!(help.intersects(Kind::OPTION | Kind::METHOD));
		assert!(! help.intersects(Kind::METHOD | Kind::PARAM));
		assert_eq!(help & Kind::OPTION, Kind::OPTION);
	}

	#[test]
	fn t_display() {
		assert_eq!(Kind::OPTION.to_string(), "Option");
		assert_eq!(Kind::PARAM.to_string(), "Param");
		assert_eq!(Kind::NULL.to_string(), "Null");
		assert_eq!((Kind::WILDCARD | Kind::OPTION).to_string(), "Option:Wildcard");
		assert_eq!(Kind::default().to_string(), "");
	}
}
