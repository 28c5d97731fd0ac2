/*!
# Argtree: Token Utilities.
*/



#[must_use]
/// # Flag Match?
///
/// Returns `true` if `token` is exactly `prefix` followed by `flag`, without
/// allocating the combined string.
///
/// Empty flags never match; an argument declared without a short flag
/// should not swallow a bare `-`.
pub(crate) fn matches_flag(token: &str, prefix: &str, flag: &str) -> bool {
	! flag.is_empty() &&
	token.len() == prefix.len() + flag.len() &&
	token.strip_prefix(prefix).map_or(false, |rest| rest == flag)
}

#[must_use]
#[inline]
/// # Dash-Prefixed?
///
/// Parameters can never begin with a dash (or two); such tokens belong to
/// some other option.
pub(crate) fn is_dashed(token: &str) -> bool { token.starts_with('-') }

#[must_use]
/// # Integer Literal?
///
/// Returns `true` if the entire token is a (signed) integer literal, with
/// the base auto-detected from its prefix:
/// * `0x`/`0X` for hexadecimal;
/// * a leading `0` for octal;
/// * decimal otherwise;
///
/// Leading whitespace is ignored; trailing garbage of any kind is not.
/// Values are only checked for shape, not range.
pub(crate) fn is_int_literal(token: &str) -> bool {
	let src = token.trim_start();
	let src = src.strip_prefix(['+', '-']).unwrap_or(src);

	let (digits, radix) =
		if let Some(rest) = src.strip_prefix("0x").or_else(|| src.strip_prefix("0X")) {
			(rest, 16)
		}
		else if 1 < src.len() && src.starts_with('0') { (&src[1..], 8) }
		else { (src, 10) };

	! digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_matches_flag() {
		assert!(matches_flag("--help", "--", "help"));
		assert!(matches_flag("-h", "-", "h"));
		assert!(matches_flag("run", "", "run"));

		// Exact length only; no prefix or partial matches.
		assert!(! matches_flag("--helpme", "--", "help"));
		assert!(! matches_flag("--hel", "--", "help"));
		assert!(! matches_flag("-help", "--", "help"));
		assert!(! matches_flag("-hv", "-", "h"));

		// Empty flags never match.
		assert!(! matches_flag("-", "-", ""));
		assert!(! matches_flag("", "", ""));
	}

	#[test]
	fn t_is_dashed() {
		assert!(is_dashed("-"));
		assert!(is_dashed("-x"));
		assert!(is_dashed("--other"));
		assert!(! is_dashed(""));
		assert!(! is_dashed("value"));
		assert!(! is_dashed("a-b"));
	}

	#[test]
	fn t_is_int_literal() {
		for good in [
			"0", "42", "-42", "+42", "  7", "0x1f", "0XFF", "-0x10", "017", "00",
		] {
			assert!(is_int_literal(good), "Bug: {good:?} should be an integer.");
		}

		for bad in [
			"", " ", "-", "+", "42x", "4 2", "42 ", "0x", "08", "0xg", "1.5", "x42", "--1",
		] {
			assert!(! is_int_literal(bad), "Bug: {bad:?} should not be an integer.");
		}
	}
}
