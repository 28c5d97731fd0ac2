/*!
# Argtree: Parsed Options.
*/

use crate::{
	Argument,
	Kind,
};
use std::{
	borrow::Cow,
	fmt,
};



/// # Null Key/Value.
const NULL: &str = "__null__";

/// # Null Options.
///
/// This is what [`Options::get`] returns when nothing matches.
static NULL_OPTIONS: Options = Options::null();



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parsed Options.
///
/// This is the result tree produced by [`CommandLine::parse`](crate::CommandLine::parse).
/// Each node corresponds to a matched [`Argument`], keyed by its long flag
/// and holding the literal token it matched, with children nested beneath
/// it the same way they were declared.
///
/// Lookups via [`Options::get`] never fail. If nothing matches, a
/// placeholder is returned with a key and value of `"__null__"` and a
/// parsed state of `false`. Check [`Options::is_parsed`] before trusting the
/// value!
///
/// ## Examples
///
/// ```
/// use argtree::{Argument, CommandLine, DataType, Kind};
///
/// let mut cli = CommandLine::new();
/// cli.add_argument(
///     Argument::new(Kind::OPTION, "q", "question", false, "")
///         .unwrap()
///         .with_child(Argument::new_parameter("theq", DataType::String))
/// );
///
/// let code = cli.parse(["prog", "--question", "hi"]);
/// assert!(code.is_ok());
///
/// let opts = cli.parsed_args();
/// assert_eq!(opts.get("question").get("theq").value(), "hi");
///
/// // Misses are not fatal.
/// let nope = opts.get("answer");
/// assert!(! nope.is_parsed());
/// assert_eq!(nope.key(), "__null__");
/// ```
pub struct Options {
	/// # Key.
	key: Cow<'static, str>,

	/// # Value.
	value: Cow<'static, str>,

	/// # Kind.
	kind: Kind,

	/// # Parsed?
	parsed: bool,

	/// # Children.
	children: Vec<Self>,
}

impl Default for Options {
	#[inline]
	fn default() -> Self { Self::null() }
}

impl fmt::Display for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_node(f, 0)
	}
}

impl Options {
	#[must_use]
	/// # Null.
	const fn null() -> Self {
		Self {
			key: Cow::Borrowed(NULL),
			value: Cow::Borrowed(NULL),
			kind: Kind::NULL,
			parsed: false,
			children: Vec::new(),
		}
	}

	#[must_use]
	/// # New Root.
	///
	/// Return an empty, parsed root keyed to `key`.
	pub(crate) fn root(key: &str) -> Self {
		Self {
			key: Cow::Owned(key.to_owned()),
			parsed: true,
			..Self::null()
		}
	}

	/// # Attach.
	///
	/// Append a new entry for `arg` holding `token` and return the _first_
	/// child sharing its key, which is where sub-arguments get attached.
	/// (Ordinarily that is the new entry, but duplicates are allowed.)
	pub(crate) fn attach(&mut self, arg: &Argument, token: &str) -> &mut Self {
		self.children.push(Self {
			key: Cow::Owned(arg.long_flag().to_owned()),
			value: Cow::Owned(token.to_owned()),
			kind: arg.kind(),
			parsed: true,
			children: Vec::new(),
		});

		let idx = self.children.iter()
			.position(|o| o.key == arg.long_flag())
			.unwrap_or(self.children.len() - 1);
		&mut self.children[idx]
	}
}

impl Options {
	#[must_use]
	/// # Get.
	///
	/// Return the first child with the given key, or a `"__null__"`
	/// placeholder if there isn't one.
	pub fn get(&self, key: &str) -> &Self {
		self.children.iter()
			.find(|o| o.key == key)
			.unwrap_or(&NULL_OPTIONS)
	}

	#[must_use]
	#[inline]
	/// # Key.
	pub fn key(&self) -> &str { &self.key }

	#[must_use]
	#[inline]
	/// # Value.
	///
	/// This is the literal token matched for the entry.
	pub fn value(&self) -> &str { &self.value }

	#[must_use]
	#[inline]
	/// # Kind.
	pub const fn kind(&self) -> Kind { self.kind }

	#[must_use]
	#[inline]
	/// # Parsed?
	pub const fn is_parsed(&self) -> bool { self.parsed }

	#[must_use]
	#[inline]
	/// # Children.
	pub fn children(&self) -> &[Self] { &self.children }

	#[must_use]
	#[inline]
	/// # Number of Children.
	pub fn len(&self) -> usize { self.children.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.children.is_empty() }

	/// # Write Node.
	fn write_node(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
		write!(f, "{:indent$}-> <{}>", "", self.key, indent=depth * 2)?;
		if self.value != NULL { write!(f, " {}", self.value)?; }
		f.write_str("\n")?;

		for child in &self.children { child.write_node(f, depth + 1)?; }
		Ok(())
	}
}
