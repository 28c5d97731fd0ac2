/*!
# Argtree: Arguments.
*/

use crate::{
	ArgTreeError,
	ErrorCode,
	Kind,
	Options,
	utility::{
		is_dashed,
		is_int_literal,
		matches_flag,
	},
};
use std::{
	fmt,
	path::Path,
	str::FromStr,
};



/// # Datatype Check Callback.
///
/// A custom validator for parameter values. It should return
/// [`ErrorCode::NO_ERR`] if the value is acceptable, or the appropriate
/// problem bits if not.
pub type CheckFn = fn(&str) -> ErrorCode;

/// # Method Callback.
///
/// An action associated with an argument, invoked on demand via
/// [`Argument::call`].
pub type MethodFn = fn(&[String], &Options) -> ErrorCode;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Parameter Datatype.
///
/// This determines how a [`Kind::PARAM`] argument validates its value.
pub enum DataType {
	/// # Integer.
	///
	/// The value must be an integer literal in its entirety. Decimal, octal
	/// (`0` prefix), and hexadecimal (`0x` prefix) are all accepted.
	Int,

	/// # String.
	///
	/// Any non-empty value will do.
	String,

	/// # File.
	///
	/// The value must be a path that exists.
	File,

	/// # URL.
	///
	/// The value must begin with `http`.
	Url,

	/// # Custom.
	///
	/// Validation is left to a callback; see [`Argument::with_check`].
	Custom,
}

impl fmt::Display for DataType {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DataType {
	type Err = ArgTreeError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		match src {
			"int" => Ok(Self::Int),
			"string" => Ok(Self::String),
			"file" => Ok(Self::File),
			"url" => Ok(Self::Url),
			"custom" => Ok(Self::Custom),
			_ => Err(ArgTreeError::UnknownDataType),
		}
	}
}

impl DataType {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Int => "int",
			Self::String => "string",
			Self::File => "file",
			Self::Url => "url",
			Self::Custom => "custom",
		}
	}
}



#[derive(Clone)]
/// # Argument.
///
/// This describes a single expected CLI element (option, parameter, method,
/// or wildcard) along with any sub-arguments it takes.
///
/// Arguments are built up builder-style and then handed off to a
/// [`CommandLine`](crate::CommandLine) (or [`ArgumentTree`](crate::ArgumentTree)),
/// which takes ownership of the whole branch.
///
/// ## Examples
///
/// ```
/// use argtree::{Argument, DataType, Kind};
///
/// // An optional -r/--reference option taking an integer.
/// let arg = Argument::new(Kind::OPTION, "r", "reference", false, "A number.")
///     .unwrap()
///     .with_child(Argument::new_parameter("number", DataType::Int));
///
/// assert_eq!(arg.long_flag(), "reference");
/// assert_eq!(arg.kind(), Kind::OPTION);
/// ```
pub struct Argument {
	/// # Kind.
	kind: Kind,

	/// # Short Flag.
	short: String,

	/// # Long Flag.
	///
	/// This doubles as the lookup key for parsed results.
	long: String,

	/// # Required?
	required: bool,

	/// # Help Message.
	help: String,

	/// # Datatype.
	///
	/// This only applies to parameters.
	datatype: Option<DataType>,

	/// # Allowed Values.
	choices: Vec<String>,

	/// # Conflicting Arguments (Long Flags).
	excludes: Vec<String>,

	/// # Sub-Arguments.
	///
	/// These are only held until the argument is added to a tree.
	children: Vec<Self>,

	/// # Method Callback.
	method: Option<MethodFn>,

	/// # Datatype Check Callback.
	check: Option<CheckFn>,
}

impl fmt::Debug for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Argument")
			.field("kind", &self.kind)
			.field("short", &self.short)
			.field("long", &self.long)
			.field("required", &self.required)
			.field("help", &self.help)
			.field("datatype", &self.datatype)
			.field("choices", &self.choices)
			.field("excludes", &self.excludes)
			.field("children", &self.children)
			.field("method", &self.method.is_some())
			.field("check", &self.check.is_some())
			.finish()
	}
}

/// ## Instantiation.
impl Argument {
	/// # New Argument.
	///
	/// Create a new argument of the given kind. The short and long flags
	/// should be given _without_ leading dashes; those are implied by the
	/// kind.
	///
	/// ## Errors
	///
	/// This will return an error if `kind` is not a valid combination. See
	/// [`Kind::is_valid`].
	pub fn new(kind: Kind, short: &str, long: &str, required: bool, help: &str)
	-> Result<Self, ArgTreeError> {
		if kind.is_valid() {
			Ok(Self::new_unchecked(kind, short, long, required, help))
		}
		else { Err(ArgTreeError::InvalidKind(kind)) }
	}

	#[must_use]
	/// # New Parameter.
	///
	/// Create a new, optional, [`Kind::PARAM`] argument called `name`. Its
	/// value will be validated according to `datatype`.
	///
	/// If you have the datatype as a string, parse it first:
	///
	/// ```
	/// use argtree::{Argument, DataType};
	///
	/// let dtype: DataType = "int".parse().unwrap();
	/// let param = Argument::new_parameter("number", dtype);
	/// assert_eq!(param.datatype(), Some(DataType::Int));
	/// ```
	pub fn new_parameter(name: &str, datatype: DataType) -> Self {
		let mut out = Self::new_unchecked(Kind::PARAM, name, name, false, "");
		out.datatype = Some(datatype);
		out
	}

	/// # Tree Root.
	pub(crate) fn root() -> Self {
		Self::new_unchecked(
			Kind::NULL,
			"r",
			"root",
			true,
			"The root argument of the argument tree",
		)
	}

	/// # New (Unchecked).
	fn new_unchecked(kind: Kind, short: &str, long: &str, required: bool, help: &str)
	-> Self {
		Self {
			kind,
			short: short.to_owned(),
			long: long.to_owned(),
			required,
			help: help.to_owned(),
			datatype: None,
			choices: Vec::new(),
			excludes: Vec::new(),
			children: Vec::new(),
			method: None,
			check: None,
		}
	}
}

/// ## Builder Methods.
impl Argument {
	#[must_use]
	/// # With Child.
	///
	/// Add a sub-argument to this argument. This is usually a parameter, but
	/// options can be nested too.
	pub fn with_child(mut self, child: Self) -> Self {
		self.children.push(child);
		self
	}

	#[must_use]
	/// # With Children.
	pub fn with_children<I: IntoIterator<Item=Self>>(mut self, children: I) -> Self {
		self.children.extend(children);
		self
	}

	#[must_use]
	/// # With Required.
	pub fn with_required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	#[must_use]
	/// # With Method Callback.
	///
	/// The callback is only ever invoked via [`Argument::call`]; parsing
	/// does not run it.
	pub fn with_method(mut self, cb: MethodFn) -> Self {
		self.method = Some(cb);
		self
	}

	#[must_use]
	/// # With Datatype Check Callback.
	///
	/// Once set, the callback takes over value validation entirely,
	/// regardless of the declared [`DataType`]. (Values beginning with a
	/// dash are still rejected before it is consulted.)
	pub fn with_check(mut self, cb: CheckFn) -> Self {
		self.check = Some(cb);
		self
	}

	#[must_use]
	/// # With Choices.
	///
	/// Restrict a parameter to an enumerated set of values. Values that
	/// pass datatype validation but are not in the set are rejected as
	/// wrong data.
	pub fn with_choices<'a, I: IntoIterator<Item=&'a str>>(mut self, choices: I) -> Self {
		self.choices.extend(choices.into_iter().map(str::to_owned));
		self
	}

	#[must_use]
	/// # With Excludes.
	///
	/// Record the long flags of arguments that conflict with this one.
	///
	/// Note: exclusions are informational only. The parser does not enforce
	/// them.
	pub fn with_excludes<'a, I: IntoIterator<Item=&'a str>>(mut self, excludes: I) -> Self {
		self.excludes.extend(excludes.into_iter().map(str::to_owned));
		self
	}

	/// # Take Children.
	pub(crate) fn take_children(&mut self) -> Vec<Self> {
		std::mem::take(&mut self.children)
	}
}

/// ## Getters.
impl Argument {
	#[must_use]
	#[inline]
	/// # Kind.
	pub const fn kind(&self) -> Kind { self.kind }

	#[must_use]
	#[inline]
	/// # Short Flag.
	pub fn short_flag(&self) -> &str { &self.short }

	#[must_use]
	#[inline]
	/// # Long Flag.
	pub fn long_flag(&self) -> &str { &self.long }

	#[must_use]
	#[inline]
	/// # Required?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	#[inline]
	/// # Help Message.
	pub fn help(&self) -> &str { &self.help }

	#[must_use]
	#[inline]
	/// # Datatype.
	pub const fn datatype(&self) -> Option<DataType> { self.datatype }

	#[must_use]
	#[inline]
	/// # Choices.
	pub fn choices(&self) -> &[String] { &self.choices }

	#[must_use]
	#[inline]
	/// # Excludes.
	pub fn excludes(&self) -> &[String] { &self.excludes }
}

/// ## Evaluation.
impl Argument {
	/// # Call Method.
	///
	/// Run the method callback, if any, returning its code. Arguments
	/// without a method callback simply return [`ErrorCode::NO_ERR`].
	pub fn call(&self, argv: &[String], options: &Options) -> ErrorCode {
		self.method.map_or(ErrorCode::NO_ERR, |cb| cb(argv, options))
	}

	#[must_use]
	/// # Parse Token.
	///
	/// Check whether a single raw token satisfies this argument, returning
	/// [`ErrorCode::NO_ERR`] if it does.
	///
	/// * Options and wildcards match `--long` or `-short` exactly.
	/// * Methods match `long` or `short` exactly.
	/// * Parameters match any value passing their datatype validation, so
	///   long as it doesn't start with a dash.
	///
	/// Non-matches return the appropriate problem bits. For anything other
	/// than a parameter, that is [`ErrorCode::REQ_ARG_NOT_FOUND`] if the
	/// argument is required, or [`ErrorCode::NOT_FOUND`] if not.
	///
	/// ## Examples
	///
	/// ```
	/// use argtree::{Argument, DataType, ErrorCode, Kind};
	///
	/// let opt = Argument::new(Kind::OPTION, "q", "question", false, "")
	///     .unwrap();
	/// assert_eq!(opt.parse_token("--question"), ErrorCode::NO_ERR);
	/// assert_eq!(opt.parse_token("-q"), ErrorCode::NO_ERR);
	/// assert_eq!(opt.parse_token("question"), ErrorCode::NOT_FOUND);
	///
	/// let param = Argument::new_parameter("number", DataType::Int);
	/// assert_eq!(param.parse_token("42"), ErrorCode::NO_ERR);
	/// assert_eq!(param.parse_token("42x"), ErrorCode::WRONG_DATA);
	/// ```
	pub fn parse_token(&self, token: &str) -> ErrorCode {
		if self.kind.intersects(Kind::OPTION | Kind::WILDCARD) {
			if matches_flag(token, "--", &self.long) || matches_flag(token, "-", &self.short) {
				return ErrorCode::NO_ERR;
			}
		}
		else if self.kind.contains(Kind::METHOD) {
			if matches_flag(token, "", &self.long) || matches_flag(token, "", &self.short) {
				return ErrorCode::NO_ERR;
			}
		}
		else if self.kind.contains(Kind::PARAM) { return self.parse_value(token); }

		self.not_found()
	}

	/// # Parse Value.
	///
	/// The parameter half of [`Argument::parse_token`].
	fn parse_value(&self, token: &str) -> ErrorCode {
		// This is probably another option rather than a value.
		if is_dashed(token) {
			return ErrorCode::REQ_PARAM_NOT_FOUND |
				ErrorCode::INVALID_INPUT |
				ErrorCode::WRONG_DATA;
		}

		let code =
			if let Some(cb) = self.check { cb(token) }
			else {
				match self.datatype {
					Some(DataType::Int) =>
						if is_int_literal(token) { ErrorCode::NO_ERR }
						else { self.wrong_data() },
					Some(DataType::String) =>
						if token.is_empty() { ErrorCode::WRONG_DATA }
						else { ErrorCode::NO_ERR },
					Some(DataType::File) =>
						if Path::new(token).exists() { ErrorCode::NO_ERR }
						else { ErrorCode::WRONG_DATA },
					Some(DataType::Url) =>
						if token.starts_with("http") { ErrorCode::NO_ERR }
						else { ErrorCode::WRONG_DATA },
					Some(DataType::Custom) => ErrorCode::NO_ERR,
					None => return self.not_found(),
				}
			};

		if
			code.is_ok() &&
			! self.choices.is_empty() &&
			! self.choices.iter().any(|c| c == token)
		{
			return self.wrong_data();
		}

		code
	}

	/// # Not Found Code.
	const fn not_found(&self) -> ErrorCode {
		if self.required { ErrorCode::REQ_ARG_NOT_FOUND }
		else { ErrorCode::NOT_FOUND }
	}

	/// # Wrong Data Code.
	const fn wrong_data(&self) -> ErrorCode {
		if self.required { ErrorCode::WRONG_DATA.with(ErrorCode::REQ_PARAM_NOT_FOUND) }
		else { ErrorCode::WRONG_DATA }
	}
}
