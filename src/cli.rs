/*!
# Argtree: Command Line.
*/

use crate::{
	Argument,
	ArgumentTree,
	ErrorCode,
	FullUsage,
	NodeId,
	Options,
	Usage,
	matcher::{
		Matcher,
		Window,
	},
};
use std::io::{
	self,
	Write,
};



/// # Help Switches.
const HELP: [&str; 2] = ["-h", "--help"];

/// # Verbosity Switches.
const VERBOSE: [&str; 2] = ["-vCLI", "--verboseCLI"];



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Verbosity.
///
/// This controls how much diagnostic information is emitted (via
/// [`tracing`]) while parsing. Nothing is emitted unless a subscriber has
/// been installed by the application.
pub enum Verbosity {
	#[default]
	/// # Quiet.
	Off,

	/// # Start/Finish Notices.
	Simple,

	/// # Everything.
	///
	/// This adds registration, per-branch, and per-match events.
	Full,
}



#[derive(Debug, Clone, Copy, Default)]
/// # Usage Report.
///
/// What, if anything, should be printed after a parse.
struct Report {
	/// # Full Usage.
	help: bool,

	/// # Short Usage (Count).
	short: u8,
}



#[derive(Debug, Clone, Default)]
/// # Command Line.
///
/// This is the main entry point: register the expected arguments with
/// [`CommandLine::add_argument`], then feed the raw argument vector to
/// [`CommandLine::parse`] and query the results via
/// [`CommandLine::parsed_args`].
///
/// Parsing never fails outright. Instead, an [`ErrorCode`] bitmask is
/// returned describing every problem encountered. Note that success is
/// [`ErrorCode::NO_ERR`], which has a value of `1`, not zero.
///
/// Two switches are handled globally, regardless of what has been
/// registered:
///
/// | Switch | Effect |
/// | ------ | ------ |
/// | `-h`, `--help` | Print the full usage and set [`ErrorCode::HELP_WILDCARD`]. |
/// | `-vCLI`, `--verboseCLI` | Escalate to [`Verbosity::Full`]. |
///
/// ## Examples
///
/// ```
/// use argtree::{Argument, CommandLine, DataType, ErrorCode, Kind};
///
/// let mut cli = CommandLine::new();
/// cli.add_argument(
///     Argument::new(Kind::OPTION, "r", "reference", false, "A number.")
///         .unwrap()
///         .with_child(Argument::new_parameter("number", DataType::Int))
/// );
/// cli.add_argument(
///     Argument::new(Kind::OPTION, "q", "question", false, "A question.")
///         .unwrap()
///         .with_child(Argument::new_parameter("theq", DataType::String))
/// );
///
/// let code = cli.parse(["prog", "--reference", "5", "-q", "why"]);
/// assert_eq!(code, ErrorCode::NO_ERR);
///
/// let opts = cli.parsed_args();
/// assert_eq!(opts.get("reference").get("number").value(), "5");
/// assert_eq!(opts.get("question").get("theq").value(), "why");
/// ```
pub struct CommandLine {
	/// # Registered Arguments.
	tree: ArgumentTree,

	/// # Verbosity.
	verbosity: Verbosity,

	/// # Results From the Last Parse.
	options: Options,
}

/// ## Setup.
impl CommandLine {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Verbosity.
	pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
		self.verbosity = verbosity;
		self
	}

	/// # Add Argument.
	///
	/// Register a top-level argument, along with any children it holds,
	/// returning its ID within the [`ArgumentTree`].
	pub fn add_argument(&mut self, arg: Argument) -> NodeId {
		let id = self.tree.add_argument(arg);
		if self.verbosity >= Verbosity::Full {
			tracing::debug!(
				path = %self.tree.path(id),
				kind = %self.tree[id].argument().kind(),
				"Registered argument."
			);
		}
		id
	}
}

/// ## Getters.
impl CommandLine {
	#[must_use]
	#[inline]
	/// # Verbosity.
	///
	/// Note this may have been escalated by a `-vCLI` switch during a
	/// previous parse.
	pub const fn verbosity(&self) -> Verbosity { self.verbosity }

	#[must_use]
	#[inline]
	/// # Argument Tree.
	pub const fn tree(&self) -> &ArgumentTree { &self.tree }

	#[must_use]
	/// # Top-Level Argument.
	///
	/// Return the first top-level argument with the given long flag, if any.
	pub fn argument(&self, long: &str) -> Option<&Argument> {
		self.tree.find(long).map(|id| self.tree[id].argument())
	}

	#[must_use]
	#[inline]
	/// # Parsed Arguments.
	///
	/// Return the result tree from the most recent parse. (Before the first
	/// parse, this is an empty placeholder.)
	pub const fn parsed_args(&self) -> &Options { &self.options }
}

/// ## Parsing.
impl CommandLine {
	/// # Parse.
	///
	/// Parse the argument vector, returning the combined [`ErrorCode`]. As
	/// with [`std::env::args`], the first entry is assumed to be the program
	/// path and is never matched.
	///
	/// If help was requested, the full usage is printed to `STDOUT`. If
	/// anything else went wrong, the short usage is printed instead (once
	/// per category of problem).
	///
	/// Each call replaces the results of the previous one.
	pub fn parse<I, S>(&mut self, argv: I) -> ErrorCode
	where I: IntoIterator<Item=S>, S: Into<String> {
		let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
		let (code, report) = self.evaluate(&argv);

		// Usage is a courtesy; a closed STDOUT doesn't change the outcome.
		let _res = self.write_report(report, &mut io::stdout().lock());
		code
	}

	/// # Parse Environment.
	///
	/// This is a convenience wrapper for [`CommandLine::parse`] that pulls
	/// the arguments from [`std::env::args_os`]. Invalid UTF-8 is replaced
	/// lossily.
	pub fn parse_env(&mut self) -> ErrorCode {
		self.parse(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
	}

	/// # Parse With Writer.
	///
	/// Same as [`CommandLine::parse`], except any usage is written to `out`
	/// instead of `STDOUT`.
	///
	/// ## Errors
	///
	/// This will bubble up any errors encountered while writing to `out`.
	/// The parse itself cannot fail.
	pub fn parse_with<I, S, W>(&mut self, argv: I, out: &mut W) -> io::Result<ErrorCode>
	where I: IntoIterator<Item=S>, S: Into<String>, W: Write {
		let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
		let (code, report) = self.evaluate(&argv);
		self.write_report(report, out)?;
		Ok(code)
	}

	/// # Evaluate.
	///
	/// Do the actual parsing, replacing the stored results and returning the
	/// combined code along with what usage, if any, ought to be printed.
	fn evaluate(&mut self, argv: &[String]) -> (ErrorCode, Report) {
		// The global switches come first.
		let mut report = Report::default();
		for token in argv {
			let token = token.as_str();
			if VERBOSE.contains(&token) { self.verbosity = Verbosity::Full; }
			else if HELP.contains(&token) { report.help = true; }
		}

		let window = Window::new(argv);
		if self.verbosity >= Verbosity::Simple {
			tracing::info!(owner = window.owner(), tokens = argv.len(), "Parsing command line.");
		}

		let mut options = Options::root(self.tree.root().argument().long_flag());
		let matcher = Matcher::new(&self.tree, self.verbosity);
		let mut code = ErrorCode::NO_ERR;
		for id in self.tree.top_level().iter().copied() {
			if self.verbosity >= Verbosity::Full {
				tracing::debug!(path = %self.tree.path(id), "Parsing branch.");
			}

			let mut res = matcher.run(id, window, &mut options);

			// An optional argument can't be missing, but its parameters can.
			if
				! self.tree[id].argument().is_required() &&
				! res.contains(ErrorCode::REQ_PARAM_NOT_FOUND)
			{
				res = res.without(ErrorCode::REQ_ARG_NOT_FOUND);
			}

			code |= res;
		}
		self.options = options;

		if self.verbosity >= Verbosity::Simple {
			tracing::info!(code = code.as_u8(), "Finished parsing: {code}");
		}

		if report.help { code |= ErrorCode::HELP_WILDCARD; }
		else if ! code.is_ok() {
			if code.intersects(ErrorCode::UNKNOWN_INPUT | ErrorCode::INVALID_INPUT) {
				report.short += 1;
			}
			if code.contains(ErrorCode::REQ_ARG_NOT_FOUND) { report.short += 1; }
			if code.contains(ErrorCode::WRONG_DATA) { report.short += 1; }
		}

		(code, report)
	}

	/// # Write Report.
	fn write_report<W: Write>(&self, report: Report, out: &mut W) -> io::Result<()> {
		if report.help { write!(out, "{}", FullUsage(&self.tree))?; }
		for _ in 0..report.short { write!(out, "{}", Usage(&self.tree))?; }
		out.flush()
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		DataType,
		Kind,
	};

	/// # Option With Parameter.
	fn flag(short: &str, long: &str, required: bool, param: (&str, DataType, bool))
	-> Argument {
		Argument::new(Kind::OPTION, short, long, required, "")
			.expect("Argument::new failed.")
			.with_child(Argument::new_parameter(param.0, param.1).with_required(param.2))
	}

	/// # Parse Quietly.
	///
	/// Return the code and whatever usage was printed.
	fn parse(cli: &mut CommandLine, argv: &[&str]) -> (ErrorCode, String) {
		let mut out = Vec::new();
		let code = cli.parse_with(argv.iter().copied(), &mut out)
			.expect("Writing to a Vec failed?!");
		(code, String::from_utf8(out).expect("Usage is not UTF-8."))
	}

	/// # Count Usage Blocks.
	fn usages(out: &str) -> usize { out.matches("USAGE:").count() }

	#[test]
	fn t_round_trip() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("f", "flag", true, ("value", DataType::String, true)));

		let (code, out) = parse(&mut cli, &["prog", "--flag", "value"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert!(out.is_empty(), "Unexpected usage: {out}");

		let opts = cli.parsed_args();
		assert_eq!(opts.key(), "root");
		assert!(opts.get("flag").is_parsed());
		assert_eq!(opts.get("flag").get("value").value(), "value");
	}

	#[test]
	fn t_missing_required() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("f", "flag", true, ("value", DataType::String, true)));

		let (code, out) = parse(&mut cli, &["prog", "--nope"]);
		assert!(code.contains(ErrorCode::REQ_ARG_NOT_FOUND));
		assert!(! code.wants_help());
		assert_eq!(out, Usage(cli.tree()).to_string());
		assert!(! cli.parsed_args().get("flag").is_parsed());
	}

	#[test]
	fn t_dashed_value() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("f", "flag", true, ("value", DataType::String, true)));
		cli.add_argument(flag("o", "other", false, ("value", DataType::String, false)));

		let (code, out) = parse(&mut cli, &["prog", "--flag", "--other"]);
		assert!(code.contains(
			ErrorCode::REQ_PARAM_NOT_FOUND |
			ErrorCode::INVALID_INPUT |
			ErrorCode::WRONG_DATA
		));

		// Invalid input and wrong data each get a usage.
		assert_eq!(usages(&out), 2);

		// The flag matched, but --other is not its value.
		let flag = cli.parsed_args().get("flag");
		assert!(flag.is_parsed());
		assert!(! flag.get("value").is_parsed());
		assert!(cli.parsed_args().get("other").is_parsed());
	}

	#[test]
	fn t_int() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, false)));

		let (code, _) = parse(&mut cli, &["prog", "-r", "42"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert_eq!(cli.parsed_args().get("reference").get("number").value(), "42");

		let (code, out) = parse(&mut cli, &["prog", "-r", "42x"]);
		assert_eq!(code, ErrorCode::NO_ERR | ErrorCode::WRONG_DATA);
		assert_eq!(usages(&out), 1);

		// Required parameters say so.
		let mut cli = CommandLine::new();
		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, true)));
		let (code, _) = parse(&mut cli, &["prog", "-r", "42x"]);
		assert_eq!(
			code,
			ErrorCode::NO_ERR | ErrorCode::WRONG_DATA | ErrorCode::REQ_PARAM_NOT_FOUND,
		);
	}

	#[test]
	fn t_relaxation() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, true)));

		// An optional option is allowed to be missing entirely, even if its
		// parameter is required.
		let (code, out) = parse(&mut cli, &["prog"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert!(out.is_empty());
		let (code, _) = parse(&mut cli, &["prog", "unrelated"]);
		assert_eq!(code, ErrorCode::NO_ERR);

		// The same goes for required options nested beneath it.
		let mut cli = CommandLine::new();
		cli.add_argument(
			Argument::new(Kind::OPTION, "p", "parent", false, "")
				.expect("Argument::new failed.")
				.with_child(
					Argument::new(Kind::OPTION, "c", "child", true, "")
						.expect("Argument::new failed.")
				)
		);
		let (code, _) = parse(&mut cli, &["prog", "unrelated"]);
		assert_eq!(code, ErrorCode::NO_ERR);
	}

	#[test]
	fn t_relaxation_per_branch() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("f", "flag", true, ("value", DataType::String, true)));
		cli.add_argument(flag("o", "other", false, ("value", DataType::String, false)));

		// A happy optional argument can't excuse a missing required one.
		let (code, out) = parse(&mut cli, &["prog", "--other", "x"]);
		assert!(code.contains(ErrorCode::REQ_ARG_NOT_FOUND));
		assert_eq!(
			code,
			ErrorCode::NO_ERR | ErrorCode::REQ_ARG_NOT_FOUND | ErrorCode::REQ_PARAM_NOT_FOUND,
		);
		assert_eq!(usages(&out), 1);
		assert_eq!(cli.parsed_args().get("other").get("value").value(), "x");
	}

	#[test]
	fn t_sentinel() {
		let mut cli = CommandLine::new();

		// Before parsing.
		assert!(! cli.parsed_args().is_parsed());

		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, false)));
		let (code, _) = parse(&mut cli, &["prog"]);
		assert_eq!(code, ErrorCode::NO_ERR);

		let miss = cli.parsed_args().get("nonexistent");
		assert_eq!(miss.key(), "__null__");
		assert_eq!(miss.value(), "__null__");
		assert!(! miss.is_parsed());
		assert!(! miss.get("deeper").is_parsed());
	}

	#[test]
	fn t_multi_flag() {
		let mut cli = CommandLine::new();
		cli.add_argument(
			Argument::new(Kind::WILDCARD | Kind::OPTION, "tt", "testing", false, "Testing.")
				.expect("Argument::new failed.")
				.with_child(Argument::new_parameter("test", DataType::String))
		);
		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, false)));
		cli.add_argument(flag("q", "question", false, ("theq", DataType::String, false)));

		let (code, out) = parse(
			&mut cli,
			&["prog", "--reference", "5", "--question", "hi", "--testing", "yo"],
		);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert!(out.is_empty());

		let opts = cli.parsed_args();
		assert_eq!(opts.len(), 3);
		assert_eq!(opts.get("reference").get("number").value(), "5");
		assert_eq!(opts.get("question").get("theq").value(), "hi");
		assert_eq!(opts.get("testing").get("test").value(), "yo");
		assert_eq!(opts.get("testing").kind(), Kind::WILDCARD | Kind::OPTION);

		// Short flags and a different order.
		let (code, _) = parse(&mut cli, &["prog", "-tt", "yo", "-q", "hi", "-r", "0x10"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert_eq!(cli.parsed_args().get("reference").get("number").value(), "0x10");

		// Results are replaced, not appended.
		let (code, _) = parse(&mut cli, &["prog", "-q", "again"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert_eq!(cli.parsed_args().len(), 1);
		assert_eq!(cli.parsed_args().get("question").get("theq").value(), "again");
	}

	#[test]
	fn t_help() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("f", "flag", true, ("value", DataType::String, true)));

		for argv in [["prog", "--help"], ["prog", "-h"]] {
			let (code, out) = parse(&mut cli, &argv);
			assert!(code.wants_help());

			// The other problems are still reported, but only the full usage
			// is printed.
			assert!(code.contains(ErrorCode::REQ_ARG_NOT_FOUND));
			assert_eq!(out, FullUsage(cli.tree()).to_string());
			assert_eq!(code.describe(), "<Help - Wildcard> Required Argument could not be found.");
		}

		// Help alongside a good parse.
		let (code, _) = parse(&mut cli, &["prog", "-f", "value", "-h"]);
		assert_eq!(code, ErrorCode::NO_ERR | ErrorCode::HELP_WILDCARD);
		assert_eq!(cli.parsed_args().get("flag").get("value").value(), "value");
	}

	#[test]
	fn t_usage_count() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("f", "flag", true, ("number", DataType::Int, true)));
		cli.add_argument(flag("o", "other", true, ("value", DataType::String, false)));

		// Missing argument plus bad data.
		let (code, out) = parse(&mut cli, &["prog", "--flag", "x"]);
		assert_eq!(
			code,
			ErrorCode::NO_ERR |
			ErrorCode::REQ_ARG_NOT_FOUND |
			ErrorCode::WRONG_DATA |
			ErrorCode::REQ_PARAM_NOT_FOUND,
		);
		assert_eq!(usages(&out), 2);
	}

	#[test]
	fn t_verbosity() {
		let mut cli = CommandLine::new();
		assert_eq!(cli.verbosity(), Verbosity::Off);
		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, false)));

		let (code, _) = parse(&mut cli, &["prog", "-vCLI"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert_eq!(cli.verbosity(), Verbosity::Full);

		// It sticks.
		let (code, _) = parse(&mut cli, &["prog", "-r", "1"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert_eq!(cli.verbosity(), Verbosity::Full);

		let mut cli = CommandLine::new().with_verbosity(Verbosity::Simple);
		assert_eq!(cli.verbosity(), Verbosity::Simple);
		let _res = parse(&mut cli, &["prog", "--verboseCLI"]);
		assert_eq!(cli.verbosity(), Verbosity::Full);

		assert!(Verbosity::Off < Verbosity::Simple);
		assert!(Verbosity::Simple < Verbosity::Full);
	}

	#[test]
	fn t_argument() {
		let mut cli = CommandLine::new();
		cli.add_argument(flag("r", "reference", false, ("number", DataType::Int, false)));
		cli.add_argument(
			Argument::new(Kind::METHOD, "b", "build", true, "Build it.")
				.expect("Argument::new failed.")
		);

		let arg = cli.argument("build").expect("Missing build.");
		assert_eq!(arg.kind(), Kind::METHOD);
		assert_eq!(arg.help(), "Build it.");
		assert!(cli.argument("number").is_none());
		assert_eq!(cli.tree().methods(), 1);
		assert_eq!(cli.tree().options(), 1);

		// Methods match bare words.
		let (code, _) = parse(&mut cli, &["prog", "build"]);
		assert_eq!(code, ErrorCode::NO_ERR);
		assert_eq!(cli.parsed_args().get("build").value(), "build");
	}
}
