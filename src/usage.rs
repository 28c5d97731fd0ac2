/*!
# Argtree: Usage.

These are the help screens printed by
[`CommandLine::parse`](crate::CommandLine::parse) when something goes
wrong (short) or help is requested (full). They are plain [`Display`](fmt::Display)
wrappers, so can be written anywhere.
*/

use crate::{
	Argument,
	ArgumentTree,
	Kind,
	Node,
};
use std::fmt;



/// # Indentation.
const INDENT: &str = "    ";



#[derive(Debug, Clone, Copy)]
/// # Short Usage.
///
/// A compact summary listing the required top-level arguments followed by
/// the optional ones, along with the names of their sub-arguments. Required
/// sub-arguments are marked with a trailing `!`.
///
/// ## Examples
///
/// ```
/// use argtree::{Argument, ArgumentTree, DataType, Kind, Usage};
///
/// let mut tree = ArgumentTree::new();
/// tree.add_argument(
///     Argument::new(Kind::OPTION, "r", "reference", true, "A number.")
///         .unwrap()
///         .with_child(Argument::new_parameter("number", DataType::Int).with_required(true))
/// );
///
/// assert_eq!(
///     Usage(&tree).to_string(),
///     "USAGE:\nRequired:\n    [reference : number!]\nOptions:\n",
/// );
/// ```
pub struct Usage<'a>(pub &'a ArgumentTree);

impl fmt::Display for Usage<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("USAGE:\nRequired:\n")?;
		for node in required(self.0) { write_short(f, self.0, node)?; }

		f.write_str("Options:\n")?;
		for node in optional(self.0) { write_short(f, self.0, node)?; }

		Ok(())
	}
}



#[derive(Debug, Clone, Copy)]
/// # Full Usage.
///
/// The complete help screen: everything in [`Usage`], plus the verbosity
/// hint, short/long flag columns, sub-argument datatypes, and each
/// argument's help message.
///
/// Required sub-arguments have their datatype marked with a leading `!`.
pub struct FullUsage<'a>(pub &'a ArgumentTree);

impl fmt::Display for FullUsage<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("USAGE:\n")?;
		writeln!(f, "{INDENT}Use '-vCLI | --verboseCLI' for more Debug Information\n")?;

		f.write_str("Required:\n")?;
		for node in required(self.0) {
			write!(f, "{INDENT}[{}", node.argument().long_flag())?;
			write_typed_children(f, self.0, node, " : ")?;
			f.write_str("]\n")?;
		}

		f.write_str("Options:\n")?;
		for node in self.0.top_level().iter().map(|id| &self.0[*id]) {
			write_flags(f, node.argument())?;
			if ! node.children().is_empty() {
				f.write_str(" : [")?;
				write_typed_children(f, self.0, node, "")?;
				f.write_str("]")?;
			}
			writeln!(f, "\n{INDENT}        -> <{}>\n", node.argument().help())?;
		}

		Ok(())
	}
}



/// # Required Top-Level Nodes.
fn required(tree: &ArgumentTree) -> impl Iterator<Item=&Node> {
	tree.top_level().iter()
		.map(|id| &tree[*id])
		.filter(|n| n.argument().is_required())
}

/// # Optional Top-Level Nodes.
fn optional(tree: &ArgumentTree) -> impl Iterator<Item=&Node> {
	tree.top_level().iter()
		.map(|id| &tree[*id])
		.filter(|n| ! n.argument().is_required())
}

/// # Write Short Entry.
///
/// E.g. `[reference : number!]`.
fn write_short(f: &mut fmt::Formatter<'_>, tree: &ArgumentTree, node: &Node)
-> fmt::Result {
	write!(f, "{INDENT}[{}", node.argument().long_flag())?;
	for (idx, child) in node.children().iter().enumerate() {
		let child = tree[*child].argument();
		f.write_str(if idx == 0 { " : " } else { ", " })?;
		f.write_str(child.long_flag())?;
		if child.is_required() { f.write_str("!")?; }
	}
	f.write_str("]\n")
}

/// # Write Flag Columns.
///
/// Options and wildcards get `-short | --long`; methods are written as-is.
fn write_flags(f: &mut fmt::Formatter<'_>, arg: &Argument) -> fmt::Result {
	let short = arg.short_flag();
	if arg.kind().contains(Kind::METHOD) {
		write!(f, "{INDENT} {short:<4} >  {}", arg.long_flag())
	}
	else if short.is_empty() {
		write!(f, "{INDENT}      |  --{}", arg.long_flag())
	}
	else {
		write!(f, "{INDENT}-{short:<4} |  --{}", arg.long_flag())
	}
}

/// # Write Typed Children.
///
/// E.g. `number : <!int> | name : <string>`. Children that aren't
/// parameters show their kind in place of a datatype.
fn write_typed_children(
	f: &mut fmt::Formatter<'_>,
	tree: &ArgumentTree,
	node: &Node,
	lead: &str,
) -> fmt::Result {
	for (idx, child) in node.children().iter().enumerate() {
		let child = tree[*child].argument();
		f.write_str(if idx == 0 { lead } else { " | " })?;
		write!(f, "{} : <", child.long_flag())?;
		if child.is_required() { f.write_str("!")?; }
		match child.datatype() {
			Some(dtype) => write!(f, "{dtype}>")?,
			None => write!(f, "{}>", child.kind())?,
		}
	}
	Ok(())
}
