/*!
# Argtree

Argtree is a declarative CLI argument parser. Rather than looping over the
arguments by hand, you describe what your program expects as a tree of
[`Argument`]s (options, methods, wildcards, and the parameters hanging off
of them), hand the raw argument vector to a [`CommandLine`], and get back a
nested, key-addressable [`Options`] tree with everything that matched.

Parsing never fails outright. Every problem encountered along the way is
recorded in an [`ErrorCode`] bitmask, which is handed back once the pass is
complete. The bitmask doubles as a conventional exit code, with one quirk:
success is [`ErrorCode::NO_ERR`], which is `1`, not zero. Compare against
the constant (or use [`ErrorCode::is_ok`]) rather than zero!

Lookups into the results never fail either. A miss returns a `"__null__"`
placeholder, so check [`Options::is_parsed`] before trusting a value.



## Matching

| Kind | Matches | Example |
| ---- | ------- | ------- |
| [`Kind::OPTION`] | `--long` or `-short`, exactly. | `--reference`, `-r` |
| [`Kind::WILDCARD`] | Same as an option. | `--testing`, `-tt` |
| [`Kind::METHOD`] | `long` or `short`, exactly. | `build`, `b` |
| [`Kind::PARAM`] | Any value valid for its [`DataType`] that doesn't start with a dash. | `5`, `hello` |

Each top-level argument is matched against the entire argument vector, so
they can appear in any order. The first matching token wins, and its
children are then matched against the tokens following it.

Two switches are handled globally: `-h`/`--help` prints the full usage and
sets [`ErrorCode::HELP_WILDCARD`], while `-vCLI`/`--verboseCLI` raises the
[`Verbosity`] of the diagnostic [`tracing`] events.



## Example

```
use argtree::{Argument, CommandLine, DataType, ErrorCode, Kind};

let mut cli = CommandLine::new();

// -r/--reference <int>
cli.add_argument(
    Argument::new(Kind::OPTION, "r", "reference", false, "Pick a number.")
        .unwrap() // Only fails for bad kind combinations.
        .with_child(Argument::new_parameter("number", DataType::Int))
);

// -q/--question <string>
cli.add_argument(
    Argument::new(Kind::OPTION, "q", "question", false, "Ask a question.")
        .unwrap()
        .with_child(Argument::new_parameter("theq", DataType::String))
);

let code = cli.parse(["prog", "--reference", "5", "--question", "hi"]);
assert_eq!(code, ErrorCode::NO_ERR);

let opts = cli.parsed_args();
assert_eq!(opts.get("reference").get("number").value(), "5");
assert_eq!(opts.get("question").get("theq").value(), "hi");

// Not there, but not a problem.
assert!(! opts.get("answer").is_parsed());
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod argument;
mod cli;
mod code;
mod error;
mod kind;
mod matcher;
mod options;
mod tree;
mod usage;
mod utility;

pub use argument::{
	Argument,
	CheckFn,
	DataType,
	MethodFn,
};
pub use cli::{
	CommandLine,
	Verbosity,
};
pub use code::ErrorCode;
pub use error::ArgTreeError;
pub use kind::Kind;
pub use options::Options;
pub use tree::{
	ArgumentTree,
	Node,
	NodeId,
};
pub use usage::{
	FullUsage,
	Usage,
};
