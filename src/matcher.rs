/*!
# Argtree: Matcher.

This is the recursive engine that walks raw tokens against an
[`ArgumentTree`], filling in an [`Options`] result tree as it goes.
*/

use crate::{
	ArgumentTree,
	ErrorCode,
	Kind,
	NodeId,
	Options,
	Verbosity,
};



#[derive(Debug, Clone, Copy)]
/// # Token Window.
///
/// This is the slice of the argument vector a given node gets to look at:
/// an "owner" token (conventionally the program path) followed by the
/// tokens up for matching.
pub(crate) struct Window<'a> {
	/// # Owner Token.
	owner: &'a str,

	/// # Tokens to Match.
	tokens: &'a [String],
}

impl<'a> Window<'a> {
	/// # From Full Argument Vector.
	///
	/// The first entry is the owner; the rest are up for grabs.
	pub(crate) fn new(argv: &'a [String]) -> Self {
		match argv {
			[owner, tokens @ ..] => Self { owner: owner.as_str(), tokens },
			[] => Self { owner: "", tokens: &[] },
		}
	}

	/// # Owner.
	pub(crate) const fn owner(&self) -> &'a str { self.owner }

	/// # Sub-Window.
	///
	/// Return the window for the tokens following `idx`, keeping the same
	/// owner.
	fn after(self, idx: usize) -> Self {
		Self {
			owner: self.owner,
			tokens: self.tokens.get(idx + 1..).unwrap_or(&[]),
		}
	}
}



#[derive(Debug, Clone, Copy)]
/// # Matcher.
pub(crate) struct Matcher<'a> {
	/// # Argument Tree.
	tree: &'a ArgumentTree,

	/// # Verbosity.
	verbosity: Verbosity,
}

impl<'a> Matcher<'a> {
	/// # New.
	pub(crate) const fn new(tree: &'a ArgumentTree, verbosity: Verbosity) -> Self {
		Self { tree, verbosity }
	}

	/// # Match Node.
	///
	/// Scan `window` for the argument at `id`, attaching results to `into`
	/// and returning the combined problem bits for the branch.
	///
	/// The first token satisfying the argument wins. If the argument has
	/// children, each of them is then matched against the tokens following
	/// it, with their results nested under the argument's own entry.
	pub(crate) fn run(&self, id: NodeId, window: Window<'_>, into: &mut Options)
	-> ErrorCode {
		let node = &self.tree[id];
		let arg = node.argument();

		// Nothing to look at.
		if window.tokens.is_empty() {
			return
				if arg.is_required() { ErrorCode::NO_ERR | ErrorCode::REQ_ARG_NOT_FOUND }
				else { ErrorCode::NO_ERR };
		}

		let last = window.tokens.len() - 1;
		let mut miss = ErrorCode::NO_ERR;
		for (idx, token) in window.tokens.iter().enumerate() {
			let code = arg.parse_token(token);
			if ! code.is_ok() {
				miss = code;
				continue;
			}

			if self.verbosity >= Verbosity::Full {
				tracing::debug!(path = %self.tree.path(id), token = %token, "Matched argument.");
			}

			let slot = into.attach(arg, token);

			// There's no room for children.
			if idx == last { return ErrorCode::NO_ERR | self.missing_children(id); }

			// A flag without children is satisfied by its own presence.
			if node.children().is_empty() { return ErrorCode::NO_ERR; }

			// Otherwise the children need to be happy too.
			let sub = window.after(idx);
			let mut merged = ErrorCode::NO_ERR;
			for child in node.children().iter().copied() {
				merged |= self.run(child, sub, slot);

				// A required child of an optional parent is only truly
				// required if the parent was invoked.
				if
					merged.contains(ErrorCode::REQ_ARG_NOT_FOUND) &&
					! arg.is_required() &&
					self.tree[child].argument().is_required()
				{
					merged = merged.without(ErrorCode::REQ_ARG_NOT_FOUND);
				}
			}

			return merged;
		}

		// No match. An optional argument that simply isn't there is fine,
		// and so is its absence taking required children with it.
		let missing =
			if arg.is_required() { self.missing_children(id) }
			else { self.missing_children(id).without(ErrorCode::REQ_ARG_NOT_FOUND) };

		ErrorCode::NO_ERR | miss.without(ErrorCode::NOT_FOUND) | missing
	}

	/// # Missing Required Children.
	///
	/// Return the bits for the required children of `id`, assuming none of
	/// them could be matched.
	///
	/// Missing parameters are only a problem when their parent is itself a
	/// required option, wildcard, or method; anything else missing is a
	/// missing required argument.
	fn missing_children(&self, id: NodeId) -> ErrorCode {
		let node = &self.tree[id];
		let arg = node.argument();
		let strict =
			arg.is_required() &&
			arg.kind().intersects(Kind::OPTION | Kind::WILDCARD | Kind::METHOD);

		node.children().iter()
			.map(|c| self.tree[*c].argument())
			.filter(|c| c.is_required())
			.fold(ErrorCode::NO_ERR, |acc, child|
				if ! child.kind().contains(Kind::PARAM) { acc | ErrorCode::REQ_ARG_NOT_FOUND }
				else if strict { acc | ErrorCode::REQ_PARAM_NOT_FOUND }
				else { acc }
			)
	}
}
