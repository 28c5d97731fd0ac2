/*!
# Argtree: Argument Tree.
*/

use crate::{
	Argument,
	Kind,
};
use std::{
	fmt,
	ops::Index,
};



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Node ID.
///
/// This is an index into an [`ArgumentTree`]. IDs are only ever handed out
/// by the tree itself.
pub struct NodeId(usize);

impl NodeId {
	#[must_use]
	#[inline]
	/// # As `usize`.
	pub const fn get(self) -> usize { self.0 }
}



#[derive(Debug, Clone)]
/// # Tree Node.
///
/// An [`Argument`] as it lives in an [`ArgumentTree`], along with the IDs of
/// its parent and children.
pub struct Node {
	/// # Argument.
	argument: Argument,

	/// # Parent.
	///
	/// This is only `None` for the root.
	parent: Option<NodeId>,

	/// # Children.
	children: Vec<NodeId>,
}

impl Node {
	#[must_use]
	#[inline]
	/// # Argument.
	pub const fn argument(&self) -> &Argument { &self.argument }

	#[must_use]
	#[inline]
	/// # Parent ID.
	pub const fn parent(&self) -> Option<NodeId> { self.parent }

	#[must_use]
	#[inline]
	/// # Child IDs.
	pub fn children(&self) -> &[NodeId] { &self.children }
}



#[derive(Debug, Clone)]
/// # Argument Tree.
///
/// This holds every registered [`Argument`] in a flat arena, addressed by
/// [`NodeId`]. The first entry is always a synthetic, required root node
/// (called `"root"`) whose children are the top-level CLI arguments.
///
/// Nodes are never removed, and duplicate flags are not checked for; when
/// looking things up by flag, the first match wins.
///
/// ## Examples
///
/// ```
/// use argtree::{Argument, ArgumentTree, DataType, Kind};
///
/// let mut tree = ArgumentTree::new();
/// let id = tree.add_argument(
///     Argument::new(Kind::OPTION, "r", "reference", false, "")
///         .unwrap()
///         .with_child(Argument::new_parameter("number", DataType::Int))
/// );
///
/// assert_eq!(tree.options(), 1);
/// assert_eq!(tree.find("reference"), Some(id));
/// assert_eq!(tree.len(), 3); // Root, option, parameter.
/// ```
pub struct ArgumentTree {
	/// # Nodes.
	nodes: Vec<Node>,

	/// # Method Count.
	methods: usize,

	/// # Option Count.
	options: usize,
}

impl Default for ArgumentTree {
	fn default() -> Self { Self::new() }
}

impl fmt::Display for ArgumentTree {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_node(f, Self::ROOT, 0)
	}
}

impl Index<NodeId> for ArgumentTree {
	type Output = Node;

	#[inline]
	fn index(&self, id: NodeId) -> &Self::Output { &self.nodes[id.0] }
}

impl ArgumentTree {
	/// # Root ID.
	pub const ROOT: NodeId = NodeId(0);

	#[must_use]
	/// # New.
	pub fn new() -> Self {
		Self {
			nodes: vec![Node {
				argument: Argument::root(),
				parent: None,
				children: Vec::new(),
			}],
			methods: 0,
			options: 0,
		}
	}

	/// # Add Argument.
	///
	/// Add a top-level argument (and any children it holds) to the tree,
	/// returning its ID.
	pub fn add_argument(&mut self, arg: Argument) -> NodeId {
		let kind = arg.kind();
		if kind.contains(Kind::METHOD) { self.methods += 1; }
		if kind.contains(Kind::OPTION) { self.options += 1; }
		self.insert(Self::ROOT, arg)
	}

	/// # Insert.
	///
	/// Move `arg` into the arena under `parent`, then do the same for each
	/// of its children (recursively).
	fn insert(&mut self, parent: NodeId, mut arg: Argument) -> NodeId {
		let children = arg.take_children();
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node {
			argument: arg,
			parent: Some(parent),
			children: Vec::with_capacity(children.len()),
		});
		self.nodes[parent.0].children.push(id);

		for child in children { self.insert(id, child); }
		id
	}
}

impl ArgumentTree {
	#[must_use]
	#[inline]
	/// # Root Node.
	pub fn root(&self) -> &Node { &self.nodes[0] }

	#[must_use]
	#[inline]
	/// # Get Node.
	pub fn get(&self, id: NodeId) -> Option<&Node> { self.nodes.get(id.0) }

	#[must_use]
	#[inline]
	/// # Top-Level Argument IDs.
	pub fn top_level(&self) -> &[NodeId] { &self.root().children }

	#[must_use]
	#[inline]
	/// # Number of Nodes.
	///
	/// This includes the root.
	pub fn len(&self) -> usize { self.nodes.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	///
	/// Returns `true` if no arguments have been added yet.
	pub fn is_empty(&self) -> bool { self.nodes.len() == 1 }

	#[must_use]
	#[inline]
	/// # Method Count.
	///
	/// The number of top-level arguments registered as methods.
	pub const fn methods(&self) -> usize { self.methods }

	#[must_use]
	#[inline]
	/// # Option Count.
	///
	/// The number of top-level arguments registered as options.
	pub const fn options(&self) -> usize { self.options }

	#[must_use]
	/// # Find Top-Level Argument.
	///
	/// Return the ID of the first top-level argument with the given long
	/// flag, if any.
	pub fn find(&self, long: &str) -> Option<NodeId> {
		self.top_level().iter()
			.copied()
			.find(|id| self[*id].argument.long_flag() == long)
	}

	#[must_use]
	/// # Path.
	///
	/// Return the long flags leading from the root to `id`, joined with
	/// `" > "`, e.g. `"root > reference > number"`. This is used for
	/// diagnostics.
	pub fn path(&self, id: NodeId) -> String {
		let mut parts = Vec::new();
		let mut next = self.get(id);
		while let Some(node) = next {
			parts.push(node.argument.long_flag());
			next = node.parent.and_then(|p| self.get(p));
		}

		parts.reverse();
		parts.join(" > ")
	}

	/// # Write Node.
	fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize)
	-> fmt::Result {
		let node = &self[id];
		let arg = &node.argument;

		write!(
			f,
			"{:indent$}<Arg: {} | Type:{}",
			"",
			arg.long_flag(),
			arg.kind(),
			indent=depth * 3,
		)?;
		if let Some(dtype) = arg.datatype() { write!(f, " | dtype: {dtype}")?; }
		f.write_str(">\n")?;

		for child in &node.children { self.write_node(f, *child, depth + 1)?; }
		Ok(())
	}
}
