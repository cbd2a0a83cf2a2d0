use smallvec::SmallVec;
use crate::NodeId;

/// A node of an ID-indexed tree.
///
/// Nodes are constructed *detached*, carrying only a payload and a placeholder identifier, and are handed over to a tree with [`IdTree::add_root`] or [`IdTree::add`]. On every successful insertion the tree takes ownership of the node, overwrites its identifier with the allocator's current value and wires it into the structure; the identifier set through [`with_id`] therefore only survives while the node stays detached.
///
/// Once inserted, nodes are reached through [`NodeRef`], which also provides the read-only view of the node's children.
///
/// # Example
/// ```rust
/// use sapling::Node;
///
/// let node = Node::new("payload").with_id(9);
/// assert_eq!(node.id(), 9);
/// assert_eq!(node.value(), &"payload");
/// ```
///
/// [`IdTree::add_root`]: struct.IdTree.html#method.add_root " "
/// [`IdTree::add`]: struct.IdTree.html#method.add " "
/// [`with_id`]: #method.with_id " "
/// [`NodeRef`]: struct.NodeRef.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(super) id: NodeId,
    pub(super) value: T,
    pub(super) parent: Option<usize>,
    pub(super) children: SmallVec<[usize; 4]>,
}
impl<T> Node<T> {
    /// Creates a detached node with the specified payload, a placeholder identifier of 0 and no children.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            id: 0,
            value,
            parent: None,
            children: SmallVec::new(),
        }
    }
    /// Overrides the identifier and returns the same node, to allow chained construction.
    ///
    /// The tree reassigns identifiers on insertion, so this only affects the node while it is detached.
    #[inline(always)]
    #[must_use = "this returns the node it was called on for chaining and does not mutate in place"]
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }
    /// Returns the current identifier of the node.
    #[inline(always)]
    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Returns a reference to the payload of the node.
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }
    /// Extracts the payload of the node, dropping the rest.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        self.value
    }
}
