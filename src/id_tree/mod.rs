//! ID-indexed freeform trees, ones which address their nodes by tree-assigned integer identifiers instead of references or storage keys.
//!
//! The tree owns all of its nodes: children are kept as an ordered list of storage indices inside their parent, every index is appended to exactly one parent at insertion time, and nodes are never removed. Cycles and shared children are therefore impossible by construction, and every traversal is bounded by the size of the tree.
//!
//! # Example
//! ```rust
//! use sapling::id_tree::{IdTree, Node};
//!
//! // Create the tree. The turbofish there is needed to state that we are using the default
//! // storage method instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = IdTree::<_>::new();
//!
//! // The root is installed exactly once and receives identifier 0:
//! tree.add_root(Node::new("/")).unwrap();
//! // Children are attached to any existing node by its identifier and receive
//! // the next identifier in line:
//! tree.add(0, Node::new("usr")).unwrap();
//! let bin = tree.add(1, Node::new("bin")).unwrap();
//! assert_eq!(bin, 2);
//!
//! // Lookups walk the tree depth-first and return a borrowed view of the node:
//! let usr = tree.get(1).unwrap();
//! assert_eq!(usr.value(), &"usr");
//! assert_eq!(usr.children().count(), 1);
//! assert!(usr.parent().unwrap().is_root());
//! ```

use core::fmt::{self, Formatter, Debug, Display};
use alloc::{format, string::String, vec::Vec};
use granite::ListStorage;
use smallvec::SmallVec;
use crate::{DefaultStorage, NodeId};

mod node;
mod node_ref;
mod traverse;
#[cfg(test)]
mod tests;

pub use node::Node;
pub use node_ref::{NodeRef, NodeChildrenIter};

/// An ID-indexed freeform tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdTree<T, S = DefaultStorage<Node<T>>>
where
    S: ListStorage<Element = Node<T>>,
{
    storage: S,
    root: Option<usize>,
    next_id: NodeId,
}
impl<T, S> IdTree<T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    /// Creates an empty tree.
    ///
    /// The tree stays empty until a root node is installed with [`add_root`].
    ///
    /// # Example
    /// ```rust
    /// # use sapling::IdTree;
    /// let tree = IdTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    ///
    /// [`add_root`]: #method.add_root " "
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            next_id: 0,
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            next_id: 0,
        }
    }

    /// Installs the specified node as the root node, assigning it identifier 0.
    ///
    /// Only the very first call on a tree instance can succeed. If a root is already present, the tree is left untouched and the node is handed back inside the error.
    ///
    /// # Example
    /// ```rust
    /// # use sapling::{IdTree, Node};
    /// let mut tree = IdTree::<_>::new();
    /// assert_eq!(tree.add_root(Node::new(42)), Ok(0));
    ///
    /// // The second attempt fails and gives the node back:
    /// let error = tree.add_root(Node::new(43)).unwrap_err();
    /// assert_eq!(error.into_node().into_value(), 43);
    /// assert_eq!(tree.root().unwrap().value(), &42);
    /// ```
    #[inline]
    pub fn add_root(&mut self, node: Node<T>) -> Result<NodeId, AddRootError<T>> {
        if self.root.is_some() {
            return Err(AddRootError { node });
        }
        Ok(self.insert_detached(node, None))
    }
    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    ///
    /// # Example
    /// ```rust
    /// # use sapling::{IdTree, Node};
    /// let mut tree = IdTree::<_>::new();
    /// assert!(tree.root().is_none());
    ///
    /// tree.add_root(Node::new(451)).unwrap();
    /// assert_eq!(tree.root().unwrap().value(), &451);
    /// ```
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, S>> {
        self.root.map(|key| unsafe {
            // SAFETY: the root key is only ever set to a key of a freshly added node
            NodeRef::new_raw_unchecked(self, key)
        })
    }

    /// Attaches the specified node to the node with the `parent_id` identifier, assigning the new node the next identifier in line.
    ///
    /// The parent is located with a depth-first search of the whole tree. The new node is appended to the end of the parent's child sequence. On failure — no root to search from, or no node with the requested identifier — the tree is left untouched and the node is handed back inside the error.
    ///
    /// # Example
    /// ```rust
    /// use sapling::{IdTree, Node, id_tree::AddErrorKind};
    ///
    /// let mut tree = IdTree::<_>::new();
    /// // Attaching to an empty tree cannot work:
    /// assert!(tree.add(0, Node::new("orphan")).is_err());
    ///
    /// tree.add_root(Node::new("root")).unwrap();
    /// assert_eq!(tree.add(0, Node::new("child")), Ok(1));
    ///
    /// // Unknown parent identifiers are reported, and the node is handed back:
    /// let error = tree.add(99, Node::new("stray")).unwrap_err();
    /// assert_eq!(error.kind, AddErrorKind::ParentNotFound(99));
    /// assert_eq!(error.into_node().into_value(), "stray");
    /// ```
    pub fn add(&mut self, parent_id: NodeId, node: Node<T>) -> Result<NodeId, AddError<T>> {
        let root_key = match self.root {
            Some(key) => key,
            None => {
                return Err(AddError {
                    node,
                    kind: AddErrorKind::NoRoot,
                })
            }
        };
        let parent_key = match traverse::depth_first_find(&self.storage, root_key, parent_id) {
            Some(key) => key,
            None => {
                return Err(AddError {
                    node,
                    kind: AddErrorKind::ParentNotFound(parent_id),
                })
            }
        };
        Ok(self.insert_detached(node, Some(parent_key)))
    }

    /// Returns a reference to the first node with the specified identifier, or `None` if there is none.
    ///
    /// The search is an iterative preorder depth-first walk of the whole tree, root included. Since identifiers are unique within one tree instance, "first" only pins down the traversal discipline, not the answer.
    ///
    /// # Example
    /// ```rust
    /// # use sapling::{IdTree, Node};
    /// let mut tree = IdTree::<_>::new();
    /// assert!(tree.get(0).is_none());
    ///
    /// tree.add_root(Node::new("0")).unwrap();
    /// tree.add(0, Node::new("1.0")).unwrap();
    /// assert_eq!(tree.get(1).unwrap().value(), &"1.0");
    /// assert!(tree.get(8).is_none());
    /// ```
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T, S>> {
        let root_key = self.root?;
        let key = traverse::depth_first_find(&self.storage, root_key, id)?;
        Some(unsafe {
            // SAFETY: the search only ever yields keys of nodes it visited
            NodeRef::new_raw_unchecked(self, key)
        })
    }
    /// Returns a reference to the node with the specified identifier, located with a recursive explore-and-backtrack depth-first search, or `None` if there is none.
    ///
    /// The outcome is contractually identical to [`get`] for every identifier and every tree state; only the traversal discipline differs. Ancestry questions about the found node are answered by [`NodeRef::parent`].
    ///
    /// # Example
    /// ```rust
    /// # use sapling::{IdTree, Node};
    /// let mut tree = IdTree::<_>::new();
    /// tree.add_root(Node::new("0.0")).unwrap();
    /// tree.add(0, Node::new("1.0")).unwrap();
    /// tree.add(1, Node::new("2.0")).unwrap();
    /// tree.add(2, Node::new("3.0")).unwrap();
    ///
    /// assert_eq!(tree.backtrack(3).unwrap().value(), &"3.0");
    /// assert!(tree.backtrack(99).is_none());
    /// ```
    ///
    /// [`get`]: #method.get " "
    /// [`NodeRef::parent`]: struct.NodeRef.html#method.parent " "
    #[inline]
    pub fn backtrack(&self, id: NodeId) -> Option<NodeRef<'_, T, S>> {
        let root_key = self.root?;
        let key = traverse::backtrack_find(&self.storage, root_key, id)?;
        Some(unsafe {
            // SAFETY: as above
            NodeRef::new_raw_unchecked(self, key)
        })
    }

    /// Renders the structure of the tree as one line of text per node, in preorder, or returns `None` if the tree is empty.
    ///
    /// Every line contains the node's identifier and its payload, indented by two spaces per level of depth. The rendering is deterministic for a given tree, and no line is ever empty.
    ///
    /// # Example
    /// ```rust
    /// # use sapling::{IdTree, Node};
    /// let mut tree = IdTree::<_>::new();
    /// assert!(tree.structure().is_none());
    ///
    /// tree.add_root(Node::new("usr")).unwrap();
    /// tree.add(0, Node::new("bin")).unwrap();
    /// tree.add(0, Node::new("lib")).unwrap();
    ///
    /// assert_eq!(tree.structure().unwrap(), vec![
    ///     "(0) usr",
    ///     "  (1) bin",
    ///     "  (2) lib",
    /// ]);
    /// ```
    pub fn structure(&self) -> Option<Vec<String>>
    where
        T: Display,
    {
        let root_key = self.root?;
        let mut lines = Vec::with_capacity(self.len());
        traverse::render_structure(&self.storage, root_key, 0, &mut lines);
        Some(lines)
    }

    /// Builds a brand-new tree from the nodes whose payloads satisfy the predicate, or returns `None` if the tree is empty or the root's payload is rejected.
    ///
    /// Children are examined in their insertion order. A rejected child is pruned together with its **entire** subtree: none of its descendants make it into the new tree, even those whose payloads would individually satisfy the predicate. Surviving nodes keep the identifiers they held in the source tree — since the root always holds identifier 0, so does the copy's root — and the copy's allocator resumes where the source's left off, so nodes added to the copy later cannot collide with the copied ones. The source tree is left untouched.
    ///
    /// # Example
    /// ```rust
    /// # use sapling::{IdTree, Node};
    /// let mut tree = IdTree::<_>::new();
    /// tree.add_root(Node::new(0)).unwrap();
    /// tree.add(0, Node::new(1)).unwrap();
    /// tree.add(0, Node::new(2)).unwrap();
    /// tree.add(1, Node::new(3)).unwrap();
    ///
    /// let even = tree.filter(|value| value % 2 == 0).unwrap();
    /// assert_eq!(even.len(), 2);
    ///
    /// // Surviving nodes keep their identifiers:
    /// let child = even.root().unwrap().children().next().unwrap();
    /// assert_eq!(child.id(), 2);
    /// // The node with identifier 1 was rejected, so its whole subtree is gone,
    /// // including the node with identifier 3:
    /// assert!(even.get(1).is_none());
    /// assert!(even.get(3).is_none());
    /// ```
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Self>
    where
        T: Clone,
    {
        let root_key = self.root?;
        let root = self.node(root_key);
        if !predicate(&root.value) {
            return None;
        }
        let mut filtered = Self::with_capacity(self.storage.len());
        let filtered_root_key = filtered.insert_copy(root.id, root.value.clone(), None);
        self.filter_into(root_key, &mut filtered, filtered_root_key, &mut predicate);
        filtered.next_id = self.next_id;
        Some(filtered)
    }

    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no root node, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the amount of nodes the storage can hold without requiring a memory allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves capacity for at least `additional` more nodes to be inserted.
    ///
    /// # Panics
    /// Storages with a fixed capacity may panic if they cannot reallocate.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }

    /// Moves a detached node into the storage, assigning it the allocator's current value and wiring it to its parent.
    ///
    /// Passing `None` for the parent installs the node as the root; the caller is responsible for only doing so on an empty tree.
    fn insert_detached(&mut self, mut node: Node<T>, parent: Option<usize>) -> NodeId {
        let id = self.next_id;
        node.id = id;
        node.parent = parent;
        node.children.clear();
        let key = self.storage.add(node);
        match parent {
            Some(parent_key) => self
                .storage
                .get_mut(parent_key)
                .expect("parent key points outside of the storage")
                .children
                .push(key),
            None => self.root = Some(key),
        }
        self.next_id += 1;
        id
    }
    /// Moves a copied payload into the storage under a pre-existing identifier, bypassing the allocator. Used by `filter` to let surviving nodes keep their identifiers.
    fn insert_copy(&mut self, id: NodeId, value: T, parent: Option<usize>) -> usize {
        let key = self.storage.add(Node {
            id,
            value,
            parent,
            children: SmallVec::new(),
        });
        match parent {
            Some(parent_key) => self
                .storage
                .get_mut(parent_key)
                .expect("parent key points outside of the storage")
                .children
                .push(key),
            None => self.root = Some(key),
        }
        key
    }
    /// Recursively copies the children of `source_key` which satisfy the predicate into `target`, under `target_key`. Rejected children are skipped together with their subtrees.
    fn filter_into(
        &self,
        source_key: usize,
        target: &mut Self,
        target_key: usize,
        predicate: &mut impl FnMut(&T) -> bool,
    ) where
        T: Clone,
    {
        for &child_key in &self.node(source_key).children {
            let child = self.node(child_key);
            if predicate(&child.value) {
                let copied_key = target.insert_copy(child.id, child.value.clone(), Some(target_key));
                self.filter_into(child_key, target, copied_key, predicate);
            }
        }
    }

    #[inline]
    #[track_caller]
    fn node(&self, key: usize) -> &Node<T> {
        self.storage
            .get(key)
            .expect("node key points outside of the storage")
    }
}
impl<T, S> Default for IdTree<T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

/// The error type returned by [`IdTree::add_root`], indicating that a root node was already present.
///
/// [`IdTree::add_root`]: struct.IdTree.html#method.add_root " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddRootError<T> {
    /// The node which was attempted to be installed as the root, returned back to the caller to avoid dropping it.
    pub node: Node<T>,
}
impl<T> AddRootError<T> {
    /// Extracts the node which was attempted to be installed as the root.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_node(self) -> Node<T> {
        self.node
    }
}
impl<T> Display for AddRootError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("a root node is already present in the tree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for AddRootError<T> {}

/// The error type returned by [`IdTree::add`].
///
/// [`IdTree::add`]: struct.IdTree.html#method.add " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddError<T> {
    /// The node which was attempted to be added, returned back to the caller to avoid dropping it.
    pub node: Node<T>,
    /// The reason why the node could not be added.
    pub kind: AddErrorKind,
}
impl<T> AddError<T> {
    /// Extracts the node which was attempted to be added.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_node(self) -> Node<T> {
        self.node
    }
}
impl<T> Display for AddError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            AddErrorKind::NoRoot => f.pad("the tree does not have a root node to attach to"),
            AddErrorKind::ParentNotFound(id) => f.pad(&format!(
                "no node with identifier {} is present in the tree",
                id,
            )),
        }
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for AddError<T> {}

/// The reason why a node could not be added with [`IdTree::add`].
///
/// [`IdTree::add`]: struct.IdTree.html#method.add " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddErrorKind {
    /// The tree does not have a root node, so there is nothing to attach to.
    NoRoot,
    /// No node in the tree has the requested identifier. Contains the identifier which was looked up.
    ParentNotFound(NodeId),
}

/// An ID-indexed tree which uses a `Vec` as backing storage.
///
/// The default `IdTree` type already uses this, so this is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type VecIdTree<T> = IdTree<T, alloc::vec::Vec<Node<T>>>;
