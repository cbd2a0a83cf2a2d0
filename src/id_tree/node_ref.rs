use core::{iter::FusedIterator, slice};
use granite::ListStorage;
use crate::{DefaultStorage, NodeId};
use super::{IdTree, Node};

/// A reference to a node in an ID-indexed tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to look around the tree: at the node's children, in insertion order, and at its parent, all the way up to the root.
#[derive(Debug)]
pub struct NodeRef<'a, T, S = DefaultStorage<Node<T>>>
where
    S: ListStorage<Element = Node<T>>,
{
    pub(super) tree: &'a IdTree<T, S>,
    pub(super) key: usize,
}
impl<'a, T, S> NodeRef<'a, T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a IdTree<T, S>, key: usize) -> Option<Self> {
        if tree.storage.len() > key {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a IdTree<T, S>, key: usize) -> Self {
        Self { tree, key }
    }
    /// Returns the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> usize {
        self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> usize {
        self.key
    }
    /// Returns the identifier of the node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.node().id
    }
    /// Returns a reference to the payload of the node.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|key| unsafe {
            // SAFETY: nodes can never have dangling parent keys
            Self::new_raw_unchecked(self.tree, key)
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or more child nodes; `false` otherwise.
    #[inline]
    pub fn is_branch(&self) -> bool {
        !self.node().children.is_empty()
    }
    /// Returns the number of children of the node.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }
    /// Returns an iterator over references to the children of the node, in insertion order.
    #[inline]
    pub fn children(&self) -> NodeChildrenIter<'a, T, S> {
        NodeChildrenIter {
            tree: self.tree,
            keys: self.node().children.iter(),
        }
    }

    #[inline]
    pub(super) fn node(&self) -> &'a Node<T> {
        debug_assert!(
            self.tree.storage.len() > self.key,
            "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
            self.key,
        );
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(self.key)
        }
    }
}
impl<T, S> Copy for NodeRef<'_, T, S> where S: ListStorage<Element = Node<T>> {}
impl<T, S> Clone for NodeRef<'_, T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key,
        }
    }
}

/// An iterator over references to the children of an ID-indexed tree node, in insertion order.
#[derive(Debug)]
pub struct NodeChildrenIter<'a, T, S = DefaultStorage<Node<T>>>
where
    S: ListStorage<Element = Node<T>>,
{
    tree: &'a IdTree<T, S>,
    keys: slice::Iter<'a, usize>,
}
impl<'a, T, S> Iterator for NodeChildrenIter<'a, T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    type Item = NodeRef<'a, T, S>;
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|&key| unsafe {
            // SAFETY: child key lists only ever contain keys of nodes in the storage
            NodeRef::new_raw_unchecked(self.tree, key)
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<'a, T, S> DoubleEndedIterator for NodeChildrenIter<'a, T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back().map(|&key| unsafe {
            // SAFETY: as above
            NodeRef::new_raw_unchecked(self.tree, key)
        })
    }
}
impl<T, S> ExactSizeIterator for NodeChildrenIter<'_, T, S> where
    S: ListStorage<Element = Node<T>>
{
}
impl<T, S> FusedIterator for NodeChildrenIter<'_, T, S> where S: ListStorage<Element = Node<T>> {}
impl<T, S> Clone for NodeChildrenIter<'_, T, S>
where
    S: ListStorage<Element = Node<T>>,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            keys: self.keys.clone(),
        }
    }
}
