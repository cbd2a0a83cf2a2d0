//! Depth-first walks over the backing storage, shared by the tree's lookup, insertion and rendering operations.
//!
//! Everything here works on raw storage keys rather than on `NodeRef`s, since the callers in the parent module need keys to wire new nodes in. The walks are deliberately not exposed as public iterators; whole-tree traversal is not part of the tree's surface.

use core::fmt::Display;
use alloc::{format, string::String, vec::Vec};
use granite::ListStorage;
use smallvec::SmallVec;
use crate::NodeId;
use super::Node;

/// The number of keys the explicit traversal stack can hold before spilling to the heap.
const INLINE_STACK_SIZE: usize = 16;

/// Locates the node with the specified identifier with an iterative preorder depth-first walk, returning its storage key.
pub(super) fn depth_first_find<T, S>(storage: &S, root_key: usize, id: NodeId) -> Option<usize>
where
    S: ListStorage<Element = Node<T>>,
{
    let mut stack = SmallVec::<[usize; INLINE_STACK_SIZE]>::new();
    stack.push(root_key);
    while let Some(key) = stack.pop() {
        let node = storage
            .get(key)
            .expect("node key points outside of the storage");
        if node.id == id {
            return Some(key);
        }
        // Pushed in reverse so that the leftmost child is popped first,
        // keeping the walk in preorder.
        for &child_key in node.children.iter().rev() {
            stack.push(child_key);
        }
    }
    None
}

/// Locates the node with the specified identifier with a recursive explore-and-backtrack depth-first walk, returning its storage key.
///
/// Agrees with [`depth_first_find`] on every found/not-found answer, since identifiers are unique within one tree.
pub(super) fn backtrack_find<T, S>(storage: &S, key: usize, id: NodeId) -> Option<usize>
where
    S: ListStorage<Element = Node<T>>,
{
    let node = storage
        .get(key)
        .expect("node key points outside of the storage");
    if node.id == id {
        return Some(key);
    }
    for &child_key in &node.children {
        if let Some(found_key) = backtrack_find(storage, child_key, id) {
            return Some(found_key);
        }
    }
    None
}

/// Renders the subtree under `key` into `lines`, one line per node in preorder, indented by two spaces per level of depth.
///
/// Every line contains at least the parenthesized identifier, so no line is ever empty.
pub(super) fn render_structure<T, S>(storage: &S, key: usize, depth: usize, lines: &mut Vec<String>)
where
    S: ListStorage<Element = Node<T>>,
    T: Display,
{
    let node = storage
        .get(key)
        .expect("node key points outside of the storage");
    lines.push(format!(
        "{:indent$}({}) {}",
        "",
        node.id,
        node.value,
        indent = depth * 2,
    ));
    for &child_key in &node.children {
        render_structure(storage, child_key, depth + 1, lines);
    }
}
