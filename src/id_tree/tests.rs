use alloc::vec;
use alloc::vec::Vec;
use super::*;

#[test]
fn new_tree_is_empty() {
    let tree = IdTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    assert!(tree.structure().is_none());
}

#[test]
fn add_root_when_tree_is_empty() {
    let mut tree = IdTree::<_>::new();
    assert_eq!(tree.add_root(Node::new(42)), Ok(0));

    let root = tree.root().expect("root was just installed");
    assert_eq!(root.id(), 0);
    assert_eq!(root.value(), &42);
    assert!(root.is_root());
    assert!(root.is_leaf());
}

#[test]
fn add_root_when_tree_is_not_empty() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(42)).unwrap();

    let error = tree.add_root(Node::new(43)).unwrap_err();
    assert_eq!(error.into_node().into_value(), 43);

    // The failed call left the tree untouched:
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root().unwrap().value(), &42);
    // ...including the allocator:
    assert_eq!(tree.add(0, Node::new(44)), Ok(1));
}

#[test]
fn add_when_there_is_no_root() {
    let mut tree = IdTree::<_>::new();

    let error = tree.add(0, Node::new(42)).unwrap_err();
    assert_eq!(error.kind, AddErrorKind::NoRoot);
    assert_eq!(error.into_node().into_value(), 42);

    // The allocator was not advanced by the failure:
    assert_eq!(tree.add_root(Node::new(42)), Ok(0));
}

#[test]
fn add_when_parent_is_not_found() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(42)).unwrap();

    let error = tree.add(3, Node::new(42)).unwrap_err();
    assert_eq!(error.kind, AddErrorKind::ParentNotFound(3));

    assert_eq!(tree.len(), 1);
    // The allocator was not advanced by the failure:
    assert_eq!(tree.add(0, Node::new(43)), Ok(1));
}

#[test]
fn add_when_parent_is_found() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0")).unwrap();

    assert_eq!(tree.add(0, Node::new("1.0")), Ok(1));

    let child = tree.get(1).expect("the child was just attached");
    assert_eq!(child.value(), &"1.0");
    assert_eq!(child.parent().unwrap().id(), 0);

    let root = tree.root().unwrap();
    assert!(root.is_branch());
    assert_eq!(root.child_count(), 1);
}

#[test]
fn add_assigns_strictly_increasing_identifiers() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0.0")).unwrap();
    assert_eq!(tree.add(0, Node::new("1.0")), Ok(1));
    assert_eq!(tree.add(0, Node::new("1.1")), Ok(2));
    assert_eq!(tree.add(1, Node::new("2.0")), Ok(3));
    assert_eq!(tree.add(0, Node::new("1.2")), Ok(4));
    assert_eq!(tree.len(), 5);

    let root = tree.root().unwrap();
    let child_ids = root.children().map(|child| child.id()).collect::<Vec<_>>();
    // Insertion order is preserved within one parent:
    assert_eq!(child_ids, vec![1, 2, 4]);
}

#[test]
fn get_when_there_is_no_root() {
    let tree = IdTree::<&str>::new();
    assert!(tree.get(8).is_none());
}

#[test]
fn get_when_there_is_no_such_id() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0")).unwrap();
    tree.add(0, Node::new("1.0")).unwrap();

    assert!(tree.get(8).is_none());
}

#[test]
fn get_when_the_id_is_on_the_root() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0")).unwrap();

    let root = tree.get(0).expect("the root holds identifier 0");
    assert_eq!(root.id(), 0);
    assert_eq!(root.value(), &"0");
}

#[test]
fn get_when_the_id_is_on_a_descendant() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0").with_id(0)).unwrap();
    tree.add(0, Node::new("1.0").with_id(1)).unwrap();

    let node = tree.get(1).expect("identifier 1 was assigned to the child");
    assert_eq!(node.value(), &"1.0");
}

#[test]
fn backtrack_when_id_is_not_found() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0.0")).unwrap();

    assert!(tree.backtrack(1).is_none());
}

#[test]
fn backtrack_when_id_is_found() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0.0").with_id(0)).unwrap();
    tree.add(0, Node::new("1.0").with_id(1)).unwrap();
    tree.add(1, Node::new("2.0").with_id(2)).unwrap();
    tree.add(2, Node::new("3.0").with_id(3)).unwrap();

    let node = tree.backtrack(3).expect("identifier 3 is on the deepest node");
    assert_eq!(node.value(), &"3.0");
    assert!(tree.backtrack(99).is_none());
}

#[test]
fn backtrack_agrees_with_get() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(0)).unwrap();
    tree.add(0, Node::new(1)).unwrap();
    tree.add(0, Node::new(2)).unwrap();
    tree.add(1, Node::new(3)).unwrap();
    tree.add(3, Node::new(4)).unwrap();

    for id in 0..8 {
        assert_eq!(tree.get(id).is_some(), tree.backtrack(id).is_some());
    }
    assert_eq!(
        tree.get(2).unwrap().raw_key(),
        tree.backtrack(2).unwrap().raw_key(),
    );
}

#[test]
fn structure_when_there_is_no_root() {
    let tree = IdTree::<&str>::new();
    assert!(tree.structure().is_none());
}

#[test]
fn structure_when_there_is_a_root() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("0.0")).unwrap();
    tree.add(0, Node::new("1.0")).unwrap();
    tree.add(0, Node::new("1.1")).unwrap();
    tree.add(0, Node::new("1.2")).unwrap();
    tree.add(1, Node::new("2.0")).unwrap();
    tree.add(1, Node::new("2.1")).unwrap();
    tree.add(1, Node::new("2.2")).unwrap();
    tree.add(2, Node::new("2.0")).unwrap();
    tree.add(2, Node::new("2.1")).unwrap();
    tree.add(2, Node::new("2.2")).unwrap();
    tree.add(3, Node::new("3.0")).unwrap();
    tree.add(3, Node::new("3.1")).unwrap();
    tree.add(3, Node::new("3.2")).unwrap();
    tree.add(4, Node::new("4.0")).unwrap();

    let lines = tree.structure().expect("the tree is not empty");
    assert_eq!(lines.len(), tree.len());
    for line in &lines {
        assert!(!line.is_empty());
    }
    // Same tree, same rendering:
    assert_eq!(tree.structure().unwrap(), lines);
}

#[test]
fn structure_renders_identifiers_and_depth() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("a")).unwrap();
    tree.add(0, Node::new("b")).unwrap();
    tree.add(1, Node::new("c")).unwrap();
    tree.add(0, Node::new("d")).unwrap();

    assert_eq!(tree.structure().unwrap(), vec![
        "(0) a",
        "  (1) b",
        "    (2) c",
        "  (3) d",
    ]);
}

#[test]
fn filter_when_there_is_no_root() {
    let tree = IdTree::<i32>::new();
    assert!(tree.filter(|value| value % 2 == 0).is_none());
}

#[test]
fn filter_when_the_root_is_rejected() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(1).with_id(1)).unwrap();

    assert!(tree.filter(|value| value % 2 == 0).is_none());
}

#[test]
fn filter_keeps_the_identifiers_of_surviving_nodes() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(0).with_id(0)).unwrap();
    tree.add(0, Node::new(1).with_id(1)).unwrap();
    tree.add(0, Node::new(2).with_id(2)).unwrap();
    tree.add(1, Node::new(3).with_id(3)).unwrap();

    let even = tree
        .filter(|value| value % 2 == 0)
        .expect("the root's payload is even");

    let root = even.root().unwrap();
    assert_eq!(root.id(), 0);
    assert_eq!(root.value(), &0);
    assert_eq!(root.child_count(), 1);

    let child = root.children().next().unwrap();
    assert_eq!(child.id(), 2);
    assert_eq!(child.value(), &2);

    // The rejected node and its entire subtree are absent, even though the
    // subtree's payloads are never examined:
    assert_eq!(even.len(), 2);
    assert!(even.get(1).is_none());
    assert!(even.get(3).is_none());
}

#[test]
fn filter_prunes_whole_subtrees() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(0)).unwrap();
    tree.add(0, Node::new(1)).unwrap();
    // An even payload below a rejected node must not be promoted:
    tree.add(1, Node::new(2)).unwrap();

    let even = tree.filter(|value| value % 2 == 0).unwrap();
    assert_eq!(even.len(), 1);
    assert!(even.root().unwrap().is_leaf());
    assert!(even.get(2).is_none());
}

#[test]
fn filter_leaves_the_source_tree_untouched() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(0)).unwrap();
    tree.add(0, Node::new(1)).unwrap();
    tree.add(0, Node::new(2)).unwrap();

    let _ = tree.filter(|value| value % 2 == 0).unwrap();

    assert_eq!(tree.len(), 3);
    assert!(tree.get(1).is_some());
    assert_eq!(tree.root().unwrap().child_count(), 2);
}

#[test]
fn filter_result_accepts_further_insertions() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(0)).unwrap();
    tree.add(0, Node::new(1)).unwrap();
    tree.add(0, Node::new(2)).unwrap();
    tree.add(1, Node::new(3)).unwrap();

    let mut even = tree.filter(|value| value % 2 == 0).unwrap();
    // The copy's allocator resumes where the source's left off, so new
    // identifiers cannot collide with the copied ones:
    assert_eq!(even.add(2, Node::new(6)), Ok(4));
    assert_eq!(even.get(4).unwrap().parent().unwrap().id(), 2);
}

#[test]
fn identifiers_are_reassigned_on_insertion() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new(7).with_id(40)).unwrap();

    // The tree's allocator has authority over identifiers; the builder value
    // only survives while the node is detached.
    assert!(tree.get(40).is_none());
    assert_eq!(tree.get(0).unwrap().value(), &7);
}

#[test]
fn detached_node_builder() {
    let node = Node::new(5).with_id(9);
    assert_eq!(node.id(), 9);
    assert_eq!(node.value(), &5);
    assert_eq!(node.into_value(), 5);

    assert_eq!(Node::new(5).id(), 0);
}

#[test]
fn node_ref_navigation() {
    let mut tree = IdTree::<_>::new();
    tree.add_root(Node::new("root")).unwrap();
    tree.add(0, Node::new("left")).unwrap();
    tree.add(0, Node::new("right")).unwrap();

    let root = tree.root().unwrap();
    assert!(root.parent().is_none());
    assert_eq!(root.children().len(), 2);

    let backwards = root
        .children()
        .rev()
        .map(|child| child.id())
        .collect::<Vec<_>>();
    assert_eq!(backwards, vec![2, 1]);

    assert!(NodeRef::new_raw(&tree, 99).is_none());
    let left = NodeRef::new_raw(&tree, 1).unwrap();
    assert_eq!(left.value(), &"left");
}

#[test]
fn explicit_vec_storage() {
    let mut tree = VecIdTree::<i32>::with_capacity(16);
    assert!(tree.capacity() >= 16);
    tree.add_root(Node::new(1)).unwrap();
    tree.add(0, Node::new(2)).unwrap();
    assert_eq!(tree.len(), 2);
}
