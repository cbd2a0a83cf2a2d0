//! Implements an arena-allocated, ID-indexed freeform tree container and algorithms to work with it.
//!
//! ------------------------
//!
//! # Overview
//! Sapling implements a rooted tree with an arbitrary number of children per node, in which every successfully inserted node is handed a unique, strictly increasing integer identifier by the tree itself. Nodes are addressed by those identifiers rather than by references or handles, which keeps the container trivially safe to move around and lets callers store plain integers wherever a position in the tree needs to be remembered.
//!
//! The tree uses a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the tree uses some sort of backing storage to store the elements, typically a [`Vec`], and instead of using pointers to link to children, indices into the storage are used instead. The single-owner, acyclic shape of the tree is enforced structurally: child indices are appended to exactly one parent at insertion time and there is no removal.
//!
//! The four algorithms the container ships are:
//! - *ID assignment* — performed on every successful insertion, root or child;
//! - *ID-based search* — two depth-first disciplines, an iterative preorder walk ([`get`]) and a recursive explore-and-backtrack walk ([`backtrack`]), which agree on every found/not-found answer;
//! - *predicate-driven pruning* ([`filter`]) — builds a brand-new tree from the nodes whose payloads satisfy a predicate, dropping rejected nodes together with their entire subtrees;
//! - *structure rendering* ([`structure`]) — a deterministic, one-line-per-node textual rendering of the tree's shape.
//!
//! # Storage
//! The backing storage is treated generically through the [`ListStorage`] trait from the `granite` crate, with plain `usize` indices for keys. [`Vec`] is the default via the [`DefaultStorage`] type definition; any other `ListStorage` implementor can be dropped in through the tree's second type parameter.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. The crate always requires an allocator.
//!
//! # Public dependencies
//! - `granite` (**required**) — `^1.0`
//! - `smallvec` (**required**) — `^1.4`
//!
//! # Example
//! ```rust
//! use sapling::{IdTree, Node};
//!
//! // Create the tree. The turbofish there is needed to state that we are using the default
//! // storage method instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = IdTree::<_>::new();
//!
//! // A freshly created tree is empty, and stays that way until a root node is installed.
//! assert!(tree.root().is_none());
//!
//! // The root always receives identifier 0...
//! let root_id = tree.add_root(Node::new("root")).unwrap();
//! assert_eq!(root_id, 0);
//!
//! // ...and children receive the next identifier in line, attached to any node by its ID.
//! let child_id = tree.add(root_id, Node::new("child")).unwrap();
//! assert_eq!(child_id, 1);
//!
//! let child = tree.get(child_id).unwrap();
//! assert_eq!(child.value(), &"child");
//! assert_eq!(child.parent().unwrap().id(), root_id);
//! ```
//!
//! [`get`]: id_tree/struct.IdTree.html#method.get " "
//! [`backtrack`]: id_tree/struct.IdTree.html#method.backtrack " "
//! [`filter`]: id_tree/struct.IdTree.html#method.filter " "
//! [`structure`]: id_tree/struct.IdTree.html#method.structure " "
//! [`ListStorage`]: https://docs.rs/granite/*/granite/trait.ListStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod id_tree;
#[doc(no_inline)]
pub use id_tree::{IdTree, Node, NodeRef};

/// A prelude for using Sapling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::id_tree::{
        IdTree,
        Node as IdTreeNode,
        NodeRef as IdTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::NodeId;
}

/// The type used for node identifiers.
///
/// Identifiers are assigned by the tree itself, one per successful insertion, starting at 0 for the root and strictly increasing from there. They are unique within one tree instance and are never reused, since nodes cannot be removed.
pub type NodeId = u64;

/// The default storage type used by the tree types when a storage type is not provided.
///
/// A plain `Vec` is used: the tree never removes elements, so sparse storages and their hole bookkeeping would buy nothing here.
pub type DefaultStorage<T> = alloc::vec::Vec<T>;
