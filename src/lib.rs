//! This crate exposes a persistent Binary Search Tree (BST): a set of
//! ordered values where every insertion produces a new tree and every older
//! tree stays exactly as it was.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores some value (the value that
//! was inserted, for example) and has two children, each of which is either
//! another `Node` or empty. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for a value takes `O(height)` (where `height` is the longest
//! path from the root `Node` to an empty subtree). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## Persistence
//!
//! The tree in [`persistent`] never changes after it is built. Inserting
//! copies only the `Node`s on the path from the root to the new value; every
//! other subtree is shared between the old and new trees. Because nothing is
//! ever written to a shared `Node`, any number of threads can read any
//! version at the same time.
//!
//! No rebalancing is done, so inserting values in sorted order yields a tree
//! whose height equals its size.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod inorder;
pub mod persistent;
