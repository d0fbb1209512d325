//! A persistent BST. Like a tree one would see in a functional language
//! such as Haskell, nothing here is ever modified in place: `insert` returns
//! a new tree that rebuilds only the path from the root down to the new value
//! and shares every other subtree with the tree it was called on.
//!
//! The tree is deliberately not self-balancing. Inserting values in sorted
//! order produces a tree shaped like a linked list.
//!
//! # Examples
//!
//! ```
//! use pbst::persistent::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.to_string(), "[]");
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(2).insert(1).insert(3);
//!
//! // The new tree has the new values but the old one doesn't.
//! assert!(new_tree.contains(&1));
//! assert!(!tree.contains(&1));
//!
//! // Inserting a value that's already there changes nothing.
//! let same_tree = new_tree.insert(2);
//! assert!(Tree::ptr_eq(&new_tree, &same_tree));
//!
//! // Values always come back out in order.
//! assert_eq!(new_tree.inorder().collect::<Vec<_>>(), vec![&1, &2, &3]);
//! assert_eq!(new_tree.to_string(), "[1, 2, 3]");
//!
//! // All history is preserved.
//! assert_eq!(tree.size(), 0);
//! assert_eq!(new_tree.size(), 3);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::sync::Arc;

pub use crate::inorder::Inorder;

/// A Binary Search Tree of unique values. This can be used for inserting
/// values, checking whether a value is present, and walking the values in
/// order. Note that this data structure is persistent - operations that
/// would modify the tree instead return a new tree.
///
/// Subtrees are shared between versions with [`Arc`] so a `Tree` can be
/// cloned cheaply and read from many threads at once.
pub enum Tree<T> {
    /// The tree with no values. This also marks the bottom of every subtree.
    Empty,
    /// A shared pointer to a [`Node`] holding a value and two subtrees.
    Node(Arc<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so cloning a tree only bumps a reference count and doesn't
/// require `T: Clone`.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(Arc::clone(n)),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns how many values are in this tree. This is cached on every
    /// node so it's `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::persistent::Tree;
    ///
    /// let tree = Tree::new();
    /// assert_eq!(tree.size(), 0);
    ///
    /// // Duplicates aren't counted twice.
    /// let tree = tree.insert(5).insert(5);
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.size,
        }
    }

    /// Returns `true` if this tree has no values.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns how many levels are in this tree. An empty tree has a height
    /// of 0 and a tree with a single value has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::persistent::Tree;
    ///
    /// let balanced = Tree::new().insert(2).insert(1).insert(3);
    /// assert_eq!(balanced.height(), 2);
    ///
    /// // No balancing is done so sorted input makes a tall tree.
    /// let tall = Tree::new().insert(1).insert(2).insert(3);
    /// assert_eq!(tall.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.left.height().max(n.right.height()) + 1,
        }
    }

    /// Returns a new tree that also contains `value`. If `value` is already
    /// in this tree, the returned tree is this same tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::persistent::Tree;
    ///
    /// let tree = Tree::new().insert(5).insert(3).insert(8);
    /// let new_tree = tree.insert(4);
    ///
    /// // All history is preserved.
    /// assert!(new_tree.contains(&4));
    /// assert!(!tree.contains(&4));
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(new_tree.size(), 4);
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        self.try_insert(value).unwrap_or_else(|| self.clone())
    }

    /// Returns a new tree that also contains `value`, or `None` if `value`
    /// is already in this tree.
    fn try_insert(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => Some(Self::Node(Arc::new(Node::new(value)))),
            Self::Node(n) => Some(Self::Node(Arc::new(n.insert(value)?))),
        }
    }

    /// Returns `true` if some value in this tree compares equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::persistent::Tree;
    ///
    /// let tree = Tree::new().insert(5).insert(3).insert(8);
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => false,
            Self::Node(n) => n.contains(value),
        }
    }

    /// Returns a lazy iterator over the values of this tree in ascending
    /// order. Every call starts a fresh, independent walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::persistent::Tree;
    ///
    /// let tree = Tree::new().insert(5).insert(3).insert(8);
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![&3, &5, &8]);
    /// assert_eq!(tree.inorder().len(), 3);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self)
    }

    /// Returns `true` if both trees are empty or both share the same root
    /// node. Trees built separately never share a root even if they hold the
    /// same values.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        match (this, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(a), Self::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree by inserting each value in turn. When a value shows up
    /// more than once the first one is kept.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Trees are equal when they hold the same values. Their shapes may differ.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.inorder().eq(other.inorder())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Renders the values in order as `[1, 2, 3]`. The empty tree is `[]`. Any width or precision
/// applies to each value.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.inorder().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

/// A `Node` holds one value and always has two children although those
/// children may be [`Empty`][Tree::Empty].
pub struct Node<T> {
    // Behind an `Arc` so the copies of this node made by `insert` don't need `T: Clone`.
    value: Arc<T>,
    left: Tree<T>,
    right: Tree<T>,

    /// How many values are in the subtree rooted at this node.
    size: usize,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `value` and no children.
    fn new(value: T) -> Self {
        Self {
            value: Arc::new(value),
            left: Tree::Empty,
            right: Tree::Empty,
            size: 1,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn left(&self) -> &Tree<T> {
        &self.left
    }

    pub(crate) fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// Create a new Node with the same value as this node
    /// but with the given children.
    fn with_children(&self, left: Tree<T>, right: Tree<T>) -> Self
    where
        T: cmp::Ord,
    {
        let node = Self {
            size: left.size() + 1 + right.size(),
            value: Arc::clone(&self.value),
            left,
            right,
        };

        // In tests, check the cached size and the ordering between this node and its children.
        if cfg!(test) {
            assert_eq!(node.size, node.left.size() + 1 + node.right.size());
            if let Tree::Node(l) = &node.left {
                assert!(l.value() < node.value());
            }
            if let Tree::Node(r) = &node.right {
                assert!(r.value() > node.value());
            }
        }
        node
    }

    /// Returns the node that replaces this one once `value` is added below
    /// it, or `None` if this subtree already holds `value`. A `None` from
    /// either child means nothing on the path gets rebuilt.
    fn insert(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match value.cmp(self.value()) {
            cmp::Ordering::Less => {
                let new_left = self.left.try_insert(value)?;
                Some(self.with_children(new_left, self.right.clone()))
            }
            cmp::Ordering::Equal => None,
            cmp::Ordering::Greater => {
                let new_right = self.right.try_insert(value)?;
                Some(self.with_children(self.left.clone(), new_right))
            }
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match value.cmp(self.value()) {
            cmp::Ordering::Less => self.left.contains(value),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right.contains(value),
        }
    }
}

/// Drops the subtrees with an explicit stack so that dropping a tall tree (e.g. one built from
/// sorted input) doesn't recurse once per level.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        if let (Tree::Empty, Tree::Empty) = (&self.left, &self.right) {
            return;
        }

        let mut stack = vec![mem::take(&mut self.left), mem::take(&mut self.right)];
        while let Some(tree) = stack.pop() {
            if let Tree::Node(n) = tree {
                // A node still shared with another version is left for that version to drop.
                if let Ok(mut n) = Arc::try_unwrap(n) {
                    stack.push(mem::take(&mut n.left));
                    stack.push(mem::take(&mut n.right));
                }
            }
        }
    }
}
