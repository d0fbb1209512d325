use std::iter::FusedIterator;

use crate::persistent::{Node, Tree};

/// A lazy, in-order iterator over the values of a [`Tree`], created by
/// [`Tree::inorder`].
///
/// Rather than recursing, this keeps a stack of the nodes whose left subtree
/// has been visited but whose own value hasn't been yielded yet. The stack
/// never holds more than `height` nodes.
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    /// How many values haven't been yielded yet.
    remaining: usize,
}

/// Manual implementation of `Clone` so we don't require `T: Clone` just to copy some references.
impl<T> Clone for Inorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.size(),
        };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes `tree`'s root and then every left descendant of it, so the
    /// smallest value in `tree` ends up on top.
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n.as_ref());
            tree = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        self.push_left_spine(node.right());

        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}

impl<T> FusedIterator for Inorder<'_, T> {}
