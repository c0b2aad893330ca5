//! Binary tree access and layout computation.
//!
//! Two ways of handing a tree to the printer:
//!
//! - implement [`BinaryTree`] on a node type whose children are reachable by
//!   reference (the bundled [`Node`] does this), or
//! - describe a handle-based tree (arena indices, ids, `Rc`s) through
//!   [`TreeView`], for example with [`FnView`] and three closures.
//!
//! Both are read-only: the printer never mutates or takes ownership of nodes.
//! Cyclic structures are not detected and will not terminate.

pub(crate) mod layout;

use std::fmt;
use std::marker::PhantomData;

pub use layout::{Fragment, FragmentKind, TreeBlock, TreeLine};

/// A node that knows its own label and children.
pub trait BinaryTree {
    /// Text drawn for this node. May contain ANSI escape sequences.
    fn label(&self) -> String;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Reads labels and children of `Node` handles owned elsewhere.
pub trait TreeView {
    type Node;

    fn label(&self, node: &Self::Node) -> String;
    fn left(&self, node: &Self::Node) -> Option<Self::Node>;
    fn right(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// `TreeView` over references to any [`BinaryTree`].
pub struct Refs<'a, T>(PhantomData<&'a T>);

impl<'a, T> Refs<'a, T> {
    pub fn new() -> Self {
        Refs(PhantomData)
    }
}

impl<'a, T> Default for Refs<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: BinaryTree> TreeView for Refs<'a, T> {
    type Node = &'a T;

    fn label(&self, node: &&'a T) -> String {
        node.label()
    }

    fn left(&self, node: &&'a T) -> Option<&'a T> {
        (*node).left()
    }

    fn right(&self, node: &&'a T) -> Option<&'a T> {
        (*node).right()
    }
}

/// `TreeView` built from three accessor closures.
///
/// ```
/// use neattree::tree::FnView;
/// use neattree::TreePrinter;
///
/// // Heap-ordered array: children of i live at 2i+1 and 2i+2.
/// let heap = [1, 3, 2, 7];
/// let view = FnView::new(
///     |i: &usize| heap[*i].to_string(),
///     |i: &usize| Some(2 * i + 1).filter(|c| *c < heap.len()),
///     |i: &usize| Some(2 * i + 2).filter(|c| *c < heap.len()),
/// );
/// let lines = TreePrinter::default().render_view(&view, Some(0)).to_lines();
/// assert_eq!(lines.len(), 5);
/// ```
pub struct FnView<N, L, A, B> {
    label: L,
    left: A,
    right: B,
    _node: PhantomData<fn(&N)>,
}

impl<N, L, A, B> FnView<N, L, A, B>
where
    L: Fn(&N) -> String,
    A: Fn(&N) -> Option<N>,
    B: Fn(&N) -> Option<N>,
{
    pub fn new(label: L, left: A, right: B) -> Self {
        FnView {
            label,
            left,
            right,
            _node: PhantomData,
        }
    }
}

impl<N, L, A, B> TreeView for FnView<N, L, A, B>
where
    L: Fn(&N) -> String,
    A: Fn(&N) -> Option<N>,
    B: Fn(&N) -> Option<N>,
{
    type Node = N;

    fn label(&self, node: &N) -> String {
        (self.label)(node)
    }

    fn left(&self, node: &N) -> Option<N> {
        (self.left)(node)
    }

    fn right(&self, node: &N) -> Option<N> {
        (self.right)(node)
    }
}

/// Another view with every label passed through `f`, e.g. to escape
/// control characters read from untrusted input.
pub struct MapLabels<'a, V, F> {
    view: &'a V,
    f: F,
}

impl<'a, V, F> MapLabels<'a, V, F>
where
    V: TreeView,
    F: Fn(String) -> String,
{
    pub fn new(view: &'a V, f: F) -> Self {
        MapLabels { view, f }
    }
}

impl<'a, V, F> TreeView for MapLabels<'a, V, F>
where
    V: TreeView,
    F: Fn(String) -> String,
{
    type Node = V::Node;

    fn label(&self, node: &V::Node) -> String {
        (self.f)(self.view.label(node))
    }

    fn left(&self, node: &V::Node) -> Option<V::Node> {
        self.view.left(node)
    }

    fn right(&self, node: &V::Node) -> Option<V::Node> {
        self.view.right(node)
    }
}

/// Owned binary tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    pub fn new(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Node {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Number of nodes in this subtree, the root included.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Number of levels, 1 for a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Copy the shape of this tree with every value passed through `f`.
    pub fn map<U>(&self, f: &impl Fn(&T) -> U) -> Node<U> {
        Node {
            value: f(&self.value),
            left: self.left.as_ref().map(|n| Box::new(n.map(f))),
            right: self.right.as_ref().map(|n| Box::new(n.map(f))),
        }
    }
}

// Unlinks children onto a heap stack so long chains don't exhaust the call stack.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: fmt::Display> BinaryTree for Node<T> {
    fn label(&self) -> String {
        self.value.to_string()
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
