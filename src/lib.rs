#![forbid(unsafe_code)]
//! neattree: print binary trees neatly in the terminal.
//!
//! ```
//! use neattree::{Node, TreePrinter};
//!
//! let tree = Node::leaf(1).with_left(Node::leaf(2)).with_right(Node::leaf(3));
//! assert_eq!(
//!     TreePrinter::default().to_lines(Some(&tree)),
//!     vec!["  1  ", " ╱ ╲ ", "2   3"]
//! );
//! ```

pub mod charset;
pub mod cli;
pub mod parse;
pub mod printer;
pub mod render;
pub mod sample;
pub mod terminal;
pub mod text;
pub mod tree;

pub use charset::{Charset, Segment};
pub use printer::{PrinterConfig, TreePrinter};
pub use tree::{BinaryTree, FnView, MapLabels, Node, TreeBlock, TreeView};
