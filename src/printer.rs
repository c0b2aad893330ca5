//! Public printing entry points and their configuration.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::charset::Charset;
use crate::tree::layout::build_lines;
use crate::tree::{BinaryTree, Fragment, Refs, TreeBlock, TreeView};

/// Configuration for the layout and printing pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Draw box-drawing square branches instead of diagonals. Square trees
    /// are more compact.
    pub square_branches: bool,
    /// Draw a single child straight below its parent. Square style only.
    pub lr_agnostic: bool,
    /// Minimum spaces between adjacent labels on the same level.
    /// Branches span the whole gap.
    pub label_gap: usize,
    /// Spaces between trees placed side by side.
    pub col_gap: usize,
    /// Blank lines between rows of trees.
    pub row_gap: usize,
    /// Draw a placeholder segment for blank labels.
    pub use_placeholder: bool,
    /// Flush the writer after printing.
    pub flush: bool,
    pub charset: Charset,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        PrinterConfig {
            square_branches: false,
            lr_agnostic: false,
            label_gap: 2,
            col_gap: 1,
            row_gap: 1,
            use_placeholder: true,
            flush: true,
            charset: Charset::UNICODE,
        }
    }
}

/// Renders binary trees as text blocks.
///
/// ```
/// use neattree::{Node, TreePrinter};
///
/// let tree = Node::leaf(1).with_left(Node::leaf(2)).with_right(Node::leaf(3));
/// let text = TreePrinter::default().square_branches(true).render_to_string(Some(&tree));
/// assert_eq!(text, "  1  \n┌─┴─┐\n2   3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    config: PrinterConfig,
}

impl TreePrinter {
    pub fn new(config: PrinterConfig) -> Self {
        TreePrinter { config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn square_branches(mut self, on: bool) -> Self {
        self.config.square_branches = on;
        self
    }

    pub fn lr_agnostic(mut self, on: bool) -> Self {
        self.config.lr_agnostic = on;
        self
    }

    pub fn label_gap(mut self, gap: usize) -> Self {
        self.config.label_gap = gap;
        self
    }

    pub fn col_gap(mut self, gap: usize) -> Self {
        self.config.col_gap = gap;
        self
    }

    pub fn row_gap(mut self, gap: usize) -> Self {
        self.config.row_gap = gap;
        self
    }

    pub fn use_placeholder(mut self, on: bool) -> Self {
        self.config.use_placeholder = on;
        self
    }

    pub fn flush(mut self, on: bool) -> Self {
        self.config.flush = on;
        self
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.config.charset = charset;
        self
    }

    /// Render a tree whose nodes implement [`BinaryTree`]. `None` is the
    /// empty tree and renders as an empty block.
    pub fn render<T: BinaryTree>(&self, root: Option<&T>) -> TreeBlock {
        self.render_view(&Refs::<T>::new(), root)
    }

    /// Render a tree read through a [`TreeView`].
    pub fn render_view<V: TreeView>(&self, view: &V, root: Option<V::Node>) -> TreeBlock {
        let block = TreeBlock::new(build_lines(view, root, &self.config));
        debug!(
            height = block.height(),
            width = block.width(),
            square = self.config.square_branches,
            "rendered tree"
        );
        block
    }

    /// Padded lines of the rendered tree.
    pub fn to_lines<T: BinaryTree>(&self, root: Option<&T>) -> Vec<String> {
        self.render(root).to_lines()
    }

    /// Rendered tree as one string, lines separated by `\n`, no trailing newline.
    pub fn render_to_string<T: BinaryTree>(&self, root: Option<&T>) -> String {
        self.render(root).to_string()
    }

    /// Write the rendered tree, one `\n`-terminated line per row.
    pub fn print_tree<W: Write, T: BinaryTree>(&self, writer: &mut W, root: Option<&T>) -> io::Result<()> {
        let block = self.render(root);
        self.print_block(writer, &block)
    }

    /// Write an already rendered block.
    pub fn print_block<W: Write>(&self, writer: &mut W, block: &TreeBlock) -> io::Result<()> {
        for line in block.to_lines() {
            writeln!(writer, "{line}")?;
        }
        if self.config.flush {
            writer.flush()?;
        }
        Ok(())
    }

    /// Lay out trees left to right, wrapping into rows narrower than
    /// `line_width`. A tree wider than the line gets a row of its own.
    pub fn render_rows<'a, T, I>(&self, roots: I, line_width: usize) -> Vec<String>
    where
        T: BinaryTree + 'a,
        I: IntoIterator<Item = Option<&'a T>>,
    {
        let blocks: Vec<TreeBlock> = roots.into_iter().map(|root| self.render(root)).collect();
        self.pack_rows(&blocks, line_width)
            .iter()
            .map(|line| line.iter().map(|f| f.text.as_str()).collect())
            .collect()
    }

    /// Write trees in rows, see [`TreePrinter::render_rows`].
    pub fn print_trees<'a, W, T, I>(&self, writer: &mut W, roots: I, line_width: usize) -> io::Result<()>
    where
        W: Write,
        T: BinaryTree + 'a,
        I: IntoIterator<Item = Option<&'a T>>,
    {
        for line in self.render_rows(roots, line_width) {
            writeln!(writer, "{line}")?;
        }
        if self.config.flush {
            writer.flush()?;
        }
        Ok(())
    }

    /// Pack rendered blocks into rows and return the resulting lines as
    /// fragments. Each row is as tall as its tallest block; rows are
    /// separated by `row_gap` empty lines.
    pub fn pack_rows(&self, blocks: &[TreeBlock], line_width: usize) -> Vec<Vec<Fragment>> {
        let col_gap = self.config.col_gap;
        let mut out = Vec::new();
        let mut start = 0;

        while start < blocks.len() {
            let mut row_width = blocks[start].width();
            let mut end = start + 1;
            while end < blocks.len()
                && row_width
                    .saturating_add(col_gap)
                    .saturating_add(blocks[end].width())
                    < line_width
            {
                row_width += col_gap + blocks[end].width();
                end += 1;
            }
            let row = &blocks[start..end];
            trace!(first = start, count = row.len(), width = row_width, "packed row");

            if start > 0 {
                out.extend((0..self.config.row_gap).map(|_| Vec::new()));
            }

            let height = row.iter().map(TreeBlock::height).max().unwrap_or(0);
            for i in 0..height {
                let mut line = Vec::new();
                for (j, block) in row.iter().enumerate() {
                    if j > 0 && col_gap > 0 {
                        line.push(Fragment::spaces(col_gap));
                    }
                    line.extend(block.padded_fragments(i));
                }
                out.push(line);
            }

            start = end;
        }

        debug!(trees = blocks.len(), lines = out.len(), line_width, "packed trees into rows");
        out
    }
}
