use std::collections::VecDeque;
use std::fmt;

use super::TreeView;
use crate::charset::Segment;
use crate::printer::PrinterConfig;
use crate::text::display_width;

/// What a run of text on a rendered line depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Label,
    Branch,
    Space,
}

/// A run of text of a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub(crate) fn spaces(n: usize) -> Self {
        Fragment {
            kind: FragmentKind::Space,
            text: " ".repeat(n),
        }
    }
}

/// One line of a rendered tree. `left` and `right` are the columns of its
/// first and last visible cell, relative to the centre of the root label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeLine {
    pub fragments: Vec<Fragment>,
    pub left: isize,
    pub right: isize,
}

impl TreeLine {
    fn new(kind: FragmentKind, text: String, left: isize, right: isize) -> Self {
        TreeLine {
            fragments: vec![Fragment { kind, text }],
            left,
            right,
        }
    }

    fn shift(&mut self, by: isize) {
        self.left += by;
        self.right += by;
    }

    /// Join two lines side by side with `gap` spaces in between.
    fn join(left: TreeLine, gap: usize, right: TreeLine) -> Self {
        let mut fragments = left.fragments;
        if gap > 0 {
            fragments.push(Fragment::spaces(gap));
        }
        fragments.extend(right.fragments);
        TreeLine {
            fragments,
            left: left.left,
            right: right.right,
        }
    }

    /// Unpadded text of this line.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// The rendered form of one tree: lines plus their common extent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBlock {
    lines: Vec<TreeLine>,
    min_left: isize,
    max_right: isize,
}

impl TreeBlock {
    pub(crate) fn new(lines: Vec<TreeLine>) -> Self {
        let min_left = lines.iter().map(|l| l.left).min().unwrap_or(0);
        let max_right = lines.iter().map(|l| l.right).max().unwrap_or(0);
        TreeBlock {
            lines,
            min_left,
            max_right,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Visible width in columns shared by every padded line; 0 when empty.
    pub fn width(&self) -> usize {
        if self.lines.is_empty() {
            0
        } else {
            (self.max_right - self.min_left + 1) as usize
        }
    }

    /// Unpadded lines with their offsets.
    pub fn lines(&self) -> &[TreeLine] {
        &self.lines
    }

    /// Fragments of line `index` padded with spaces to the block width.
    pub fn padded_fragments(&self, index: usize) -> Vec<Fragment> {
        let Some(line) = self.lines.get(index) else {
            return match self.width() {
                0 => Vec::new(),
                width => vec![Fragment::spaces(width)],
            };
        };
        let lead = (line.left - self.min_left) as usize;
        let trail = (self.max_right - line.right) as usize;
        let mut fragments = Vec::with_capacity(line.fragments.len() + 2);
        if lead > 0 {
            fragments.push(Fragment::spaces(lead));
        }
        fragments.extend(line.fragments.iter().cloned());
        if trail > 0 {
            fragments.push(Fragment::spaces(trail));
        }
        fragments
    }

    /// Line `index` padded to the block width. Indices past the last line
    /// yield blank lines of the same width.
    pub fn padded_line(&self, index: usize) -> String {
        self.padded_fragments(index)
            .iter()
            .map(|f| f.text.as_str())
            .collect()
    }

    /// All lines, padded to the block width.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.lines.len()).map(|i| self.padded_line(i)).collect()
    }

    /// All lines as padded fragments, for styled output.
    pub fn fragment_lines(&self) -> Vec<Vec<Fragment>> {
        (0..self.lines.len()).map(|i| self.padded_fragments(i)).collect()
    }
}

impl fmt::Display for TreeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.lines.len() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&self.padded_line(i))?;
        }
        Ok(())
    }
}

/// Text and visible width of the root label, with blank labels replaced.
fn root_label(label: String, config: &PrinterConfig) -> (FragmentKind, String, usize) {
    let width = display_width(&label);
    let blank = width == 0 || crate::text::strip_ansi(&label).trim().is_empty();
    if blank && config.use_placeholder {
        let segment = if config.square_branches {
            Segment::SPlaceholder
        } else {
            Segment::DPlaceholder
        };
        (FragmentKind::Branch, config.charset.get(segment).to_string(), 1)
    } else if width == 0 {
        (FragmentKind::Label, " ".to_string(), 1)
    } else {
        (FragmentKind::Label, label, width)
    }
}

/// Lines of a laid-out subtree. Positions are stored relative to `offset`,
/// so moving a whole subtree sideways is a single addition.
#[derive(Debug, Default)]
struct Subtree {
    lines: VecDeque<TreeLine>,
    offset: isize,
}

impl Subtree {
    fn len(&self) -> usize {
        self.lines.len()
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn bounds(&self, index: usize) -> (isize, isize) {
        let line = &self.lines[index];
        (line.left + self.offset, line.right + self.offset)
    }

    /// Take line `index` out, placed in absolute columns shifted by `by`.
    fn take_line(&mut self, index: usize, by: isize) -> TreeLine {
        let mut line = std::mem::take(&mut self.lines[index]);
        line.shift(self.offset + by);
        line
    }

    fn push_front(&mut self, mut line: TreeLine) {
        line.shift(-self.offset);
        self.lines.push_front(line);
    }

    fn into_lines(self) -> Vec<TreeLine> {
        let offset = self.offset;
        self.lines
            .into_iter()
            .map(|mut line| {
                line.shift(offset);
                line
            })
            .collect()
    }
}

enum Step<N> {
    Visit(Option<N>),
    Combine(String),
}

/// Lay out the tree under `root`. Children are laid out first, then
/// brought as close together as their jagged inner edges allow.
///
/// The walk keeps its own stack, so depth is bounded by memory rather than
/// by the call stack.
pub(crate) fn build_lines<V: TreeView>(
    view: &V,
    root: Option<V::Node>,
    config: &PrinterConfig,
) -> Vec<TreeLine> {
    let mut steps = vec![Step::Visit(root)];
    let mut done: Vec<Subtree> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => done.push(Subtree::default()),
            Step::Visit(Some(node)) => {
                steps.push(Step::Combine(view.label(&node)));
                steps.push(Step::Visit(view.right(&node)));
                steps.push(Step::Visit(view.left(&node)));
            }
            Step::Combine(label) => {
                let right = done.pop().unwrap_or_default();
                let left = done.pop().unwrap_or_default();
                done.push(combine(label, left, right, config));
            }
        }
    }

    done.pop().map(Subtree::into_lines).unwrap_or_default()
}

/// Place `label` above its two laid-out subtrees.
fn combine(label: String, mut left: Subtree, mut right: Subtree, config: &PrinterConfig) -> Subtree {
    // Columns needed between the two subtree roots so that no paired line
    // overlaps, plus the gap, rounded up to odd so the parent can centre.
    let closest = (0..left.len().min(right.len()))
        .map(|i| left.bounds(i).1 - right.bounds(i).0)
        .max()
        .unwrap_or(0)
        .max(0);
    let label_gap = isize::try_from(config.label_gap).unwrap_or(isize::MAX);
    let mut root_spacing = closest.saturating_add(label_gap);
    if root_spacing % 2 == 0 {
        root_spacing += 1;
    }

    let (kind, text, width) = root_label(label, config);
    let width = width as isize;
    let mut head = vec![TreeLine::new(kind, text, -((width - 1) / 2), width / 2)];

    let draw = |segment: Segment| config.charset.get(segment);
    let branch = |text: String, left: isize, right: isize| {
        TreeLine::new(FragmentKind::Branch, text, left, right)
    };

    let mut left_adjust = 0;
    let mut right_adjust = 0;

    match (left.is_empty(), right.is_empty()) {
        (true, true) => {}
        (true, false) => {
            if config.square_branches {
                if config.lr_agnostic {
                    head.push(branch(draw(Segment::V).to_string(), 0, 0));
                } else {
                    let text = [draw(Segment::OutR), draw(Segment::InR)].iter().collect();
                    head.push(branch(text, 0, 1));
                    right_adjust = 1;
                }
            } else {
                head.push(branch(draw(Segment::DRight).to_string(), 1, 1));
                right_adjust = 2;
            }
        }
        (false, true) => {
            if config.square_branches {
                if config.lr_agnostic {
                    head.push(branch(draw(Segment::V).to_string(), 0, 0));
                } else {
                    let text = [draw(Segment::InL), draw(Segment::OutL)].iter().collect();
                    head.push(branch(text, -1, 0));
                    left_adjust = -1;
                }
            } else {
                head.push(branch(draw(Segment::DLeft).to_string(), -1, -1));
                left_adjust = -2;
            }
        }
        (false, false) => {
            let adjust = root_spacing / 2 + 1;
            if config.square_branches {
                let horizontal = draw(Segment::H).to_string().repeat((root_spacing / 2) as usize);
                let mut text = String::new();
                text.push(draw(Segment::InL));
                text.push_str(&horizontal);
                text.push(draw(Segment::Split));
                text.push_str(&horizontal);
                text.push(draw(Segment::InR));
                head.push(branch(text, -adjust, adjust));
                left_adjust = -adjust;
                right_adjust = adjust;
            } else if root_spacing == 1 {
                let text = format!("{} {}", draw(Segment::DLeft), draw(Segment::DRight));
                head.push(branch(text, -1, 1));
                left_adjust = -2;
                right_adjust = 2;
            } else {
                for i in (1..root_spacing).step_by(2) {
                    let text = format!(
                        "{}{}{}",
                        draw(Segment::DLeft),
                        " ".repeat(i as usize),
                        draw(Segment::DRight)
                    );
                    head.push(branch(text, -((i + 1) / 2), (i + 1) / 2));
                }
                left_adjust = -adjust;
                right_adjust = adjust;
            }
        }
    }

    // Diagonal branches with spacing 1 push the children two columns out,
    // leaving three columns between them.
    let paired_spacing = if root_spacing == 1 && !config.square_branches {
        3
    } else {
        root_spacing
    };

    // The taller subtree keeps its lines; the shorter one is merged into
    // its top rows.
    let paired = left.len().min(right.len());
    let mut body = if left.len() >= right.len() {
        for i in 0..paired {
            let gap = paired_gap(paired_spacing, left.bounds(i).1, right.bounds(i).0);
            let l = left.take_line(i, left_adjust);
            let r = right.take_line(i, right_adjust);
            left.lines[i] = TreeLine::join(l, gap, r);
            left.lines[i].shift(-(left.offset + left_adjust));
        }
        left.offset += left_adjust;
        left
    } else {
        for i in 0..paired {
            let gap = paired_gap(paired_spacing, left.bounds(i).1, right.bounds(i).0);
            let l = left.take_line(i, left_adjust);
            let r = right.take_line(i, right_adjust);
            right.lines[i] = TreeLine::join(l, gap, r);
            right.lines[i].shift(-(right.offset + right_adjust));
        }
        right.offset += right_adjust;
        right
    };

    for line in head.into_iter().rev() {
        body.push_front(line);
    }
    body
}

fn paired_gap(spacing: isize, left_right: isize, right_left: isize) -> usize {
    spacing.saturating_sub(left_right).saturating_add(right_left).max(0) as usize
}
