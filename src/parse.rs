//! Level-order tree descriptions.
//!
//! One tree per line, listed breadth first the way binary trees are usually
//! written down in puzzles and bug reports:
//!
//! ```text
//! [1, 2, 3, null, 4]
//! 5 3 8 # # 7 "nine and a half"
//! ```
//!
//! Tokens are separated by commas and/or whitespace and the surrounding
//! brackets are optional. `null`, `nil` and `#` mark an absent child. Labels
//! containing separators can be double-quoted, with `\"` and `\\` escapes.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::tree::TreeView;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unterminated quoted label starting at column {column}")]
    UnterminatedQuote { line: usize, column: usize },
    #[error("line {line}: unbalanced brackets")]
    UnbalancedBracket { line: usize },
    #[error("line {line}: node {label:?} at position {position} has no parent to attach to")]
    DanglingNode {
        line: usize,
        position: usize,
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Value(String),
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ArenaNode {
    label: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// A parsed tree stored as an arena. Node handles are indices; the root,
/// when present, is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelOrderTree {
    nodes: Vec<ArenaNode>,
}

impl LevelOrderTree {
    pub fn root(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TreeView for LevelOrderTree {
    type Node = usize;

    fn label(&self, node: &usize) -> String {
        self.nodes
            .get(*node)
            .map(|n| n.label.clone())
            .unwrap_or_default()
    }

    fn left(&self, node: &usize) -> Option<usize> {
        self.nodes.get(*node).and_then(|n| n.left)
    }

    fn right(&self, node: &usize) -> Option<usize> {
        self.nodes.get(*node).and_then(|n| n.right)
    }
}

impl FromStr for LevelOrderTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, 1)
    }
}

/// Parse a single tree description.
pub fn parse_tree(input: &str) -> Result<LevelOrderTree, ParseError> {
    parse_line(input, 1)
}

/// Parse one tree per non-blank line.
pub fn parse_trees(input: &str) -> Result<Vec<LevelOrderTree>, ParseError> {
    let trees = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(trees = trees.len(), "parsed tree descriptions");
    Ok(trees)
}

fn parse_line(input: &str, line: usize) -> Result<LevelOrderTree, ParseError> {
    let tokens = tokenize(input, line)?;
    build(tokens, line)
}

fn flush_bare(bare: &mut String, tokens: &mut Vec<Token>) {
    if bare.is_empty() {
        return;
    }
    let word = std::mem::take(bare);
    tokens.push(match word.as_str() {
        "null" | "nil" | "#" => Token::Absent,
        _ => Token::Value(word),
    });
}

fn tokenize(input: &str, line: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut bare = String::new();
    let mut opened = false;
    let mut closed = false;
    let mut chars = input.char_indices();

    while let Some((at, c)) = chars.next() {
        if closed && !c.is_whitespace() {
            return Err(ParseError::UnbalancedBracket { line });
        }
        match c {
            c if c == ',' || c.is_whitespace() => flush_bare(&mut bare, &mut tokens),
            '[' if !opened && tokens.is_empty() && bare.is_empty() => opened = true,
            ']' if opened => {
                flush_bare(&mut bare, &mut tokens);
                closed = true;
            }
            '[' | ']' => return Err(ParseError::UnbalancedBracket { line }),
            '"' if bare.is_empty() => {
                let mut label = String::new();
                let mut terminated = false;
                while let Some((_, c)) = chars.next() {
                    match c {
                        '\\' => match chars.next() {
                            Some((_, escaped)) => label.push(escaped),
                            None => break,
                        },
                        '"' => {
                            terminated = true;
                            break;
                        }
                        _ => label.push(c),
                    }
                }
                if !terminated {
                    return Err(ParseError::UnterminatedQuote {
                        line,
                        column: input[..at].chars().count() + 1,
                    });
                }
                tokens.push(Token::Value(label));
            }
            _ => bare.push(c),
        }
    }
    flush_bare(&mut bare, &mut tokens);

    if opened && !closed {
        return Err(ParseError::UnbalancedBracket { line });
    }
    Ok(tokens)
}

/// Attach nodes breadth first. Nodes are appended in the same order they
/// become parents, so the next parent is simply the next arena index.
fn build(tokens: Vec<Token>, line: usize) -> Result<LevelOrderTree, ParseError> {
    let mut nodes: Vec<ArenaNode> = Vec::new();
    let mut parent = 0;
    let mut right_slot = false;

    for (position, token) in tokens.into_iter().enumerate() {
        if position == 0 {
            if let Token::Value(label) = token {
                nodes.push(ArenaNode {
                    label,
                    left: None,
                    right: None,
                });
            }
            continue;
        }

        if parent >= nodes.len() {
            match token {
                Token::Absent => continue,
                Token::Value(label) => {
                    return Err(ParseError::DanglingNode {
                        line,
                        position: position + 1,
                        label,
                    })
                }
            }
        }

        if let Token::Value(label) = token {
            let index = nodes.len();
            nodes.push(ArenaNode {
                label,
                left: None,
                right: None,
            });
            if right_slot {
                nodes[parent].right = Some(index);
            } else {
                nodes[parent].left = Some(index);
            }
        }

        if right_slot {
            parent += 1;
        }
        right_slot = !right_slot;
    }

    Ok(LevelOrderTree { nodes })
}
