//! Drawing segments and the characters used for them.

/// A piece of branch drawing. Diagonal style uses the `D*` segments, square
/// style uses the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Stands in for a blank label in diagonal style.
    DPlaceholder,
    /// Diagonal towards a left child.
    DLeft,
    /// Diagonal towards a right child.
    DRight,
    /// Stands in for a blank label in square style.
    SPlaceholder,
    /// Vertical line.
    V,
    /// Horizontal line.
    H,
    /// Split into left and right children.
    Split,
    /// Leaves the parent towards a right child.
    OutR,
    /// Leaves the parent towards a left child.
    OutL,
    /// Enters a left child.
    InL,
    /// Enters a right child.
    InR,
}

impl Segment {
    pub const ALL: [Segment; 11] = [
        Segment::DPlaceholder,
        Segment::DLeft,
        Segment::DRight,
        Segment::SPlaceholder,
        Segment::V,
        Segment::H,
        Segment::Split,
        Segment::OutR,
        Segment::OutL,
        Segment::InL,
        Segment::InR,
    ];
}

/// The character drawn for every [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    pub d_placeholder: char,
    pub d_left: char,
    pub d_right: char,
    pub s_placeholder: char,
    pub v: char,
    pub h: char,
    pub split: char,
    pub out_r: char,
    pub out_l: char,
    pub in_l: char,
    pub in_r: char,
}

impl Charset {
    /// Light box-drawing characters.
    pub const UNICODE: Charset = Charset {
        d_placeholder: '\u{2573}', // ╳
        d_left: '\u{2571}',        // ╱
        d_right: '\u{2572}',       // ╲
        s_placeholder: '\u{2502}', // │
        v: '\u{2502}',             // │
        h: '\u{2500}',             // ─
        split: '\u{2534}',         // ┴
        out_r: '\u{2514}',         // └
        out_l: '\u{2518}',         // ┘
        in_l: '\u{250c}',          // ┌
        in_r: '\u{2510}',          // ┐
    };

    /// Plain 7-bit characters for terminals without box drawing.
    pub const ASCII: Charset = Charset {
        d_placeholder: 'X',
        d_left: '/',
        d_right: '\\',
        s_placeholder: '|',
        v: '|',
        h: '-',
        split: '+',
        out_r: '\'',
        out_l: '\'',
        in_l: '.',
        in_r: '.',
    };

    /// Double-line box-drawing characters.
    pub const DOUBLE: Charset = Charset {
        d_placeholder: '\u{2573}', // ╳
        d_left: '\u{2571}',        // ╱
        d_right: '\u{2572}',       // ╲
        s_placeholder: '\u{2551}', // ║
        v: '\u{2551}',             // ║
        h: '\u{2550}',             // ═
        split: '\u{2569}',         // ╩
        out_r: '\u{255a}',         // ╚
        out_l: '\u{255d}',         // ╝
        in_l: '\u{2554}',          // ╔
        in_r: '\u{2557}',          // ╗
    };

    /// Build a charset from a mapping function, called once per segment.
    pub fn from_fn(f: impl Fn(Segment) -> char) -> Self {
        Charset {
            d_placeholder: f(Segment::DPlaceholder),
            d_left: f(Segment::DLeft),
            d_right: f(Segment::DRight),
            s_placeholder: f(Segment::SPlaceholder),
            v: f(Segment::V),
            h: f(Segment::H),
            split: f(Segment::Split),
            out_r: f(Segment::OutR),
            out_l: f(Segment::OutL),
            in_l: f(Segment::InL),
            in_r: f(Segment::InR),
        }
    }

    pub fn get(&self, segment: Segment) -> char {
        match segment {
            Segment::DPlaceholder => self.d_placeholder,
            Segment::DLeft => self.d_left,
            Segment::DRight => self.d_right,
            Segment::SPlaceholder => self.s_placeholder,
            Segment::V => self.v,
            Segment::H => self.h,
            Segment::Split => self.split,
            Segment::OutR => self.out_r,
            Segment::OutL => self.out_l,
            Segment::InL => self.in_l,
            Segment::InR => self.in_r,
        }
    }

    /// Whether `c` is one of this charset's drawing characters.
    pub fn contains(&self, c: char) -> bool {
        Segment::ALL.iter().any(|s| self.get(*s) == c)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Charset::UNICODE
    }
}
