use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::charset::Charset;
use crate::printer::PrinterConfig;

const AFTER_HELP: &str = "\
Input format:
  One tree per line, listed level by level. Separate labels with commas or
  spaces; brackets are optional. Use null, nil or # for a missing child and
  double quotes for labels containing separators.

Examples:
  echo '[1,2,3,null,4]' | neattree
  neattree --square trees.txt
  neattree --sample random --size 30 --seed 7 --square --label-gap 1
  neattree --sample catalan --size 4 --width 100";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "neattree",
    version,
    about = "Print binary trees neatly in the terminal",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Input file, or '-' for stdin (ignored with --sample)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Draw square box-drawing branches instead of diagonals
    #[arg(short = 's', long = "square")]
    pub square: bool,

    /// Draw single children straight down (implies --square)
    #[arg(long = "lr-agnostic")]
    pub lr_agnostic: bool,

    /// Minimum spaces between labels on the same level
    #[arg(
        short = 'g',
        long = "label-gap",
        default_value = "2",
        value_parser = clap::value_parser!(u16).range(0..=1000)
    )]
    pub label_gap: u16,

    /// Spaces between trees in a row
    #[arg(
        long = "col-gap",
        default_value = "1",
        value_parser = clap::value_parser!(u16).range(0..=1000)
    )]
    pub col_gap: u16,

    /// Blank lines between rows of trees
    #[arg(
        long = "row-gap",
        default_value = "1",
        value_parser = clap::value_parser!(u16).range(0..=1000)
    )]
    pub row_gap: u16,

    /// Leave blank labels blank instead of drawing a placeholder
    #[arg(long = "no-placeholder")]
    pub no_placeholder: bool,

    /// Characters used to draw branches
    #[arg(long = "charset", value_enum, default_value = "unicode")]
    pub charset: CharsetArg,

    /// Maximum output width when printing several trees (default: terminal width)
    #[arg(short = 'w', long = "width")]
    pub width: Option<usize>,

    /// Print a generated sample tree instead of reading input
    #[arg(long = "sample", value_enum)]
    pub sample: Option<SampleKind>,

    /// Size of the sample: levels for collatz, nodes for random and catalan
    #[arg(short = 'n', long = "size", default_value = "12")]
    pub size: usize,

    /// Seed for --sample random
    #[arg(long = "seed", default_value = "0")]
    pub seed: u64,

    /// Label sample trees with number names instead of digits
    #[arg(long = "words")]
    pub words: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetArg {
    Unicode,
    Ascii,
    Double,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Unicode => Charset::UNICODE,
            CharsetArg::Ascii => Charset::ASCII,
            CharsetArg::Double => Charset::DOUBLE,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Reverse Collatz sequences starting from 1
    Collatz,
    /// Random search-tree shape
    Random,
    /// Every search-tree shape of the given size
    Catalan,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        if self.lr_agnostic {
            self.square = true;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.no_color = true;
        }
        self
    }

    pub fn printer_config(&self) -> PrinterConfig {
        PrinterConfig {
            square_branches: self.square,
            lr_agnostic: self.lr_agnostic,
            label_gap: self.label_gap.into(),
            col_gap: self.col_gap.into(),
            row_gap: self.row_gap.into(),
            use_placeholder: !self.no_placeholder,
            flush: true,
            charset: self.charset.into(),
        }
    }

    /// Default log level for the verbosity flags, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
