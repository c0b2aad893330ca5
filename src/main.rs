#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use neattree::cli::{Args, SampleKind};
use neattree::parse::parse_trees;
use neattree::render::{write_lines, RenderConfig};
use neattree::sample::{self, number_name};
use neattree::text::sanitize_terminal_text;
use neattree::{terminal, MapLabels, TreeBlock, TreePrinter};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Catalan(9) is already 4862 trees.
const CATALAN_WARN_SIZE: usize = 8;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("neattree: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(&args);

    let printer = TreePrinter::new(args.printer_config());

    let blocks = match args.sample {
        Some(kind) => sample_blocks(&printer, &args, kind),
        None => {
            let input = read_input(&args.input)?;
            let trees = parse_trees(&input)
                .with_context(|| format!("{}: invalid tree description", input_name(&args.input)))?;
            // Labels come from outside: escape control bytes before they
            // reach the layout or the terminal.
            trees
                .iter()
                .map(|tree| {
                    let safe = MapLabels::new(tree, |label: String| sanitize_terminal_text(&label));
                    printer.render_view(&safe, tree.root())
                })
                .collect()
        }
    };

    let lines = match blocks.as_slice() {
        [] => Vec::new(),
        [block] => block.fragment_lines(),
        _ => {
            let width = args
                .width
                .unwrap_or_else(|| terminal::terminal_width() as usize);
            debug!(width, "laying out trees in rows");
            printer.pack_rows(&blocks, width)
        }
    };

    let render_config = RenderConfig {
        use_color: !args.no_color && terminal::stdout_is_terminal(),
    };
    info!(
        trees = blocks.len(),
        lines = lines.len(),
        color = render_config.use_color,
        "printing"
    );

    let mut out = terminal::buffered_stdout();
    let written = write_lines(&mut out, &lines, &render_config).and_then(|()| out.flush());
    match written {
        // The reader went away (e.g. `| head`); nothing left to do.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}

fn sample_blocks(printer: &TreePrinter, args: &Args, kind: SampleKind) -> Vec<TreeBlock> {
    let label = |n: &u64| {
        if args.words {
            number_name(*n)
        } else {
            n.to_string()
        }
    };
    let index_label = |n: &usize| label(&(*n as u64));

    match kind {
        SampleKind::Collatz => {
            let tree = sample::collatz(1, args.size).map(&label);
            vec![printer.render(Some(&tree))]
        }
        SampleKind::Random => {
            let tree = sample::random(args.size, args.seed).map(|t| t.map(&index_label));
            vec![printer.render(tree.as_ref())]
        }
        SampleKind::Catalan => {
            if args.size > CATALAN_WARN_SIZE {
                warn!(size = args.size, "catalan sample of this size produces a very large number of trees");
            }
            sample::catalan(args.size)
                .iter()
                .map(|tree| printer.render(Some(&tree.map(&index_label))))
                .collect()
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("{}: failed to read input", path.display()))
    }
}

fn input_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn input_name_for_stdin() {
        assert_eq!(input_name(Path::new("-")), "<stdin>");
        assert_eq!(input_name(&PathBuf::from("trees.txt")), "trees.txt");
    }

    #[test]
    fn catalan_sample_renders_every_shape() {
        let args = Args::parse_from(["neattree", "--sample", "catalan", "--size", "3"]);
        let printer = TreePrinter::new(args.printer_config());
        let blocks = sample_blocks(&printer, &args, SampleKind::Catalan);
        assert_eq!(blocks.len(), 5);
        assert!(blocks.iter().all(|b| b.height() > 0));
    }

    #[test]
    fn word_labels_for_samples() {
        let args = Args::parse_from(["neattree", "--sample", "collatz", "--size", "1", "--words"]);
        let printer = TreePrinter::new(args.printer_config());
        let blocks = sample_blocks(&printer, &args, SampleKind::Collatz);
        assert_eq!(blocks[0].to_lines(), vec!["one"]);
    }
}
