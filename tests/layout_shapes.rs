mod common;

use common::{assert_uniform_width, balanced, leaf, left_chain, lines, node, right_chain, square_printer};
use neattree::parse::parse_tree;
use neattree::{Charset, FnView, Node, Segment, TreePrinter};

fn diagonal() -> TreePrinter {
    TreePrinter::default()
}

// --- Empty and single-node trees ---

#[test]
fn test_empty_tree_renders_nothing() {
    let printer = diagonal();
    assert!(printer.to_lines::<Node<u8>>(None).is_empty());
    assert_eq!(printer.render_to_string::<Node<u8>>(None), "");
    let block = printer.render::<Node<u8>>(None);
    assert!(block.is_empty());
    assert_eq!((block.height(), block.width()), (0, 0));
}

#[test]
fn test_single_node_is_its_label() {
    for printer in [diagonal(), square_printer()] {
        assert_eq!(lines(&printer, &leaf("7")), vec!["7"]);
        assert_eq!(lines(&printer, &leaf("hello")), vec!["hello"]);
        assert_eq!(printer.render_to_string(Some(&leaf("x"))), "x");
    }
}

// --- Balanced trees ---

#[test]
fn test_balanced_diagonal() {
    assert_eq!(
        lines(&diagonal(), &balanced()),
        vec!["  1  ", " \u{2571} \u{2572} ", "2   3"]
    );
}

#[test]
fn test_balanced_diagonal_gap_one_keeps_three_columns() {
    assert_eq!(
        lines(&diagonal().label_gap(1), &balanced()),
        vec!["  1  ", " \u{2571} \u{2572} ", "2   3"]
    );
}

#[test]
fn test_balanced_square() {
    assert_eq!(
        lines(&square_printer(), &balanced()),
        vec!["  1  ", "\u{250c}\u{2500}\u{2534}\u{2500}\u{2510}", "2   3"]
    );
}

#[test]
fn test_balanced_square_gap_one() {
    assert_eq!(
        lines(&square_printer().label_gap(1), &balanced()),
        vec![" 1 ", "\u{250c}\u{2534}\u{2510}", "2 3"]
    );
}

#[test]
fn test_wider_gap_widens_square_split() {
    let out = lines(&square_printer().label_gap(5), &balanced());
    assert_eq!(
        out,
        vec![
            "   1   ",
            "\u{250c}\u{2500}\u{2500}\u{2534}\u{2500}\u{2500}\u{2510}",
            "2     3"
        ]
    );
    // Even gaps round up to the next odd spacing.
    assert_eq!(
        lines(&square_printer().label_gap(4), &balanced()),
        out
    );
}

// --- Chains ---

#[test]
fn test_left_chain_diagonal() {
    assert_eq!(
        lines(&diagonal(), &left_chain(&["1", "2", "3"])),
        vec!["    1", "   \u{2571} ", "  2  ", " \u{2571}   ", "3    "]
    );
}

#[test]
fn test_right_chain_diagonal() {
    assert_eq!(
        lines(&diagonal(), &right_chain(&["1", "2", "3"])),
        vec!["1    ", " \u{2572}   ", "  2  ", "   \u{2572} ", "    3"]
    );
}

#[test]
fn test_single_children_square() {
    assert_eq!(
        lines(&square_printer(), &left_chain(&["1", "2"])),
        vec![" 1", "\u{250c}\u{2518}", "2 "]
    );
    assert_eq!(
        lines(&square_printer(), &right_chain(&["1", "2"])),
        vec!["1 ", "\u{2514}\u{2510}", " 2"]
    );
}

#[test]
fn test_left_chain_square() {
    assert_eq!(
        lines(&square_printer(), &left_chain(&["1", "2", "3"])),
        vec!["  1", " \u{250c}\u{2518}", " 2 ", "\u{250c}\u{2518} ", "3  "]
    );
}

#[test]
fn test_lr_agnostic_draws_straight_down() {
    let printer = square_printer().lr_agnostic(true);
    let expected = vec!["1", "\u{2502}", "2", "\u{2502}", "3"];
    assert_eq!(lines(&printer, &left_chain(&["1", "2", "3"])), expected);
    assert_eq!(lines(&printer, &right_chain(&["1", "2", "3"])), expected);
}

#[test]
fn test_lr_agnostic_ignored_for_diagonals() {
    let tree = left_chain(&["1", "2"]);
    assert_eq!(
        lines(&diagonal().lr_agnostic(true), &tree),
        lines(&diagonal(), &tree)
    );
}

// --- Unbalanced shapes and label widths ---

#[test]
fn test_unbalanced_tree() {
    let tree = node("1", Some(right_chain(&["2", "4"])), Some(leaf("3")));
    assert_eq!(
        lines(&diagonal(), &tree),
        vec!["  1  ", " \u{2571} \u{2572} ", "2   3", " \u{2572}   ", "  4  "]
    );
}

#[test]
fn test_inner_edges_push_subtrees_apart() {
    let tree = node(
        "1",
        Some(right_chain(&["2", "4", "5"])),
        Some(left_chain(&["3", "6"])),
    );
    let out = lines(&diagonal(), &tree);
    assert_eq!(
        out,
        vec![
            "    1    ",
            "   \u{2571} \u{2572}   ",
            "  \u{2571}   \u{2572}  ",
            " \u{2571}     \u{2572} ",
            "2       3",
            " \u{2572}     \u{2571} ",
            "  4   6  ",
            "   \u{2572}     ",
            "    5    ",
        ]
    );
    assert_uniform_width(&out);
}

#[test]
fn test_taller_right_subtree_mirrors_taller_left() {
    let tree = node(
        "1",
        Some(right_chain(&["3", "6"])),
        Some(left_chain(&["2", "4", "5"])),
    );
    let mirrored: Vec<String> = lines(
        &diagonal(),
        &node(
            "1",
            Some(right_chain(&["2", "4", "5"])),
            Some(left_chain(&["3", "6"])),
        ),
    )
    .iter()
    .map(|line| {
        line.chars()
            .rev()
            .map(|c| match c {
                '\u{2571}' => '\u{2572}',
                '\u{2572}' => '\u{2571}',
                other => other,
            })
            .collect()
    })
    .collect();
    assert_eq!(lines(&diagonal(), &tree), mirrored);
}

// --- Deep chains ---

fn numbered_chain(len: usize, right: bool) -> Node<usize> {
    let mut tree = Node::leaf(len);
    for value in (1..len).rev() {
        tree = if right {
            Node::leaf(value).with_right(tree)
        } else {
            Node::leaf(value).with_left(tree)
        };
    }
    tree
}

#[test]
fn test_deep_chains_lr_agnostic() {
    let printer = square_printer().lr_agnostic(true);
    for right in [false, true] {
        let tree = numbered_chain(50_000, right);
        let block = printer.render(Some(&tree));
        assert_eq!(block.height(), 2 * 50_000 - 1);
        let out = block.to_lines();
        assert_eq!(out[0].trim(), "1");
        assert_eq!(out[1].trim(), "\u{2502}");
        assert_eq!(out.last().unwrap().trim(), "50000");
        assert_uniform_width(&out);
    }
}

#[test]
fn test_deep_diagonal_chain_walks_sideways() {
    let tree = numbered_chain(2_000, false);
    let block = diagonal().render(Some(&tree));
    assert_eq!(block.height(), 2 * 2_000 - 1);
    let out = block.to_lines();
    assert_eq!(out.last().unwrap().trim(), "2000");
    assert!(out.last().unwrap().starts_with('2'));
    assert!(out[0].ends_with('1'));
}

#[test]
fn test_multi_character_labels() {
    let tree = node("10", Some(leaf("2")), Some(leaf("300")));
    assert_eq!(
        lines(&diagonal(), &tree),
        vec!["  10  ", " \u{2571} \u{2572}  ", "2  300"]
    );
}

#[test]
fn test_wide_characters_count_two_columns() {
    let tree = node("\u{6728}", Some(leaf("a")), Some(leaf("b")));
    let out = lines(&diagonal(), &tree);
    assert_uniform_width(&out);
    assert_eq!(out.len(), 3);
}

// --- Placeholders ---

#[test]
fn test_blank_label_placeholder() {
    assert_eq!(lines(&diagonal(), &leaf("")), vec!["\u{2573}"]);
    assert_eq!(lines(&diagonal(), &leaf("   ")), vec!["\u{2573}"]);
    assert_eq!(lines(&square_printer(), &leaf("")), vec!["\u{2502}"]);
}

#[test]
fn test_placeholder_in_inner_node() {
    let tree = node("", Some(leaf("2")), Some(leaf("3")));
    assert_eq!(
        lines(&square_printer().label_gap(1), &tree),
        vec![" \u{2502} ", "\u{250c}\u{2534}\u{2510}", "2 3"]
    );
}

#[test]
fn test_no_placeholder_keeps_blank_column() {
    let printer = diagonal().use_placeholder(false);
    assert_eq!(lines(&printer, &leaf("")), vec![" "]);
    let out = lines(&printer, &node("", Some(leaf("2")), Some(leaf("3"))));
    assert_eq!(out, vec!["     ", " \u{2571} \u{2572} ", "2   3"]);
}

// --- ANSI labels ---

#[test]
fn test_ansi_labels_do_not_shift_columns() {
    let red = "\x1b[31m1\x1b[0m";
    let tree = node(red, Some(leaf("2")), Some(leaf("3")));
    let out = lines(&diagonal(), &tree);
    assert_eq!(out[0], format!("  {red}  "));
    assert_uniform_width(&out);
}

// --- Charsets ---

#[test]
fn test_ascii_charset() {
    let ascii = diagonal().charset(Charset::ASCII);
    assert_eq!(lines(&ascii, &balanced()), vec!["  1  ", " / \\ ", "2   3"]);
    let ascii_square = square_printer().charset(Charset::ASCII);
    assert_eq!(lines(&ascii_square, &balanced()), vec!["  1  ", ".-+-.", "2   3"]);
}

#[test]
fn test_custom_charset_from_fn() {
    let boxy = Charset::from_fn(|segment| match segment {
        Segment::H => '=',
        Segment::Split => '^',
        other => Charset::UNICODE.get(other),
    });
    let out = lines(&square_printer().charset(boxy), &balanced());
    assert_eq!(out[1], "\u{250c}=^=\u{2510}");
}

// --- Other tree sources ---

#[test]
fn test_fn_view_over_heap_array() {
    let heap = ["1", "2", "3", "4"];
    let view = FnView::new(
        |i: &usize| heap[*i].to_string(),
        |i: &usize| Some(2 * i + 1).filter(|c| *c < heap.len()),
        |i: &usize| Some(2 * i + 2).filter(|c| *c < heap.len()),
    );
    let out = diagonal().render_view(&view, Some(0)).to_lines();
    assert_eq!(
        out,
        vec!["    1  ", "   \u{2571} \u{2572} ", "  2   3", " \u{2571}     ", "4      "]
    );
}

#[test]
fn test_parsed_tree_renders_like_owned_tree() {
    let parsed = parse_tree("[1,2,3,null,4]").unwrap();
    let owned = node("1", Some(right_chain(&["2", "4"])), Some(leaf("3")));
    let printer = diagonal();
    assert_eq!(
        printer.render_view(&parsed, parsed.root()).to_lines(),
        lines(&printer, &owned)
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let tree = node("1", Some(right_chain(&["2", "4", "5"])), Some(left_chain(&["3", "6"])));
    let printer = square_printer();
    assert_eq!(printer.render(Some(&tree)), printer.render(Some(&tree)));
}
