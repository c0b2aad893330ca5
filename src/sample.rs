//! Sample trees for demos and visual checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tree::Node;

/// Reverse Collatz tree rooted at `start`, `max_len` levels deep.
///
/// Every number `n` is reached from `2n`, and numbers of the form `6k + 4`
/// (other than 4 itself) are also reached from `(n - 1) / 3`. Those are the
/// left and right children respectively.
pub fn collatz(start: u64, max_len: usize) -> Node<u64> {
    collatz_from(start, 1, max_len)
}

fn collatz_from(n: u64, len: usize, max_len: usize) -> Node<u64> {
    let mut node = Node::leaf(n);
    if len < max_len {
        if let Some(double) = n.checked_mul(2) {
            node = node.with_left(collatz_from(double, len + 1, max_len));
        }
        if n % 6 == 4 && n > 4 {
            node = node.with_right(collatz_from((n - 1) / 3, len + 1, max_len));
        }
    }
    node
}

/// Random search-tree shape holding `1..=size`, reproducible for a seed.
pub fn random(size: usize, seed: u64) -> Option<Node<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_range(&mut rng, 1, size)
}

fn random_range<R: Rng>(rng: &mut R, first: usize, last: usize) -> Option<Node<usize>> {
    if first > last {
        return None;
    }
    let value = first + rng.gen_range(0..=last - first);
    let left = random_range(rng, first, value - 1);
    let right = random_range(rng, value + 1, last);
    Some(Node::new(value, left, right))
}

/// Every search-tree shape holding `1..=size`. There are Catalan(size) of
/// them, so keep `size` small.
pub fn catalan(size: usize) -> Vec<Node<usize>> {
    catalan_range(1, size).into_iter().flatten().collect()
}

fn catalan_range(first: usize, last: usize) -> Vec<Option<Node<usize>>> {
    if first > last {
        return vec![None];
    }
    let mut all = Vec::new();
    for root in first..=last {
        let lefts = catalan_range(first, root - 1);
        let rights = catalan_range(root + 1, last);
        for left in &lefts {
            for right in &rights {
                all.push(Some(Node::new(root, left.clone(), right.clone())));
            }
        }
    }
    all
}

const UNDER_TWENTY: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const DECADES: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English name of `n` below one hundred; larger numbers stay as digits.
pub fn number_name(n: u64) -> String {
    match n {
        0..=19 => UNDER_TWENTY[n as usize].to_string(),
        20..=99 => {
            let decade = DECADES[(n / 10 - 2) as usize];
            match n % 10 {
                0 => decade.to_string(),
                unit => format!("{decade} {}", UNDER_TWENTY[unit as usize]),
            }
        }
        _ => n.to_string(),
    }
}
