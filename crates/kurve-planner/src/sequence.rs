//! Candidate enumeration.
//!
//! Sequences are generated multiset by multiset (combinations with
//! replacement of `{Straight, Left, Right}`), and each multiset is expanded
//! into its distinct orderings.  The result holds every one of the `3^N`
//! sequences exactly once, in a fixed order.

use kurve_core::Action;
use rustc_hash::FxHashSet;

/// Enumeration order of the action alphabet.
const ALPHABET: [Action; 3] = [Action::Straight, Action::Left, Action::Right];

/// Every distinct sequence of `n` actions.
pub fn enumerate_sequences(n: usize) -> Vec<Vec<Action>> {
    let mut out = Vec::with_capacity(3usize.saturating_pow(n as u32));
    let mut seen: FxHashSet<Vec<Action>> = FxHashSet::default();
    for multiset in multisets(n) {
        for perm in permutations(&multiset) {
            if seen.insert(perm.clone()) {
                out.push(perm);
            }
        }
    }
    out
}

/// Non-decreasing index tuples over `ALPHABET`, i.e. combinations with
/// replacement, in lexicographic order.
fn multisets(n: usize) -> Vec<Vec<Action>> {
    fn go(start: usize, left: usize, cur: &mut Vec<Action>, out: &mut Vec<Vec<Action>>) {
        if left == 0 {
            out.push(cur.clone());
            return;
        }
        for i in start..ALPHABET.len() {
            cur.push(ALPHABET[i]);
            go(i, left - 1, cur, out);
            cur.pop();
        }
    }
    let mut out = Vec::new();
    go(0, n, &mut Vec::with_capacity(n), &mut out);
    out
}

/// All orderings of `items` (with repeats when `items` has duplicates).
fn permutations(items: &[Action]) -> Vec<Vec<Action>> {
    fn go(items: &[Action], used: &mut [bool], cur: &mut Vec<Action>, out: &mut Vec<Vec<Action>>) {
        if cur.len() == items.len() {
            out.push(cur.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            cur.push(items[i]);
            go(items, used, cur, out);
            cur.pop();
            used[i] = false;
        }
    }
    let mut out = Vec::new();
    go(items, &mut vec![false; items.len()], &mut Vec::with_capacity(items.len()), &mut out);
    out
}
