use crate::{PuzzleSet, Symbol};

pub(crate) fn syms(s: &str) -> Vec<Symbol> {
    Symbol::parse_all(s).expect("test symbols are in the alphabet")
}

pub(crate) fn slots(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

pub(crate) fn sample_puzzles() -> PuzzleSet {
    let (set, skipped) =
        PuzzleSet::load(["10:12-2*1+0:1", "42:6*7+00-0:2", "24:4*6/1+00:3"], 8).unwrap();
    assert!(skipped.is_empty());
    set
}
