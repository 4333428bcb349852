#![no_main]

use libfuzzer_sys::fuzz_target;
use mathler::{check_guess, PuzzleSet};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok((puzzles, _)) = PuzzleSet::load(["10:12-2*1+0:1"], 8) else {
            return;
        };

        let guess: Vec<String> = s.chars().map(|c| c.to_string()).collect();
        let result = check_guess(&guess, 10, &puzzles);

        assert_eq!(result.states.len(), 8);
        assert!(!result.solved || result.valid);
    }
});
