// Shared helpers
mod helpers;

// Parser and evaluator tests
mod evaluator;


mod error;
