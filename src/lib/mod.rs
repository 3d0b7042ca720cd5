#![warn(trivial_numeric_casts)]

//! bfrunlib executes Brainfuck programs and synthesizes programs that
//! reproduce arbitrary byte strings.

extern crate itertools;

pub mod ffi;
pub mod generator;
pub mod interpreter;
pub mod parser;

use interpreter::{EvalError, Machine};

/// Runs `program` against `input` and returns the bytes it emits.
///
/// The program is validated before anything executes, so unmatched brackets
/// are rejected up front. On any failure the output produced so far is
/// discarded; callers never see a partial buffer.
pub fn interpret(program: &str, input: &[u8]) -> Result<Vec<u8>, EvalError> {
    let ops = parser::parse(program)?;
    Machine::new(input)?.run(&ops)
}

/// Emits a program that, run with empty input, reproduces `target` exactly.
/// Never fails for finite input.
pub fn synthesize(target: &[u8]) -> String {
    generator::synthesize(target)
}

#[test]
fn round_trip_through_public_entry_points() {
    let target = b"bf";
    assert_eq!(interpret(&synthesize(target), b"").unwrap(), target.to_vec());
}
