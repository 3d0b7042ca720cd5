/// Integration tests for the tape machine.

extern crate bfrunlib;
#[macro_use]
extern crate matches;

use bfrunlib::interpret;
use bfrunlib::interpreter::{EvalError, TAPE_SIZE};

#[test]
fn three_increments_emit_byte_three() {
    assert_eq!(interpret("+++.", b"").unwrap(), vec![3]);
}

#[test]
fn echo_single_input_byte() {
    assert_eq!(interpret(",.", b"A").unwrap(), b"A".to_vec());
}

#[test]
fn empty_program_produces_empty_output() {
    assert_eq!(interpret("", b"").unwrap(), Vec::<u8>::new());
}

#[test]
fn close_bracket_without_open_fails() {
    assert_matches!(
        interpret("]", b""),
        Err(EvalError::UnmatchedCloseBracket(0))
    );
}

#[test]
fn open_bracket_without_close_fails_before_execution() {
    // Validation rejects the program before the leading `.` can emit
    // anything.
    assert_matches!(
        interpret(".[", b""),
        Err(EvalError::UnmatchedOpenBracket(1))
    );
}

#[test]
fn left_from_cell_zero_fails() {
    assert_matches!(interpret("<", b""), Err(EvalError::PointerOutOfBounds));
}

#[test]
fn right_to_last_cell_is_in_bounds() {
    let mut program = ">".repeat(TAPE_SIZE - 1);
    program.push('.');
    assert_eq!(interpret(&program, b"").unwrap(), vec![0]);
}

#[test]
fn right_past_last_cell_fails() {
    let program = ">".repeat(TAPE_SIZE);
    assert_matches!(
        interpret(&program, b""),
        Err(EvalError::PointerOutOfBounds)
    );
}

#[test]
fn increment_wraps_modulo_256() {
    let mut program = "+".repeat(256);
    program.push('.');
    assert_eq!(interpret(&program, b"").unwrap(), vec![0]);
}

#[test]
fn decrement_wraps_from_zero_to_255() {
    assert_eq!(interpret("-.", b"").unwrap(), vec![255]);
}

#[test]
fn exhausted_input_reads_zero() {
    // One real byte, then two reads past the end of the input.
    assert_eq!(interpret(",.,.,.", b"A").unwrap(), vec![b'A', 0, 0]);
}

#[test]
fn input_bytes_are_consumed_in_order() {
    assert_eq!(interpret(",>,>,.<.<.", b"abc").unwrap(), b"cba".to_vec());
}

#[test]
fn non_command_characters_are_ignored() {
    assert_eq!(interpret("three: + + + (emit) .", b"").unwrap(), vec![3]);
}

#[test]
fn skipped_loop_jumps_over_nested_body() {
    // Cell 0 is zero, so the outer loop and everything nested in it never
    // run, including the `.` inside.
    assert_eq!(interpret("[[>+<-].]+.", b"").unwrap(), vec![1]);
}

#[test]
fn loop_transfers_cell_value() {
    // Move 5 from cell 0 into cell 1.
    assert_eq!(interpret("+++++[->+<]>.", b"").unwrap(), vec![5]);
}

#[test]
fn nested_loops_multiply() {
    // 4 * 3 into cell 2 via a nested restore loop.
    let program = "++++[>+++[>+<-]<-]>>.";
    assert_eq!(interpret(program, b"").unwrap(), vec![12]);
}

#[test]
fn failure_discards_output_already_produced() {
    // Two bytes are emitted before the pointer error; the caller sees only
    // the failure.
    assert_matches!(
        interpret("+.+.<", b""),
        Err(EvalError::PointerOutOfBounds)
    );
}
