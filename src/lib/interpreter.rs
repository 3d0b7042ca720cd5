use std::fmt;

use parser::{Op, ParseError};

/// Number of byte cells on the tape.
pub const TAPE_SIZE: usize = 30_000;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum EvalError {
    /// The pointer would move below cell 0 or above cell `TAPE_SIZE - 1`.
    PointerOutOfBounds,
    UnmatchedOpenBracket(usize),
    UnmatchedCloseBracket(usize),
    /// The tape or the output buffer could not be allocated.
    OutOfMemory,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EvalError::PointerOutOfBounds => write!(f, "pointer moved out of bounds"),
            EvalError::UnmatchedOpenBracket(pos) => {
                write!(f, "unmatched '[' at offset {}", pos)
            }
            EvalError::UnmatchedCloseBracket(pos) => {
                write!(f, "unmatched ']' at offset {}", pos)
            }
            EvalError::OutOfMemory => write!(f, "memory allocation failed"),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> EvalError {
        match err {
            ParseError::UnmatchedOpenBracket(pos) => EvalError::UnmatchedOpenBracket(pos),
            ParseError::UnmatchedCloseBracket(pos) => EvalError::UnmatchedCloseBracket(pos),
        }
    }
}

/// Per-execution machine state. Created fresh for each run and consumed by
/// it; nothing is shared or retained across invocations.
pub struct Machine<'a> {
    tape: Vec<u8>,
    pointer: usize,
    loop_stack: Vec<usize>,
    input: &'a [u8],
    cursor: usize,
    output: Vec<u8>,
}

impl<'a> Machine<'a> {
    pub fn new(input: &'a [u8]) -> Result<Machine<'a>, EvalError> {
        let mut tape = Vec::new();
        tape.try_reserve_exact(TAPE_SIZE)
            .map_err(|_| EvalError::OutOfMemory)?;
        tape.resize(TAPE_SIZE, 0);

        Ok(Machine {
            tape,
            pointer: 0,
            loop_stack: Vec::new(),
            input,
            cursor: 0,
            output: Vec::new(),
        })
    }

    /// Executes `ops` to completion, returning the output buffer. Any error
    /// aborts immediately and drops all state, output included.
    pub fn run(mut self, ops: &[Op]) -> Result<Vec<u8>, EvalError> {
        let mut pc = 0;
        while pc < ops.len() {
            match ops[pc] {
                Op::Right => {
                    if self.pointer == TAPE_SIZE - 1 {
                        return Err(EvalError::PointerOutOfBounds);
                    }
                    self.pointer += 1;
                }
                Op::Left => {
                    if self.pointer == 0 {
                        return Err(EvalError::PointerOutOfBounds);
                    }
                    self.pointer -= 1;
                }
                Op::Inc => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1);
                }
                Op::Dec => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1);
                }
                Op::Output => {
                    let byte = self.tape[self.pointer];
                    self.push_output(byte)?;
                }
                Op::Input => {
                    // Reads past the end of the input yield zero and leave
                    // the cursor where it is.
                    self.tape[self.pointer] = match self.input.get(self.cursor) {
                        Some(&byte) => {
                            self.cursor += 1;
                            byte
                        }
                        None => 0,
                    };
                }
                Op::LoopStart(after_end) => {
                    if self.tape[self.pointer] == 0 {
                        pc = after_end;
                        continue;
                    }
                    self.loop_stack.push(pc);
                }
                Op::LoopEnd => match self.loop_stack.last() {
                    Some(&start) => {
                        if self.tape[self.pointer] != 0 {
                            pc = start + 1;
                            continue;
                        }
                        self.loop_stack.pop();
                    }
                    // Unreachable for parsed programs; kept so a hand-built
                    // op sequence still fails cleanly.
                    None => return Err(EvalError::UnmatchedCloseBracket(pc)),
                },
            }
            pc += 1;
        }

        self.output.shrink_to_fit();
        Ok(self.output)
    }

    fn push_output(&mut self, byte: u8) -> Result<(), EvalError> {
        if self.output.len() == self.output.capacity() {
            // try_reserve grows with amortized doubling; a refused
            // reservation surfaces as an error instead of aborting.
            self.output
                .try_reserve(1)
                .map_err(|_| EvalError::OutOfMemory)?;
        }
        self.output.push(byte);
        Ok(())
    }
}

#[test]
fn machine_starts_zeroed_at_cell_zero() {
    let ops = ::parser::parse(".").unwrap();
    assert_eq!(Machine::new(b"").unwrap().run(&ops).unwrap(), vec![0]);
}

#[test]
fn hand_built_unmatched_loop_end_fails() {
    assert_eq!(
        Machine::new(b"").unwrap().run(&[Op::LoopEnd]),
        Err(EvalError::UnmatchedCloseBracket(0))
    );
}
