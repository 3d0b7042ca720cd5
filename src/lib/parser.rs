use std::fmt;

pub use self::Op::{Dec, Inc, Input, Left, LoopEnd, LoopStart, Output, Right};

/// One executable Brainfuck command. Characters outside the eight-command
/// alphabet never reach this representation; they are dropped during parsing.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Op {
    Right,
    Left,
    Inc,
    Dec,
    Output,
    Input,
    /// `[`, carrying the index one past its matching `]` so a skipped loop
    /// is a single jump rather than a rescan of the program text.
    LoopStart(usize),
    /// `]`; its matching `[` is found through the runtime loop stack.
    LoopEnd,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ParseError {
    /// A `[` at the given source offset is never closed.
    UnmatchedOpenBracket(usize),
    /// A `]` at the given source offset has no open loop to close.
    UnmatchedCloseBracket(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::UnmatchedOpenBracket(pos) => {
                write!(f, "unmatched '[' at offset {}", pos)
            }
            ParseError::UnmatchedCloseBracket(pos) => {
                write!(f, "unmatched ']' at offset {}", pos)
            }
        }
    }
}

/// Parses program text into an executable instruction sequence.
///
/// Bracket matching is resolved here, in one pass with an explicit stack, so
/// execution never scans the program text. Every non-command byte is skipped;
/// programs are free to carry annotation text between commands.
pub fn parse(source: &str) -> Result<Vec<Op>, ParseError> {
    let mut ops = Vec::new();
    let mut open_brackets: Vec<(usize, usize)> = Vec::new();

    for (pos, byte) in source.bytes().enumerate() {
        match byte {
            b'>' => ops.push(Right),
            b'<' => ops.push(Left),
            b'+' => ops.push(Inc),
            b'-' => ops.push(Dec),
            b'.' => ops.push(Output),
            b',' => ops.push(Input),
            b'[' => {
                open_brackets.push((pos, ops.len()));
                // Placeholder target, patched when the matching `]` arrives.
                ops.push(LoopStart(0));
            }
            b']' => {
                let (_, open_idx) = match open_brackets.pop() {
                    Some(entry) => entry,
                    None => return Err(ParseError::UnmatchedCloseBracket(pos)),
                };
                ops.push(LoopEnd);
                ops[open_idx] = LoopStart(ops.len());
            }
            _ => {}
        }
    }

    if let Some(&(pos, _)) = open_brackets.last() {
        return Err(ParseError::UnmatchedOpenBracket(pos));
    }

    Ok(ops)
}

#[test]
fn parse_skips_annotation_text() {
    let ops = parse("add two: + then +, done.").unwrap();
    assert_eq!(ops, vec![Inc, Inc, Input, Output]);
}

#[test]
fn parse_resolves_nested_brackets() {
    let ops = parse("[[-]]").unwrap();
    assert_eq!(
        ops,
        vec![LoopStart(5), LoopStart(4), Dec, LoopEnd, LoopEnd]
    );
}

#[test]
fn parse_rejects_unmatched_open_bracket() {
    assert_eq!(parse("+[+"), Err(ParseError::UnmatchedOpenBracket(1)));
}

#[test]
fn parse_rejects_unmatched_close_bracket() {
    assert_eq!(parse("]"), Err(ParseError::UnmatchedCloseBracket(0)));
}

#[test]
fn parse_reports_innermost_unclosed_open_bracket() {
    assert_eq!(parse("[["), Err(ParseError::UnmatchedOpenBracket(1)));
}
