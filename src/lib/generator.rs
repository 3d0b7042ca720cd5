use itertools::repeat_n;

/// Largest delta emitted as a plain run of `+`/`-`; anything larger goes
/// through a counting loop.
const DIRECT_LIMIT: i32 = 10;

/// Emits a program that reproduces `target` when run with empty input.
///
/// The encoding is a running delta: one tracked cell is nudged from each
/// target byte's predecessor to the byte itself and then output. All
/// arithmetic is carried out on values normalized to 0-255, so bytes above
/// 127 encode the same way as ASCII.
pub fn synthesize(target: &[u8]) -> String {
    let mut program = String::new();
    let mut cv: i32 = 0;

    for &byte in target {
        let value = i32::from(byte);
        emit_delta(&mut program, value - cv);
        program.push('.');
        cv = value;
    }

    program
}

fn emit_delta(program: &mut String, diff: i32) {
    if diff == 0 {
        return;
    }

    let sign = if diff > 0 { '+' } else { '-' };
    let magnitude = diff.abs();

    if magnitude <= DIRECT_LIMIT {
        program.extend(repeat_n(sign, magnitude as usize));
        return;
    }

    // Count down in the right-hand scratch cell, applying ten per iteration
    // to the tracked cell; the scratch is zero again when the loop exits and
    // the pointer is back on the tracked cell.
    let iterations = magnitude / DIRECT_LIMIT;
    let remainder = magnitude % DIRECT_LIMIT;

    program.push('>');
    program.extend(repeat_n('+', iterations as usize));
    program.push_str("[<");
    program.extend(repeat_n(sign, DIRECT_LIMIT as usize));
    program.push_str(">-]<");
    program.extend(repeat_n(sign, remainder as usize));
}

#[test]
fn synthesize_empty_target_is_empty() {
    assert_eq!(synthesize(b""), "");
}

#[test]
fn delta_at_direct_limit_stays_direct() {
    assert_eq!(synthesize(&[10]), "++++++++++.");
}

#[test]
fn delta_past_direct_limit_uses_loop() {
    assert_eq!(synthesize(&[11]), ">+[<++++++++++>-]<+.");
}

#[test]
fn downward_delta_loops_with_decrements() {
    // 200 down to 50 is a delta of -150: fifteen loop iterations, no
    // remainder.
    let program = synthesize(&[200, 50]);
    assert!(program.ends_with(">+++++++++++++++[<---------->-]<."));
}
