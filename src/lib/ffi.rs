//! Native exports for non-Rust hosts.
//!
//! Output crosses the boundary as an explicit `(data, len)` pair because
//! interpreter output may legitimately contain zero bytes. Every non-null
//! buffer returned from `bf_interpret` or `bf_synthesize` must be passed to
//! `bf_release` exactly once; failure diagnostics go to stderr and a null
//! pointer is returned.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use std::slice;

#[repr(C)]
pub struct OwnedBuffer {
    pub data: *mut u8,
    pub len: usize,
}

fn hand_off(bytes: Vec<u8>) -> *mut OwnedBuffer {
    let boxed = bytes.into_boxed_slice();
    let len = boxed.len();
    let data = Box::into_raw(boxed) as *mut u8;
    Box::into_raw(Box::new(OwnedBuffer { data, len }))
}

/// Runs a NUL-terminated program against a NUL-terminated input string.
///
/// # Safety
/// `program` and `input` must be valid NUL-terminated strings, or null.
#[no_mangle]
pub unsafe extern "C" fn bf_interpret(
    program: *const c_char,
    input: *const c_char,
) -> *mut OwnedBuffer {
    if program.is_null() || input.is_null() {
        return ptr::null_mut();
    }

    // Invalid UTF-8 decodes to replacement characters, which the parser
    // skips like any other non-command text.
    let program = String::from_utf8_lossy(CStr::from_ptr(program).to_bytes()).into_owned();
    let input = CStr::from_ptr(input).to_bytes();

    match ::interpret(&program, input) {
        Ok(bytes) => hand_off(bytes),
        Err(err) => {
            eprintln!("{}", err);
            ptr::null_mut()
        }
    }
}

/// Synthesizes a program reproducing the `len` bytes at `target`.
///
/// # Safety
/// `target` must point to at least `len` readable bytes, or be null.
#[no_mangle]
pub unsafe extern "C" fn bf_synthesize(target: *const u8, len: usize) -> *mut OwnedBuffer {
    if target.is_null() {
        return ptr::null_mut();
    }

    let target = slice::from_raw_parts(target, len);
    hand_off(::synthesize(target).into_bytes())
}

/// Releases a buffer handed out by `bf_interpret` or `bf_synthesize`.
///
/// # Safety
/// `buffer` must have come from one of the two producers above and must not
/// be released more than once.
#[no_mangle]
pub unsafe extern "C" fn bf_release(buffer: *mut OwnedBuffer) {
    if buffer.is_null() {
        return;
    }

    let buffer = Box::from_raw(buffer);
    drop(Box::from_raw(slice::from_raw_parts_mut(
        buffer.data,
        buffer.len,
    ) as *mut [u8]));
}

#[test]
fn interpret_hands_off_buffer_and_releases() {
    use std::ffi::CString;

    let program = CString::new("+++.").unwrap();
    let input = CString::new("").unwrap();
    unsafe {
        let buffer = bf_interpret(program.as_ptr(), input.as_ptr());
        assert!(!buffer.is_null());
        assert_eq!(slice::from_raw_parts((*buffer).data, (*buffer).len), &[3]);
        bf_release(buffer);
    }
}

#[test]
fn interpret_returns_null_on_failure() {
    use std::ffi::CString;

    let program = CString::new("<").unwrap();
    let input = CString::new("").unwrap();
    unsafe {
        assert!(bf_interpret(program.as_ptr(), input.as_ptr()).is_null());
    }
}

#[test]
fn synthesized_program_round_trips_through_exports() {
    use std::ffi::CString;

    let target = b"Ok";
    unsafe {
        let program = bf_synthesize(target.as_ptr(), target.len());
        assert!(!program.is_null());

        // Program text is ASCII with no NULs, so it can cross back in as a
        // C string.
        let text = slice::from_raw_parts((*program).data, (*program).len).to_vec();
        let program_cstr = CString::new(text).unwrap();
        let empty = CString::new("").unwrap();

        let output = bf_interpret(program_cstr.as_ptr(), empty.as_ptr());
        assert!(!output.is_null());
        assert_eq!(
            slice::from_raw_parts((*output).data, (*output).len),
            &target[..]
        );

        bf_release(output);
        bf_release(program);
    }
}
