//! bfrun runs Brainfuck programs and synthesizes programs that reproduce
//! target byte strings.

extern crate ansi_term;
extern crate base64;
extern crate bfrunlib;
extern crate getopts;

use ansi_term::Colour::Red;
use base64::Engine;
use getopts::{Matches, Options};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(bin_name: &str, opts: Options) {
    let brief = format!("Usage: {} SOURCE_FILE [options]", bin_name);
    print!("{}", opts.usage(&brief));
}

fn convert_io_error<T>(result: Result<T, std::io::Error>) -> Result<T, String> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => Err(format!("{}", e)),
    }
}

fn run_program_file(matches: &Matches) -> Result<Vec<u8>, String> {
    let path = &matches.free[0];
    let program = convert_io_error(fs::read_to_string(path))?;

    let input = match matches.opt_str("input") {
        Some(input_path) => convert_io_error(fs::read(&input_path))?,
        None => Vec::new(),
    };

    match bfrunlib::interpret(&program, &input) {
        Ok(output) => Ok(output),
        Err(eval_error) => Err(format!("{}", eval_error)),
    }
}

fn synthesize_from_file(matches: &Matches) -> Result<Vec<u8>, String> {
    let path = &matches.free[0];
    let target = convert_io_error(fs::read(path))?;
    Ok(bfrunlib::synthesize(&target).into_bytes())
}

fn main() {
    let args: Vec<_> = env::args().collect();

    let mut opts = Options::new();

    opts.optflag("h", "help", "print usage");
    opts.optflag("v", "version", "print bfrun version");
    opts.optflag(
        "s",
        "synthesize",
        "treat SOURCE_FILE as target bytes and emit a program reproducing them",
    );
    opts.optflag("", "base64", "base64-encode the emitted bytes");

    opts.optopt(
        "i",
        "input",
        "file supplying the program's input bytes (default: empty)",
        "FILE",
    );
    opts.optopt(
        "o",
        "output",
        "write emitted bytes to FILE instead of stdout",
        "FILE",
    );

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(_) => {
            print_usage(&args[0], opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print_usage(&args[0], opts);
        return;
    }

    if matches.opt_present("v") {
        println!("bfrun {}", VERSION);
        return;
    }

    if matches.free.len() != 1 {
        print_usage(&args[0], opts);
        process::exit(1);
    }

    let result = if matches.opt_present("s") {
        synthesize_from_file(&matches)
    } else {
        run_program_file(&matches)
    };

    let mut emitted = match result {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{} {}", Red.bold().paint("error:"), e);
            process::exit(2);
        }
    };

    if matches.opt_present("base64") {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&emitted);
        emitted = encoded.into_bytes();
        emitted.push(b'\n');
    }

    match matches.opt_str("o") {
        Some(out_path) => {
            if let Err(e) = fs::write(&out_path, &emitted) {
                eprintln!("{} {}", Red.bold().paint("error:"), e);
                process::exit(2);
            }
        }
        None => {
            if let Err(e) = io::stdout().write_all(&emitted) {
                eprintln!("{} {}", Red.bold().paint("error:"), e);
                process::exit(2);
            }
        }
    }
}
