//! `getopt(1)` built on optscan.
//!
//! Checks a list of parameters against short and long option definitions
//! and prints them back in canonical order: options first, then `--`, then
//! the remaining arguments.

mod arguments;
mod error;
mod logging;

use optscan::Value;
use tracing::debug;

use crate::arguments::{parse_args, Cmdline, USAGE};
use crate::error::{GetoptError, Result};

/// Exit status for `-T`, which util-linux uses to announce the enhanced
/// getopt.
const TEST_EXIT: i32 = 4;

fn main() {
    logging::init();
    let argv: Vec<String> = std::env::args().collect();
    std::process::exit(run(&argv));
}

fn run(argv: &[String]) -> i32 {
    let cmd = match parse_args(argv) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("getopt: {}", e);
            eprintln!("Try 'getopt --help' for more information.");
            return e.exit_code();
        }
    };

    if cmd.help {
        print!("{}", USAGE);
        return 0;
    }
    if cmd.version {
        println!("getopt from optscan {}", env!("CARGO_PKG_VERSION"));
        return 0;
    }
    if cmd.test {
        return TEST_EXIT;
    }

    match check(&cmd, optscan::getopt::posixly_correct()) {
        Ok(line) => {
            if !cmd.quiet_output {
                println!("{}", line);
            }
            0
        }
        Err(e) => {
            if !cmd.quiet {
                eprintln!("{}: {}", cmd.program_name(), e);
            }
            e.exit_code()
        }
    }
}

/// Parse the parameters and render the canonical output line.
fn check(cmd: &Cmdline, posixly_correct: bool) -> Result<String> {
    let parser = optscan::getopt::parser(&cmd.optstring, &cmd.longopts, posixly_correct);
    let permute = parser.permutes();

    let mut argv = Vec::with_capacity(cmd.params.len() + 1);
    argv.push(cmd.program_name().to_string());
    argv.extend(cmd.params.iter().cloned());
    debug!(?argv, permute, "checking parameters");

    let values = parser.parse(&argv).map_err(|e| match e.kind() {
        optscan::ErrorKind::Config => GetoptError::Definition(e),
        _ => GetoptError::Payload(e),
    })?;
    Ok(render(&values, permute))
}

/// Options, then `--`, then positionals, each word preceded by a space.
///
/// The first separator is swallowed when it ended option parsing: always
/// when permuting, otherwise only if no positional came before it.
fn render(values: &[Value], permute: bool) -> String {
    let mut options = Vec::new();
    let mut rest: Vec<String> = Vec::new();
    let mut swallowed = false;

    for value in values {
        match value {
            Value::ProgramName(_) => {}
            Value::Option(opt) => options.extend(opt.strings()),
            Value::Separator(_) if !swallowed && (permute || rest.is_empty()) => swallowed = true,
            other => rest.extend(other.strings()),
        }
    }

    let words = options
        .iter()
        .map(String::as_str)
        .chain(["--"])
        .chain(rest.iter().map(String::as_str));
    let mut line = String::new();
    for word in words {
        line.push(' ');
        line.push_str(word);
    }
    line
}
