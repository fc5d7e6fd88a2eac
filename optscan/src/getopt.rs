//! Building option specs from traditional `getopt` descriptions.
//!
//! ```
//! use optscan::getopt;
//!
//! let argv = ["prog", "-vf", "out.txt", "--color", "input"];
//! let values = getopt::getopt_long(&argv, "vf:", "color::,verbose").unwrap();
//! assert_eq!(
//!     optscan::to_argv(&values),
//!     ["prog", "-v", "-f", "out.txt", "--color=", "input"]
//! );
//! ```

use crate::config::OptionSpec;
use crate::error::Result;
use crate::value::Value;
use crate::Parser;

/// Specs compiled from a short option string such as `"+vf:C::"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortOptions {
    pub specs: Vec<OptionSpec>,
    /// Set by a leading `+`: stop at the first positional argument.
    pub disable_permute: bool,
}

/// Compile a `getopt(3)` option string.
///
/// Each character becomes a groupable option with prefix `-`. A following
/// `:` makes its argument required, `::` optional. A leading `+` disables
/// permutation; a leading `-` or `:` is accepted and has no effect here.
pub fn short_options(optstring: &str) -> ShortOptions {
    let mut out = ShortOptions::default();
    let mut rest = optstring;

    loop {
        if let Some(r) = rest.strip_prefix('+') {
            out.disable_permute = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix(|c: char| c == '-' || c == ':') {
            rest = r;
        } else {
            break;
        }
    }

    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' {
            // Stray colon with no option in front of it.
            continue;
        }
        let mut spec = OptionSpec::groupable("-", c);
        if chars.next_if_eq(&':').is_some() {
            spec = if chars.next_if_eq(&':').is_some() {
                spec.optional("")
            } else {
                spec.required()
            };
        }
        out.specs.push(spec);
    }
    out
}

/// Compile a `getopt(1)` long option list such as `"verbose,file:,color::"`.
///
/// Entries are separated by commas or whitespace; empty entries are skipped.
pub fn long_options(list: &str) -> Vec<OptionSpec> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            if let Some(name) = entry.strip_suffix("::") {
                (!name.is_empty()).then(|| OptionSpec::standalone("--", name).optional(""))
            } else if let Some(name) = entry.strip_suffix(':') {
                (!name.is_empty()).then(|| OptionSpec::standalone("--", name).required())
            } else {
                Some(OptionSpec::standalone("--", entry))
            }
        })
        .collect()
}

/// True when `POSIXLY_CORRECT` or `POSIX_ME_HARDER` is set in the
/// environment.
pub fn posixly_correct() -> bool {
    posix_requested(|name| std::env::var_os(name).is_some())
}

fn posix_requested<F: Fn(&str) -> bool>(is_set: F) -> bool {
    is_set("POSIXLY_CORRECT") || is_set("POSIX_ME_HARDER")
}

/// Parse `argv` the way `getopt(3)` would with `optstring`.
pub fn getopt<S: AsRef<str>>(argv: &[S], optstring: &str) -> Result<Vec<Value>> {
    getopt_long(argv, optstring, "")
}

/// Parse `argv` the way `getopt_long(3)` would.
///
/// `--` separates options from arguments. Options are permuted before
/// positionals unless `optstring` starts with `+` or `POSIXLY_CORRECT` is
/// set.
pub fn getopt_long<S: AsRef<str>>(argv: &[S], optstring: &str, longopts: &str) -> Result<Vec<Value>> {
    parser(optstring, longopts, posixly_correct()).parse(argv)
}

/// The [`Parser`] behind [`getopt_long`], with the environment check made
/// explicit.
pub fn parser(optstring: &str, longopts: &str, posixly_correct: bool) -> Parser {
    let short = short_options(optstring);
    Parser::new()
        .options(short.specs)
        .options(long_options(longopts))
        .separator("--")
        .disable_permute(short.disable_permute || posixly_correct)
}
