use optscan::{OptionSpec, Parser, Value};

use crate::error::{GetoptError, Result};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cmdline {
    pub optstring: String,
    pub longopts: String,
    pub name: Option<String>,
    pub quiet: bool,
    pub quiet_output: bool,
    pub test: bool,
    pub help: bool,
    pub version: bool,
    /// The parameters to check, without getopt's own options.
    pub params: Vec<String>,
}

impl Cmdline {
    /// Name used for the checked parameters and in diagnostics.
    pub fn program_name(&self) -> &str {
        self.name.as_deref().unwrap_or("getopt")
    }
}

pub const USAGE: &str = r#"Usage:
 getopt <optstring> <parameters>
 getopt [options] [--] <optstring> <parameters>
 getopt [options] -o|--options <optstring> [options] [--] <parameters>

Parse command options.

Options:
 -l, --longoptions <longopts>  the long options to be recognized
 -n, --name <progname>         the name under which errors are reported
 -o, --options <optstring>     the short options to be recognized
 -q, --quiet                   disable error reporting by getopt(3)
 -Q, --quiet-output            no normal output
 -T, --test                    test for getopt(1) version
 -u, --unquoted                do not quote the output (always the case)

 -h, --help                    display this help
 -V, --version                 display version

Set OPTSCAN_LOG=debug to trace how the parameters are classified.
"#;

fn build_options() -> Parser {
    let mut parser = Parser::new();
    for (short, long) in [
        ('o', "options"),
        ('l', "longoptions"),
        ('n', "name"),
    ] {
        parser = parser
            .option(OptionSpec::groupable("-", short).required())
            .option(OptionSpec::standalone("--", long).required());
    }
    for (short, long) in [
        ('q', "quiet"),
        ('Q', "quiet-output"),
        ('T', "test"),
        ('u', "unquoted"),
        ('h', "help"),
        ('V', "version"),
    ] {
        parser = parser
            .option(OptionSpec::groupable("-", short))
            .option(OptionSpec::standalone("--", long));
    }
    // getopt stops at the first word that is not one of its own options.
    parser.separator("--").disable_permute(true)
}

pub fn parse_args<S: AsRef<str>>(argv: &[S]) -> Result<Cmdline> {
    let values = build_options().parse(argv)?;

    let mut cmd = Cmdline::default();
    let mut have_optstring = false;
    let mut own_done = false;

    for value in values {
        match value {
            Value::ProgramName(_) => {}
            Value::Option(opt) => match opt.spec.name.as_str() {
                "o" | "options" => {
                    cmd.optstring = opt.value;
                    have_optstring = true;
                }
                "l" | "longoptions" => {
                    if !cmd.longopts.is_empty() {
                        cmd.longopts.push(',');
                    }
                    cmd.longopts.push_str(&opt.value);
                }
                "n" | "name" => cmd.name = Some(opt.value),
                "q" | "quiet" => cmd.quiet = true,
                "Q" | "quiet-output" => cmd.quiet_output = true,
                "T" | "test" => cmd.test = true,
                "h" | "help" => cmd.help = true,
                "V" | "version" => cmd.version = true,
                // Output is never quoted.
                "u" | "unquoted" => {}
                _ => {}
            },
            // The first `--` only ends getopt's own options.
            Value::Separator(_) if !own_done => own_done = true,
            Value::Separator(sep) => cmd.params.push(sep.token.literal),
            Value::Positional(pos) => {
                own_done = true;
                cmd.params.push(pos.value);
            }
        }
    }

    if !have_optstring && !(cmd.help || cmd.version || cmd.test) {
        if cmd.params.is_empty() {
            return Err(GetoptError::MissingOptstring);
        }
        cmd.optstring = cmd.params.remove(0);
    }

    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(cmd: &Cmdline) -> Vec<&str> {
        cmd.params.iter().map(String::as_str).collect()
    }

    #[test]
    fn options_form() {
        let cmd = parse_args(&[
            "getopt", "-o", "vf:", "--longoptions", "verbose", "-l", "file:", "-n", "prog", "--",
            "-v", "a",
        ])
        .unwrap();
        assert_eq!(cmd.optstring, "vf:");
        assert_eq!(cmd.longopts, "verbose,file:");
        assert_eq!(cmd.program_name(), "prog");
        assert_eq!(params(&cmd), vec!["-v", "a"]);
    }

    #[test]
    fn traditional_form() {
        let cmd = parse_args(&["getopt", "ab:", "-a", "-b", "1", "c"]).unwrap();
        assert_eq!(cmd.optstring, "ab:");
        assert_eq!(cmd.program_name(), "getopt");
        assert_eq!(params(&cmd), vec!["-a", "-b", "1", "c"]);
    }

    #[test]
    fn traditional_form_keeps_later_separator() {
        let cmd = parse_args(&["getopt", "ab", "--", "-a"]).unwrap();
        assert_eq!(cmd.optstring, "ab");
        assert_eq!(params(&cmd), vec!["--", "-a"]);
    }

    #[test]
    fn separator_after_own_options_is_dropped() {
        let cmd = parse_args(&["getopt", "-qo", "a", "--", "--", "x"]).unwrap();
        assert!(cmd.quiet);
        assert_eq!(cmd.optstring, "a");
        assert_eq!(params(&cmd), vec!["--", "x"]);
    }

    #[test]
    fn bundled_flags() {
        let cmd = parse_args(&["getopt", "-qQTu"]).unwrap();
        assert!(cmd.quiet && cmd.quiet_output && cmd.test);
        assert!(cmd.params.is_empty());
    }

    #[test]
    fn unquoted_is_accepted() {
        let cmd = parse_args(&["getopt", "--unquoted", "-u", "-o", "a", "--", "-a"]).unwrap();
        assert_eq!(cmd.optstring, "a");
        assert_eq!(params(&cmd), vec!["-a"]);
    }

    #[test]
    fn help_needs_no_optstring() {
        let cmd = parse_args(&["getopt", "--help"]).unwrap();
        assert!(cmd.help);
    }

    #[test]
    fn missing_optstring() {
        let err = parse_args(&["getopt"]).unwrap_err();
        assert!(matches!(err, GetoptError::MissingOptstring));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_own_option() {
        let err = parse_args(&["getopt", "-Z", "ab"]).unwrap_err();
        assert!(matches!(err, GetoptError::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_own_argument() {
        let err = parse_args(&["getopt", "-o"]).unwrap_err();
        assert_eq!(err.to_string(), "option requires an argument: -o");
    }
}
