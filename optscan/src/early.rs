use tracing::debug;

use crate::config::{Category, OptionSpec};
use crate::token::OptionToken;
use crate::value::{OptionValue, ProgramNameValue, Value};

/// Look for an early option (`--help`, `--version`, ...) anywhere in argv.
///
/// Runs on the raw vector before any validation, so such options work even
/// when the rest of the command line would be rejected. Returns the whole
/// parse result on a match.
pub(crate) fn preflight<S: AsRef<str>>(argv: &[S], specs: &[OptionSpec]) -> Option<Vec<Value>> {
    let (program, rest) = argv.split_first()?;

    let early: Vec<(&OptionSpec, String)> = specs
        .iter()
        .filter(|spec| spec.category == Category::Early)
        // Left for validation to reject; never matched here.
        .filter(|spec| !spec.name.is_empty() && !spec.prefix.is_empty())
        .map(|spec| (spec, spec.literal()))
        .collect();
    if early.is_empty() {
        return None;
    }

    for (i, arg) in rest.iter().enumerate() {
        let arg = arg.as_ref();
        if let Some((spec, _)) = early.iter().find(|(_, literal)| literal == arg) {
            let index = i + 1;
            debug!(index, option = arg, "early option short-circuits parsing");
            return Some(vec![
                Value::ProgramName(ProgramNameValue {
                    name: program.as_ref().to_string(),
                }),
                Value::Option(OptionValue {
                    spec: (*spec).clone(),
                    token: OptionToken {
                        index,
                        prefix: spec.prefix.clone(),
                        name: spec.name.clone(),
                    },
                    value: String::new(),
                }),
            ]);
        }
    }
    None
}
