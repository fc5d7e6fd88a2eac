use crate::parser::Parsed;
use crate::token::ProgramNameToken;
use crate::value::{ProgramNameValue, Value};

/// Merge the parser output into the final ordered result.
///
/// With `permute` the options come first, then the positionals, each group in
/// argv order. Without it every value goes back to its argv position.
pub(crate) fn permute(program: ProgramNameToken, parsed: Parsed, permute: bool) -> Vec<Value> {
    let Parsed {
        options,
        mut positionals,
    } = parsed;
    let program = Value::ProgramName(ProgramNameValue { name: program.name });

    let mut options: Vec<Value> = options.into_iter().map(Value::Option).collect();

    if !permute {
        let mut all = Vec::with_capacity(1 + options.len() + positionals.len());
        all.push(program);
        all.append(&mut options);
        all.append(&mut positionals);
        all.sort_by_key(Value::source_index);
        return all;
    }

    options.sort_by_key(Value::source_index);
    positionals.sort_by_key(Value::source_index);

    let mut all = Vec::with_capacity(1 + options.len() + positionals.len());
    all.push(program);
    all.append(&mut options);
    all.append(&mut positionals);
    all
}
