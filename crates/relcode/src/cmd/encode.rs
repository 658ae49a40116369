use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use relcode_catalog::{Answers, Catalog};
use relcode_codec::encode;

use crate::cmd::EncodeArgs;
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_code, OutputFormat};

pub fn run(args: EncodeArgs, catalog: &Catalog, format: OutputFormat) -> CliResult<i32> {
    let json = match (args.json, args.answers) {
        (Some(json), None) => json,
        (None, Some(path)) => read_answers(&path)?,
        _ => {
            return Err(CliError::new(
                USAGE,
                "exactly one of --answers or --json is required",
            ))
        }
    };

    let answers = parse_answers(&json)?;
    for question in answers.keys() {
        if catalog.question(question).is_none() {
            tracing::warn!(question = %question, "ignoring answers for unknown question");
        }
    }

    let avatar = args.avatar.unwrap_or_default();
    let code = encode(catalog, &answers, avatar);
    print_code(&code, avatar, format);
    Ok(SUCCESS)
}

fn read_answers(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .map_err(|err| io_error("failed to read answers from stdin", err))?;
        return Ok(json);
    }

    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed to read {}", path.display()), err))
}

/// Answers JSON maps question ids to arrays of attitude values.
///
/// Integers that do not fit a slot value become 0, like any other
/// out-of-range value at encode time.
fn parse_answers(json: &str) -> CliResult<Answers> {
    let raw: BTreeMap<String, Vec<i64>> = serde_json::from_str(json)
        .map_err(|err| CliError::new(DATA_INVALID, format!("invalid answers JSON: {err}")))?;

    Ok(raw
        .into_iter()
        .map(|(question, values)| {
            let values = values
                .into_iter()
                .map(|value| u8::try_from(value).unwrap_or(0))
                .collect();
            (question, values)
        })
        .collect())
}
