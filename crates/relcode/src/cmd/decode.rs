use relcode_catalog::Catalog;
use relcode_codec::decode;

use crate::cmd::DecodeArgs;
use crate::exit::{decode_error, CliResult, SUCCESS};
use crate::output::{print_decoded, OutputFormat};

pub fn run(args: DecodeArgs, catalog: &Catalog, format: OutputFormat) -> CliResult<i32> {
    let decoded = decode(catalog, &args.code).map_err(|err| decode_error("decode failed", err))?;
    print_decoded(catalog, &decoded, format);
    Ok(SUCCESS)
}
