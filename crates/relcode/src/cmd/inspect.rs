use relcode_catalog::Catalog;
use relcode_codec::inspect;

use crate::cmd::InspectArgs;
use crate::exit::{decode_error, CliResult, SUCCESS};
use crate::output::{print_inspection, OutputFormat};

pub fn run(args: InspectArgs, catalog: &Catalog, format: OutputFormat) -> CliResult<i32> {
    let inspection =
        inspect(catalog, &args.code).map_err(|err| decode_error("inspect failed", err))?;
    print_inspection(catalog, &inspection, format);
    Ok(SUCCESS)
}
