use relcode_catalog::Catalog;

use crate::cmd::CatalogArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_catalog, OutputFormat};

pub fn run(_args: CatalogArgs, catalog: &Catalog, format: OutputFormat) -> CliResult<i32> {
    print_catalog(catalog, format);
    Ok(SUCCESS)
}
