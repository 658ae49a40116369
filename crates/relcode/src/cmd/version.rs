use relcode_codec::{ALPHABET_LEN, BLOCK_SIZE, SYMBOL_BITS};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("relcode {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: relcode");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "rustc: {}",
        option_env!("RUSTC_VERSION").unwrap_or("unknown")
    );
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!(
        "codec: alphabet={ALPHABET_LEN}, symbol_bits={SYMBOL_BITS}, block_size={BLOCK_SIZE}"
    );
    println!("features: session=true, cli=true");

    Ok(SUCCESS)
}
