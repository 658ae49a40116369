use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args, Subcommand};
use relcode_catalog::Catalog;
use relcode_codec::Avatar;
use relcode_session::Attitude;

use crate::exit::{catalog_error, CliResult};
use crate::output::OutputFormat;

pub mod catalog;
pub mod decode;
pub mod encode;
pub mod inspect;
pub mod profile;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode answers into a shareable code.
    Encode(EncodeArgs),
    /// Decode a code into avatar and answers.
    Decode(DecodeArgs),
    /// Show how a code is read, glyph by glyph.
    Inspect(InspectArgs),
    /// Summarize the question catalog.
    Catalog(CatalogArgs),
    /// Edit and share a saved profile.
    Profile(ProfileArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, catalog_path: Option<&Path>, format: OutputFormat) -> CliResult<i32> {
    if let Command::Version(args) = command {
        return version::run(args);
    }

    let loaded;
    let catalog = match catalog_path {
        Some(path) => {
            loaded = Catalog::from_path(path).map_err(|err| {
                catalog_error(&format!("catalog {}", path.display()), err)
            })?;
            &loaded
        }
        None => Catalog::embedded(),
    };

    match command {
        Command::Encode(args) => encode::run(args, catalog, format),
        Command::Decode(args) => decode::run(args, catalog, format),
        Command::Inspect(args) => inspect::run(args, catalog, format),
        Command::Catalog(args) => catalog::run(args, catalog, format),
        Command::Profile(args) => profile::run(args, catalog, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["answers", "json"])))]
pub struct EncodeArgs {
    /// Answers JSON file (`-` reads stdin).
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,
    /// Answers JSON given inline.
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
    /// Avatar glyph to prefix. Default: 🌏.
    #[arg(long, value_name = "GLYPH")]
    pub avatar: Option<Avatar>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Code to decode. Whitespace and invisible characters are ignored.
    pub code: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Code to inspect.
    pub code: String,
}

#[derive(Args, Debug, Default)]
pub struct CatalogArgs {}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile state file.
    #[arg(
        long,
        value_name = "PATH",
        env = "RELCODE_STORE",
        default_value = "relcode-profile.json"
    )]
    pub store: PathBuf,
    /// Allow several core-need options per question.
    #[arg(long)]
    pub multi_core: bool,
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the profile and its current code.
    Show,
    /// Set the attitude for one option of a question.
    Set {
        /// Question id.
        question: String,
        /// Zero-based option index.
        option: usize,
        /// Attitude: 0-4 or unanswered, limit, undecided, accept, core.
        attitude: Attitude,
    },
    /// Choose the avatar glyph.
    Avatar {
        /// One of the avatar glyphs.
        glyph: Avatar,
    },
    /// Enable or disable a module.
    Module {
        /// Module id.
        module: String,
    },
    /// Clear all answers. Archives are kept.
    Reset,
    /// Print the current code.
    Export,
    /// Replace answers and avatar with a code.
    Import {
        /// Code to import.
        code: String,
    },
    /// Save the current code under a name.
    Archive {
        /// Archive name.
        name: String,
    },
    /// List saved archives.
    Archives,
    /// Load a saved archive into the profile.
    Restore {
        /// Archive name.
        name: String,
    },
    /// Delete a saved archive.
    Forget {
        /// Archive name.
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}
