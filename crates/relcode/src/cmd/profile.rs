use relcode_catalog::Catalog;
use relcode_session::{FileStore, Session, SessionConfig};

use crate::cmd::{ProfileAction, ProfileArgs};
use crate::exit::{session_error, CliResult, SUCCESS};
use crate::output::{print_archives, print_code, print_profile, print_status, OutputFormat};

pub fn run(args: ProfileArgs, catalog: &Catalog, format: OutputFormat) -> CliResult<i32> {
    let config = SessionConfig {
        single_core: !args.multi_core,
    };
    let store = FileStore::new(&args.store);
    let mut session = Session::load(store, catalog, config)
        .map_err(|err| session_error(&format!("profile {}", args.store.display()), err))?;

    let (action, detail) = match args.action {
        ProfileAction::Show => {
            let code = session.export_code();
            print_profile(catalog, session.state(), &session.answers(), &code, format);
            return Ok(SUCCESS);
        }
        ProfileAction::Export => {
            print_code(&session.export_code(), session.avatar(), format);
            return Ok(SUCCESS);
        }
        ProfileAction::Archives => {
            print_archives(session.archives(), format);
            return Ok(SUCCESS);
        }
        ProfileAction::Set {
            question,
            option,
            attitude,
        } => {
            session
                .set_option_attitude(&question, option, attitude)
                .map_err(|err| session_error("set failed", err))?;
            ("set", format!("{question}[{option}] = {attitude}"))
        }
        ProfileAction::Avatar { glyph } => {
            session.set_avatar(glyph);
            ("avatar", glyph.to_string())
        }
        ProfileAction::Module { module } => {
            let enabled = session
                .toggle_module(&module)
                .map_err(|err| session_error("module toggle failed", err))?;
            let state = if enabled { "enabled" } else { "disabled" };
            ("module", format!("{module} {state}"))
        }
        ProfileAction::Reset => {
            session.reset_all();
            ("reset", session.export_code())
        }
        ProfileAction::Import { code } => {
            session
                .import_code(&code)
                .map_err(|err| session_error("import failed", err))?;
            ("import", session.export_code())
        }
        ProfileAction::Archive { name } => {
            let code = session.archive(&name);
            ("archive", format!("{name} {code}"))
        }
        ProfileAction::Restore { name } => {
            session
                .restore_archive(&name)
                .map_err(|err| session_error("restore failed", err))?;
            ("restore", session.export_code())
        }
        ProfileAction::Forget { name } => {
            session
                .remove_archive(&name)
                .map_err(|err| session_error("forget failed", err))?;
            ("forget", name)
        }
    };

    session
        .save()
        .map_err(|err| session_error("failed to save profile", err))?;
    print_status(action, &detail, format);
    Ok(SUCCESS)
}
