use std::collections::BTreeMap;
use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use relcode_catalog::{Answers, Catalog};
use relcode_codec::{Avatar, Decoded, Inspection};
use relcode_session::{Attitude, SessionState};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Label for a decoded slot value. Values past the attitude scale come from
/// the reserved encoding level.
pub fn attitude_label(value: u8) -> &'static str {
    Attitude::try_from(value)
        .map(Attitude::label)
        .unwrap_or("reserved")
}

#[derive(Serialize)]
struct AnswerRow<'a> {
    question: &'a str,
    option: usize,
    label: &'a str,
    value: u8,
    attitude: &'static str,
}

fn answer_rows<'a>(catalog: &'a Catalog, answers: &'a Answers) -> Vec<AnswerRow<'a>> {
    let mut rows = Vec::new();
    for question in catalog.questions() {
        let Some(values) = answers.get(&question.id) else {
            continue;
        };
        for (option, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            rows.push(AnswerRow {
                question: &question.id,
                option,
                label: question
                    .options
                    .get(option)
                    .map(|label| label.short_text())
                    .unwrap_or("?"),
                value,
                attitude: attitude_label(value),
            });
        }
    }
    rows
}

fn answers_table(rows: &[AnswerRow<'_>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["QUESTION", "OPTION", "LABEL", "ATTITUDE"]);
    for row in rows {
        table.add_row(vec![
            row.question.to_string(),
            row.option.to_string(),
            row.label.to_string(),
            row.attitude.to_string(),
        ]);
    }
    table
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

#[derive(Serialize)]
struct CodeOutput<'a> {
    code: &'a str,
    avatar: Avatar,
    glyphs: usize,
}

pub fn print_code(code: &str, avatar: Avatar, format: OutputFormat) {
    let glyphs = code.chars().count();
    match format {
        OutputFormat::Json => print_json(&CodeOutput {
            code,
            avatar,
            glyphs,
        }),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("code: {code}");
            println!("glyphs: {glyphs}");
        }
        OutputFormat::Raw => println!("{code}"),
    }
}

#[derive(Serialize)]
struct DecodedOutput<'a> {
    avatar: Avatar,
    answers: &'a Answers,
    rows: Vec<AnswerRow<'a>>,
}

pub fn print_decoded(catalog: &Catalog, decoded: &Decoded, format: OutputFormat) {
    let rows = answer_rows(catalog, &decoded.answers);
    match format {
        OutputFormat::Json => print_json(&DecodedOutput {
            avatar: decoded.avatar,
            answers: &decoded.answers,
            rows,
        }),
        OutputFormat::Table => {
            println!("avatar: {}", decoded.avatar);
            println!("{}", answers_table(&rows));
        }
        OutputFormat::Pretty => {
            println!("avatar: {}", decoded.avatar);
            for row in &rows {
                println!(
                    "{}[{}] {} = {}",
                    row.question, row.option, row.label, row.attitude
                );
            }
        }
        OutputFormat::Raw => {
            for (question, values) in &decoded.answers {
                let values: Vec<String> = values.iter().map(u8::to_string).collect();
                println!("{question} {}", values.join(","));
            }
        }
    }
}

#[derive(Serialize)]
struct InspectionOutput<'a> {
    #[serde(flatten)]
    inspection: &'a Inspection,
    nonzero_slots: usize,
    total_slots: usize,
}

pub fn print_inspection(catalog: &Catalog, inspection: &Inspection, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&InspectionOutput {
            inspection,
            nonzero_slots: inspection.nonzero_slots(),
            total_slots: catalog.total_slots(),
        }),
        OutputFormat::Table | OutputFormat::Pretty => {
            let checksum = inspection
                .checksum
                .map(|value| value.to_string())
                .unwrap_or_else(|| "none".to_string());
            let source = if inspection.avatar_explicit {
                "explicit"
            } else {
                "default"
            };
            println!("avatar: {} ({source})", inspection.avatar);
            println!("data_glyphs: {}", inspection.data_indices.len());
            println!("data_indices: {:?}", inspection.data_indices);
            println!("checksum: {checksum}");
            println!("bit_len: {}", inspection.bit_len);
            println!("blocks_read: {}", inspection.blocks_read);
            println!(
                "nonzero_slots: {}/{}",
                inspection.nonzero_slots(),
                catalog.total_slots()
            );
            if matches!(format, OutputFormat::Table) {
                println!("{}", answers_table(&answer_rows(catalog, &inspection.answers)));
            }
        }
        OutputFormat::Raw => {
            let slots: Vec<String> = inspection.slots.iter().map(u8::to_string).collect();
            println!("{}", slots.join(""));
        }
    }
}

#[derive(Serialize)]
struct ModuleOutput<'a> {
    id: &'a str,
    name: &'a str,
    questions: usize,
    slots: usize,
}

#[derive(Serialize)]
struct CatalogOutput<'a> {
    version: &'a str,
    questions: usize,
    total_slots: usize,
    modules: Vec<ModuleOutput<'a>>,
}

pub fn print_catalog(catalog: &Catalog, format: OutputFormat) {
    let modules: Vec<ModuleOutput<'_>> = catalog
        .modules()
        .iter()
        .map(|module| ModuleOutput {
            id: &module.id,
            name: &module.name,
            questions: module.questions.len(),
            slots: module.slot_count(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&CatalogOutput {
            version: &catalog.meta().version,
            questions: catalog.question_count(),
            total_slots: catalog.total_slots(),
            modules,
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MODULE", "NAME", "QUESTIONS", "SLOTS"]);
            for module in &modules {
                table.add_row(vec![
                    module.id.to_string(),
                    module.name.to_string(),
                    module.questions.to_string(),
                    module.slots.to_string(),
                ]);
            }
            println!("catalog {}", catalog.meta().version);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("version: {}", catalog.meta().version);
            println!("questions: {}", catalog.question_count());
            println!("total_slots: {}", catalog.total_slots());
            for module in &modules {
                println!(
                    "module={} questions={} slots={}",
                    module.id, module.questions, module.slots
                );
            }
        }
        OutputFormat::Raw => {
            for question in catalog.questions() {
                println!("{} {}", question.id, question.option_count());
            }
        }
    }
}

#[derive(Serialize)]
struct ProfileOutput<'a> {
    avatar: Avatar,
    code: &'a str,
    enabled_modules: &'a [String],
    answers: &'a Answers,
    archives: &'a BTreeMap<String, String>,
}

pub fn print_profile(
    catalog: &Catalog,
    state: &SessionState,
    answers: &Answers,
    code: &str,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => print_json(&ProfileOutput {
            avatar: state.avatar,
            code,
            enabled_modules: &state.enabled_modules,
            answers,
            archives: &state.archives,
        }),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("avatar: {}", state.avatar);
            println!("modules: {}", state.enabled_modules.join(", "));
            println!("archives: {}", state.archives.len());
            println!("code: {code}");
            let rows = answer_rows(catalog, answers);
            if matches!(format, OutputFormat::Table) {
                println!("{}", answers_table(&rows));
            } else {
                for row in &rows {
                    println!(
                        "{}[{}] {} = {}",
                        row.question, row.option, row.label, row.attitude
                    );
                }
            }
        }
        OutputFormat::Raw => println!("{code}"),
    }
}

#[derive(Serialize)]
struct ArchiveOutput<'a> {
    name: &'a str,
    code: &'a str,
}

pub fn print_archives(archives: &BTreeMap<String, String>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<ArchiveOutput<'_>> = archives
                .iter()
                .map(|(name, code)| ArchiveOutput { name, code })
                .collect();
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["NAME", "CODE"]);
            for (name, code) in archives {
                table.add_row(vec![name.clone(), code.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for (name, code) in archives {
                println!("{name} {code}");
            }
        }
    }
}

#[derive(Serialize)]
struct StatusOutput<'a> {
    action: &'a str,
    detail: &'a str,
}

/// One-line acknowledgement for profile mutations.
pub fn print_status(action: &str, detail: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&StatusOutput { action, detail }),
        OutputFormat::Table | OutputFormat::Pretty => println!("{action}: {detail}"),
        OutputFormat::Raw => println!("{detail}"),
    }
}
