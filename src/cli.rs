// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{file, import, machines::Machine, session::InventorySession};

pub struct Params {
    pub file: Option<PathBuf>,
    pub query: String,
    pub statuses: Vec<String>,
    pub present_ids: Vec<String>,
    pub missing_only: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            file: None,
            query: s!(),
            statuses: Vec::new(),
            present_ids: Vec::new(),
            missing_only: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    let path = params.file.ok_or("Missing input file (see --help)")?;
    let html = file::read_document(&path)?;
    let machines = import::parse(&html)?;

    let mut session = InventorySession::new();
    session.reset(machines);

    for id in &params.present_ids {
        session.mark_present(id);
    }
    if !params.statuses.is_empty() {
        let marked = session.mark_present_by_statuses(&params.statuses);
        logf!("Cli: Marked {} by status {:?}", marked, params.statuses);
    }

    let rows: Vec<&Machine> = if params.missing_only {
        session.missing()
    } else {
        session.filter_by_id(&params.query)
    };

    for m in &rows {
        let mark = if session.is_present(&m.id) { "present" } else { "missing" };
        println!("{}\t{}\t{}\t{}\t{}", m.id, m.name, m.category, m.status, mark);
    }
    eprintln!(
        "{} listed, {} of {} present",
        rows.len(),
        session.present_count(),
        session.roster().len()
    );

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--query" | "-q" => {
                params.query = args.next().ok_or("Missing value for --query")?;
            }
            "--status" | "-s" => {
                params.statuses.push(args.next().ok_or("Missing value for --status")?);
            }
            "--present" => {
                let v = args.next().ok_or("Missing value for --present")?;
                params.present_ids.extend(parse_ids_list(&v));
            }
            "--missing" | "-m" => params.missing_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') && params.file.is_none() => {
                params.file = Some(PathBuf::from(other));
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn parse_ids_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
