//! Interactive guest list manager.
//!
//! Line-oriented front-end over the `guestlist` library: reads commands from
//! stdin, forwards them to the session, and re-renders the view after each
//! event. The registry is in-memory only and is gone when the process exits.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use guestlist::command::{self, Command as UserCommand, HELP};
use guestlist::core::store::GuestStore;
use guestlist::core::types::demo_roster;
use guestlist::io::config::{AppConfig, load_config, write_config};
use guestlist::io::console::{AutoConfirm, Confirm, Console, Notify, read_line};
use guestlist::io::render::render_view;
use guestlist::session::Session;

#[derive(Parser)]
#[command(name = "guestlist", version, about = "In-memory event guest registry")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive editing session.
    Run {
        /// Path to the config file.
        #[arg(short, long, default_value = "guestlist.toml")]
        config: PathBuf,
        /// Start with an empty roster even if the config seeds demo data.
        #[arg(long)]
        no_seed: bool,
    },
    /// Write a default config file.
    Init {
        /// Path to the config file.
        #[arg(short, long, default_value = "guestlist.toml")]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    guestlist::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { config, no_seed } => cmd_run(&config, no_seed),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(anyhow!(
            "config {} already exists (use --force to overwrite)",
            config_path.display()
        ));
    }
    write_config(config_path, &AppConfig::default())?;
    println!("wrote {}", config_path.display());
    Ok(())
}

/// Delete-confirmation collaborator selected from config at startup.
enum Confirmer {
    Console(Console),
    Auto(AutoConfirm),
}

impl Confirm for Confirmer {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        match self {
            Confirmer::Console(inner) => inner.confirm(message),
            Confirmer::Auto(inner) => inner.confirm(message),
        }
    }
}

fn cmd_run(config_path: &Path, no_seed: bool) -> Result<()> {
    let cfg = load_config(config_path)?;

    let store = if cfg.seed_demo_roster && !no_seed {
        GuestStore::from_guests(demo_roster())
    } else {
        GuestStore::new()
    };
    let mut session = Session::new(store);
    let mut console = Console;
    let mut confirmer = if cfg.assume_yes {
        Confirmer::Auto(AutoConfirm)
    } else {
        Confirmer::Console(Console)
    };

    show(&session)?;
    loop {
        let Some(line) = read_line(&cfg.prompt)? else {
            break;
        };
        let parsed = match command::parse(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => {
                console.notify(&err.to_string());
                continue;
            }
        };

        match parsed {
            UserCommand::SetField(field, value) => {
                session.set_field(field, value);
                show(&session)?;
            }
            UserCommand::Submit => {
                if session.submit(&mut console).is_some() {
                    show(&session)?;
                }
            }
            UserCommand::Cancel => {
                session.cancel();
                show(&session)?;
            }
            UserCommand::Edit(id) => {
                if session.request_edit(id, &mut console) {
                    show(&session)?;
                }
            }
            UserCommand::Delete(id) => {
                if session.request_delete(id, &mut confirmer)? {
                    show(&session)?;
                } else {
                    console.notify("no guest deleted");
                }
            }
            UserCommand::Search(query) => {
                session.set_query(query);
                show(&session)?;
            }
            UserCommand::List => show(&session)?,
            UserCommand::Json => {
                let view = serde_json::to_string_pretty(&session.view())?;
                println!("{view}");
            }
            UserCommand::Check => {
                let errors = session.check();
                if errors.is_empty() {
                    println!("registry invariants ok");
                } else {
                    for error in errors {
                        console.notify(&error);
                    }
                }
            }
            UserCommand::Help => println!("{HELP}"),
            UserCommand::Quit => break,
        }
    }

    Ok(())
}

fn show(session: &Session) -> Result<()> {
    render_view(&mut io::stdout(), &session.view())
}
