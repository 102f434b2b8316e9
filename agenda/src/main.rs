//! File-backed contact directory CLI.
//!
//! Contacts live in a flat file (`.agenda/contacts.txt` by default) that is
//! rewritten after every `insert`, `update` and `delete`.

use std::path::{Path, PathBuf};

use agenda::error::AgendaError;
use agenda::exit_codes;
use agenda::io::init::{InitOptions, init_agenda};
use agenda::open::open_directory;
use agenda::validate::validate_agenda;
use agenda::{Contact, logging};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda", version, about = "File-backed contact directory")]
struct Cli {
    /// Directory containing `.agenda/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Print contacts as JSON instead of tab-separated lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.agenda/config.toml` and an empty contact file.
    Init {
        /// Rewrite the config if `.agenda/` already exists. Contacts are kept.
        #[arg(short, long)]
        force: bool,
    },
    /// Add a new contact.
    Insert {
        name: String,
        phone: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change fields of an existing contact. The name cannot change.
    Update {
        name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, conflicts_with = "clear_email")]
        email: Option<String>,
        /// Remove the stored email.
        #[arg(long)]
        clear_email: bool,
    },
    /// Remove a contact.
    Delete { name: String },
    /// Print the contact with exactly this name.
    Get { name: String },
    /// List contacts whose name starts with a letter (any case).
    FindByLetter { letter: char },
    /// List contacts whose name contains a fragment (any case).
    FindBySubstring { fragment: Option<String> },
    /// List all contacts in name order.
    List,
    /// Check config, contact file and index consistency.
    Validate,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root.as_path();
    match cli.command {
        Command::Init { force } => cmd_init(root, force),
        Command::Insert { name, phone, email } => cmd_insert(root, name, phone, email),
        Command::Update {
            name,
            phone,
            email,
            clear_email,
        } => cmd_update(root, &name, phone, email, clear_email),
        Command::Delete { name } => cmd_delete(root, &name),
        Command::Get { name } => cmd_get(root, &name, cli.json),
        Command::FindByLetter { letter } => {
            let directory = open_directory(root)?;
            print_contacts(&directory.list_by_letter(letter), cli.json)
        }
        Command::FindBySubstring { fragment } => {
            let directory = open_directory(root)?;
            let fragment = fragment.unwrap_or_default();
            print_contacts(&directory.search_by_substring(&fragment), cli.json)
        }
        Command::List => {
            let directory = open_directory(root)?;
            print_contacts(&directory.iter().collect::<Vec<_>>(), cli.json)
        }
        Command::Validate => {
            let outcome = validate_agenda(root)?;
            println!("ok: {} contacts", outcome.contacts);
            Ok(())
        }
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<()> {
    let paths = init_agenda(root, &InitOptions { force })?;
    println!("initialized {}", paths.agenda_dir.display());
    Ok(())
}

fn cmd_insert(root: &Path, name: String, phone: String, email: Option<String>) -> Result<()> {
    let mut directory = open_directory(root)?;
    let mut contact = Contact::new(name, phone);
    contact.email = email;
    directory.insert(contact)?;
    Ok(())
}

fn cmd_update(
    root: &Path,
    name: &str,
    phone: Option<String>,
    email: Option<String>,
    clear_email: bool,
) -> Result<()> {
    let mut directory = open_directory(root)?;
    let mut contact = directory
        .lookup(name)
        .cloned()
        .ok_or_else(|| AgendaError::NotFound {
            name: name.to_string(),
        })?;
    if let Some(phone) = phone {
        contact.phone = phone;
    }
    if email.is_some() {
        contact.email = email;
    }
    if clear_email {
        contact.email = None;
    }
    directory.update(contact)?;
    Ok(())
}

fn cmd_delete(root: &Path, name: &str) -> Result<()> {
    let mut directory = open_directory(root)?;
    directory.delete(name)?;
    Ok(())
}

fn cmd_get(root: &Path, name: &str, json: bool) -> Result<()> {
    let directory = open_directory(root)?;
    let contact = directory.lookup(name).ok_or_else(|| AgendaError::NotFound {
        name: name.to_string(),
    })?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(contact).context("serialize contact")?
        );
    } else {
        println!("{}", render_row(contact));
    }
    Ok(())
}

fn print_contacts(contacts: &[&Contact], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(contacts).context("serialize contacts")?
        );
        return Ok(());
    }
    for contact in contacts {
        println!("{}", render_row(contact));
    }
    Ok(())
}

/// Tab-separated `name phone email` row; email is empty when absent.
fn render_row(contact: &Contact) -> String {
    format!(
        "{}\t{}\t{}",
        contact.name,
        contact.phone,
        contact.email.as_deref().unwrap_or_default()
    )
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AgendaError>() {
        Some(AgendaError::NotFound { .. }) => exit_codes::NOT_FOUND,
        Some(AgendaError::DuplicateName { .. }) => exit_codes::CONFLICT,
        Some(AgendaError::CorruptData { .. }) => exit_codes::CORRUPT,
        _ => exit_codes::INVALID,
    }
}
