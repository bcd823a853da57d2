use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use notz::error::Result;
use notz::id::UuidIds;
use notz::model::Section;
use notz::notes::NoteStore;
use notz::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_added, print_archived, print_no_match, print_notes, print_updated};

type AppStore = NoteStore<FileStore, UuidIds>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let home = resolve_home();
    let _logger = notz::logging::init(&home.join("logs"));
    let mut store = NoteStore::open(FileStore::new(&home), UuidIds);

    match cli.command {
        Some(Commands::Add { text, title }) => handle_add(&mut store, &title, &text),
        Some(Commands::List {
            search,
            section,
            all,
        }) => handle_list(&store, search.as_deref(), &section, all),
        Some(Commands::Edit { id, text, title }) => handle_edit(&mut store, &id, &title, &text),
        Some(Commands::Archive { id }) => handle_archive(&mut store, &id),
        None => handle_list(&store, None, "notes", false),
    }
}

fn resolve_home() -> PathBuf {
    if let Ok(home) = std::env::var("NOTZ_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs = ProjectDirs::from("com", "notz", "notz").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_add(store: &mut AppStore, title: &str, text: &str) -> Result<()> {
    // Blank text is ignored by design; the store stays silent and so do we.
    if let Some(note) = store.create(title, text)? {
        print_added(note);
    }
    Ok(())
}

fn handle_list(store: &AppStore, search: Option<&str>, section: &str, all: bool) -> Result<()> {
    let section = if all {
        Section::All
    } else {
        Section::parse(section)
    };
    print_notes(store.query(search, section));
    Ok(())
}

fn handle_edit(store: &mut AppStore, id: &str, title: &str, text: &str) -> Result<()> {
    match store.edit(id, title, text)? {
        Some(note) => print_updated(note),
        None => print_no_match(id),
    }
    Ok(())
}

fn handle_archive(store: &mut AppStore, id: &str) -> Result<()> {
    match store.toggle_archive(id)? {
        Some(note) => print_archived(note),
        None => print_no_match(id),
    }
    Ok(())
}
