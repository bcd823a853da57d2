use colored::Colorize;
use notz::model::Note;

const PREVIEW_CHARS: usize = 50;

pub(super) fn print_notes<'a>(notes: impl Iterator<Item = &'a Note>) {
    let mut any = false;
    for note in notes {
        any = true;
        print_note_line(note);
    }
    if !any {
        println!("No notes found.");
    }
}

fn print_note_line(note: &Note) {
    let preview: String = note
        .text
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    let marker = if note.is_archived {
        "[archived] ".yellow().to_string()
    } else {
        String::new()
    };

    if note.title.is_empty() {
        println!("{}  {}{}", note.id.dimmed(), marker, preview);
    } else {
        println!(
            "{}  {}{} {}",
            note.id.dimmed(),
            marker,
            note.title.bold(),
            preview
        );
    }
}

pub(super) fn print_added(note: &Note) {
    let label = if note.title.is_empty() {
        &note.id
    } else {
        &note.title
    };
    println!("{}", format!("Note added: {}", label).green());
}

pub(super) fn print_updated(note: &Note) {
    println!("{}", format!("Note updated: {}", note.id).green());
}

pub(super) fn print_archived(note: &Note) {
    let verb = if note.is_archived {
        "archived"
    } else {
        "unarchived"
    };
    println!("{}", format!("Note {}: {}", verb, note.id).green());
}

pub(super) fn print_no_match(id: &str) {
    println!("{}", format!("No note with id {}", id).dimmed());
}
