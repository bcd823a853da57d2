use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notz")]
#[command(about = "Keyboard-first command-line note keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note (blank text is silently ignored)
    #[command(alias = "a")]
    Add {
        /// The note text
        #[arg(required = true)]
        text: String,

        /// Title for the note
        #[arg(short, long, default_value = "")]
        title: String,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Search term (matches title or text, case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Section to show: "notes", "archive", anything else shows all
        #[arg(long, default_value = "notes")]
        section: String,

        /// Shortcut for --section all
        #[arg(long, conflicts_with = "section")]
        all: bool,
    },

    /// Replace the title and text of a note
    #[command(alias = "e")]
    Edit {
        /// Id of the note
        id: String,

        /// The replacement text (empty is allowed here)
        #[arg(default_value = "")]
        text: String,

        /// Replacement title
        #[arg(short, long, default_value = "")]
        title: String,
    },

    /// Toggle a note in or out of the archive
    #[command(alias = "ar")]
    Archive {
        /// Id of the note
        id: String,
    },
}
