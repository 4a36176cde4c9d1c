use crate::error::AppResult;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use store::{FileAccess, Theme, ThemeStore};

#[derive(Parser, Debug)]
#[command(name = "watchface-themes")]
#[command(about = "Manage watch-face theme directories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Themes root directory, overrides the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub themes_dir: Option<PathBuf>,

    /// Log at debug level or more
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List committed themes, oldest first
    List {
        /// Also print timestamps, directories and skipped entries
        #[arg(long)]
        verbose: bool,

        /// Print the listing as JSON
        #[arg(long, conflicts_with = "verbose")]
        json: bool,
    },

    /// Create a new, uncommitted theme
    Create {
        name: String,

        /// Directory name part after the timestamp
        base_name: String,

        /// Creation timestamp, defaults to now in microseconds
        #[arg(long, value_name = "TS", allow_hyphen_values = true)]
        created_at: Option<String>,

        /// Commit the theme right away
        #[arg(long)]
        commit: bool,
    },

    /// Commit a theme so it shows up in listings
    Commit {
        /// Theme directory, absolute or relative to the themes root
        dir: PathBuf,
    },

    /// Delete a theme directory, even one with broken metadata
    Delete { dir: PathBuf },

    /// Print a theme's metadata
    Show { dir: PathBuf },

    /// Change a theme's display name
    Rename { dir: PathBuf, name: String },
}

/// Run `command` against `store`, writing results to `out`.
pub fn run<F: FileAccess, W: Write>(
    command: &Command,
    store: &ThemeStore<F>,
    out: &mut W,
) -> AppResult<()> {
    match command {
        Command::List { verbose, json } => list(store, *verbose, *json, out),
        Command::Create {
            name,
            base_name,
            created_at,
            commit,
        } => {
            store.ensure_root()?;
            let mut theme = match created_at {
                Some(created_at) => store.create(name, created_at, base_name)?,
                None => store.create_now(name, base_name)?,
            };
            if *commit {
                store.commit(&mut theme)?;
            }
            writeln!(out, "{}", theme.theme_dir().display())?;
            Ok(())
        }
        Command::Commit { dir } => {
            let mut theme = store.read(dir)?;
            store.commit(&mut theme)?;
            writeln!(out, "{}", theme.theme_dir().display())?;
            Ok(())
        }
        Command::Delete { dir } => {
            store.delete_dir(dir)?;
            writeln!(out, "Deleted {}", store.resolve(dir).display())?;
            Ok(())
        }
        Command::Show { dir } => {
            let theme = store.read(dir)?;
            show(store, &theme, out)
        }
        Command::Rename { dir, name } => {
            let mut theme = store.read(dir)?;
            theme.set_name(name.as_str());
            store.write(&mut theme)?;
            writeln!(out, "Renamed to '{}'", theme.name())?;
            Ok(())
        }
    }
}

fn list<F: FileAccess, W: Write>(
    store: &ThemeStore<F>,
    verbose: bool,
    json: bool,
    out: &mut W,
) -> AppResult<()> {
    if !verbose && !json {
        for name in store.list() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let listing = store.list_detailed()?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &listing).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    for theme in &listing.themes {
        writeln!(
            out,
            "{}\t{}\t{}",
            theme.created_at,
            theme.name,
            theme.dir.display()
        )?;
    }
    for entry in &listing.skipped {
        writeln!(out, "skipped {}: {}", entry.dir_name, entry.reason)?;
    }
    Ok(())
}

fn show<F: FileAccess, W: Write>(
    store: &ThemeStore<F>,
    theme: &Theme,
    out: &mut W,
) -> AppResult<()> {
    writeln!(out, "directory: {}", theme.theme_dir().display())?;
    writeln!(out, "committed: {}", !theme.is_temporary())?;
    for (key, value) in theme.metadata().iter() {
        writeln!(out, "{key}: {value}")?;
    }
    if theme.has_unsaved_draft(store.file_access()) {
        writeln!(out, "unsaved draft: yes")?;
    }
    Ok(())
}
