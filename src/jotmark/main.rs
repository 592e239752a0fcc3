use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use jotmark::editor::edit_draft;
use jotmark::error::{JotmarkError, Result};
use jotmark::model::NoteId;
use jotmark::render;
use jotmark::session::{CmdMessage, MessageLevel, Session};
use jotmark::store::fs::{FileStore, NOTES_FILENAME};
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = notes_file_path(&cli)?;
    let mut session = Session::open(FileStore::new(path));

    println!("{}", "jotmark — type 'help' for commands".dimmed());
    print_notes(&session);

    loop {
        print!("> ");
        io::stdout().flush().map_err(JotmarkError::Io)?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line).map_err(JotmarkError::Io)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let done = match dispatch(&mut session, verb, arg) {
            Ok(done) => done,
            Err(e) => {
                println!("{}", format!("Error: {}", e).red());
                false
            }
        };
        if done {
            break;
        }
    }

    Ok(())
}

/// Runs one shell command. Returns true when the session should end.
fn dispatch(session: &mut Session<FileStore>, verb: &str, arg: &str) -> Result<bool> {
    match verb {
        "list" | "ls" | "l" => print_notes(session),
        "add" | "new" | "a" => handle_add(session),
        "open" | "select" | "o" => handle_open(session, arg)?,
        "edit" | "e" => handle_edit(session)?,
        "save" | "s" => {
            let result = session.save_note()?;
            print_messages(&result.messages);
        }
        "delete" | "del" | "d" => handle_delete(session)?,
        "preview" | "p" => println!("{}", render::to_html(session.draft())),
        "show" | "cat" => println!("{}", session.draft()),
        "help" | "h" | "?" => print_help(),
        "quit" | "exit" | "q" => return Ok(true),
        other => println!("Unknown command: {} (try 'help')", other),
    }
    Ok(false)
}

fn notes_file_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }
    if let Ok(path) = std::env::var("JOTMARK_FILE") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "jotmark", "jotmark")
        .ok_or_else(|| JotmarkError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().join(NOTES_FILENAME))
}

fn handle_add(session: &mut Session<FileStore>) {
    let result = session.add_note();
    print_messages(&result.messages);
    print_notes(session);
}

fn handle_open(session: &mut Session<FileStore>, arg: &str) -> Result<()> {
    let position: usize = arg
        .parse()
        .map_err(|_| JotmarkError::Shell(format!("Usage: open <number> (got '{}')", arg)))?;
    let id = session
        .notes()
        .get(position.wrapping_sub(1))
        .map(|n| n.id)
        .ok_or_else(|| JotmarkError::Shell(format!("No note at position {}", position)))?;

    session.select_note(id)?;
    if let Some(note) = session.selected_note() {
        println!("Opened: {}", note.title.bold());
    }
    Ok(())
}

fn handle_edit(session: &mut Session<FileStore>) -> Result<()> {
    let edited = edit_draft(session.draft())?;
    session.edit_draft(edited);
    println!("{}", "Draft updated. Use 'save' to commit.".dimmed());
    Ok(())
}

fn handle_delete(session: &mut Session<FileStore>) -> Result<()> {
    let confirmed = match session.selected_note() {
        Some(note) => {
            print!("Delete \"{}\"? [y/N] ", note.title);
            io::stdout().flush().map_err(JotmarkError::Io)?;

            let mut answer = String::new();
            io::stdin().read_line(&mut answer).map_err(JotmarkError::Io)?;
            answer.trim().eq_ignore_ascii_case("y")
        }
        None => false,
    };

    let result = session.delete_note(confirmed);
    print_messages(&result.messages);
    print_notes(session);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;

fn print_notes(session: &Session<FileStore>) {
    let notes = session.notes();
    if notes.is_empty() {
        println!("No notes.");
        return;
    }

    for (position, note) in notes.iter().enumerate() {
        let marker = if session.selected_id() == Some(note.id) {
            "*"
        } else {
            " "
        };
        let idx_str = format!("{}. ", position + 1);

        let body_preview: String = note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let entry = if body_preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, body_preview)
        };

        let fixed_width = 2 + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let entry_display = truncate_to_width(&entry, available);
        let padding = available.saturating_sub(entry_display.width());

        println!(
            "{} {}{}{}{}",
            marker,
            idx_str,
            entry_display.bold(),
            " ".repeat(padding),
            format_age(note.id).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_age(id: NoteId) -> String {
    let Some(created) = id.created_at() else {
        return String::new();
    };
    let duration = Utc::now().signed_duration_since(created);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn print_help() {
    println!("Commands:");
    println!("  list              List notes (* marks the open note)");
    println!("  add               Create a note and open it");
    println!("  open <number>     Open a note; its saved content replaces the draft");
    println!("  edit              Edit the draft in $EDITOR (not saved yet)");
    println!("  show              Print the draft");
    println!("  preview           Render the draft as HTML");
    println!("  save              Commit the draft to the open note");
    println!("  delete            Delete the open note (asks for confirmation)");
    println!("  quit              Exit");
}
