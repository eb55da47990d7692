//! Interactive editing session
//!
//! Reads one command per line and maps it onto the editor. Positions typed by
//! the user are 1-based.

use crate::error::{CliError, Result};
use playlister_edit::PlaylistEditor;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub const HELP: &str = "\
Commands:
  list                 Show the playlist
  move <from> <to>     Move the song at <from> to <to>
  remove <n>           Remove the song at <n>
  dup <n>              Duplicate the song at <n> right after it
  undo                 Undo the last edit
  redo                 Redo the last undone edit
  rename <name>        Rename the playlist
  history              Show the edit history
  reload               Reload the playlist from the store
  help                 Show this help
  quit                 Leave the editor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Move { from: usize, to: usize },
    Remove(usize),
    Duplicate(usize),
    Undo,
    Redo,
    Rename(String),
    History,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; positions are converted to 0-based indices
    ///
    /// A blank line parses to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "move" | "mv" => {
                let mut args = rest.split_whitespace();
                let (Some(from), Some(to), None) = (args.next(), args.next(), args.next()) else {
                    return Err(CliError::usage("usage: move <from> <to>"));
                };
                Command::Move {
                    from: position(from)?,
                    to: position(to)?,
                }
            }
            "remove" | "rm" => Command::Remove(position(rest)?),
            "dup" | "duplicate" => Command::Duplicate(position(rest)?),
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "rename" => {
                if rest.is_empty() {
                    return Err(CliError::usage("usage: rename <name>"));
                }
                Command::Rename(rest.to_string())
            }
            "history" => Command::History,
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => return Ok(None),
            other => {
                return Err(CliError::usage(format!(
                    "unknown command '{}' (type 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Turn a 1-based position into an index
fn position(arg: &str) -> Result<usize> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CliError::usage(format!(
            "'{}' is not a position (positions start at 1)",
            arg.trim()
        ))),
    }
}

/// Run commands from `input` until `quit` or end of input
///
/// Failed commands are reported on `out` and the session continues.
pub async fn run<R, W>(editor: &mut PlaylistEditor, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    print_songs(editor, out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Command");

        if command == Command::Quit {
            break;
        }
        if let Err(err) = execute(editor, command, out).await {
            writeln!(out, "error: {}", err)?;
        }
    }

    writeln!(out)?;
    Ok(())
}

async fn execute<W: Write>(
    editor: &mut PlaylistEditor,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::List => print_songs(editor, out)?,
        Command::Move { from, to } => {
            if editor.move_song(from, to).await? {
                print_songs(editor, out)?;
            } else {
                writeln!(out, "Nothing to move")?;
            }
        }
        Command::Remove(index) => {
            editor.remove_song(index).await?;
            print_songs(editor, out)?;
        }
        Command::Duplicate(index) => {
            editor.duplicate_song(index).await?;
            print_songs(editor, out)?;
        }
        Command::Undo => {
            if editor.undo().await? {
                print_songs(editor, out)?;
            } else {
                writeln!(out, "Nothing to undo")?;
            }
        }
        Command::Redo => {
            if editor.redo().await? {
                print_songs(editor, out)?;
            } else {
                writeln!(out, "Nothing to redo")?;
            }
        }
        Command::Rename(name) => {
            if editor.rename(&name).await? {
                writeln!(out, "Renamed to \"{}\"", name.trim())?;
            } else {
                writeln!(out, "Name unchanged")?;
            }
        }
        Command::History => print_history(editor, out)?,
        Command::Reload => {
            editor.reload().await?;
            print_songs(editor, out)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn print_songs<W: Write>(editor: &PlaylistEditor, out: &mut W) -> std::io::Result<()> {
    if editor.songs().is_empty() {
        return writeln!(out, "(empty playlist)");
    }
    for (i, song) in editor.songs().iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, song)?;
    }

    let mut flags = Vec::new();
    if editor.can_undo() {
        flags.push("undo");
    }
    if editor.can_redo() {
        flags.push("redo");
    }
    if !flags.is_empty() {
        writeln!(out, "     [{}]", flags.join(" | "))?;
    }
    Ok(())
}

fn print_history<W: Write>(editor: &PlaylistEditor, out: &mut W) -> std::io::Result<()> {
    if editor.history().is_empty() {
        return writeln!(out, "(no edits)");
    }
    for (i, transaction) in editor.history().iter().enumerate() {
        // Applied edits are marked; the rest can be redone
        let marker = if i < editor.cursor() { '*' } else { ' ' };
        writeln!(out, " {} {}", marker, transaction)?;
    }
    Ok(())
}
