use clap::Parser;
use colored::Colorize;
use eyre::Result;
use std::io::{self, BufRead, Write};
use taskpad::{Intent, Session};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Interactive task list editor - add, edit, complete and delete tasks")]
#[command(version)]
struct Cli {
    /// Preload tasks before the prompt starts
    #[arg(short, long, value_name = "TEXT")]
    seed: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// One parsed prompt line. Task numbers are 1-based as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(Option<String>),
    Draft(String),
    Done(usize),
    Delete(usize),
    Edit(usize),
    Text(usize, String),
    Save(usize),
    List,
    Dump,
    Help,
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut session = Session::new();
    for text in &cli.seed {
        session.list_mut().add(text);
    }

    println!("{}", "taskpad - type 'help' for commands, 'quit' to exit".bold());
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::List) => render(&session),
            Ok(Command::Dump) => {
                println!("{}", serde_json::to_string_pretty(session.list())?);
            }
            Ok(Command::Draft(text)) => {
                session.set_draft(text);
                println!("draft: {:?}", session.draft().as_str());
            }
            Ok(Command::Add(text)) => {
                if let Some(text) = text {
                    session.set_draft(text);
                }
                if session.submit().is_none() {
                    println!("{}", "Nothing to add: the draft is blank".yellow());
                }
                render(&session);
            }
            Ok(Command::Done(index)) => {
                report(session.apply(Intent::ToggleDone { index }), index);
                render(&session);
            }
            Ok(Command::Delete(index)) => {
                report(session.apply(Intent::Delete { index }), index);
                render(&session);
            }
            Ok(Command::Edit(index)) => {
                report(session.apply(Intent::SetEditing { index, editing: true }), index);
                render(&session);
            }
            Ok(Command::Save(index)) => {
                report(session.apply(Intent::SetEditing { index, editing: false }), index);
                render(&session);
            }
            Ok(Command::Text(index, text)) => {
                report(session.apply(Intent::EditText { index, text }), index);
                render(&session);
            }
            Err(message) => println!("{}", message.red()),
        }
    }

    Ok(())
}

/// Re-render the whole list from the current state.
fn render(session: &Session) {
    if session.list().is_empty() {
        println!("  {}", "No tasks yet. Add one to get started!".dimmed());
        return;
    }

    for (i, task) in session.list().iter().enumerate() {
        let number = format!("{:>3}.", i + 1);
        let text = if task.done {
            task.text.as_str().green().strikethrough()
        } else {
            task.text.as_str().normal()
        };
        let marker = if task.editing {
            " [editing]".yellow()
        } else {
            "".normal()
        };
        println!("  {} {}{}", number.dimmed(), text, marker);
    }
}

fn report(applied: bool, index: usize) {
    if !applied {
        println!("{}", format!("No task #{}", index + 1).red());
    }
}

fn print_help() {
    println!("  add [TEXT]    add TEXT as a task (bare 'add' submits the draft)");
    println!("  draft TEXT    set the draft without submitting");
    println!("  done N        toggle completion of task N");
    println!("  del N         delete task N");
    println!("  edit N        enter edit mode for task N");
    println!("  text N TEXT   replace the text of task N (kept verbatim)");
    println!("  save N        leave edit mode for task N");
    println!("  list          show the task list");
    println!("  dump          print the list as JSON");
    println!("  quit          exit");
}

/// Split off the first whitespace-delimited word, keeping the remainder
/// verbatim past a single separator.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => (input, ""),
    }
}

fn parse_index(word: &str) -> Result<usize, String> {
    let shown: usize = word
        .parse()
        .map_err(|_| format!("Expected a task number, got {:?}", word))?;
    // Displayed numbers are 1-based
    shown
        .checked_sub(1)
        .ok_or_else(|| "Task numbers start at 1".to_string())
}

fn parse_command(line: &str) -> Result<Command, String> {
    let (word, rest) = split_word(line);

    match word {
        "add" | "a" => {
            let text = rest.trim();
            Ok(Command::Add((!text.is_empty()).then(|| text.to_string())))
        }
        "draft" => Ok(Command::Draft(rest.to_string())),
        "done" | "undo" => Ok(Command::Done(parse_index(rest.trim())?)),
        "del" | "delete" | "rm" => Ok(Command::Delete(parse_index(rest.trim())?)),
        "edit" | "e" => Ok(Command::Edit(parse_index(rest.trim())?)),
        "save" => Ok(Command::Save(parse_index(rest.trim())?)),
        "text" | "t" => {
            let (number, text) = split_word(rest);
            Ok(Command::Text(parse_index(number)?, text.to_string()))
        }
        "list" | "ls" => Ok(Command::List),
        "dump" => Ok(Command::Dump),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command {:?}, try 'help'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_text() {
        assert_eq!(
            parse_command("add Buy milk").unwrap(),
            Command::Add(Some("Buy milk".to_string()))
        );
        assert_eq!(parse_command("add").unwrap(), Command::Add(None));
    }

    #[test]
    fn test_parse_indices_are_one_based() {
        assert_eq!(parse_command("done 1").unwrap(), Command::Done(0));
        assert_eq!(parse_command("del 3").unwrap(), Command::Delete(2));
        assert!(parse_command("done 0").is_err());
        assert!(parse_command("done x").is_err());
    }

    #[test]
    fn test_parse_text_keeps_remainder_verbatim() {
        assert_eq!(
            parse_command("text 2 new  text ").unwrap(),
            Command::Text(1, "new  text ".to_string())
        );
        // Empty replacement text is allowed
        assert_eq!(parse_command("text 2 ").unwrap(), Command::Text(1, "".to_string()));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_command("frobnicate 1").is_err());
    }
}
