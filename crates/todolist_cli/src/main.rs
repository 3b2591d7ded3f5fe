//! Interactive todo list front end.
//!
//! # Responsibility
//! - Parse line commands and forward them to `TodoService`.
//! - Ask for confirmation before destructive commands.
//! - Redraw the list after every successful mutation via a store observer.

use log::{info, warn};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;
use todolist_core::{
    display_text, init_logging, render_stats_html, render_stats_text, render_task_list_html,
    render_task_list_text, LogConfig, StoreError, StoreEvent, StoreView, TaskId, TodoService,
};

const HELP: &str = "\
Commands:
  add <text>      add a task (max 100 characters)
  toggle <id>     mark a task done / undo (alias: done)
  delete <id>     delete a task (alias: rm)
  clear           delete all tasks
  list            show tasks and stats
  stats           show stats only
  html            print the list as HTML
  json            print the list as JSON
  help            show this help
  quit            exit (alias: exit)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Clear,
    List,
    Stats,
    Html,
    Json,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => Command::Add(rest.to_string()),
        "toggle" | "done" => Command::Toggle(parse_id(rest)?),
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "clear" => Command::Clear,
        "list" | "ls" => Command::List,
        "stats" => Command::Stats,
        "html" => Command::Html,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command `{other}`. Type `help`.")),
    };
    Ok(Some(command))
}

fn parse_id(value: &str) -> Result<TaskId, String> {
    value
        .parse::<TaskId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| format!("Expected a positive task id, got `{value}`."))
}

/// Runtime switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
struct Options {
    assume_yes: bool,
}

impl Options {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "-y" | "--yes" => options.assume_yes = true,
                other => {
                    return Err(format!(
                        "unknown argument `{other}`; usage: todolist [--yes]"
                    ))
                }
            }
        }
        Ok(options)
    }
}

struct Session<R, W> {
    input: R,
    output: W,
    options: Options,
    service: TodoService,
    redraw: Rc<RefCell<Option<String>>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W, options: Options) -> Self {
        let redraw = Rc::new(RefCell::new(None));
        let pending = Rc::clone(&redraw);
        let mut service = TodoService::new();
        service.subscribe(move |_: &StoreEvent, view: &StoreView<'_>| {
            *pending.borrow_mut() = Some(render_task_list_text(view));
        });

        Self {
            input,
            output,
            options,
            service,
            redraw,
        }
    }

    fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Todo list. Type `help` for commands.")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => return Ok(()),
                Ok(Some(command)) => self.execute(command)?,
                Err(message) => writeln!(self.output, "{message}")?,
            }
            self.flush_redraw()?;
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Add(text) => match self.service.add(&text) {
                Ok(_) => writeln!(self.output, "Task added successfully!"),
                Err(err) => self.report(&err),
            },
            Command::Toggle(id) => match self.service.toggle(id) {
                Ok(_) => Ok(()),
                Err(err) => self.report(&err),
            },
            Command::Delete(id) => self.delete(id),
            Command::Clear => self.clear(),
            Command::List => {
                let listing = render_task_list_text(&self.service.view());
                writeln!(self.output, "{listing}")
            }
            Command::Stats => {
                let stats = render_stats_text(&self.service.stats());
                writeln!(self.output, "{stats}")
            }
            Command::Html => {
                let view = self.service.view();
                let list = render_task_list_html(&view);
                let stats = render_stats_html(&view.stats);
                writeln!(self.output, "<ul id=\"todo-list\">{list}</ul>\n{stats}")
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(self.service.view().tasks)
                    .map_err(io::Error::other)?;
                writeln!(self.output, "{json}")
            }
            Command::Help => writeln!(self.output, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn delete(&mut self, id: TaskId) -> io::Result<()> {
        let Some(task) = self.service.store().get(id) else {
            return self.report(&StoreError::NotFound(id));
        };
        let prompt = format!(
            "Are you sure you want to delete \"{}\"?",
            display_text(&task.text)
        );
        if !self.confirm(&prompt)? {
            return writeln!(self.output, "Cancelled.");
        }
        match self.service.delete(id) {
            Ok(_) => Ok(()),
            Err(err) => self.report(&err),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        let total = self.service.stats().total;
        if total == 0 {
            return writeln!(self.output, "No tasks to clear!");
        }
        let prompt = format!("Are you sure you want to delete all {total} tasks?");
        if !self.confirm(&prompt)? {
            return writeln!(self.output, "Cancelled.");
        }
        let removed = self.service.clear_all();
        writeln!(self.output, "Removed {removed} tasks.")
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        if self.options.assume_yes {
            return Ok(true);
        }
        write!(self.output, "{prompt} [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn report(&mut self, err: &StoreError) -> io::Result<()> {
        warn!("event=command_rejected module=cli status=error reason={err}");
        let message = match err {
            StoreError::Validation(inner) => inner.user_message(),
            StoreError::NotFound(id) => format!("No task with id {id}."),
        };
        writeln!(self.output, "{message}")
    }

    fn flush_redraw(&mut self) -> io::Result<()> {
        if let Some(listing) = self.redraw.borrow_mut().take() {
            writeln!(self.output, "{listing}")?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn main() -> ExitCode {
    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match LogConfig::from_env().and_then(|config| init_logging(&config)) {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok assume_yes={}",
            options.assume_yes
        ),
        Err(message) => eprintln!("warning: file logging disabled: {message}"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, Options, Session};
    use std::io::Cursor;

    fn run_script(script: &str, options: Options) -> String {
        let mut output = Vec::new();
        Session::new(Cursor::new(script.as_bytes()), &mut output, options)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(
            parse_command("add   Buy milk  ").unwrap(),
            Some(Command::Add("Buy milk".to_string()))
        );
        assert_eq!(parse_command("done 3").unwrap(), Some(Command::Toggle(3)));
        assert_eq!(parse_command("RM 2").unwrap(), Some(Command::Delete(2)));
        assert_eq!(parse_command("   ").unwrap(), None);
        assert!(parse_command("toggle zero").is_err());
        assert!(parse_command("delete 0").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn options_accept_yes_flag_only() {
        assert!(Options::from_args(vec!["--yes".to_string()]).unwrap().assume_yes);
        assert!(Options::from_args(vec!["--force".to_string()]).is_err());
    }

    #[test]
    fn add_redraws_list_after_mutation() {
        let out = run_script("add Buy milk\nquit\n", Options::default());
        assert!(out.contains("Task added successfully!"));
        assert!(out.contains("[ ] #1 Buy milk"));
        assert!(out.contains("Total: 1 | Completed: 0 | Pending: 1"));
    }

    #[test]
    fn validation_errors_are_reported_and_loop_continues() {
        let long = "x".repeat(101);
        let out = run_script(&format!("add   \nadd {long}\nadd ok\n"), Options::default());
        assert!(out.contains("Please enter a task!"));
        assert!(out.contains("Task is too long"));
        assert!(out.contains("[ ] #1 ok"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let out = run_script("add a\ndelete 1\nn\nlist\n", Options::default());
        assert!(out.contains("Are you sure you want to delete \"a\"?"));
        assert!(out.contains("Cancelled."));
        assert!(out.ends_with("[ ] #1 a\nTotal: 1 | Completed: 0 | Pending: 1\n> "));

        let out = run_script("add a\ndelete 1\ny\n", Options::default());
        assert!(out.contains("Total: 0 | Completed: 0 | Pending: 0"));
    }

    #[test]
    fn delete_prompt_neutralizes_control_characters() {
        let out = run_script("add evil\u{1b}[2Jtext\ndelete 1\nn\n", Options::default());
        assert!(out.contains("Are you sure you want to delete \"evil [2Jtext\"?"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn clear_on_empty_list_skips_prompt() {
        let out = run_script("clear\n", Options::default());
        assert!(out.contains("No tasks to clear!"));
        assert!(!out.contains("Are you sure"));
    }

    #[test]
    fn assume_yes_skips_prompts() {
        let out = run_script("add a\nadd b\nclear\n", Options { assume_yes: true });
        assert!(!out.contains("Are you sure"));
        assert!(out.contains("Removed 2 tasks."));
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let out = run_script("toggle 9\ndelete 9\n", Options::default());
        assert_eq!(out.matches("No task with id 9.").count(), 2);
    }

    #[test]
    fn html_and_json_exports_escape_and_serialize() {
        let out = run_script("add <b>bold</b>\nhtml\njson\n", Options::default());
        assert!(out.contains("&lt;b&gt;bold"));
        assert!(out.contains("\"text\": \"<b>bold</b>\""));
        assert!(out.contains("Total: 1"));
    }
}
