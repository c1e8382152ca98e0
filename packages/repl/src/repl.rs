//! Interactive shell loop.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use nu_ansi_term::{Color, Style};
use reedline::{
    default_emacs_keybindings, ColumnarMenu, Emacs, KeyCode, KeyModifiers, MenuBuilder, Prompt,
    PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, ReedlineEvent,
    ReedlineMenu, Signal,
};

use crate::commands::{self, CommandResult};
use crate::completer::ShellCompleter;
use crate::context::ShellContext;
use crate::error::ShellError;

/// Run the interactive shell, optionally loading `start_dir` first.
pub fn run(start_dir: Option<&Path>) -> Result<(), ShellError> {
    let mut ctx = ShellContext::new();
    if let Some(dir) = start_dir {
        ctx.load_dir(dir).map_err(|source| ShellError::Load {
            path: dir.to_path_buf(),
            source,
        })?;
        println!(
            "{}",
            Color::Cyan.paint(format!(
                "loaded {} ({} nodes)",
                dir.display(),
                ctx.tree().node_count()
            ))
        );
    }

    let mut line_editor = build_line_editor();
    println!("{}", Color::Cyan.paint(BANNER));

    loop {
        let prompt = ShellPrompt {
            node_count: ctx.tree().node_count(),
        };

        match line_editor.read_line(&prompt)? {
            Signal::Success(line) => match commands::execute(&line, &mut ctx) {
                CommandResult::Ok { display: None } => {}
                CommandResult::Ok {
                    display: Some(output),
                } => println!("{}", output),
                CommandResult::Error(message) => {
                    println!("{} {}", Color::Red.bold().paint("Error:"), message);
                }
                CommandResult::Help => println!("{}", commands::format_help()),
                CommandResult::Exit => {
                    println!("{}", Color::Cyan.paint("Goodbye!"));
                    return Ok(());
                }
            },
            Signal::CtrlC => {
                println!("{}", Color::Cyan.paint("^C (use 'exit' to quit)"));
            }
            Signal::CtrlD => {
                println!("{}", Color::Cyan.paint("Goodbye!"));
                return Ok(());
            }
        }
    }
}

fn build_line_editor() -> Reedline {
    let completer = Box::new(ShellCompleter::new());
    let completion_menu = Box::new(
        ColumnarMenu::default()
            .with_name("completion_menu")
            .with_text_style(Style::new().fg(Color::Cyan))
            .with_selected_text_style(Style::new().fg(Color::Black).on(Color::Cyan).bold()),
    );

    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );

    let mut line_editor = Reedline::create()
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    if let Some(history_path) = history_path() {
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(history) = reedline::FileBackedHistory::with_file(1000, history_path) {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    line_editor
}

fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("fstree").join("history.txt"))
}

/// Prompt showing how many nodes the tree currently holds.
struct ShellPrompt {
    node_count: usize,
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(
            Color::Blue
                .bold()
                .paint(format!("fstree [{} nodes]", self.node_count))
                .to_string(),
        )
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

const BANNER: &str = r#"fstree - in-memory filesystem hierarchy
Type 'help' for available commands, 'exit' to quit."#;
