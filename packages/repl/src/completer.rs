//! Command completion for the shell.

use reedline::{Completer, Span, Suggestion};

/// Completes command names at the start of the line.
pub struct ShellCompleter {
    commands: Vec<String>,
}

impl ShellCompleter {
    pub fn new() -> Self {
        Self {
            commands: [
                "load", "insert", "mkpath", "search", "rm", "files", "dirs", "stats", "help",
                "exit", "quit",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ShellCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        let line_to_pos = &line[..pos];
        let words: Vec<&str> = line_to_pos.split_whitespace().collect();

        if words.is_empty() || (words.len() == 1 && !line_to_pos.ends_with(' ')) {
            // Completing the command itself
            let prefix = words.first().copied().unwrap_or("");
            let start = line_to_pos.rfind(prefix).unwrap_or(0);

            for cmd in &self.commands {
                if cmd.starts_with(prefix) {
                    suggestions.push(Suggestion {
                        value: cmd.clone(),
                        description: Some(command_description(cmd)),
                        style: None,
                        extra: None,
                        span: Span::new(start, pos),
                        append_whitespace: true,
                        match_indices: None,
                    });
                }
            }
        }

        suggestions
    }
}

fn command_description(cmd: &str) -> String {
    match cmd {
        "load" => "Rebuild the tree from a directory".to_string(),
        "insert" => "Insert one new leaf".to_string(),
        "mkpath" => "Insert a path, creating missing components".to_string(),
        "search" => "Report FILE / DIRECTORY / not found".to_string(),
        "rm" => "Remove an entry and its subtree".to_string(),
        "files" => "List every file path".to_string(),
        "dirs" => "List every directory path".to_string(),
        "stats" => "Show tree statistics".to_string(),
        "help" => "Show help".to_string(),
        "exit" | "quit" => "Leave the shell".to_string(),
        _ => String::new(),
    }
}
