//! Shell command parsing and execution.
//!
//! Commands:
//! - `load <dir>` - Rebuild the tree from a real directory
//! - `insert <path>` - Insert one new leaf (parent must exist)
//! - `mkpath <path>` - Insert a path, creating missing components
//! - `search <path>` - Report FILE / DIRECTORY / not found
//! - `rm <path>` - Remove an entry and its subtree
//! - `files` - List every file path
//! - `dirs` - List every directory path
//! - `stats` - Height, node count, and source of the tree
//! - `help` - Show help
//! - `exit` - Leave the shell

use nu_ansi_term::Color;

use fstree_core::{EntryKind, Path};

use crate::context::ShellContext;

/// Result of executing a command.
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command failed with an error message
    Error(String),
    /// User requested to exit
    Exit,
    /// Show help
    Help,
}

impl CommandResult {
    /// Create a simple Ok result with display text
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    /// Create an Ok result with no output
    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Parse and execute a command line.
pub fn execute(input: &str, ctx: &mut ShellContext) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let argument = words.next();

    if words.next().is_some() {
        return CommandResult::Error(format!("too many arguments for '{}'", command));
    }

    match (command.as_str(), argument) {
        ("load", Some(dir)) => cmd_load(dir, ctx),
        ("insert", Some(path)) => cmd_insert(path, ctx),
        ("mkpath", Some(path)) => cmd_mkpath(path, ctx),
        ("search", Some(path)) => cmd_search(path, ctx),
        ("rm", Some(path)) => cmd_remove(path, ctx),
        ("files", None) => cmd_listing(ctx.tree().file_paths()),
        ("dirs", None) => cmd_listing(ctx.tree().dir_paths()),
        ("stats", None) => cmd_stats(ctx),
        ("help", None) => CommandResult::Help,
        ("exit", None) | ("quit", None) => CommandResult::Exit,
        ("load" | "insert" | "mkpath" | "search" | "rm", None) => {
            CommandResult::Error(format!("'{}' needs a path argument", command))
        }
        ("files" | "dirs" | "stats" | "help" | "exit" | "quit", Some(_)) => {
            CommandResult::Error(format!("'{}' takes no argument", command))
        }
        _ => CommandResult::Error(format!(
            "unknown command '{}' (try 'help')",
            command
        )),
    }
}

fn cmd_load(dir: &str, ctx: &mut ShellContext) -> CommandResult {
    match ctx.load_dir(dir.as_ref()) {
        Ok(()) => CommandResult::ok_display(format!(
            "loaded {} ({} nodes)",
            dir,
            ctx.tree().node_count()
        )),
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_insert(path: &str, ctx: &mut ShellContext) -> CommandResult {
    match ctx.tree_mut().insert(&Path::parse(path)) {
        Ok(()) => CommandResult::ok_display(format!("inserted {}", path)),
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_mkpath(path: &str, ctx: &mut ShellContext) -> CommandResult {
    match ctx.tree_mut().insert_path(&Path::parse(path)) {
        Ok(()) => CommandResult::ok_display(format!("path {} present", path)),
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_search(path: &str, ctx: &ShellContext) -> CommandResult {
    let outcome = match ctx.tree().search(&Path::parse(path)) {
        Some(EntryKind::File) => Color::Green.paint("FILE").to_string(),
        Some(EntryKind::Directory) => Color::Blue.paint("DIRECTORY").to_string(),
        None => Color::Yellow.paint("not found").to_string(),
    };
    CommandResult::ok_display(format!("{}: {}", path, outcome))
}

fn cmd_remove(path: &str, ctx: &mut ShellContext) -> CommandResult {
    match ctx.tree_mut().remove(&Path::parse(path)) {
        Ok(()) => CommandResult::ok_display(format!("removed {}", path)),
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_listing(paths: Vec<String>) -> CommandResult {
    if paths.is_empty() {
        CommandResult::ok_display(Color::DarkGray.paint("(none)").to_string())
    } else {
        CommandResult::ok_display(paths.join("\n"))
    }
}

fn cmd_stats(ctx: &ShellContext) -> CommandResult {
    let tree = ctx.tree();
    let source = match ctx.source() {
        Some(dir) => dir.display().to_string(),
        None => "(built in memory)".to_string(),
    };
    CommandResult::ok_display(format!(
        "source: {}\nnodes: {}\nheight: {}\nfiles: {}\ndirectories: {}",
        source,
        tree.node_count(),
        tree.height(),
        tree.file_paths().len(),
        tree.dir_paths().len()
    ))
}

/// Help text for the `help` command.
pub fn format_help() -> String {
    let mut help = String::from("Commands:\n");
    for (usage, description) in COMMAND_HELP {
        // Pad before painting so the ANSI codes do not skew the columns.
        help.push_str(&format!(
            "  {} {}\n",
            Color::Cyan.paint(format!("{:<15}", usage)),
            description
        ));
    }
    help
}

const COMMAND_HELP: &[(&str, &str)] = &[
    ("load <dir>", "rebuild the tree from a real directory"),
    ("insert <path>", "insert one new leaf under an existing parent"),
    ("mkpath <path>", "insert a path, creating missing components"),
    ("search <path>", "report FILE / DIRECTORY / not found"),
    ("rm <path>", "remove an entry and its whole subtree"),
    ("files", "list every file path"),
    ("dirs", "list every directory path"),
    ("stats", "height, node count, and source of the tree"),
    ("help", "show this help"),
    ("exit", "leave the shell"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn display_of(result: CommandResult) -> String {
        match result {
            CommandResult::Ok { display } => display.unwrap_or_default(),
            CommandResult::Error(message) => panic!("unexpected error: {}", message),
            _ => panic!("unexpected result kind"),
        }
    }

    fn error_of(result: CommandResult) -> String {
        match result {
            CommandResult::Error(message) => message,
            _ => panic!("expected an error"),
        }
    }

    #[test]
    fn empty_input_is_silent() {
        let mut ctx = ShellContext::new();
        assert!(matches!(
            execute("   ", &mut ctx),
            CommandResult::Ok { display: None }
        ));
    }

    #[test]
    fn mkpath_then_search_reports_kinds() {
        let mut ctx = ShellContext::new();
        display_of(execute("mkpath docs/readme.txt", &mut ctx));

        assert!(display_of(execute("search docs/readme.txt", &mut ctx)).contains("FILE"));
        assert!(display_of(execute("search docs", &mut ctx)).contains("DIRECTORY"));
        assert!(display_of(execute("search nothing", &mut ctx)).contains("not found"));
    }

    #[test]
    fn insert_requires_existing_parent() {
        let mut ctx = ShellContext::new();
        let message = error_of(execute("insert docs/readme.txt", &mut ctx));
        assert!(message.contains("missing parent"));

        display_of(execute("mkpath docs/manual.pdf", &mut ctx));
        display_of(execute("insert docs/readme.txt", &mut ctx));
        let message = error_of(execute("insert docs/readme.txt", &mut ctx));
        assert!(message.contains("already exists"));
    }

    #[test]
    fn rm_removes_subtrees() {
        let mut ctx = ShellContext::new();
        display_of(execute("mkpath src/util/helper.rs", &mut ctx));
        display_of(execute("rm src", &mut ctx));

        assert!(display_of(execute("search src/util", &mut ctx)).contains("not found"));
        let message = error_of(execute("rm src", &mut ctx));
        assert!(message.contains("no entry"));
    }

    #[test]
    fn listings_and_stats_reflect_tree() {
        let mut ctx = ShellContext::new();
        display_of(execute("mkpath a/b/c", &mut ctx));
        display_of(execute("mkpath a/e", &mut ctx));

        assert_eq!(display_of(execute("files", &mut ctx)), "a/b/c\na/e");
        assert_eq!(display_of(execute("dirs", &mut ctx)), "a\na/b");

        let stats = display_of(execute("stats", &mut ctx));
        assert!(stats.contains("nodes: 5"));
        assert!(stats.contains("height: 3"));
    }

    #[test]
    fn argument_arity_is_checked() {
        let mut ctx = ShellContext::new();
        assert!(error_of(execute("search", &mut ctx)).contains("needs a path"));
        assert!(error_of(execute("files extra", &mut ctx)).contains("takes no argument"));
        assert!(error_of(execute("frobnicate", &mut ctx)).contains("unknown command"));
    }

    #[test]
    fn exit_and_help_route_to_their_results() {
        let mut ctx = ShellContext::new();
        assert!(matches!(execute("exit", &mut ctx), CommandResult::Exit));
        assert!(matches!(execute("quit", &mut ctx), CommandResult::Exit));
        assert!(matches!(execute("help", &mut ctx), CommandResult::Help));
    }
}
