use colored::Colorize;

use crate::core::{Command, FolderType};

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a command as one human-readable line
pub fn format_command_pretty(command: &Command) -> String {
    match command {
        Command::Add { description } => {
            format!("{} {}", "add".green().bold(), format!("\"{description}\"").bold())
        },
        Command::List { folder } => format!("{} {}", "list".green().bold(), folder.as_str().cyan()),
        Command::Done { indices } => {
            format!("{} {}", "done".green().bold(), join_indices(indices).yellow())
        },
        Command::Delete { indices } => {
            format!("{} {}", "delete".red().bold(), join_indices(indices).yellow())
        },
        Command::Move { indices, folder } => format!(
            "{} {} {} {}",
            "move".green().bold(),
            join_indices(indices).yellow(),
            "->".dimmed(),
            folder.as_str().cyan()
        ),
        Command::ProjMode => "projmode".green().bold().to_string(),
        Command::Help => help_text(),
        Command::Exit => "exit".dimmed().to_string(),
        Command::Incorrect { message, .. } => format!("{}: {}", "error".red().bold(), message),
    }
}

/// Command reference shown for `help`
pub fn help_text() -> String {
    let rows = [
        ("add <description>", "add a task to the inbox"),
        ("list <folder>", "show the tasks in a folder"),
        ("done <n> [n...]", "mark tasks as done"),
        ("delete <n> [n...]", "remove tasks"),
        ("move <n> [n...] -f=<folder>", "move tasks to a folder"),
        ("move <folder> <n> [n...]", "same, folder first"),
        ("<folder> <n> [n...]", "same, without the move word"),
        ("projmode", "switch to project mode"),
        ("help", "show this reference"),
        ("exit", "leave"),
    ];

    let mut output = format!("{}\n", "Commands".bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for (usage, about) in rows {
        output.push_str(&format!("  {:<30} {}\n", usage.cyan(), about));
    }
    output.push_str(&format!(
        "\n{} {}",
        "Folders:".bold(),
        FolderType::names().replace(',', ", ")
    ));
    output
}
