//! Formatting helper functions for Jung replies
//!
//! This module builds the reply text for each command. Task numbers shown to
//! the user are 1-based.

use crate::task::Task;

pub const GREETING: &str = "Hello! I'm Jung, your task kaki.\nWhat can I do for you today?";
pub const FAREWELL: &str = "Bye. Jio me again next time ah!";

/// Format the whole task list
///
/// # Arguments
/// * `tasks` - Tasks in list order
///
/// # Returns
/// Numbered listing, or a friendly note when the list is empty
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Your task list is empty leh. Add something with todo, deadline or event!"
            .to_string();
    }

    let mut result = String::from("Here are the tasks in your list:");
    for (i, task) in tasks.iter().enumerate() {
        result.push_str(&format!("\n{}. {}", i + 1, task));
    }
    result
}

/// Format search results
///
/// Matches are renumbered from 1 in the order they appear in the list.
pub fn format_find_results(matches: &[(usize, &Task)]) -> String {
    if matches.is_empty() {
        return "Cannot find any matching tasks leh.".to_string();
    }

    let mut result = String::from("Here are the matching tasks in your list:");
    for (i, (_, task)) in matches.iter().enumerate() {
        result.push_str(&format!("\n{}. {}", i + 1, task));
    }
    result
}

pub fn format_added(task: &Task, total: usize) -> String {
    format!(
        "Okay. I've added this task:\n  {}\nYou now have {} tasks in the list.",
        task, total
    )
}

pub fn format_deleted(task: &Task, total: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\nYou now have {} tasks in the list.",
        task, total
    )
}

pub fn format_marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n  {}", task)
}

pub fn format_unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n  {}", task)
}

pub fn format_undone(description: &str) -> String {
    format!("Undone: {}", description)
}

/// Greeting shown when a session starts, with any load warnings appended
pub fn format_greeting(warnings: &[String]) -> String {
    let mut result = GREETING.to_string();
    for warning in warnings {
        result.push_str("\n\n");
        result.push_str(warning);
    }
    result
}
