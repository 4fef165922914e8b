//! Example 01: Basic List Operations
//!
//! This example demonstrates the fundamental task list operations:
//! add, toggle completion, and delete.
//!
//! Run with: cargo run --example 01_basic_ops

use taskpad::TaskList;

fn print_list(list: &TaskList) {
    if list.is_empty() {
        println!("   (no tasks)");
        return;
    }
    for (i, task) in list.iter().enumerate() {
        let mark = if task.done { "x" } else { " " };
        println!("   [{}] {}. {}", mark, i + 1, task.text);
    }
}

fn main() {
    println!("Taskpad Basic Operations Example");
    println!("================================\n");

    let mut list = TaskList::new();

    // ADD: leading/trailing whitespace is trimmed
    println!("1. ADD - Adding three tasks...");
    list.add("  Buy milk  ");
    list.add("Walk dog");
    list.add("Water plants");
    print_list(&list);
    println!();

    // Blank input is ignored
    println!("2. ADD (blank) - Submitting whitespace-only input...");
    let added = list.add("   ");
    println!("   Added: {:?} (list still has {} tasks)\n", added, list.len());

    // TOGGLE: mark a task done, then back
    println!("3. TOGGLE - Completing task 2...");
    list.toggle_done(1);
    print_list(&list);
    println!();

    // DELETE: later tasks shift down
    println!("4. DELETE - Removing task 1...");
    list.delete(0);
    print_list(&list);
    println!();

    // Stale indices are skipped without touching the list
    println!("5. STALE INDEX - Deleting task 9...");
    let applied = list.delete(8);
    println!("   Applied: {} (list still has {} tasks)\n", applied, list.len());

    println!("Example complete!");
}
