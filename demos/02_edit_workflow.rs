//! Example 02: Inline Edit Workflow
//!
//! Walks a task through the edit cycle: enter edit mode, replace the
//! text, then save. Also shows that saving performs no validation, so
//! a task edited down to nothing stays empty.
//!
//! Run with: cargo run --example 02_edit_workflow

use taskpad::TaskList;

fn main() {
    println!("Taskpad Edit Workflow Example");
    println!("=============================\n");

    let mut list = TaskList::new();
    list.add("Buy milk");
    list.add("Walk dog");

    // Enter edit mode
    println!("1. EDIT - Entering edit mode for task 1...");
    list.set_editing(0, true);
    println!("   editing = {}\n", list.get(0).unwrap().editing);

    // The edit field writes through verbatim on every keystroke
    println!("2. TYPE - Replacing the text...");
    list.edit_text(0, "Buy oat milk");
    println!("   text = {:?}\n", list.get(0).unwrap().text);

    // Save leaves edit mode; text and done flag are untouched
    println!("3. SAVE - Leaving edit mode...");
    list.set_editing(0, false);
    let task = list.get(0).unwrap();
    println!("   text = {:?}, editing = {}\n", task.text, task.editing);

    // Save does not trim or reject empty text
    println!("4. SAVE WITHOUT VALIDATION - Editing task 2 down to nothing...");
    list.set_editing(1, true);
    list.edit_text(1, "");
    list.set_editing(1, false);
    println!("   text = {:?} (saved as-is)\n", list.get(1).unwrap().text);

    println!("Example complete!");
}
