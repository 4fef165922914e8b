//! Example 03: Intent Dispatch
//!
//! A view layer forwards user actions as intents. This example decodes
//! a stream of JSON-encoded intents and applies them one at a time,
//! the way an event loop would, then prints the resulting list.
//!
//! Run with: cargo run --example 03_intent_dispatch

use eyre::Result;
use taskpad::{Intent, TaskList};

fn main() -> Result<()> {
    println!("Taskpad Intent Dispatch Example");
    println!("===============================\n");

    let events = r#"
        {"op":"add","text":"Buy milk"}
        {"op":"add","text":"Walk dog"}
        {"op":"add","text":"   "}
        {"op":"toggle_done","index":0}
        {"op":"set_editing","index":1,"editing":true}
        {"op":"edit_text","index":1,"text":"Walk the dog"}
        {"op":"set_editing","index":1,"editing":false}
        {"op":"delete","index":7}
    "#;

    let mut list = TaskList::new();

    for line in events.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let intent: Intent = serde_json::from_str(line)?;
        let applied = list.apply(intent);
        println!("   {:<60} applied: {}", line, applied);
    }

    println!("\nFinal state:");
    println!("{}", serde_json::to_string_pretty(&list)?);

    Ok(())
}
