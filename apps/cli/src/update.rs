//! Interactive section updater — walks every store file in turn, prompting
//! on the console for edits.
//!
//! Object sections re-prompt each existing field; empty input keeps the
//! current value. List sections print their entries and optionally append
//! one, parsed as JSON when possible and kept as a raw string otherwise.

use std::io::{self, BufRead, Write};

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::store::{DataStore, Section};

pub fn interactive_update(store: &DataStore) -> Result<(), AppError> {
    let stdin = io::stdin();
    update_sections(store, &mut stdin.lock())?;
    println!("Interactive update complete.");
    Ok(())
}

fn update_sections(store: &DataStore, input: &mut impl BufRead) -> Result<(), AppError> {
    for section in Section::ALL {
        let mut value = store.load_value(section)?;
        println!("\n--- {} ---", section.file_name());
        match &mut value {
            Value::Object(map) => {
                let keys: Vec<String> = map.keys().cloned().collect();
                for key in keys {
                    let current = map[&key].as_str().unwrap_or_default().to_string();
                    let entry = prompt(input, &format!("{key} [{current}]: "))?;
                    let entry = entry.trim();
                    if !entry.is_empty() {
                        map.insert(key, Value::String(entry.to_string()));
                    }
                }
            }
            Value::Array(entries) => {
                println!("Entries:");
                for (i, entry) in entries.iter().enumerate() {
                    println!(" {}. {entry}", i + 1);
                }
                let answer = prompt(input, "Add new? (y/n): ")?;
                if answer.trim().eq_ignore_ascii_case("y") {
                    let raw = prompt(input, "New JSON or text: ")?;
                    let raw = raw.trim();
                    match serde_json::from_str::<Value>(raw) {
                        Ok(parsed) => entries.push(parsed),
                        Err(_) => entries.push(Value::String(raw.to_string())),
                    }
                }
            }
            _ => {}
        }
        store.save_value(section, &value)?;
    }
    info!("interactive update complete");
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String, AppError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
