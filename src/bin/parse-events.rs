//! Reads an events listing (from a file given as argument, or from stdin), prints a summary, then prints it back as JSON
//!
//! Set `RUST_LOG=debug` to see fields that have been ignored

use std::io::Read;

use gcal_model::codec;
use gcal_model::EventList;

fn main() {
    env_logger::init();

    let text = match read_input() {
        Ok(text) => text,
        Err(err) => {
            log::error!("Unable to read input: {}", err);
            std::process::exit(1);
        }
    };

    let list: EventList = match codec::from_str(&text) {
        Ok(list) => list,
        Err(err) => {
            log::error!("Unable to parse the event list: {}", err);
            std::process::exit(1);
        }
    };

    println!("Calendar: {}", list.summary);
    println!("Number of items: {}", list.len());
    for event in &list {
        let marker = if event.is_all_day() { "all day" } else { "timed" };
        println!("  * {} ({}, {})", event.summary(), event.id(), marker);
    }
    if let Some(token) = &list.next_page_token {
        println!("Next page token: {:?}", token);
    }

    println!("{}", codec::to_string_pretty(&list));
}

fn read_input() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
