//! Basic usage example for truecity-rs
//!
//! This example demonstrates how to:
//! - Drive the country → region → city cascade over the bundled sample tree
//! - Restore a previously stored selection
//! - Save through the modal and read back the host fields

use truecity_rs::modal::{SaveOutcome, SelectorModal};
use truecity_rs::prelude::*;
use truecity_rs::profile::persisted_fields;

fn lists(country: &str) -> Widgets<MemorySelect> {
    Widgets {
        country: MemorySelect::prefilled(
            vec![
                LocationOption::new("CO", "Colombia"),
                LocationOption::new("US", "United States"),
            ],
            country,
        ),
        region: MemorySelect::new("Select a region"),
        city: MemorySelect::new("Select a city"),
    }
}

fn print_choices(title: &str, list: &MemorySelect) {
    println!("{title}:");
    for opt in list.choices() {
        println!("  - {} ({})", opt.display_name, opt.code);
    }
    println!();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== TrueCity-RS Basic Usage Example ===\n");

    let config = SelectorConfig::new("profile-1", "data/sample")?;
    let messages = Messages::default();

    // Fresh selection
    println!("--- Example 1: Fresh selection ---");
    let mut session = CascadeSession::initialize(
        DirSource::sample(),
        &config,
        lists("CO"),
        TracingFeedback,
        messages.clone(),
        None,
    )
    .await;
    print_choices("Regions of Colombia", session.controller().list(Level::Region));

    session.select_region("ANT").await;
    print_choices("Cities of Antioquia", session.controller().list(Level::City));

    session.select_city("20512");
    let committed = session.commit()?;
    println!("Stored value: {}", committed.json());
    println!("Location text: {}\n", committed.summary);

    // Restore it into a new session
    println!("--- Example 2: Restore a stored selection ---");
    let stored = committed.json();
    let session = CascadeSession::initialize(
        DirSource::sample(),
        &config,
        lists("CO"),
        TracingFeedback,
        messages.clone(),
        Some(&stored),
    )
    .await;
    let selection = session.controller().selection();
    for level in Level::ALL {
        let name = selection
            .get(level)
            .map(|o| o.display_name.as_str())
            .unwrap_or("-");
        println!("{level:>8}: {name}");
    }
    println!();

    // Modal save flow
    println!("--- Example 3: Save through the modal ---");
    let (_, mut controller) = session.into_inner();
    let mut modal = SelectorModal::new(&messages, Some(stored), committed.summary.clone());
    modal.open();
    match modal.save(&mut controller) {
        SaveOutcome::Saved(c) => println!("Saved: {}", c.summary),
        SaveOutcome::Prevented(e) => println!("Prevented: {e}"),
    }
    if let Some(fields) = persisted_fields(modal.hidden_value()) {
        println!(
            "Host fields → country: {:?}, city: {:?}",
            fields.country, fields.city
        );
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
