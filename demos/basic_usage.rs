//! Basic usage example for repodump-core
//!
//! This example demonstrates:
//! - Parsing dump text into an attribute model
//! - Looking attributes up by name
//! - Walking the grouped display view
//!
//! Run with: cargo run --example basic_usage

use repodump_core::{codec::DumpModel, properties::EntityKind, RepodumpError};

fn main() -> Result<(), RepodumpError> {
    // Set up logging to see what's happening
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== repodump-core Basic Usage Example ===\n");

    let dump = "\
---
USER ATTRIBUTES
---
object_name : TPS Report Q3
keywords[0] : finance
[1] : tps
a_content_type : msw12
---
SYSTEM ATTRIBUTES
---
r_object_id [ID] : 0900000180000100
r_version_label[1] : 1.0
[0] : CURRENT
i_vstamp [integer] : 4
";

    println!("1. Parsing a document dump...");
    let model = DumpModel::parse(EntityKind::Object, dump);
    println!("   ✓ Parsed {} attributes\n", model.len());

    println!("2. Looking attributes up by name:");
    if let Some(labels) = model.get("r_version_label") {
        println!(
            "   r_version_label ({}): {}",
            labels.declared_type,
            labels.display_value()
        );
    }
    if let Some(keywords) = model.get("keywords") {
        println!("   keywords: {}\n", keywords.display_value());
    }

    println!("3. Grouped view:");
    for section in model.sections() {
        println!("   == {} ==", section.group);
        for record in &section.records {
            println!("   {:<20} : {}", record.name, record.display_value());
        }
    }

    Ok(())
}
