//! Builds a small table and reads it back through both the method API and index syntax.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_usage` to see the resize log.

use chained_table::{HashTable, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let mut table = HashTable::new(100)?;
    table.put("1".to_string(), "1".to_string());
    table.put(2.to_string(), "2".to_string());
    table.put("foo".to_string(), "bar".to_string());

    println!("{:?}", table.get("1"));
    println!("{}", table["2"]);
    println!("{}", table.get_or("foo", &String::new()));
    println!("{:?}", table);

    // far past the 0.75 load factor of 100 buckets
    for i in 0..1_000 {
        table.put(format!("key{}", i), i.to_string());
    }
    info!(
        "{} entries in {} buckets (load factor {:.2})",
        table.len(),
        table.capacity(),
        table.load_factor()
    );

    let removed = table.delete("foo")?;
    info!("removed foo -> {}", removed);
    if let Err(err) = table.delete("foo") {
        info!("second delete of foo failed: {}", err);
    }

    Ok(())
}
