//! Caller reporting example
//!
//! Enables caller lookup and shows the `srcfnc`/`srcline` fields in the
//! output. The resolver names the function that called into the crate that
//! invoked the formatter, so it shines when the formatter sits behind a
//! logging framework; in a flat binary like this one the chain ends in the
//! runtime and the `unknown` sentinel appears instead.
//!
//! Run with: cargo run --example caller_info

use kvline::prelude::*;

fn emit(formatter: &Formatter, record: &Record) {
    print!("{}", String::from_utf8_lossy(&formatter.format(record)));
}

fn process_order(formatter: &Formatter, order_id: &str) {
    let record = Record::new(Level::Info, "order processed").with_field("order_id", order_id);
    emit(formatter, &record);
}

fn main() {
    println!("=== kvline - Caller Info Example ===\n");

    println!("1. Caller lookup disabled (the default):");
    let plain = Formatter::builder().build();
    process_order(&plain, "ord-1134");

    println!("\n2. Caller lookup enabled adds srcfnc after the severity:");
    let with_caller = Formatter::builder().include_caller(true).build();
    process_order(&with_caller, "ord-1134");

    println!("\n3. The fields appear on every line once enabled:");
    for attempt in 1..=3 {
        let record =
            Record::new(Level::Warn, "retrying delivery").with_field("attempt", attempt as i64);
        emit(&with_caller, &record);
    }

    println!("\n=== Example completed successfully! ===");
}
