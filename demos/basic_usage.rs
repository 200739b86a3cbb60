//! Basic formatter usage example
//!
//! Renders a handful of records with the default formatter and shows how
//! field ordering and the message slot behave.
//!
//! Run with: cargo run --example basic_usage

use kvline::fields;
use kvline::prelude::*;

fn emit(formatter: &Formatter, record: &Record) {
    print!("{}", String::from_utf8_lossy(&formatter.format(record)));
}

fn main() {
    println!("=== kvline - Basic Usage Example ===\n");

    let formatter = Formatter::default();

    println!("1. One record per severity level:");
    for level in [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ] {
        emit(&formatter, &Record::new(level, "service heartbeat"));
    }

    println!("\n2. Fields render in ascending key order:");
    let record = Record::new(Level::Info, "delivered message ok").with_fields(fields! {
        "msg_count" => 1i64,
        "action" => "deliver_msg",
        "elapsed_ms" => 12.5f64,
        "ok" => true,
    });
    emit(&formatter, &record);

    println!("\n3. Primary fields jump the queue:");
    let by_action = Formatter::builder()
        .primary_fields(["action", "msg_count"])
        .build();
    emit(&by_action, &record);

    println!("\n4. Constant fields tag every line:");
    let tagged = Formatter::builder()
        .constant_field("commit", "abcd1234")
        .constant_field("host", "worker-03")
        .build();
    emit(&tagged, &Record::new(Level::Info, "queue drained"));
    emit(&tagged, &Record::new(Level::Warn, "queue backlog growing"));

    println!("\n=== Example completed successfully! ===");
}
