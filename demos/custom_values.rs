//! Custom value rendering example
//!
//! Shows the three extension points for field values: `Marshal` for types
//! that print themselves, `Loggable` for types that expand into several
//! fields, and `RawString` for text that must reach the line verbatim.
//!
//! Run with: cargo run --example custom_values

use std::collections::BTreeMap;

use kvline::prelude::*;

struct AgeRange {
    min: u32,
    max: u32,
}

impl Marshal for AgeRange {
    fn marshal(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

struct Timing {
    min_ms: i64,
    median_ms: i64,
    max_ms: i64,
}

impl Loggable for Timing {
    fn log_values(&self) -> BTreeMap<String, Value> {
        let mut values = BTreeMap::new();
        values.insert(".min_ms".to_string(), Value::Int(self.min_ms));
        values.insert(".median_ms".to_string(), Value::Int(self.median_ms));
        values.insert(".max_ms".to_string(), Value::Int(self.max_ms));
        values
    }
}

fn emit(formatter: &Formatter, record: &Record) {
    print!("{}", String::from_utf8_lossy(&formatter.format(record)));
}

fn main() {
    println!("=== kvline - Custom Values Example ===\n");

    let formatter = Formatter::default();

    println!("1. Marshal renders a type as one bare token:");
    let ages = AgeRange { min: 18, max: 93 };
    let record =
        Record::new(Level::Info, "cohort selected").with_field("age_range", Value::marshal(&ages));
    emit(&formatter, &record);

    println!("\n2. Loggable expands into dotted sub-fields:");
    let timing = Timing {
        min_ms: 5,
        median_ms: 30,
        max_ms: 93,
    };
    let record = Record::new(Level::Info, "batch finished")
        .with_field("exec_times", Value::nested(&timing));
    emit(&formatter, &record);

    println!("\n3. RawString skips quoting entirely:");
    let record = Record::new(Level::Info, "emitting raw")
        .with_field("pair", RawString("key=value".to_string()));
    emit(&formatter, &record);

    println!("\n4. Absent optional text renders a nil marker:");
    let record = Record::new(Level::Info, "lookup done")
        .with_field("request_id", Some("req-1134"))
        .with_field("parent_id", None::<&str>);
    emit(&formatter, &record);

    println!("\n5. Byte payloads escape non-printable content:");
    let record = Record::new(Level::Warn, "unexpected payload")
        .with_field("payload", vec![0x41u8, 0x42, 0x00, 0xfe]);
    emit(&formatter, &record);

    println!("\n=== Example completed successfully! ===");
}
