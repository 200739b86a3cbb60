//! Integration tests for line formatting through the public API

use chrono::TimeZone;
use kvline::{fields, Formatter, Level, Loggable, Marshal, Record, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

fn fixed_record(level: Level, message: &str) -> Record {
    Record::new(level, message).with_timestamp(
        chrono::Utc
            .with_ymd_and_hms(2017, 2, 13, 12, 13, 45)
            .single()
            .expect("valid datetime"),
    )
}

fn render(formatter: &Formatter, record: &Record) -> String {
    String::from_utf8(formatter.format(record)).expect("line is ascii")
}

#[derive(Debug)]
struct TestError(&'static str);

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TestError {}

#[test]
fn simple_fields_sort_ascending() {
    let record = fixed_record(Level::Info, "")
        .with_field("field2", 123i64)
        .with_field("field1", "str with spaces")
        .with_field("field-three", Value::error(&TestError("test error")));

    assert_eq!(
        render(&Formatter::default(), &record),
        "2017-02-13T12:13:45.000Z ll=\"info\" field-three=\"test error\" \
         field1=\"str with spaces\" field2=123\n"
    );
}

#[test]
fn primary_fields_emit_first_in_configured_order() {
    let formatter = Formatter::builder()
        .primary_fields(["rand1", "another", "rand2", "rand3"])
        .build();
    let record = fixed_record(Level::Info, "").with_fields(fields! {
        "field1" => "str with spaces",
        "field2" => 123i64,
        "another" => "another-field",
        "rand1" => "foobar",
    });

    assert_eq!(
        render(&formatter, &record),
        "2017-02-13T12:13:45.000Z ll=\"info\" rand1=\"foobar\" \
         another=\"another-field\" field1=\"str with spaces\" field2=123\n"
    );
}

#[test]
fn message_renders_last_under_reserved_key() {
    let record = fixed_record(Level::Info, "test message").with_field("field1", "value1");

    assert_eq!(
        render(&Formatter::default(), &record),
        "2017-02-13T12:13:45.000Z ll=\"info\" field1=\"value1\" _msg=\"test message\"\n"
    );
}

#[test]
fn constant_fields_precede_record_fields() {
    let formatter = Formatter::builder()
        .constant_field("field1", "value1")
        .constant_field("field2", 123i64)
        .build();
    let record = fixed_record(Level::Info, "").with_field("varfield1", "vf1");

    assert_eq!(
        render(&formatter, &record),
        "2017-02-13T12:13:45.000Z ll=\"info\" field1=\"value1\" field2=123 varfield1=\"vf1\"\n"
    );
}

struct AgeRange {
    min: u32,
    max: u32,
}

impl Marshal for AgeRange {
    fn marshal(&self) -> String {
        format!("\"{}-{}\"", self.min, self.max)
    }
}

struct Timing {
    min_ms: i64,
    max_ms: i64,
    median_ms: i64,
}

impl Loggable for Timing {
    fn log_values(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            (".min_ms".to_string(), Value::Int(self.min_ms)),
            (".max_ms".to_string(), Value::Int(self.max_ms)),
            (".median_ms".to_string(), Value::Int(self.median_ms)),
        ])
    }
}

#[test]
fn marshaled_values_render_verbatim() {
    let record = fixed_record(Level::Info, "")
        .with_field("age_range", Value::marshal(&AgeRange { min: 18, max: 93 }));

    assert_eq!(
        render(&Formatter::default(), &record),
        "2017-02-13T12:13:45.000Z ll=\"info\" age_range=\"18-93\"\n"
    );
}

#[test]
fn compound_values_flatten_into_sorted_subfields() {
    let timing = Timing {
        min_ms: 5,
        max_ms: 93,
        median_ms: 30,
    };
    let record = fixed_record(Level::Info, "").with_field("exec_times", Value::nested(&timing));

    assert_eq!(
        render(&Formatter::default(), &record),
        "2017-02-13T12:13:45.000Z ll=\"info\" \
         exec_times.max_ms=93 exec_times.median_ms=30 exec_times.min_ms=5\n"
    );
}

#[test]
fn absent_optional_text_renders_nil_marker() {
    let record = fixed_record(Level::Warn, "")
        .with_field("request_id", None::<&str>)
        .with_field("user", Some("alice"));

    assert_eq!(
        render(&Formatter::default(), &record),
        "2017-02-13T12:13:45.000Z ll=\"warn\" request_id=<nil> user=\"alice\"\n"
    );
}

fn log_through_wrapper(formatter: &Formatter) -> String {
    let record = fixed_record(Level::Info, "wrapped call");
    render(formatter, &record)
}

#[test]
fn caller_fields_emitted_only_when_enabled() {
    let without = Formatter::default();
    assert!(!log_through_wrapper(&without).contains("srcfnc"));

    let with_caller = Formatter::builder().include_caller(true).build();
    let line = log_through_wrapper(&with_caller);

    // Resolution may land on a real frame or on the unknown sentinel
    // depending on how the harness stack inlines; the field itself is
    // always present and the line stays grammatical.
    assert!(line.contains(" srcfnc=\""), "got: {line}");
    assert!(line.ends_with("_msg=\"wrapped call\"\n"), "got: {line}");
}

#[test]
fn concurrent_formatting_is_deterministic() {
    let formatter = Arc::new(
        Formatter::builder()
            .constant_field("service", "api")
            .primary_fields(["action"])
            .build(),
    );
    let record = Arc::new(fixed_record(Level::Info, "busy").with_fields(fields! {
        "action" => "poll",
        "queue" => "jobs",
        "depth" => 42i64,
    }));
    let expected = formatter.format(&record);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let formatter = Arc::clone(&formatter);
            let record = Arc::clone(&record);
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(formatter.format(&record), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("formatting thread panicked");
    }
}

#[test]
fn empty_record_renders_timestamp_and_level_only() {
    let record = fixed_record(Level::Debug, "");
    assert_eq!(
        render(&Formatter::default(), &record),
        "2017-02-13T12:13:45.000Z ll=\"debug\"\n"
    );
}
