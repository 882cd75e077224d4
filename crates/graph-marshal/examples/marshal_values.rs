//! Marshals a handful of typed values to storage form and back.

use graph_marshal::{
    CalendarDate, CivilDateTime, Instant, PropertySchema, TypeDescriptor, Value,
    convert_from_storage, convert_to_storage,
};

fn format_value(v: &Value) -> String {
    match v {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => format!("{}", b),
        Value::Int(i) => format!("{}", i),
        Value::Float(x) => format!("{:.6}", x),
        Value::Text(s) => format!("\"{}\"", s),
        Value::Bytes(b) => format!("BYTES[{}]", b.len()),
        Value::Date(d) => format!("DATE({})", d),
        Value::DateTime(dt) => format!("DATETIME({})", dt),
        Value::Instant(t) => format!("INSTANT({})", t),
    }
}

fn main() {
    // A node class declaring the types of its time-like attributes.
    let mut person = PropertySchema::new();
    person.declare("born_on", TypeDescriptor::Date);
    person.declare("updated_at", TypeDescriptor::DateTime);
    person.declare("last_seen", TypeDescriptor::Instant);
    person.declare("wealth", TypeDescriptor::custom("Money"));

    let attributes = [
        (
            "born_on",
            Value::Date(CalendarDate::new(2021, 3, 15).expect("valid date")),
        ),
        (
            "updated_at",
            Value::DateTime(
                CivilDateTime::new(2021, 3, 15, 10, 30, 45)
                    .and_then(|dt| dt.with_micros(123_456))
                    .expect("valid datetime"),
            ),
        ),
        (
            "last_seen",
            Value::Instant(Instant::from_epoch_micros(1_615_804_245_500_000)),
        ),
        ("wealth", Value::Float(120.50)),
        ("nickname", Value::Text("Ada".to_string())),
        ("born_on", Value::Null),
    ];

    println!("=== person ===");
    for (attribute, value) in attributes {
        let stored = convert_to_storage(&value, Some(attribute), Some(&person))
            .expect("conversion failed");
        let back = convert_from_storage(&person, attribute, &stored).expect("conversion failed");

        println!(
            "{:12} {:40} -> {:14} -> {}",
            attribute,
            format_value(&value),
            format_value(&stored),
            format_value(&back)
        );
    }
}
