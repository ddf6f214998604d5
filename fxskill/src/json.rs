// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::{NamedValue, RecordValue, TableRow, TableValue, Value, value::SINGLE_COLUMN_NAME};

impl Value {
    /// Converts a JSON document. Arrays become tables: objects are kept as
    /// rows, `null` becomes a blank row and anything else is wrapped in a
    /// single `Value` column.
    #[must_use]
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Blank,
            JsonValue::Bool(b) => Self::boolean(*b),
            JsonValue::Number(number) => match number.as_f64() {
                Some(number) => Self::number(number),
                None => Self::error(format!("Number {number} cannot be represented")),
            },
            JsonValue::String(str) => Self::Text(str.clone()),
            JsonValue::Object(..) => Self::Record(record_from_json(json)),
            JsonValue::Array(elements) => Self::Table(TableValue::from_rows(elements.iter().map(row_from_json))),
        }
    }
}

fn record_from_json(json: &JsonValue) -> RecordValue {
    let Some(object) = json.as_object() else {
        return RecordValue::empty();
    };

    object.iter()
        .map(|(name, value)| NamedValue::new(name.as_str(), Value::from_json(value)))
        .collect()
}

fn row_from_json(json: &JsonValue) -> TableRow {
    match json {
        JsonValue::Null => TableRow::Blank,
        JsonValue::Object(..) => TableRow::Present(record_from_json(json)),
        _ => TableRow::Present(RecordValue::from_fields([
            NamedValue::new(SINGLE_COLUMN_NAME, Value::from_json(json)),
        ])),
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(|json| Self::from_json(&json))
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        Self::from_json(value)
    }
}
