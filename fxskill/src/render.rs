// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter, Write};

use serde::Deserialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::{
    value::SINGLE_COLUMN_NAME,
    ErrorValue,
    LiteralSettings,
    RecordValue,
    TableRow,
    TableValue,
    ToLiteral,
    Value,
};

const UNTYPED_DESCRIPTION: &str = "<Untyped: Use Value, Text, Boolean, or other functions to establish the type>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, StrumDisplay, AsRefStr, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    Full,

    /// Only the top-level kind of structured values is shown.
    Minimal,
}

impl RenderMode {
    #[must_use]
    pub const fn from_minimal(minimal: bool) -> Self {
        if minimal {
            Self::Minimal
        } else {
            Self::Full
        }
    }
}

/// Renders a value as human-readable text.
///
/// Only the outermost value honors [`RenderMode::Minimal`]: fields of records
/// and rows of tables are always rendered in full.
#[must_use]
pub fn render(value: &Value, mode: RenderMode) -> String {
    log::trace!("Rendering {} value in {mode} mode", value.kind());
    value.display(mode).to_string()
}

impl Value {
    #[must_use]
    pub fn display(&self, mode: RenderMode) -> RenderedValue<'_> {
        RenderedValue {
            value: self,
            mode,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_full(f, self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderedValue<'value> {
    value: &'value Value,
    mode: RenderMode,
}

impl Display for RenderedValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.mode == RenderMode::Full {
            return write_full(f, self.value);
        }

        match self.value {
            Value::Blank => Ok(()),
            Value::Error(..) => f.write_str("<error>"),
            Value::Untyped => f.write_str("<untyped>"),
            Value::Text(text) => f.write_str(text),
            Value::Record(..) => f.write_str("<record>"),
            Value::Table(..) => f.write_str("<table>"),
            Value::Scalar(..) => write_full(f, self.value),
        }
    }
}

fn write_full(f: &mut Formatter<'_>, value: &Value) -> std::fmt::Result {
    match value {
        Value::Blank => f.write_str("Blank()"),
        Value::Error(error) => write_error(f, error),
        Value::Untyped => f.write_str(UNTYPED_DESCRIPTION),
        Value::Text(text) => text.write_literal(f, LiteralSettings::COMPACT),
        Value::Record(record) => write_record(f, record),
        Value::Table(table) => write_table(f, table),
        Value::Scalar(scalar) => scalar.write_literal(f, LiteralSettings::COMPACT),
    }
}

fn write_error(f: &mut Formatter<'_>, error: &ErrorValue) -> std::fmt::Result {
    let message = error.first_message().unwrap_or_else(|| {
        log::warn!("Error value without any messages");
        ""
    });

    write!(f, "<Error: {message}>")
}

fn write_record(f: &mut Formatter<'_>, record: &RecordValue) -> std::fmt::Result {
    f.write_char('{')?;

    for (idx, field) in record.fields().iter().enumerate() {
        if idx != 0 {
            f.write_str(", ")?;
        }

        write!(f, "{}:", field.name)?;
        write_full(f, &field.value)?;
    }

    f.write_char('}')
}

fn write_table(f: &mut Formatter<'_>, table: &TableValue) -> std::fmt::Result {
    let column_count = table.column_count();
    if column_count == 0 {
        return f.write_str("Table()");
    }

    let is_single_value_column = column_count == 1 && table.rows()
        .first()
        .and_then(TableRow::record)
        .and_then(|record| record.fields().first())
        .is_some_and(|field| field.name == SINGLE_COLUMN_NAME);

    f.write_char('[')?;

    for (idx, row) in table.rows().iter().enumerate() {
        if idx != 0 {
            f.write_str(", ")?;
        }

        if is_single_value_column {
            write_single_column_row(f, row)?;
        } else {
            write_row(f, row)?;
        }
    }

    f.write_char(']')
}

fn write_single_column_row(f: &mut Formatter<'_>, row: &TableRow) -> std::fmt::Result {
    let Some(record) = row.record() else {
        return write_row(f, row);
    };

    match record.fields().first() {
        Some(field) => write_full(f, &field.value),
        None => {
            log::warn!("Row without fields in a single column table");
            write_full(f, &Value::Blank)
        }
    }
}

fn write_row(f: &mut Formatter<'_>, row: &TableRow) -> std::fmt::Result {
    match row {
        TableRow::Present(record) => write_record(f, record),
        TableRow::Blank => write_full(f, &Value::Blank),
        TableRow::Error(error) => write_error(f, error),
    }
}
