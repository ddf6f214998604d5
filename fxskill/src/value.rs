// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// The result of evaluating an expression.
///
/// Values are produced by the evaluator and only borrowed while rendering, so
/// nothing in this crate mutates them after construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Blank,
    Error(ErrorValue),

    /// A value whose concrete type was never established.
    Untyped,

    Text(String),
    Record(RecordValue),
    Table(TableValue),
    Scalar(Scalar),
}

impl Value {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Scalar(Scalar::Number(value))
    }

    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::Scalar(Scalar::Boolean(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorValue::new(ExpressionError::new(message)))
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Blank => ValueKind::Blank,
            Self::Error(..) => ValueKind::Error,
            Self::Untyped => ValueKind::Untyped,
            Self::Text(..) => ValueKind::Text,
            Self::Record(..) => ValueKind::Record,
            Self::Table(..) => ValueKind::Table,
            Self::Scalar(..) => ValueKind::Scalar,
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<RecordValue> for Value {
    fn from(value: RecordValue) -> Self {
        Self::Record(value)
    }
}

impl From<TableValue> for Value {
    fn from(value: TableValue) -> Self {
        Self::Table(value)
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Self::Error(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Blank,
    Error,
    Untyped,
    Text,
    Record,
    Table,
    Scalar,
}

/// Everything that is neither structured nor text.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(TimeDelta),
    Guid(Uuid),
    Color(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorValue {
    errors: Vec<ExpressionError>,
}

impl ErrorValue {
    #[must_use]
    pub fn new(error: ExpressionError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    #[must_use]
    pub fn from_errors(errors: impl IntoIterator<Item = ExpressionError>) -> Self {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[ExpressionError] {
        &self.errors
    }

    /// The message of the first error, which is the one shown to the user.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|error| error.message.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionError {
    pub message: String,
    pub kind: ErrorKind,
}

impl ExpressionError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Custom,
        }
    }

    #[must_use]
    pub fn with_kind(self, kind: ErrorKind) -> Self {
        Self {
            kind,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString)]
pub enum ErrorKind {
    #[default]
    Custom,
    Div0,
    Numeric,
    InvalidArgument,
    NotApplicable,
    Validation,
    MissingRequired,
    Network,
    Internal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedValue {
    pub name: String,
    pub value: Value,
}

impl NamedValue {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Fields in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordValue {
    fields: Vec<NamedValue>,
}

impl RecordValue {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_fields(fields: impl IntoIterator<Item = NamedValue>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[NamedValue] {
        &self.fields
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

impl FromIterator<NamedValue> for RecordValue {
    fn from_iter<T: IntoIterator<Item = NamedValue>>(iter: T) -> Self {
        Self::from_fields(iter)
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for RecordValue {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self::from_fields(iter.into_iter().map(|(name, value)| NamedValue::new(name, value)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableRow {
    Present(RecordValue),
    Blank,
    Error(ErrorValue),
}

impl TableRow {
    #[must_use]
    pub fn record(&self) -> Option<&RecordValue> {
        match self {
            Self::Present(record) => Some(record),
            Self::Blank | Self::Error(..) => None,
        }
    }
}

impl From<RecordValue> for TableRow {
    fn from(value: RecordValue) -> Self {
        Self::Present(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableValue {
    rows: Vec<TableRow>,
}

/// The name of the only column of a table built from plain values.
pub const SINGLE_COLUMN_NAME: &str = "Value";

impl TableValue {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = TableRow>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = RecordValue>) -> Self {
        Self::from_rows(records.into_iter().map(TableRow::Present))
    }

    /// Wraps every value in a `{Value: v}` record.
    #[must_use]
    pub fn single_column(values: impl IntoIterator<Item = Value>) -> Self {
        Self::from_records(values.into_iter().map(|value| {
            RecordValue::from_fields([NamedValue::new(SINGLE_COLUMN_NAME, value)])
        }))
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The field count of the first row that carries a record, or zero when
    /// no row does.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter()
            .find_map(TableRow::record)
            .map_or(0, RecordValue::field_count)
    }
}
