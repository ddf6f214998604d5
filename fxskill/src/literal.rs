// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{self, Write};

use chrono::{Datelike, Timelike};

use crate::{Color, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSettings {
    pub compact_representation: bool,
}

impl LiteralSettings {
    pub const COMPACT: Self = Self { compact_representation: true };
    pub const SPACED: Self = Self { compact_representation: false };

    #[must_use]
    const fn separator(&self) -> &'static str {
        if self.compact_representation {
            ","
        } else {
            ", "
        }
    }
}

impl Default for LiteralSettings {
    fn default() -> Self {
        Self::COMPACT
    }
}

/// Serializes a value as the expression that would produce it again.
pub trait ToLiteral {
    fn write_literal(&self, out: &mut dyn Write, settings: LiteralSettings) -> fmt::Result;

    #[must_use]
    fn to_literal(&self, settings: LiteralSettings) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        _ = self.write_literal(&mut out, settings);
        out
    }
}

impl ToLiteral for str {
    fn write_literal(&self, out: &mut dyn Write, settings: LiteralSettings) -> fmt::Result {
        _ = settings;
        out.write_char('"')?;
        for (idx, part) in self.split('"').enumerate() {
            if idx != 0 {
                out.write_str("\"\"")?;
            }
            out.write_str(part)?;
        }
        out.write_char('"')
    }
}

impl ToLiteral for String {
    fn write_literal(&self, out: &mut dyn Write, settings: LiteralSettings) -> fmt::Result {
        self.as_str().write_literal(out, settings)
    }
}

const EXPONENT_ABOVE: f64 = 1e15;
const EXPONENT_BELOW: f64 = 1e-5;

impl ToLiteral for f64 {
    fn write_literal(&self, out: &mut dyn Write, settings: LiteralSettings) -> fmt::Result {
        _ = settings;
        let value = *self;

        if value.is_nan() {
            out.write_str("Sqrt(-1)")
        } else if value == f64::INFINITY {
            out.write_str("1/0")
        } else if value == f64::NEG_INFINITY {
            out.write_str("-1/0")
        } else if value == 0.0 {
            // also folds negative zero
            out.write_char('0')
        } else if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
            let formatted = format!("{value:E}");
            match formatted.split_once('E') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(out, "{mantissa}E+{exponent}"),
                _ => out.write_str(&formatted),
            }
        } else {
            write!(out, "{value}")
        }
    }
}

impl ToLiteral for Color {
    fn write_literal(&self, out: &mut dyn Write, settings: LiteralSettings) -> fmt::Result {
        let alpha = (self.a as f64 / 255.0 * 1000.0).round() / 1000.0;
        let sep = settings.separator();
        write!(out, "RGBA({}{sep}{}{sep}{}{sep}", self.r, self.g, self.b)?;
        alpha.write_literal(out, settings)?;
        out.write_char(')')
    }
}

impl ToLiteral for Scalar {
    fn write_literal(&self, out: &mut dyn Write, settings: LiteralSettings) -> fmt::Result {
        let sep = settings.separator();

        match self {
            Self::Number(number) => number.write_literal(out, settings),
            Self::Boolean(false) => out.write_str("false"),
            Self::Boolean(true) => out.write_str("true"),

            Self::Date(date) => {
                write!(out, "Date({}{sep}{}{sep}{})", date.year(), date.month(), date.day())
            }

            Self::DateTime(date_time) => {
                write!(
                    out,
                    "DateTime({}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{})",
                    date_time.year(),
                    date_time.month(),
                    date_time.day(),
                    date_time.hour(),
                    date_time.minute(),
                    date_time.second(),
                    // leap seconds are stored as an extra second of nanoseconds
                    (date_time.nanosecond() / 1_000_000).min(999),
                )
            }

            Self::Time(time) => {
                let total = time.num_milliseconds();
                if total < 0 {
                    out.write_char('-')?;
                }

                let total = total.unsigned_abs();
                let hours = total / 3_600_000;
                let minutes = total / 60_000 % 60;
                let seconds = total / 1_000 % 60;
                let millis = total % 1_000;
                write!(out, "Time({hours}{sep}{minutes}{sep}{seconds}{sep}{millis})")
            }

            Self::Guid(guid) => write!(out, "GUID(\"{}\")", guid.hyphenated()),
            Self::Color(color) => color.write_literal(out, settings),
        }
    }
}
