use chrono::NaiveDate;
use csv::StringRecord;
use log::{debug, info};

use super::model::Employee;
use crate::error::{Error, ParseErrorKind, Result};

/// Hire dates are ISO-8601 calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const FIELD_COUNT: usize = 6;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse a roster: one employee per line, six comma-separated fields.
///
/// Layout, no header row:
/// ```text
/// id,first_name,last_name,age,email,date_hired
/// 1,Jane,Doe,25,jane@x.com,2020-01-15
/// ```
///
/// * Lines end at `\n`; a trailing `\r` is dropped, so `\r\n` works too.
///   A lone `\r` is not a line break. Blank lines are skipped.
/// * There is no quoting: every comma separates fields, `"` is a plain character.
/// * Tokens are taken verbatim, so `" 25"` is not a valid age.
///
/// The first malformed line aborts the parse; no partial roster is returned.
pub fn parse_employees(raw: &str) -> Result<Vec<Employee>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(raw.as_bytes());

    let mut employees = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let more = reader.read_record(&mut record).map_err(|e| {
            let (line, content) = locate(raw, e.position().map_or(0, |p| p.byte()));
            Error::Parse {
                line,
                content: content.to_string(),
                kind: ParseErrorKind::Unreadable(e),
            }
        })?;
        if !more {
            break;
        }

        let (line, content) = locate(raw, record.position().map_or(0, |p| p.byte()));
        if content.is_empty() {
            // A `\r\n` blank line reaches us as a single `\r` field.
            continue;
        }

        let mut fields: Vec<&str> = record.iter().collect();
        if let Some(last) = fields.last_mut() {
            let field: &str = *last;
            *last = field.strip_suffix('\r').unwrap_or(field);
        }

        let employee = parse_record(&fields).map_err(|kind| Error::Parse {
            line,
            content: content.to_string(),
            kind,
        })?;
        employees.push(employee);
    }

    info!("parsed {} employee records", employees.len());
    Ok(employees)
}

/// 1-based line number and text (terminator stripped) of the line holding
/// the record that starts at or after byte `offset`.
///
/// The reader may report an offset before the blank lines it skipped, so
/// leading `\n` bytes are stepped over first.
fn locate(raw: &str, offset: u64) -> (u64, &str) {
    let bytes = raw.as_bytes();
    let mut start = usize::try_from(offset).map_or(bytes.len(), |o| o.min(bytes.len()));
    while bytes.get(start) == Some(&b'\n') {
        start += 1;
    }

    let line = bytes[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1;
    let rest = &raw[start..];
    let text = rest.split('\n').next().unwrap_or("");
    (line, text.strip_suffix('\r').unwrap_or(text))
}

// ---------------------------------------------------------------------------
// Per-record conversion
// ---------------------------------------------------------------------------

fn parse_record(record: &[&str]) -> std::result::Result<Employee, ParseErrorKind> {
    if record.len() != FIELD_COUNT {
        return Err(ParseErrorKind::FieldCount {
            found: record.len(),
        });
    }

    let employee = Employee {
        id: parse_integer(record[0], "id")?,
        first_name: record[1].to_string(),
        last_name: record[2].to_string(),
        age: parse_integer(record[3], "age")?,
        email: record[4].to_string(),
        date_hired: parse_date(record[5])?,
    };
    debug!("record {} -> {}", employee.id, employee.full_name());
    Ok(employee)
}

fn parse_integer<T>(value: &str, field: &'static str) -> std::result::Result<T, ParseErrorKind>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .parse::<T>()
        .map_err(|source| ParseErrorKind::InvalidInteger {
            field,
            value: value.to_string(),
            source,
        })
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, ParseErrorKind> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| ParseErrorKind::InvalidDate {
        value: value.to_string(),
        source,
    })
}
