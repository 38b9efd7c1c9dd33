/// Data layer: record type, loading, parsing and filtering.
///
/// Architecture:
/// ```text
///  path / http(s) URL
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file or GET url → raw text
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  6 comma-separated fields per line → Vec<Employee>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  age >= ADULT_AGE → lazy Adults iterator
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
