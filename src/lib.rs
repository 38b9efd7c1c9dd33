//! Load an employee roster from a file or URL, parse it, and pick out the
//! employees old enough to be served alcohol.
//!
//! ```no_run
//! use adult_locator::{pipeline, LoaderConfig};
//!
//! let adults = pipeline::run("staff.csv", &LoaderConfig::default())?;
//! for e in &adults {
//!     println!("{}", adult_locator::AdultNotice(e));
//! }
//! # Ok::<(), adult_locator::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::LoaderConfig;
pub use data::filter::{adults, Adults};
pub use data::loader::DataLoader;
pub use data::model::{Employee, ADULT_AGE};
pub use data::parser::parse_employees;
pub use error::{Error, ParseErrorKind, Result};
pub use report::AdultNotice;
