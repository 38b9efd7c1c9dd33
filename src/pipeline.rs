//! Source identifier → raw text → roster → adults.

use log::{debug, info};

use crate::config::LoaderConfig;
use crate::data::filter::adults;
use crate::data::loader::DataLoader;
use crate::data::model::Employee;
use crate::data::parser::parse_employees;
use crate::error::{Error, Result};

/// Load and parse the full roster named by `source`.
///
/// A blank `source` is rejected with [`Error::MissingSource`].
pub fn load_roster(source: &str, config: &LoaderConfig) -> Result<Vec<Employee>> {
    if source.trim().is_empty() {
        return Err(Error::MissingSource);
    }
    let loader = DataLoader::for_source(source, config);
    debug!("using {loader:?}");
    let raw = loader.load()?;
    parse_employees(&raw)
}

/// Run the whole pipeline and return the adults in roster order.
///
/// No retries and no caching; the first load or parse error is returned as is.
pub fn run(source: &str, config: &LoaderConfig) -> Result<Vec<Employee>> {
    let roster = load_roster(source, config)?;
    let found: Vec<Employee> = adults(&roster).cloned().collect();
    info!("{} of {} employees are adults", found.len(), roster.len());
    Ok(found)
}
