// src/app.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::rents::{RentError, RentTable};

/// Shared state handed to every request handler. Cheap to clone; the astra
/// worker threads all see the same rent-table cache.
#[derive(Clone)]
pub struct AppCtx {
    pub config: Arc<Config>,
    rent_cache: Arc<Mutex<HashMap<String, RentTable>>>,
}

impl AppCtx {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            rent_cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Resolve a rent table for the form's `rents` field. Blank means the
    /// builtin mapping; anything else is loaded once per source string and
    /// cached for the lifetime of the process.
    pub fn rent_table(&self, source: &str) -> Result<RentTable, RentError> {
        let source = source.trim();
        if source.is_empty() {
            return Ok(RentTable::builtin());
        }

        if let Ok(cache) = self.rent_cache.lock() {
            if let Some(table) = cache.get(source) {
                return Ok(table.clone());
            }
        }

        let table = RentTable::load(source)?;

        if let Ok(mut cache) = self.rent_cache.lock() {
            cache.insert(source.to_string(), table.clone());
        }

        Ok(table)
    }
}
