//! Script inventory loader
//!
//! Manages the embedded inventories with one-time initialization.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::script::inventory::ScriptInventory;

/// Embedded script inventories
static EMBEDDED: OnceLock<HashMap<String, Arc<ScriptInventory>>> = OnceLock::new();

/// Load a script inventory by code
pub fn get_inventory(code: &str) -> Result<Arc<ScriptInventory>> {
    // Initialize embedded scripts on first access
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        // The embedded document is part of the build; failing to parse it
        // is a defect, not a runtime condition.
        let khmer = ScriptInventory::from_toml_str(include_str!("../../configs/khmer.toml"))
            .map(Arc::new)
            .expect("embedded Khmer inventory is valid");
        map.insert("km".to_string(), khmer.clone());
        map.insert("khmer".to_string(), khmer);

        map
    });

    embedded
        .get(code)
        .cloned()
        .ok_or_else(|| CoreError::UnknownScript(code.to_string()))
}
