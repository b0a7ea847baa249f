//! Script inventories: the static dictionaries driving the tokenizer
//!
//! An inventory is declared as TOML (see `configs/khmer.toml`), parsed
//! through the [`config`] schema, then frozen into a [`ScriptInventory`]
//! whose multi-symbol tables are sorted longest-first. Embedded scripts
//! are served through [`get_inventory`]; custom scripts go through
//! [`ScriptInventory::from_toml_str`].

pub mod config;
pub mod inventory;
pub mod loader;

pub use config::ScriptConfig;
pub use inventory::{
    ClusterConsonantRow, ConsonantRow, ScriptInventory, VowelClusterRow, VowelRow,
};
pub use loader::get_inventory;
