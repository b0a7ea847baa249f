//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to a script inventory file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub script_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        use romduol_core::ScriptInventory;

        println!(
            "Validating script inventory: {}",
            self.script_config.display()
        );

        let toml_str = std::fs::read_to_string(&self.script_config)?;
        match ScriptInventory::from_toml_str(&toml_str) {
            Ok(inventory) => {
                let (consonants, extra, vowels, combos) = inventory.table_sizes();
                println!("✓ Inventory is valid!");
                println!("  Script code: {}", inventory.code());
                println!("  Script name: {}", inventory.name());
                println!(
                    "  Tables: {consonants} consonants, {extra} extra consonants, \
                     {vowels} vowels, {combos} vowel combinations"
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Inventory is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "xx"
name = "Test Script"

[[consonants]]
letter = "ក"
translit = "ка"
series = "a"

[[vowels]]
letter = "ា"
translit_a = "а"
translit_o = "еа"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            script_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = ""
name = "Test"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            script_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            script_config: PathBuf::from("/nonexistent/script.toml"),
        };
        assert!(args.execute().is_err());
    }
}
