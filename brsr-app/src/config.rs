use anyhow::{bail, Context, Result};
use brsr_schemas::{
    activity::{Scope1Activity, Scope2Activity, Scope3Activity},
    company::CompanyProfile,
    file_formats::InventoryFile,
};
use std::{fs, path::Path};

/// The in-memory inventory for one reporting period, loaded from a YAML file.
pub struct Inventory {
    pub company: CompanyProfile,
    pub scope1: Scope1Activity,
    pub scope2: Scope2Activity,
    pub scope3: Scope3Activity,
}

impl Inventory {
    /// Loads and validates an inventory file.
    pub fn load(path: &Path) -> Result<Self> {
        println!("Loading inventory from '{}'...", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory file {:?}", path))?;
        let file: InventoryFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

        if file.schema_version != "1" && !file.schema_version.starts_with("1.") {
            bail!(
                "Unsupported inventory schema version '{}' (expected 1.x)",
                file.schema_version
            );
        }

        Ok(Self {
            company: file.company,
            scope1: file.scope1,
            scope2: file.scope2,
            scope3: file.scope3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
schema_version: "1.0"
company:
  name: Acme Textiles
  revenue: "450"
scope1:
  diesel: 100
  petrol: "not recorded"
scope2:
  electricity: 1000
"#;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("brsr_inv_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_inventory_with_lenient_fields() {
        let path = write_temp("ok.yaml", SAMPLE);
        let inventory = Inventory::load(&path).unwrap();
        assert_eq!(inventory.company.name, "Acme Textiles");
        assert_eq!(inventory.company.revenue, Some(450.0));
        assert_eq!(inventory.scope1.diesel, 100.0);
        assert_eq!(inventory.scope1.petrol, 0.0);
        assert_eq!(inventory.scope2.electricity, 1000.0);
        assert_eq!(inventory.scope3.paper, 0.0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let path = write_temp("bad.yaml", "schema_version: \"2.0\"\n");
        assert!(Inventory::load(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
