use log::{error, info};
use std::collections::HashMap;
use std::path::Path;

/// String table for user facing text. Keys are the English source strings,
/// anything missing from the table is shown as-is.
#[derive(Default, Debug, Clone)]
pub struct I18n {
    table: HashMap<String, String>,
}

impl I18n {
    pub fn from_table(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let table: HashMap<String, String> = serde_json::from_str(&data)?;
        info!("Loaded {} translations from {path:?}", table.len());
        Ok(Self { table })
    }

    /// Loads the table if one is configured, falling back to the source strings.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                error!("Could not load translations from {path:?}: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn tr(&self, text: &str) -> String {
        self.table
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_missing_keys_pass_through() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("Your total balance."), "Your total balance.");
    }

    #[test]
    fn test_load_table() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");
        let path = tmp_dir.path().join("fr.json");
        std::fs::write(&path, r#"{ "View more": "Voir plus" }"#).unwrap();

        let i18n = I18n::load_or_default(Some(&path));
        assert_eq!(i18n.tr("View more"), "Voir plus");
        assert_eq!(i18n.tr("View less"), "View less");
    }

    #[test]
    fn test_bad_table_falls_back() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");
        let path = tmp_dir.path().join("broken.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(I18n::load(&path).is_err());
        let i18n = I18n::load_or_default(Some(&path));
        assert_eq!(i18n.tr("View more"), "View more");
    }
}
