use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use content::PageVariant;

// prerender configuration
//
// every field has a default so that an empty [config] table is a valid configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // which token set and module grid to render
    pub variant: PageVariant,
    // where index.html is written
    pub out_dir: PathBuf,
    // document <title>
    pub title: String,
    // <meta name="description">
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            variant: PageVariant::default(),
            out_dir: PathBuf::from("dist"),
            title: String::from("Fabricode OS | The Intelligent Operating System for Textile Manufacturing"),
            description: String::from(
                "Modular, multitenant textile management platform for weaving, dyeing, logistics and workflow operations.",
            ),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: &Path) -> Result<SiteConfig> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    let config = parse_config(&doc)?;

    debug!(variant = %config.variant, "successfully parsed config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            r#"
            [config]
            variant = "Catalog"
            out_dir = "public"
            title = "Fabricode"
            description = "Textile OS"
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config,
            SiteConfig {
                variant: PageVariant::Catalog,
                out_dir: PathBuf::from("public"),
                title: String::from("Fabricode"),
                description: String::from("Textile OS"),
            }
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = parse_config("[config]\nvariant = \"Catalog\"\n").expect("valid config");

        assert_eq!(config.variant, PageVariant::Catalog);
        assert_eq!(config.out_dir, SiteConfig::default().out_dir);
    }

    #[test]
    fn config_table_is_required() {
        assert!(parse_config("variant = \"Catalog\"\n").is_err());
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(parse_config("[config]\nvariant = \"Brutalist\"\n").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = read_config(Path::new("/nonexistent/fabricode.toml"))
            .await
            .expect_err("file does not exist");

        assert!(err.to_string().contains("/nonexistent/fabricode.toml"));
    }
}
