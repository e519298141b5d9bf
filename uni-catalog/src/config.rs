//! `unidts.toml` project configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    AttributeDef, DEFAULT_ATTRIBUTES_PATH, DEFAULT_TAGS_PATH, Error, OverrideTable, Result,
    error::SourceContext,
};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "unidts.toml";

/// Root schema for unidts.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub typescript: TypeScriptConfig,
    /// `[overrides.<tag>.<attribute>]`, layered on top of
    /// [`OverrideTable::builtin`].
    pub overrides: IndexMap<String, IndexMap<String, OverrideConfig>>,
}

/// `[catalog]`: where the tag and attribute tables live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub tags: PathBuf,
    pub attributes: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            tags: PathBuf::from(DEFAULT_TAGS_PATH),
            attributes: PathBuf::from(DEFAULT_ATTRIBUTES_PATH),
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("index.d.ts"),
        }
    }
}

/// `[typescript]`: names baked into the generated declarations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeScriptConfig {
    /// Module the preamble imports the component helper types from.
    pub import_module: String,
    /// Module whose `GlobalComponents` interface is augmented.
    pub augment_module: String,
    /// Prefix prepended to every generated tag alias.
    pub type_prefix: String,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            import_module: "vue3".to_string(),
            augment_module: "vue".to_string(),
            type_prefix: "T".to_string(),
        }
    }
}

/// One `[overrides.<tag>.<attribute>]` entry.
///
/// Unlike [`AttributeDef`], unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideConfig {
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub options: Option<Vec<String>>,
}

impl From<OverrideConfig> for AttributeDef {
    fn from(entry: OverrideConfig) -> Self {
        AttributeDef {
            description: entry.description,
            ty: entry.ty,
            options: entry.options,
        }
    }
}

impl Config {
    /// Parse config content, labelling errors with `filename`.
    pub fn from_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| SourceContext::new(src, filename).toml_error(e))
    }

    /// Open and parse a config file.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_str_with_filename(&content, &path.display().to_string())?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Open `path` if it exists, otherwise fall back to the defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Builtin overrides with the configured ones layered on top.
    pub fn override_table(&self) -> OverrideTable {
        let mut table = OverrideTable::builtin();
        table.extend(self.configured_overrides());
        table
    }

    /// Only the overrides written in the config file.
    pub fn configured_overrides(&self) -> OverrideTable {
        let mut table = OverrideTable::new();
        for (tag, attributes) in &self.overrides {
            for (key, entry) in attributes {
                table.insert(tag.as_str(), key.as_str(), entry.clone().into());
            }
        }
        table
    }

    fn rebase(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        for path in [
            &mut self.catalog.tags,
            &mut self.catalog.attributes,
            &mut self.output.path,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = "".parse().unwrap();

        assert_eq!(config.catalog.tags, PathBuf::from(DEFAULT_TAGS_PATH));
        assert_eq!(config.output.path, PathBuf::from("index.d.ts"));
        assert_eq!(config.typescript, TypeScriptConfig::default());
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
            [catalog]
            tags = "data/tags.json"
            attributes = "data/attributes.json"

            [output]
            path = "types/components.d.ts"

            [typescript]
            import_module = "vue"
            augment_module = "@vue/runtime-core"
            type_prefix = "Uni"

            [overrides.video.mode]
            description = "播放模式"
            type = "String"
            options = ["live", "vod"]
        "#
        .parse()
        .unwrap();

        assert_eq!(config.catalog.attributes, PathBuf::from("data/attributes.json"));
        assert_eq!(config.output.path, PathBuf::from("types/components.d.ts"));
        assert_eq!(config.typescript.augment_module, "@vue/runtime-core");
        assert_eq!(config.typescript.type_prefix, "Uni");

        let overrides = config.configured_overrides();
        let mode = overrides.lookup("video", "mode").unwrap();
        assert_eq!(mode.description, "播放模式");
        assert_eq!(mode.ty, "String");
        assert_eq!(mode.options.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_override_table_layers_on_builtin() {
        let config: Config = r#"
            [overrides.picker.mode]
            type = "Number"

            [overrides.video.mode]
            type = "String"
            options = ["live", "vod"]
        "#
        .parse()
        .unwrap();

        let table = config.override_table();
        assert_eq!(table.len(), 2);
        let picker_mode = table.lookup("picker", "mode").unwrap();
        assert_eq!(picker_mode.ty, "Number");
        assert!(picker_mode.options.is_none());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = "[outptu]\npath = \"x\"".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "[typescript]\nprefix = \"X\"".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_misspelled_override_key_rejected() {
        let err = "[overrides.picker.mode]\ntyp = \"Number\"\noption = [\"a\"]"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::Config { span: Some(_), .. }));
    }

    #[test]
    fn test_override_entry_fields_default() {
        let config: Config = "[overrides.picker.mode]\ntype = \"Number\"".parse().unwrap();
        let entry = &config.overrides["picker"]["mode"];
        assert_eq!(entry.description, "");
        assert!(entry.options.is_none());
    }

    #[test]
    fn test_open_rebases_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[output]\npath = \"out/index.d.ts\"\n").unwrap();

        let config = Config::open(&path).unwrap();
        assert_eq!(config.output.path, temp.path().join("out/index.d.ts"));
        assert_eq!(config.catalog.tags, temp.path().join(DEFAULT_TAGS_PATH));
    }

    #[test]
    fn test_open_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::open_or_default(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.output.path, PathBuf::from("index.d.ts"));
    }
}
