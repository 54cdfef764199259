use anyhow::Context;
use directories::ProjectDirs;
use indexscope_core::{Grouping, Locale, OverlayConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// JSON dataset file; the demo dataset is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
    pub default_grouping: Grouping,
    pub highlight_ms: u64,
    /// Overrides of the equal per-dimension weights of the overall score.
    pub dimension_weights: BTreeMap<String, f64>,
    pub overlay: OverlayConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_grouping: Grouping::Region,
            highlight_ms: 1500,
            dimension_weights: BTreeMap::new(),
            overlay: OverlayConfig::default(),
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "indexscope")?;
    Some(proj.config_dir().join("viewer.toml"))
}

pub fn load_or_default() -> ViewerConfig {
    let Some(path) = config_file_path() else {
        return ViewerConfig::default();
    };
    load_or_default_from_path(&path)
}

fn load_or_default_from_path(path: &Path) -> ViewerConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return ViewerConfig::default();
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid viewer config, using defaults");
        ViewerConfig::default()
    })
}

pub fn save(cfg: &ViewerConfig) -> anyhow::Result<()> {
    let Some(path) = config_file_path() else {
        return Err(anyhow::anyhow!("no config directory available"));
    };
    save_to_path(cfg, &path)
}

fn save_to_path(cfg: &ViewerConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(cfg).context("failed to serialize viewer config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write viewer config {}", path.display()))?;
    Ok(())
}

/// Command line overrides on top of the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerArgs {
    pub data: Option<PathBuf>,
    pub locale: Option<Locale>,
    pub save_config: bool,
}

pub fn parse_args() -> anyhow::Result<ViewerArgs> {
    parse_args_from(std::env::args_os().skip(1))
}

fn parse_args_from<I>(args: I) -> anyhow::Result<ViewerArgs>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = ViewerArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--data" {
            let Some(path) = args.next() else {
                anyhow::bail!("--data expects a path");
            };
            out.data = Some(PathBuf::from(path));
        } else if arg == "--locale" {
            let Some(value) = args.next() else {
                anyhow::bail!("--locale expects en|ru");
            };
            let value = value.to_string_lossy();
            let Some(locale) = Locale::parse(&value) else {
                anyhow::bail!("invalid locale: {value} (expected en|ru)");
            };
            out.locale = Some(locale);
        } else if arg == "--save-config" {
            out.save_config = true;
        } else {
            anyhow::bail!("unknown argument: {:?}", arg);
        }
    }

    Ok(out)
}

impl ViewerConfig {
    pub fn apply_args(&mut self, args: &ViewerArgs) {
        if let Some(path) = &args.data {
            self.data_path = Some(path.display().to_string());
        }
        if let Some(locale) = args.locale {
            self.overlay.locale = locale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn viewer_config_roundtrip_save_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("viewer.toml");
        let mut cfg = ViewerConfig::default();
        cfg.data_path = Some("/srv/index/data.json".to_string());
        cfg.default_grouping = Grouping::AgeGroup;
        cfg.dimension_weights.insert("income".to_string(), 2.0);
        cfg.overlay.locale = Locale::Ru;

        save_to_path(&cfg, &path).expect("save config");
        let loaded = load_or_default_from_path(&path);

        assert_eq!(cfg, loaded);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("viewer.toml");
        fs::write(&path, "highlight_ms = \"soon\"").expect("write");

        assert_eq!(load_or_default_from_path(&path), ViewerConfig::default());
        assert_eq!(
            load_or_default_from_path(&dir.path().join("missing.toml")),
            ViewerConfig::default()
        );
    }

    #[test]
    fn unknown_grouping_in_config_is_kept() {
        let cfg: ViewerConfig = toml::from_str("default_grouping = \"Occupation\"").expect("cfg");
        assert_eq!(
            cfg.default_grouping,
            Grouping::Other("Occupation".to_string())
        );
        assert_eq!(cfg.overlay, OverlayConfig::default());
    }

    #[test]
    fn parses_data_and_locale_flags() {
        let args = vec![
            OsString::from("--data"),
            OsString::from("/tmp/index.json"),
            OsString::from("--locale"),
            OsString::from("ru"),
        ];
        let parsed = parse_args_from(args).expect("args parsed");
        assert_eq!(parsed.data, Some(PathBuf::from("/tmp/index.json")));
        assert_eq!(parsed.locale, Some(Locale::Ru));

        let mut cfg = ViewerConfig::default();
        cfg.apply_args(&parsed);
        assert_eq!(cfg.data_path.as_deref(), Some("/tmp/index.json"));
        assert_eq!(cfg.overlay.locale, Locale::Ru);
    }

    #[test]
    fn rejects_bad_locale_and_unknown_flags() {
        assert!(parse_args_from(vec![OsString::from("--locale"), OsString::from("de")]).is_err());
        assert!(parse_args_from(vec![OsString::from("--verbose")]).is_err());
        assert!(parse_args_from(vec![OsString::from("--data")]).is_err());
    }
}
