use crate::chart::HistoryChartConfig;
use crate::sort_widget::SortWidgetConfig;
use anyhow::{Context, anyhow};
use commstat_model::{CommunitySortField, PostSortField};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const CONFIG_PATH_ENV: &str = "COMMSTAT_SORT_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "COMMSTAT_SORT_CONFIG_JSON";

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Page bindings for every listing page plus the history chart labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommstatConfig {
    pub community_list: SortWidgetConfig,
    pub post_list: SortWidgetConfig,
    pub history_chart: HistoryChartConfig,
}

impl Default for CommstatConfig {
    fn default() -> Self {
        Self {
            community_list: SortWidgetConfig::community_list(),
            post_list: SortWidgetConfig::post_list(),
            history_chart: HistoryChartConfig::default(),
        }
    }
}

impl CommstatConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$COMMSTAT_SORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$COMMSTAT_SORT_CONFIG_JSON` (inline JSON),
    /// 3) a `commstat.toml` / `commstat.json` in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        log::debug!("no commstat config override found, using defaults");
        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read commstat config from {}", path.display())
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid commstat config {}", path.display())
            })?,
            Some("toml") | Some("tml") => {
                let config: Self = toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid commstat config {}: {}",
                        path.display(),
                        err
                    )
                })?;
                let config = config.with_page_defaults();
                config.validate()?;
                config
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        log::info!("loaded commstat config from {}", path.display());
        Ok(config)
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        let config: Self = toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse commstat config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })?;
        let config = config.with_page_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid commstat config json: {err}"))?;
        let config = config.with_page_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Page layouts that declare no fields keep their built-in ones.
    fn with_page_defaults(mut self) -> Self {
        self.community_list = self
            .community_list
            .with_default_fields(&SortWidgetConfig::community_list());
        self.post_list = self
            .post_list
            .with_default_fields(&SortWidgetConfig::post_list());
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.community_list
            .resolve::<CommunitySortField>()
            .context("invalid community_list sort widget")?;
        self.post_list
            .resolve::<PostSortField>()
            .context("invalid post_list sort widget")?;
        self.history_chart
            .validate()
            .context("invalid history_chart")?;
        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "commstat.toml",
            "commstat.json",
            "config/commstat.toml",
            "config/commstat.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TimeUnit;

    #[test]
    fn partial_toml_keeps_defaults() {
        let raw = r#"
            [history_chart]
            title = "Subscribers"
            time_unit = "week"
        "#;

        let config = CommstatConfig::parse_from_str(raw, "inline").unwrap();
        assert_eq!(config.history_chart.title, "Subscribers");
        assert_eq!(config.history_chart.time_unit, TimeUnit::Week);
        assert_eq!(config.history_chart.dataset_label, "followers");
        assert_eq!(config.community_list, SortWidgetConfig::community_list());
    }

    #[test]
    fn json_falls_back_when_toml_fails() {
        let raw = r#"{ "community_list": { "disabled_direction_hint": false } }"#;

        let config = CommstatConfig::parse_from_str(raw, "inline").unwrap();
        assert!(!config.community_list.disabled_direction_hint);
        assert_eq!(config.community_list.form_name, "filter");
    }

    #[test]
    fn invalid_layout_is_rejected_after_parse() {
        let raw = r#"{ "post_list": { "form_name": "" } }"#;

        let err = CommstatConfig::parse_json(raw).unwrap_err();
        assert!(format!("{err:#}").contains("post_list"));
    }

    #[test]
    fn partial_post_layout_keeps_post_fields() {
        let raw = r#"
            [post_list]
            inverse_name = "desc"
        "#;

        let config = CommstatConfig::parse_from_str(raw, "inline").unwrap();
        assert_eq!(config.post_list.inverse_name, "desc");
        assert_eq!(
            config.post_list.fields,
            SortWidgetConfig::post_list().fields
        );
    }

    #[test]
    fn unknown_field_id_is_rejected_at_load() {
        let raw = r#"{ "community_list": { "fields": [
            { "field": "subscribers", "widget_id": "x-widget" }
        ] } }"#;

        let err = CommstatConfig::parse_json(raw).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("community_list"));
        assert!(message.contains("subscribers"));
    }

    #[test]
    fn field_of_the_other_page_is_rejected() {
        let raw = r#"
            [[post_list.fields]]
            field = "followers"
            widget_id = "followers-range-widget"
        "#;

        let err = CommstatConfig::parse_from_str(raw, "inline").unwrap_err();
        assert!(format!("{err:#}").contains("post_list"));
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = CommstatConfig::parse_from_str("{{ nope", "inline")
            .unwrap_err()
            .to_string();
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }
}
