// src/config.rs
use crate::constants::{DEFAULT_INFIX, DEFAULT_LEVELS, DEFAULT_PREFIX};
use crate::error::{AppError, CaptionError};
use crate::types::{LevelType, OutputFormat, ValidationError};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Validated, immutable configuration of one captioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionerConfig {
    prefix: String,
    auto_space: bool,
    levels: usize,
    types: Vec<LevelType>,
    infix: String,
    link: bool,
    output_format: OutputFormat,
}

impl CaptionerConfig {
    pub fn builder() -> CaptionerConfigBuilder {
        CaptionerConfigBuilder::default()
    }

    /// The prefix as rendered, including the space added by `auto_space`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn auto_space(&self) -> bool {
        self.auto_space
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// One entry per level, outermost first. Always `levels` long.
    pub fn types(&self) -> &[LevelType] {
        &self.types
    }

    pub fn infix(&self) -> &str {
        &self.infix
    }

    pub fn link(&self) -> bool {
        self.link
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Whether rendered output carries link markup.
    pub fn links_enabled(&self) -> bool {
        self.link && self.output_format != OutputFormat::Plain
    }

    /// The same configuration with link markup turned off.
    pub fn without_links(&self) -> Self {
        Self {
            link: false,
            ..self.clone()
        }
    }
}

impl Default for CaptionerConfig {
    fn default() -> Self {
        Self {
            prefix: format!("{} ", DEFAULT_PREFIX),
            auto_space: true,
            levels: DEFAULT_LEVELS,
            types: vec![LevelType::Numeric; DEFAULT_LEVELS],
            infix: DEFAULT_INFIX.to_string(),
            link: false,
            output_format: OutputFormat::Plain,
        }
    }
}

/// Collects construction options and validates them in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CaptionerConfigBuilder {
    prefix: String,
    auto_space: bool,
    levels: usize,
    types: Vec<Result<LevelType, ValidationError>>,
    infix: String,
    link: bool,
    output_format: OutputFormat,
}

impl Default for CaptionerConfigBuilder {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            auto_space: true,
            levels: DEFAULT_LEVELS,
            types: Vec::new(),
            infix: DEFAULT_INFIX.to_string(),
            link: false,
            output_format: OutputFormat::Plain,
        }
    }
}

impl CaptionerConfigBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn auto_space(mut self, auto_space: bool) -> Self {
        self.auto_space = auto_space;
        self
    }

    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = LevelType>) -> Self {
        self.types = types.into_iter().map(Ok).collect();
        self
    }

    /// Level types given as tags (`n`, `c`, `C`); unknown tags fail in `build`.
    pub fn type_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.types = tags.into_iter().map(|tag| tag.as_ref().parse()).collect();
        self
    }

    pub fn infix(mut self, infix: impl Into<String>) -> Self {
        self.infix = infix.into();
        self
    }

    pub fn link(mut self, link: bool) -> Self {
        self.link = link;
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn build(self) -> Result<CaptionerConfig, CaptionError> {
        if self.levels == 0 {
            return Err(ValidationError::ZeroLevels(self.levels).into());
        }

        let mut types = self.types.into_iter().collect::<Result<Vec<_>, _>>()?;
        types.resize(self.levels, LevelType::Numeric);

        let prefix = if self.auto_space && needs_space(&self.prefix) {
            format!("{} ", self.prefix)
        } else {
            self.prefix
        };

        Ok(CaptionerConfig {
            prefix,
            auto_space: self.auto_space,
            levels: self.levels,
            types,
            infix: self.infix,
            link: self.link,
            output_format: self.output_format,
        })
    }
}

fn needs_space(prefix: &str) -> bool {
    prefix.chars().last().is_some_and(|c| !c.is_whitespace())
}

/// Loosely typed construction options, as read from JSON.
///
/// Every field is optional; missing fields keep the builder defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionerOptions {
    pub prefix: Option<String>,
    #[serde(alias = "autoSpace")]
    pub auto_space: Option<bool>,
    pub levels: Option<usize>,
    #[serde(rename = "type", alias = "types")]
    pub types: Option<Vec<String>>,
    pub infix: Option<String>,
    pub link: Option<bool>,
    #[serde(alias = "outputFormat")]
    pub output_format: Option<String>,
}

impl CaptionerOptions {
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::MalformedOptions(e.to_string()))
    }

    /// Applies the options onto a builder, leaving unset fields alone.
    pub fn apply(&self, mut builder: CaptionerConfigBuilder) -> CaptionerConfigBuilder {
        if let Some(prefix) = &self.prefix {
            builder = builder.prefix(prefix.clone());
        }
        if let Some(auto_space) = self.auto_space {
            builder = builder.auto_space(auto_space);
        }
        if let Some(levels) = self.levels {
            builder = builder.levels(levels);
        }
        if let Some(types) = &self.types {
            builder = builder.type_tags(types);
        }
        if let Some(infix) = &self.infix {
            builder = builder.infix(infix.clone());
        }
        if let Some(link) = self.link {
            builder = builder.link(link);
        }
        if let Some(format) = &self.output_format {
            builder = builder.output_format(OutputFormat::from_tag(format));
        }
        builder
    }

    pub fn into_config(self) -> Result<CaptionerConfig, CaptionError> {
        self.apply(CaptionerConfig::builder()).build()
    }
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// JSON file holding an array of caption calls
    pub script: PathBuf,

    /// JSON file with captioner options (prefix, levels, type, infix, link, output_format)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Label prefix, e.g. "Table"
    #[arg(long)]
    pub prefix: Option<String>,

    /// Number of levels in each caption number
    #[arg(long)]
    pub levels: Option<usize>,

    /// Level type per level: n (numeric), c (lowercase), C (uppercase). Repeatable.
    #[arg(long = "type")]
    pub types: Vec<String>,

    /// Separator between levels
    #[arg(long)]
    pub infix: Option<String>,

    /// Do not add a space after the prefix
    #[arg(long, default_value_t = false)]
    pub no_auto_space: bool,

    /// Render cross-reference links for html or latex output
    #[arg(long, default_value_t = false)]
    pub link: bool,

    /// Output format tag of the host renderer (html, latex, ...)
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Append a listing of every registered caption
    #[arg(long, default_value_t = false)]
    pub listing: bool,

    /// Append the final registry as JSON
    #[arg(long, default_value_t = false)]
    pub dump_registry: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved run configuration for the binary.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub captioner: CaptionerConfig,
    pub script: PathBuf,
    pub output_file: Option<PathBuf>,
    pub listing: bool,
    pub dump_registry: bool,
    pub verbose: bool,
}

impl CliConfig {
    /// Layers command-line flags over the optional options file.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let mut options = match &cli.config {
            Some(path) => load_options(path)?,
            None => CaptionerOptions::default(),
        };

        if cli.prefix.is_some() {
            options.prefix = cli.prefix;
        }
        if cli.no_auto_space {
            options.auto_space = Some(false);
        }
        if cli.levels.is_some() {
            options.levels = cli.levels;
        }
        if !cli.types.is_empty() {
            options.types = Some(cli.types);
        }
        if cli.infix.is_some() {
            options.infix = cli.infix;
        }
        if cli.link {
            options.link = Some(true);
        }
        if cli.format.is_some() {
            options.output_format = cli.format;
        }

        Ok(CliConfig {
            captioner: options.into_config()?,
            script: cli.script,
            output_file: cli.output_file,
            listing: cli.listing,
            dump_registry: cli.dump_registry,
            verbose: cli.verbose,
        })
    }
}

fn load_options(path: &Path) -> Result<CaptionerOptions, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigNotFound {
        path: path.display().to_string(),
        source,
    })?;
    Ok(CaptionerOptions::from_json(&json).map_err(CaptionError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CaptionerConfig::builder().build().unwrap();
        assert_eq!(config, CaptionerConfig::default());
        assert_eq!(config.prefix(), "Figure ");
    }

    #[test]
    fn test_auto_space() {
        let spaced = CaptionerConfig::builder().prefix("Table").build().unwrap();
        assert_eq!(spaced.prefix(), "Table ");

        let already = CaptionerConfig::builder().prefix("Table ").build().unwrap();
        assert_eq!(already.prefix(), "Table ");

        let off = CaptionerConfig::builder()
            .prefix("Fig.")
            .auto_space(false)
            .build()
            .unwrap();
        assert_eq!(off.prefix(), "Fig.");

        let empty = CaptionerConfig::builder().prefix("").build().unwrap();
        assert_eq!(empty.prefix(), "");
    }

    #[test]
    fn test_types_padded_and_truncated() {
        let padded = CaptionerConfig::builder()
            .levels(3)
            .types([LevelType::UpperAlpha])
            .build()
            .unwrap();
        assert_eq!(
            padded.types(),
            &[LevelType::UpperAlpha, LevelType::Numeric, LevelType::Numeric]
        );

        let truncated = CaptionerConfig::builder()
            .type_tags(["n", "c", "C"])
            .build()
            .unwrap();
        assert_eq!(truncated.types(), &[LevelType::Numeric]);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            CaptionerConfig::builder().levels(0).build(),
            Err(CaptionError::InvalidConfig(ValidationError::ZeroLevels(0)))
        ));
        assert!(matches!(
            CaptionerConfig::builder().levels(2).type_tags(["n", "i"]).build(),
            Err(CaptionError::InvalidConfig(ValidationError::UnknownLevelType(_)))
        ));
    }

    #[test]
    fn test_options_from_json() {
        let options = CaptionerOptions::from_json(
            r#"{
                "prefix": "Table",
                "levels": 2,
                "type": ["n", "c"],
                "outputFormat": "html",
                "link": true
            }"#,
        )
        .unwrap();
        let config = options.into_config().unwrap();
        assert_eq!(config.prefix(), "Table ");
        assert_eq!(config.types(), &[LevelType::Numeric, LevelType::LowerAlpha]);
        assert_eq!(config.output_format(), OutputFormat::Html);
        assert!(config.links_enabled());
    }

    #[test]
    fn test_options_type_mismatch_is_invalid_config() {
        let err = CaptionerOptions::from_json(r#"{"levels": "two"}"#).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedOptions(_)));

        let err = CaptionerOptions::from_json(r#"{"prefix": 3}"#).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedOptions(_)));
    }

    #[test]
    fn test_cli_flags_override_defaults() {
        let cli = CommandLineInput::parse_from([
            "captioner",
            "calls.json",
            "--prefix",
            "Table",
            "--levels",
            "2",
            "--type",
            "n",
            "--type",
            "C",
            "--infix",
            ":",
        ]);
        let resolved = CliConfig::resolve(cli).unwrap();
        assert_eq!(resolved.captioner.prefix(), "Table ");
        assert_eq!(resolved.captioner.infix(), ":");
        assert_eq!(
            resolved.captioner.types(),
            &[LevelType::Numeric, LevelType::UpperAlpha]
        );
        assert_eq!(resolved.script, PathBuf::from("calls.json"));
    }

    #[test]
    fn test_missing_options_file_is_reported_as_config() {
        let cli = CommandLineInput::parse_from([
            "captioner",
            "calls.json",
            "--config",
            "/nonexistent/captioner-options.json",
        ]);
        let err = CliConfig::resolve(cli).unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound { .. }));
        assert!(err.to_string().starts_with("Options file not found at"));
    }
}
