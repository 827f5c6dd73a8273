// src/config/builder.rs

use super::{
    parsing::{normalize_extensions, parse_max_size},
    target::{resolve_source_encoding, resolve_target},
    validation::{validate_ignore_patterns, validate_min_confidence},
    Config, ConversionConfig, DiscoveryConfig, OutputConfig,
};
use crate::cli::Cli;
use crate::codec::ErrorMode;
use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_MAX_PRINT, DEFAULT_MIN_CONFIDENCE, DEFAULT_TARGET};
use crate::detection::DetectorKind;
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a [`Config`] instance programmatically.
///
/// Every setting is optional; unset ones take the same defaults as the CLI.
/// All validation (target resolution, size parsing, ranges, globs) happens in
/// [`ConfigBuilder::build`].
///
/// # Examples
///
/// ```
/// use enconv::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input_path("src")
///     .extensions(vec!["c".to_string(), "h".to_string()])
///     .target("gbk")
///     .dry_run(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.conversion.target.name(), "gbk");
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    input_path: Option<String>,
    extensions: Option<Vec<String>>,
    exclude_extensions: Option<Vec<String>>,
    ignore_patterns: Option<Vec<String>>,
    recursive: Option<bool>,
    include_hidden: Option<bool>,
    use_gitignore: Option<bool>,
    max_size: Option<String>,
    target: Option<String>,
    errors: Option<ErrorMode>,
    assume_encoding: Option<String>,
    min_confidence: Option<f32>,
    force: Option<bool>,
    detector: Option<DetectorKind>,
    backup: Option<bool>,
    report_path: Option<String>,
    max_print: Option<usize>,
    list_all: Option<bool>,
    fail_on_unsupported: Option<bool>,
    dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new, empty `ConfigBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.input_path),
            extensions: Some(cli.extensions),
            exclude_extensions: cli.exclude_extensions,
            ignore_patterns: cli.ignore_patterns,
            recursive: Some(!cli.no_recursive),
            include_hidden: Some(cli.include_hidden),
            use_gitignore: Some(!cli.no_gitignore),
            max_size: cli.max_size,
            target: Some(cli.target),
            errors: Some(cli.errors),
            assume_encoding: cli.assume_encoding,
            min_confidence: Some(cli.min_confidence),
            force: Some(cli.force),
            detector: Some(cli.detector),
            backup: Some(cli.backup),
            report_path: cli.report,
            max_print: Some(cli.max_print),
            list_all: Some(cli.list_all),
            fail_on_unsupported: Some(cli.fail_on_unsupported),
            dry_run: Some(cli.dry_run),
        }
    }

    /// Sets the directory or file to scan.
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }
    /// Sets the extension allow-list (default `h hpp cpp`).
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.extensions = Some(exts);
        self
    }
    pub fn exclude_extensions(mut self, exts: Vec<String>) -> Self {
        self.exclude_extensions = Some(exts);
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = Some(patterns);
        self
    }
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = Some(include);
        self
    }
    pub fn use_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = Some(use_gitignore);
        self
    }
    /// Sets the size limit, e.g. `"512k"` or `"2MiB"`.
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }
    /// Sets the target encoding name; aliases are accepted.
    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self
    }
    pub fn errors(mut self, mode: ErrorMode) -> Self {
        self.errors = Some(mode);
        self
    }
    /// Sets the source encoding used when detection finds none.
    pub fn assume_encoding(mut self, name: impl Into<String>) -> Self {
        self.assume_encoding = Some(name.into());
        self
    }
    pub fn min_confidence(mut self, value: f32) -> Self {
        self.min_confidence = Some(value);
        self
    }
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
    pub fn detector(mut self, kind: DetectorKind) -> Self {
        self.detector = Some(kind);
        self
    }
    pub fn backup(mut self, backup: bool) -> Self {
        self.backup = Some(backup);
        self
    }
    /// Sets the CSV report destination.
    pub fn report(mut self, path: impl Into<String>) -> Self {
        self.report_path = Some(path.into());
        self
    }
    pub fn max_print(mut self, rows: usize) -> Self {
        self.max_print = Some(rows);
        self
    }
    pub fn list_all(mut self, list_all: bool) -> Self {
        self.list_all = Some(list_all);
        self
    }
    pub fn fail_on_unsupported(mut self, fail: bool) -> Self {
        self.fail_on_unsupported = Some(fail);
        self
    }
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Validates the settings and builds the [`Config`].
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Config`] for an unknown or unsupported
    /// target, a malformed size, a confidence outside `[0, 1]` or an invalid glob.
    pub fn build(self) -> Result<Config> {
        let min_confidence = self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE);
        validate_min_confidence(min_confidence)?;
        validate_ignore_patterns(self.ignore_patterns.as_deref())?;

        let target = resolve_target(self.target.as_deref().unwrap_or(DEFAULT_TARGET))?;
        let max_size = parse_max_size(self.max_size.as_deref())?;
        let assume_encoding = self
            .assume_encoding
            .as_deref()
            .map(resolve_source_encoding)
            .transpose()?;

        let extensions = normalize_extensions(Some(self.extensions.unwrap_or_else(|| {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        })))
        .filter(|v| !v.is_empty());

        Ok(Config {
            input_path: self.input_path.unwrap_or_else(|| ".".to_string()),
            discovery: DiscoveryConfig {
                recursive: self.recursive.unwrap_or(true),
                extensions,
                exclude_extensions: normalize_extensions(self.exclude_extensions),
                ignore_patterns: self.ignore_patterns,
                include_hidden: self.include_hidden.unwrap_or(false),
                use_gitignore: self.use_gitignore.unwrap_or(true),
                max_size,
            },
            conversion: ConversionConfig {
                target,
                min_confidence,
                force: self.force.unwrap_or(false),
                errors: self.errors.unwrap_or_default(),
                assume_encoding,
                backup: self.backup.unwrap_or(false),
                detector: self.detector.unwrap_or_default(),
            },
            output: OutputConfig {
                list_all: self.list_all.unwrap_or(false),
                max_print: self.max_print.unwrap_or(DEFAULT_MAX_PRINT),
                report_path: self.report_path.map(PathBuf::from),
            },
            dry_run: self.dry_run.unwrap_or(false),
            fail_on_unsupported: self.fail_on_unsupported.unwrap_or(false),
        })
    }
}
