use std::{
    cell::OnceCell,
    collections::{BTreeSet, HashSet},
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow, bail};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        Catalog, CatalogLocation, TsFile,
        file_scanner::scan_files,
        parsers::ts::{looks_like_ts, parse_ts_str},
    },
    issues::ParseErrorIssue,
};

/// Result of reading every candidate `.ts` file.
#[derive(Debug, Default)]
pub struct LoadedCatalogs {
    /// Parsed catalogs, sorted by file path.
    pub files: Vec<TsFile>,
    /// Files that are not well-formed TS documents.
    pub parse_errors: Vec<ParseErrorIssue>,
    /// `.ts` files that turned out to be TypeScript sources.
    pub skipped: Vec<String>,
}

/// Loaded project state shared by commands, rules and the MCP server.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--translations-root`)
/// 2. `.tsglotrc.json` config file
/// 3. Built-in defaults
///
/// Catalogs are read and parsed on first access, in parallel.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (where the config search starts).
    pub root_dir: PathBuf,

    /// Directory scanned for catalogs.
    pub translations_dir: PathBuf,

    /// Candidate `.ts` files found under `translations_dir`.
    pub files: BTreeSet<String>,

    /// Source strings never reported as untranslated (config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    /// Contexts skipped by content rules (config `ignoreContexts`).
    pub ignore_contexts: HashSet<String>,

    pub verbose: bool,

    catalogs: OnceCell<LoadedCatalogs>,
}

impl CheckContext {
    /// Load configuration and scan for catalog files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the translations
    /// directory does not exist.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args.path.clone();
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if !config_result.from_file {
            debug!("no .tsglotrc.json found, using default configuration");
        }
        let mut config = config_result.config;

        if let Some(ref translations_root) = common_args.translations_root {
            config.translations_root = translations_root.to_string_lossy().to_string();
        }

        let translations_dir = resolve_dir(&root_dir, &config.translations_root);
        if !translations_dir.is_dir() {
            bail!(
                "Translations directory not found: {}",
                translations_dir.display()
            );
        }

        let scan_result = scan_files(
            &translations_dir.to_string_lossy(),
            &config.includes,
            &config.ignores,
        );
        if scan_result.skipped_count > 0 {
            warn!(
                count = scan_result.skipped_count,
                "path(s) skipped due to access errors"
            );
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();
        let ignore_contexts = config.ignore_contexts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            translations_dir,
            files: scan_result.files,
            ignore_texts,
            ignore_contexts,
            verbose: common_args.verbose,
            catalogs: OnceCell::new(),
        })
    }

    /// Read and parse every candidate file (lazy initialization).
    pub fn catalogs(&self) -> &LoadedCatalogs {
        self.catalogs.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path, load_file(file_path)))
                .collect();

            let mut loaded = LoadedCatalogs::default();
            for (file_path, result) in results {
                match result {
                    Ok(Some(file)) => loaded.files.push(file),
                    Ok(None) => {
                        debug!(file = %file_path, "not a TS catalog, skipping");
                        loaded.skipped.push(file_path.clone());
                    }
                    Err(issue) => {
                        debug!(file = %file_path, error = %issue.error, "failed to parse catalog");
                        loaded.parse_errors.push(issue);
                    }
                }
            }

            info!(
                catalogs = loaded.files.len(),
                errors = loaded.parse_errors.len(),
                skipped = loaded.skipped.len(),
                "loaded catalogs"
            );
            loaded
        })
    }

    /// Parsed catalogs, sorted by file path.
    pub fn ts_files(&self) -> &[TsFile] {
        &self.catalogs().files
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.catalogs().parse_errors
    }

    /// Distinct `language` attributes of the loaded catalogs; catalogs
    /// without one are grouped under `?`.
    pub fn languages(&self) -> BTreeSet<&str> {
        self.ts_files()
            .iter()
            .map(TsFile::language_or_unknown)
            .collect()
    }

    /// Build a lookup table for one language.
    ///
    /// Without `language` the project must contain exactly one.
    pub fn catalog_for(&self, language: Option<&str>) -> Result<Catalog> {
        let language = match language {
            Some(language) => language.to_string(),
            None => {
                let languages = self.languages();
                match languages.len() {
                    0 => bail!("No translation catalogs found in {}", self.translations_dir.display()),
                    1 => languages.into_iter().next().unwrap_or_default().to_string(),
                    _ => bail!(
                        "Multiple languages found ({}); specify one with --language",
                        languages.into_iter().collect::<Vec<_>>().join(", ")
                    ),
                }
            }
        };

        let mut files = self
            .ts_files()
            .iter()
            .filter(|f| f.language_or_unknown() == language);
        let Some(first) = files.next() else {
            bail!("No catalog for language '{}'", language);
        };

        let mut catalog = Catalog::from_file(first);
        for file in files {
            catalog.extend(file);
        }
        Ok(catalog)
    }
}

/// Read one file; `Ok(None)` when it is not a TS document.
fn load_file(file_path: &str) -> Result<Option<TsFile>, ParseErrorIssue> {
    let content = fs::read_to_string(file_path).map_err(|e| ParseErrorIssue {
        file_path: file_path.to_string(),
        error: format!("failed to read file: {}", e),
        location: None,
    })?;

    if !looks_like_ts(&content) {
        return Ok(None);
    }

    parse_ts_str(&content, file_path)
        .map(Some)
        .map_err(|e| ParseErrorIssue {
            file_path: file_path.to_string(),
            error: e.reason(),
            location: e
                .position()
                .map(|(line, col)| CatalogLocation::new(file_path, line, col)),
        })
}

/// Resolve a configured directory against the project root.
fn resolve_dir(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
