use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::screenplay::{render_plain, ClassifiedLine, Classifier, ElementKind, ScriptStats};

// @module: Application controller for screenplay processing

// @const: Suffix of rendered output files, also used to skip them as inputs
const RENDERED_SUFFIX: &str = "rendered";

/// What happened to a single render request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Output written to this path
    Written(PathBuf),
    /// Output already existed and overwrite was not requested
    Skipped(PathBuf),
}

/// Counts from processing a folder of scripts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Classifier compiled from the configured vocabulary
    classifier: Classifier,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let classifier = Classifier::new(&config.vocabulary.to_vocabulary())?;
        Ok(Self { config, classifier })
    }

    /// Classify every line of a document
    pub fn classify_text(&self, text: &str) -> Vec<ClassifiedLine> {
        self.classifier.parse_elements(text)
    }

    /// Read and classify a script file
    pub fn classify_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ClassifiedLine>> {
        let content = FileManager::read_to_string(&path)?;
        let lines = self.classify_text(&content);
        debug!("Classified {} lines from {:?}", lines.len(), path.as_ref());
        Ok(lines)
    }

    /// Rewrite one line for the given element kind
    pub fn format_line(&self, kind: ElementKind, text: &str) -> String {
        self.classifier.format_as_element(kind, text)
    }

    /// Lay a document out as a plain-text screenplay
    pub fn render_text(&self, text: &str) -> String {
        render_plain(&self.classify_text(text), &self.config.render)
    }

    /// Statistics for a document
    pub fn stats_text(&self, text: &str) -> ScriptStats {
        ScriptStats::from_lines(&self.classify_text(text), &self.config.render)
    }

    /// Statistics for a script file
    pub fn stats_file<P: AsRef<Path>>(&self, path: P) -> Result<ScriptStats> {
        let content = FileManager::read_to_string(&path)?;
        Ok(self.stats_text(&content))
    }

    /// Render a script file into `output_dir`
    pub fn render_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input_file: P1,
        output_dir: P2,
        force_overwrite: bool,
    ) -> Result<RenderOutcome> {
        let input_file = input_file.as_ref();
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = FileManager::generate_output_path(input_file, output_dir, RENDERED_SUFFIX);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
            return Ok(RenderOutcome::Skipped(output_path));
        }

        let content = FileManager::read_to_string(input_file)?;
        FileManager::write_to_file(&output_path, &self.render_text(&content))?;
        debug!("Rendered {:?} to {:?}", input_file, output_path);

        Ok(RenderOutcome::Written(output_path))
    }

    /// Render every script under a directory, next to its input or into `output_dir`
    ///
    /// With an `output_dir`, each script's subfolder relative to `input_dir` is
    /// recreated there.
    pub fn render_folder<P: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<FolderSummary> {
        let input_dir = input_dir.as_ref();
        let start_time = std::time::Instant::now();

        let scripts = Self::collect_inputs(input_dir)?;
        let folder_pb = Self::folder_progress(scripts.len() as u64);
        let mut summary = FolderSummary::default();

        for script in &scripts {
            let file_name = script
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Rendering: {}", file_name));

            let script_dir = script.parent().unwrap_or(input_dir);
            let target_dir = match output_dir {
                Some(dir) => match script_dir.strip_prefix(input_dir) {
                    Ok(relative) => dir.join(relative),
                    Err(_) => dir.to_path_buf(),
                },
                None => script_dir.to_path_buf(),
            };

            match self.render_file(script, &target_dir, force_overwrite) {
                Ok(RenderOutcome::Written(_)) => summary.processed += 1,
                Ok(RenderOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error rendering {}: {}", file_name, e);
                    summary.errors += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!(
            "Folder rendering completed in {:.2?}: {} processed, {} skipped, {} errors",
            start_time.elapsed(),
            summary.processed,
            summary.skipped,
            summary.errors
        );

        Ok(summary)
    }

    /// Resolve a file or directory argument into script files
    ///
    /// Previously rendered outputs are never picked up as inputs.
    pub fn collect_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();

        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        if !path.is_dir() {
            return Err(anyhow!("Input path does not exist: {:?}", path));
        }

        let scripts: Vec<PathBuf> = FileManager::find_script_files(path)?
            .into_iter()
            .filter(|p| !Self::is_rendered_output(p))
            .collect();

        if scripts.is_empty() {
            return Err(anyhow!("No script files found in directory: {:?}", path));
        }

        Ok(scripts)
    }

    fn is_rendered_output(path: &Path) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(&format!(".{}", RENDERED_SUFFIX)))
            .unwrap_or(false)
    }

    fn folder_progress(len: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }
}
