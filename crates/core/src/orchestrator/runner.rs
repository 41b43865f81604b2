//! Importer implementation.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::cleaner::series_name_from_dir;
use crate::external_catalog::{CandidateField, SeriesCatalog};
use crate::extractor::ChapterVolumeExtractor;
use crate::naming::{normalized_filename, sanitize_title};
use crate::placer::{FilePlacement, Placer};
use crate::presenter::{Console, MatchPresenter, Selection};

use super::config::ImporterConfig;
use super::types::{FileFailure, ImportError, ImportReport};

/// Imports directories of archives into the library.
pub struct Importer<C, P>
where
    C: SeriesCatalog,
    P: Placer,
{
    config: ImporterConfig,
    catalog: C,
    placer: P,
    extractor: ChapterVolumeExtractor,
    presenter: MatchPresenter,
}

impl<C, P> Importer<C, P>
where
    C: SeriesCatalog,
    P: Placer,
{
    /// Create an importer with the built-in extraction patterns.
    pub fn new(config: ImporterConfig, catalog: C, placer: P) -> Self {
        let presenter = MatchPresenter::new(config.filter_non_primary);
        Self {
            config,
            catalog,
            placer,
            extractor: ChapterVolumeExtractor::default(),
            presenter,
        }
    }

    /// Replace the extraction cascade.
    pub fn with_extractor(mut self, extractor: ChapterVolumeExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Import every archive directly inside `dir`.
    ///
    /// The canonical title is resolved once and used for every file. Files
    /// that fail to place are recorded in the report and do not stop the
    /// remaining ones; files already placed stay in place. The series
    /// directory is only created when there is something to file into it.
    pub async fn import_directory<R: BufRead, W: Write>(
        &self,
        dir: &Path,
        console: &mut Console<R, W>,
    ) -> Result<ImportReport, ImportError> {
        let name = series_name_from_dir(dir);
        if name.is_empty() {
            return Err(ImportError::EmptyName(dir.to_path_buf()));
        }

        let (archives, skipped) = self.archive_files(dir).await?;

        console.line(format!(
            "Searching \"{}\" for directory {}",
            name,
            dir.display()
        ))?;
        info!("Importing {} as \"{}\"", dir.display(), name);

        let candidates = self
            .catalog
            .search(&name, self.config.search_limit, CandidateField::DEFAULT_SET)
            .await?;
        debug!("Catalog returned {} candidate(s)", candidates.len());

        let selection = self.presenter.present(console, &candidates)?;
        let title = sanitize_title(&resolve_title(&selection, &name));
        if title.is_empty() {
            return Err(ImportError::EmptyName(dir.to_path_buf()));
        }
        let series_dir = self.config.library_dir.join(&title);

        let mut report = ImportReport {
            directory: dir.to_path_buf(),
            title: title.clone(),
            series_dir: series_dir.clone(),
            placed: Vec::new(),
            skipped,
            unnumbered: 0,
            failures: Vec::new(),
        };

        if archives.is_empty() {
            console.line(format!("No archives found in {}", dir.display()))?;
            info!("Nothing to import from {}", dir.display());
            return Ok(report);
        }

        debug!("Ensuring {} with the {} placer", series_dir.display(), self.placer.name());
        self.placer.ensure_dir(&series_dir).await?;
        console.line(format!("Filing into {}", series_dir.display()))?;

        for (source, extension) in archives {
            let file_name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let (info, _) = self.extractor.extract(&file_name);
            let numbered = info.has_numbering();
            if !numbered {
                report.unnumbered += 1;
            }

            let destination = series_dir.join(normalized_filename(&title, &info, &extension));
            console.line(format!(
                "{} -> {}{}",
                source.display(),
                destination.display(),
                if numbered { "" } else { " (no volume/chapter recognized)" }
            ))?;

            let placement = FilePlacement {
                source: source.clone(),
                destination: destination.clone(),
            };
            match self.placer.place(&placement).await {
                Ok(placed) => report.placed.push(placed),
                Err(e) => {
                    warn!("Failed to place {}: {}", source.display(), e);
                    console.line(format!("  failed: {}", e))?;
                    report.failures.push(FileFailure {
                        source,
                        destination,
                        error: e.to_string(),
                    });
                }
            }
        }

        console.line(format!(
            "Placed {} file(s), skipped {}, {} failed",
            report.placed.len(),
            report.skipped,
            report.failures.len()
        ))?;
        info!(
            "Imported {} into {} ({} placed, {} failed)",
            dir.display(),
            series_dir.display(),
            report.placed.len(),
            report.failures.len()
        );

        Ok(report)
    }

    /// Archives directly inside `dir`, sorted by name, with their extension.
    /// Also returns how many entries were skipped.
    async fn archive_files(&self, dir: &Path) -> Result<(Vec<(PathBuf, String)>, usize), ImportError> {
        let read_err = |source| ImportError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir).await.map_err(read_err)?;
        let mut archives = Vec::new();
        let mut skipped = 0;

        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            let path = entry.path();
            // Follows symlinks; dangling links count as skipped.
            let is_file = fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false);
            let extension = path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()));

            match extension {
                Some(ext) if is_file && self.config.is_archive_extension(&ext) => {
                    archives.push((path, ext));
                }
                _ => {
                    debug!("Skipping {}", path.display());
                    skipped += 1;
                }
            }
        }

        archives.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
        Ok((archives, skipped))
    }
}

fn resolve_title(selection: &Selection, cleaned_name: &str) -> String {
    match selection {
        Selection::Candidate(candidate) => candidate.title.clone(),
        Selection::AsIs => cleaned_name.to_string(),
    }
}
