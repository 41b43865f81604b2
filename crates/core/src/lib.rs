pub mod cleaner;
pub mod config;
pub mod external_catalog;
pub mod extractor;
pub mod naming;
pub mod orchestrator;
pub mod placer;
pub mod presenter;
pub mod testing;

pub use cleaner::{clean_name, series_name_from_dir};
pub use config::{
    default_config_path, load_config, load_config_from_str, validate_config, Config, ConfigError,
    SanitizedConfig,
};
pub use external_catalog::{
    CandidateField, ExternalCatalogError, MalClient, MalConfig, MediaKind, SeriesCandidate,
    SeriesCatalog,
};
pub use extractor::{ChapterVolumeExtractor, ExtractionPattern, ParsedFileInfo, PatternError};
pub use naming::{normalized_filename, sanitize_title};
pub use orchestrator::{FileFailure, ImportError, ImportReport, Importer, ImporterConfig};
pub use placer::{FilePlacement, FsPlacer, PlacedFile, Placer, PlacerConfig, PlacerError};
pub use presenter::{Console, MatchPresenter, PresenterError, Selection};
