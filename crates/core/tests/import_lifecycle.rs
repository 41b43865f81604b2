//! Import lifecycle integration tests.
//!
//! These tests drive a whole directory through the importer against a real
//! library on disk: clean -> search -> select -> extract -> hard link.

use std::io::Cursor;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use scarlet_core::{
    testing::{fixtures, MockSeriesCatalog},
    Console, ExternalCatalogError, FsPlacer, ImportError, Importer, ImporterConfig, PlacerConfig,
};

type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Temp import and library roots plus a mock catalog.
struct TestHarness {
    catalog: MockSeriesCatalog,
    import_root: PathBuf,
    library_root: PathBuf,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let import_root = temp_dir.path().join("incoming");
        let library_root = temp_dir.path().join("library");
        std::fs::create_dir_all(&import_root).unwrap();
        std::fs::create_dir_all(&library_root).unwrap();

        Self {
            catalog: MockSeriesCatalog::new(),
            import_root,
            library_root,
            _temp_dir: temp_dir,
        }
    }

    fn source_dir(&self, name: &str, files: &[&str]) -> PathBuf {
        let dir = self.import_root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for file in files {
            std::fs::write(dir.join(file), format!("contents of {}", file)).unwrap();
        }
        dir
    }

    fn importer(&self, filter_non_primary: bool) -> Importer<MockSeriesCatalog, FsPlacer> {
        let mut config = ImporterConfig::new(&self.library_root);
        config.filter_non_primary = filter_non_primary;
        Importer::new(config, self.catalog.clone(), FsPlacer::with_defaults())
    }

    fn library_path(&self, relative: &str) -> PathBuf {
        self.library_root.join(relative)
    }
}

fn console(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

fn same_inode(a: &Path, b: &Path) -> bool {
    let a = std::fs::metadata(a).unwrap();
    let b = std::fs::metadata(b).unwrap();
    a.ino() == b.ino() && a.dev() == b.dev()
}

#[tokio::test]
async fn test_directory_is_filed_under_selected_title() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("One Piece [Digital]", &["OnePiece_v05.cbz"]);
    harness
        .catalog
        .set_results(vec![
            fixtures::manga("One Piece"),
            fixtures::manga_with_alternate("One Piece: Wanted!", "Wanted"),
        ])
        .await;

    let mut console = console("1\n");
    let report = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    let expected = harness.library_path("One Piece/One Piece Vol. 05.cbz");
    assert!(report.is_clean());
    assert_eq!(report.placed.len(), 1);
    assert_eq!(report.placed[0].destination, expected);
    assert!(report.placed[0].linked);
    assert!(same_inode(&dir.join("OnePiece_v05.cbz"), &expected));

    let searches = harness.catalog.recorded_searches().await;
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].query, "One Piece");

    let text = output(console);
    assert!(text.contains("1. One Piece"));
    assert!(text.contains("2. One Piece: Wanted! | Wanted"));
    assert!(text.contains("OnePiece_v05.cbz ->"));
}

#[tokio::test]
async fn test_mixed_directory_contents() {
    let harness = TestHarness::new();
    let dir = harness.source_dir(
        "[Scans] Dorohedoro [Complete]",
        &["Doro c015.cbr", "Doro v03.cbz", "cover.jpg", "Extras.cbz"],
    );
    std::fs::create_dir(dir.join("nested.cbz")).unwrap();
    harness
        .catalog
        .set_results(vec![fixtures::manga("Dorohedoro")])
        .await;

    let mut console = console("1\n");
    let report = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    assert_eq!(harness.catalog.recorded_searches().await[0].query, "Dorohedoro");
    assert_eq!(report.placed.len(), 3);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.unnumbered, 1);
    assert!(harness.library_path("Dorohedoro/Dorohedoro Ch. 15.cbr").exists());
    assert!(harness.library_path("Dorohedoro/Dorohedoro Vol. 03.cbz").exists());
    assert!(harness.library_path("Dorohedoro/Dorohedoro.cbz").exists());
    assert!(!harness.library_path("Dorohedoro/cover.jpg").exists());
}

#[tokio::test]
async fn test_as_is_keeps_cleaned_name() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Obscure Doujin [Group]", &["Obscure c01.cbz"]);
    harness
        .catalog
        .set_results(vec![fixtures::manga("Something Unrelated")])
        .await;

    let mut console = console("u\n");
    let report = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    assert_eq!(report.title, "Obscure Doujin");
    assert!(harness
        .library_path("Obscure Doujin/Obscure Doujin Ch. 01.cbz")
        .exists());
}

#[tokio::test]
async fn test_invalid_answers_reprompt_until_valid() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Berserk", &["Berserk v41.cbz"]);
    harness
        .catalog
        .set_results(vec![fixtures::manga("Berserk"), fixtures::manga("Berserk Prototype")])
        .await;

    let mut console = console("0\n7\nabc\n\n2\n");
    let report = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    assert_eq!(report.title, "Berserk Prototype");
    let text = output(console);
    assert_eq!(text.matches("Invalid selection:").count(), 4);
}

#[tokio::test]
async fn test_selection_indexes_displayed_candidates() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Spice and Wolf", &["Spice v02.cbz"]);
    harness
        .catalog
        .set_results(vec![
            fixtures::light_novel("Ookami to Koushinryou"),
            fixtures::manga("Ookami to Koushinryou (Manga)"),
        ])
        .await;

    let mut console = console("1\n");
    let report = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    assert_eq!(report.title, "Ookami to Koushinryou (Manga)");
    assert!(output(console).contains("Skipped 1 non-manga result(s)"));
}

#[tokio::test]
async fn test_unfiltered_lists_every_candidate() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Spice and Wolf", &["Spice v02.cbz"]);
    harness
        .catalog
        .set_results(vec![
            fixtures::light_novel("Ookami to Koushinryou"),
            fixtures::manga("Ookami to Koushinryou (Manga)"),
        ])
        .await;

    let mut console = console("1\n");
    let report = harness
        .importer(false)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    assert_eq!(report.title, "Ookami to Koushinryou");
}

#[tokio::test]
async fn test_catalog_failure_leaves_library_untouched() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("One Piece", &["OnePiece_v01.cbz"]);
    harness
        .catalog
        .set_next_error(ExternalCatalogError::RateLimitExceeded)
        .await;

    let mut console = console("1\n");
    let err = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::Catalog(_)));
    assert!(err.is_fatal());
    assert_eq!(std::fs::read_dir(&harness.library_root).unwrap().count(), 0);
}

#[tokio::test]
async fn test_rerun_reports_existing_links_per_file() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Akira", &["Akira v01.cbz", "Akira v02.cbz"]);
    harness.catalog.set_results(vec![fixtures::manga("Akira")]).await;
    let importer = harness.importer(true);

    let mut first = console("1\n");
    let report = importer.import_directory(&dir, &mut first).await.unwrap();
    assert_eq!(report.placed.len(), 2);

    let mut second = console("1\n");
    let report = importer.import_directory(&dir, &mut second).await.unwrap();
    assert!(report.placed.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert!(!report.is_clean());
    assert!(same_inode(
        &dir.join("Akira v01.cbz"),
        &harness.library_path("Akira/Akira Vol. 01.cbz")
    ));
}

#[tokio::test]
async fn test_dry_run_plans_without_linking() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Akira", &["Akira v01.cbz"]);
    harness.catalog.set_results(vec![fixtures::manga("Akira")]).await;

    let importer = Importer::new(
        ImporterConfig::new(&harness.library_root),
        harness.catalog.clone(),
        FsPlacer::new(PlacerConfig::default().with_dry_run(true)),
    );

    let mut console = console("1\n");
    let report = importer.import_directory(&dir, &mut console).await.unwrap();

    assert_eq!(report.placed.len(), 1);
    assert!(!report.placed[0].linked);
    assert!(!harness.library_path("Akira").exists());
}

#[tokio::test]
async fn test_parent_directory_name_never_escapes_library() {
    let harness = TestHarness::new();
    let dir = harness.source_dir(".. [x]", &["v01.cbz"]);

    let mut console = console("U\n");
    let err = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::EmptyName(_)));
    let parent = harness.library_root.parent().unwrap();
    assert!(!parent.join(".. Vol. 01.cbz").exists());
    assert_eq!(std::fs::read_dir(&harness.library_root).unwrap().count(), 0);
}

#[tokio::test]
async fn test_symlinked_archive_is_linked_to_its_target() {
    let harness = TestHarness::new();
    let dir = harness.source_dir("Akira", &[]);
    let target = harness.import_root.join("Akira v01.cbz");
    std::fs::write(&target, "archive").unwrap();
    std::os::unix::fs::symlink(&target, dir.join("Akira v01.cbz")).unwrap();
    harness.catalog.set_results(vec![fixtures::manga("Akira")]).await;

    let mut console = console("1\n");
    let report = harness
        .importer(true)
        .import_directory(&dir, &mut console)
        .await
        .unwrap();

    assert_eq!(report.placed.len(), 1);
    assert_eq!(report.skipped, 0);
    assert!(same_inode(&target, &harness.library_path("Akira/Akira Vol. 01.cbz")));
}
