//! Placer module for filing archives into the library.
//!
//! Files are hard-linked, never copied or moved: the import directory keeps
//! its content and the library entry shares the same data on disk.
//!
//! # Example
//!
//! ```ignore
//! use scarlet_core::placer::{FilePlacement, FsPlacer, Placer};
//!
//! let placer = FsPlacer::with_defaults();
//! placer.ensure_dir(Path::new("/library/One Piece")).await?;
//! placer
//!     .place(&FilePlacement {
//!         source: PathBuf::from("/incoming/One Piece [Digital]/OnePiece_v05.cbz"),
//!         destination: PathBuf::from("/library/One Piece/One Piece Vol. 05.cbz"),
//!     })
//!     .await?;
//! ```

mod config;
mod error;
mod fs_placer;
mod traits;
mod types;

pub use config::PlacerConfig;
pub use error::PlacerError;
pub use fs_placer::FsPlacer;
pub use traits::Placer;
pub use types::{FilePlacement, PlacedFile};
