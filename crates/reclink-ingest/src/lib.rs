//! Source ingestion for reclink.
//!
//! Discovers CSV files in a data folder, parses them into
//! [`Source`](reclink_model::Source) tables, and loads the static mapping
//! profile. The matching engine itself never touches the filesystem.

pub mod csv_source;
pub mod discovery;
pub mod error;
pub mod profile_file;

pub use csv_source::read_csv_source;
pub use discovery::list_csv_files;
pub use error::{IngestError, Result};
pub use profile_file::load_mapping_profile;
