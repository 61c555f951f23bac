//! Job Board Common Library
//!
//! CLIとデスクトップビューアで共有される型とロジック

pub mod types;
pub mod time;
pub mod compare;
pub mod pipeline;
pub mod ingest;
pub mod state;
pub mod error;

pub use types::{Job, PLACEHOLDER};
pub use time::{minutes_ago, PostedTime, UNBOUNDED};
pub use compare::{compare_by_posted_time, compare_by_title, TimeOrder, TitleOrder};
pub use pipeline::{apply, filter_options, FilterField, FilterOptions, FilterSelection, SortMode, ALL_OPTION};
pub use ingest::{parse_jobs, Schema};
pub use state::{update, AppState, Intent, Render};
pub use error::{IngestError, Result};
