//! Evidence collection: what is on disk, read once per run.
//!
//! # Architecture
//!
//! ```text
//! ExcludeSet ──► RepoIndex (one walk) ──► Evidence (memoized text/config facts)
//!                                            │
//!                                            ├── discover_apps ──► [Application]
//!                                            └── Probe (repo or app scope) ──► criterion checks
//! ```

mod cache;
mod discovery;
mod exclude;
mod facts;
mod index;
mod probe;

pub use cache::{normalize, Evidence, CI_FILES};
pub use discovery::{
    describe_app, detect_languages, discover_apps, AppKind, Application, MANIFEST_MARKERS,
};
pub use exclude::ExcludeSet;
pub use facts::{ConfigFact, Text, TextFact, MAX_TEXT_BYTES};
pub use index::{depth_of, join, parent_of, RepoIndex};
pub use probe::Probe;
