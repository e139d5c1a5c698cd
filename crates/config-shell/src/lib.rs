//! Interactive shell for the ladder configurator.
//!
//! Owns the Parameter Set lifecycle: every edit clones the current snapshot,
//! mutates the clone, and re-resolves the full geometry. A rejected edit
//! leaves the last valid snapshot (and its model) active. Both projectors
//! are fed the fresh model; display and file emission stay outside.

pub mod dispatch;
pub mod messages;
pub mod snapshot;
pub mod state;

pub use dispatch::dispatch;
pub use messages::{FeatureToggle, NumericField, ShellToUi, UiToShell};
pub use snapshot::{load_snapshot, save_snapshot, LoadError, ProjectMetadata, SnapshotFile};
pub use state::{ShellError, ShellState};
