pub mod core;
pub mod error;
pub mod fs_paths;
pub mod models;
pub mod platforms;

pub use crate::core::dispatcher::{ActionDispatcher, DispatchOutcome};
pub use crate::core::frontend::Frontend;
pub use crate::core::preferences::PreferenceStore;
pub use crate::core::resolver::{QualityResolver, Resolution};
pub use crate::platforms::{classify, classify_with, Detection, MatchMode, Platform, PlatformKind};
