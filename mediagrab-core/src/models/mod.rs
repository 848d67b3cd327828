pub mod jobs;
pub mod quality;
pub mod settings;
pub mod theme;
