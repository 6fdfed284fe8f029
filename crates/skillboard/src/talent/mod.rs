pub mod assignments;
pub mod dashboard;
pub mod detail;
pub mod directory;
pub mod domain;
pub mod matching;
pub mod session;
pub mod upskilling;

pub use directory::TalentDirectory;
pub use session::WorkspaceSession;
