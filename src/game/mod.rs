pub mod progress;
pub mod session;

pub use progress::ProgressTracker;
pub use session::Session;
