pub mod credentials;
pub mod podcast;
pub mod storage;
pub mod summarizer;
pub mod system;

pub use credentials::DemoCredentialVerifier;
pub use podcast::SimulatedPodcastAdapter;
pub use storage::{FileStorage, MemoryStorage};
pub use summarizer::SimulatedSummaryAdapter;
pub use system::{SystemClock, UuidIdGenerator};
