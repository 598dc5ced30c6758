pub mod cli;
pub mod config;
pub mod extractor;
pub mod page;
pub mod relay;
pub mod types;

pub use config::ClientConfig;
pub use extractor::PageExtractor;
pub use relay::RequestRelay;
pub use types::{Instruction, InstructionKind, JobPosting, RequestResult, RequestStatus};
