mod deadline;
mod generator;

pub use deadline::Deadline;
pub use generator::TokenFeed;
