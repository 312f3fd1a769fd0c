//! Infrastructure layer - storage client bootstrap.

mod dynamo;

pub use dynamo::Database;
