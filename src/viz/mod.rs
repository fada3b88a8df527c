pub mod models;

pub use models::{TraceDocument, TraceStep};
