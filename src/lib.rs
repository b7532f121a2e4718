pub mod category;
pub mod error;
pub mod format;
pub mod scanner;
pub mod stats;
pub mod types;
