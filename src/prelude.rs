pub use crate::cli::{Cli, OutputFormat, Renderer, Session, run_app};
pub use crate::domain::{
    Contact, ContactHandle, GroupedContactStore, Section, SectionSnapshot, SharedContactStore,
    Snapshot,
};
pub use crate::errors::AppError;
pub use crate::logger::init_logger;
