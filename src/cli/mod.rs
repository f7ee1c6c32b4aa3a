pub mod command;
pub mod render;
pub mod run;

pub use command::{Cli, MenuCommand, OutputFormat, RowAction};
pub use render::{JsonRenderer, Renderer, TableRenderer};
pub use run::{Session, run_app};
