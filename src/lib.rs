pub mod cli;
pub mod limits;
pub mod logger;
pub mod report;

pub use cli::Cli;
pub use limits::Limits;
pub use report::{render_text, summary, Report};
