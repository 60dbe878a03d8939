pub mod config;
mod generate;
pub mod paths;

pub use config::Config;
pub use generate::{ServeMode, generate, run};
pub use paths::SiteLayout;
