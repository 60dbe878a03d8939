pub mod archive;
pub mod commands;
pub mod docfx;
pub mod download;
pub mod github;
pub mod http;
pub mod process;
pub mod progress;
pub mod runtime;
