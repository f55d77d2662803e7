//! Settings sources, in increasing precedence.

pub mod environment;
pub mod settings_file;
