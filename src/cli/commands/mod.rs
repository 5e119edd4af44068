pub mod completions;
mod helper;
pub mod hints;
pub mod init;
