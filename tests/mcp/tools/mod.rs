mod completions;
mod config;
