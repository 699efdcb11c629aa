// Top-level command logic.

// The interactive install walk (the binary's single mode of operation).
pub mod install;
