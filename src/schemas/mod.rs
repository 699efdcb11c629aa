// Data structures shared across the installer.

// Catalog entry types: tool metadata, recommended versions, fallback routes.
pub mod catalog;
// Per-invocation context: target OS, detected package manager, dry-run flag.
pub mod context;
