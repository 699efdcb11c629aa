// Core building blocks of the installer.

// The static tool catalog and the ordered install plan built from it.
pub mod catalog;
// Structured command specification and the runner every side effect
// funnels through (with dry-run support).
pub mod command_runner;
// The typed error enum shared by runner, installers and driver.
pub mod error;
// Package-manager detection and command templates.
pub mod package_manager;
// Host probes: executable presence, elevation check.
pub mod platform;
// Interactive prompt seam (dialoguer-backed console implementation).
pub mod prompts;
// The append-only timestamped audit log.
pub mod run_log;
// Per-tool installation orchestration (package-manager attempt + fallback).
pub mod tool_installer;
