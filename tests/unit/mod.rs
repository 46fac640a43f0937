//! Unit tests that need the process environment or the config/ directory
