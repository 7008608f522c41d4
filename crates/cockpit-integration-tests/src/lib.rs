//! End-to-end integration tests for Cockpit
//!
//! The tests under `tests/` drive the full API router (auth, data
//! sources, intelligence intake, trigger panel) through
//! `tower::ServiceExt::oneshot` and assert on the wire-level envelopes.
