// src/lib.rs
// ============================================================================
// Module: Platform System Tests Library
// Description: Shared configuration for platform API system tests.
// Purpose: Provide common utilities for the system-test binaries in `tests/`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the platform API
//! system-test binaries in `tests/`. The backend under test is external;
//! every test treats it as an untrusted black box reachable over HTTP.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
