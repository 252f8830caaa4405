//! # attest-core
//!
//! Core types and pure logic for the Attest audit record lifecycle.
//!
//! This crate provides the foundational pieces shared across all Attest crates:
//! - Closed enums for standards, compliance answers, risk levels and schema versions
//! - The static ISO 27001 / ISO 27002 control catalogue
//! - Record structs for drafts, finished records, loaded records and audit logs
//! - The explicit session context (organization + auditor) and clock seam
//! - The record reconciler that merges a catalogue with a prior log
//! - The report engine that derives compliance metrics and the gap list
//! - CLI response types
//!
//! Nothing in this crate touches the filesystem; persistence lives in
//! `attest-store`.

pub mod catalogue;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod reconcile;
pub mod report;
pub mod responses;
pub mod session;
