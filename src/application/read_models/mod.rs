//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for formatters.

pub mod match_report;
pub mod match_report_builder;

pub use match_report::{
    ComponentView, DiagnosticView, DifferenceView, MatchReport, MatchView, ReplacementView,
    ReportMetadata, ScoreView,
};
pub use match_report_builder::MatchReportBuilder;
