//! Segment SQL queries into annotated clause spans for interactive explanation UIs.
#![warn(missing_docs)]

/// Presentation payloads: display truncation, clause annotation, and explanation requests.
pub mod display;
/// Best-effort extraction of a single safe SELECT statement from free-form model output.
pub mod extract;
/// Clause segmentation engine: keyword catalog, window-function isolation, clause splitting.
pub mod segmenter;
