/// Static catalog of clause-starting keyword phrases.
pub mod catalog;
/// Clause kind labels and the segment output type.
pub mod clause;
/// Top-level segmentation entry points.
pub mod engine;
/// Keyword-boundary clause splitting over window-free spans.
pub mod splitter;
/// Window-function span isolation with balanced-parenthesis scanning.
pub mod window;
