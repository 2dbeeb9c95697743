// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the system.
//
// Rules for this layer:
//   - NO PDF library types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Text extracted from a PDF
pub mod document;

// Typed failures for extraction and summarisation
pub mod error;

// Scored sentences, summaries, and the final report
pub mod summary;

// Core abstractions (traits) that other layers implement
pub mod traits;
