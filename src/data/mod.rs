// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Turns a file on disk into document text.
//
//   .pdf file
//       │
//       ▼
//   PdfLoader   → parses the PDF, extracts text page by page,
//                 joins the pages into one Document
//
// Everything after this point works on plain strings.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads PDF files and extracts their text using lopdf
pub mod loader;
