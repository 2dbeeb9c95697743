// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the filesystem-facing concerns that don't belong in
// any specific business layer:
//
//   upload.rs       — Upload bytes → temporary file
//                     Reads the upload from a path or stdin and
//                     materialises it as a temp .pdf that is
//                     removed on every exit path.
//
//   resources.rs    — Linguistic resources
//                     Finds the English stopword list, built in
//                     or from an NLTK-style data directory.
//
//   config_store.rs — Config persistence
//                     Loads and saves AppConfig as JSON.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Upload sources and scoped temporary files
pub mod upload;

/// Stopword resource loading
pub mod resources;

/// AppConfig JSON load/save
pub mod config_store;
