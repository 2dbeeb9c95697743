// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to handle one
// upload from start to finish.
//
// Rules for this layer:
//   - No parsing or scoring code here
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Configuration shared by every use case
pub mod config;

// Extract + summarise one upload
pub mod summarize_use_case;

// Extract only
pub mod extract_use_case;
