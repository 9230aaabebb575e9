//! Transpiler test modules.
//!
//! - `mysql`: SQL fragment generation
//! - `mongo`: MongoDB filter documents
