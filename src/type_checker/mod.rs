//! Static type checker.
//!
//! Runs after parsing and before anything downstream would consume the
//! tree. Builds the type map from the declaration section, rejects
//! duplicate declarations, then walks the body checking every statement
//! and expression against the declared types. The checker reports the
//! first violation it finds and performs no recovery.

pub mod type_checker;
