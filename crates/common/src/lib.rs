//! Cross-cutting helpers shared by the binaries and crates of the workspace.

pub mod utils;
