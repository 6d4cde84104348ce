mod utils;

pub use utils::walk_source_files;

/// Conventional extension of the scanned language's source files.
pub const JAVA_EXTENSION: &str = "java";
