///
/// litesql Runtime Static Library
///
/// Provides the C-callable string handle surface used by litesql tools that
/// are not written in Rust. This crate produces a static library
/// (liblitesql_runtime.a) that links into those tools directly.
///
/// Contains:
/// - lsqlString handle operations (lsql_string_new, lsql_string_copy,
///   lsql_string_cat, lsql_string_size, lsql_string_delete)
/// - The safe ByteString API via the litesql-string crate dependency
///

mod string;

pub use litesql_string::*;
pub use string::*;
