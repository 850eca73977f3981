//! MySQL dump generation for the CSR data core.
//!
//! Turns a [`csrdb_store::Database`] value into a single self-contained
//! `.sql` script: `DROP TABLE` + `CREATE TABLE` for all fourteen tables in a
//! fixed order, followed by `INSERT` blocks for the non-empty collections,
//! wrapped in `SET FOREIGN_KEY_CHECKS = 0/1`. Generation is pure string
//! building over an immutable snapshot; it cannot fail.
//!
//! # Modules
//!
//! - [`escape`]: SQL literal rendering and string escaping
//! - [`ddl`]: the fixed `CREATE TABLE` statements and column lists
//! - [`dump`]: [`generate_sql`] / [`generate_sql_now`]

pub mod ddl;
pub mod dump;
pub mod escape;

pub use dump::{generate_sql, generate_sql_now};
