//! TypeScript statement builders.

mod exports;

pub use exports::Export;
