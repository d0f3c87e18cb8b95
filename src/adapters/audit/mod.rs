//! Audit Log Adapters
//!
//! Implementations of the AuditLog port.
//!
//! ## Available Adapters
//!
//! - **CsvAuditLog** - Appends rows to a CSV file on disk
//! - **InMemoryAuditLog** - Keeps records in memory (testing/development)

mod csv_audit_log;
mod in_memory;

pub use csv_audit_log::CsvAuditLog;
pub use in_memory::InMemoryAuditLog;
