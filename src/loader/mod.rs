// ============================================================================
// Loader Module
// Builds tables from delimited text sources
// ============================================================================

mod csv_loader;

pub use csv_loader::TableLoader;
