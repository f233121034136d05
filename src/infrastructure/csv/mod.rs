// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Headerless CSV reading and writing for corpus files

mod csv_store;

pub use csv_store::CsvStore;
