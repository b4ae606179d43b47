//! Outbound adapters implementing domain ports.

pub mod snapshot_file;

pub use snapshot_file::FileSnapshotRepository;
