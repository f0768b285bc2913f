mod file;

pub use file::FileVectorIndex;
