pub mod blocking;
pub mod conversion;
pub mod observability;
pub mod pdf;
pub mod storage;
