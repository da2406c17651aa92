//! Small browser utilities that do not belong to any one page.

pub mod storage;
