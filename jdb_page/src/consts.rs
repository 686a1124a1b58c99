//! 常量定义 Constants

/// 默认页容量 Default page capacity
pub const PAGE_CAP: usize = 4096;
