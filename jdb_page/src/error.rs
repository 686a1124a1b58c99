//! 错误定义 Error definitions

use thiserror::Error;

/// 结果类型 Result type
pub type Result<T> = std::result::Result<T, Error>;

/// 错误类型 Error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
  /// Page or page index allocation failed (requested bytes)
  /// 页或页索引分配失败（请求字节数）
  #[error("page alloc failed: {0} bytes")]
  AllocFailed(usize),

  /// Reader is at the logical end / 读取器已到逻辑末尾
  #[error("end of data")]
  Eof,
}
