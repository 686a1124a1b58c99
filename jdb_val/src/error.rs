//! Error types for jdb_val
//! jdb_val 错误类型

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("empty value / 空值")]
  Empty,

  #[error("bad expiry varint / 过期时间变长整数非法")]
  Varint,

  #[error("buffer too small: need {0}, got {1} / 缓冲区太小")]
  BufTooSmall(usize, usize),

  #[error("value too large: {0} bytes / 值过大")]
  TooLarge(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
