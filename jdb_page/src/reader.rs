//! Sequential cursor over a page buffer / 分页缓冲区上的顺序游标

use std::io;

use crate::{Error, PageBuf, Result};

/// Read cursor, independent of other cursors on the same buffer
/// 读取游标，与同一缓冲区上的其他游标互不影响
///
/// Borrows the buffer, so no write or truncate can happen while it lives.
/// 借用缓冲区，存活期间无法写入或截断。
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
  buf: &'a PageBuf,
  page: usize,
  off: usize,
}

impl<'a> Reader<'a> {
  pub(crate) fn new(buf: &'a PageBuf, pos: usize) -> Self {
    assert!(
      pos <= buf.len(),
      "reader offset {pos} beyond length {}",
      buf.len()
    );
    let (page, off) = buf.locate(pos);
    Self { buf, page, off }
  }

  /// Read up to `dst.len()` bytes
  /// 读取最多 `dst.len()` 字节
  ///
  /// - empty `dst`: `Ok(0)`
  /// - at end: `Err(Error::Eof)`, on every later call too
  /// - fewer bytes left than `dst.len()`: short read, `Ok(k)`
  ///
  /// - `dst` 为空：`Ok(0)`
  /// - 已到末尾：`Err(Error::Eof)`，之后每次调用都如此
  /// - 剩余不足 `dst.len()`：短读，`Ok(k)`
  pub fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
    if dst.is_empty() {
      return Ok(0);
    }
    let pos = self.pos();
    if pos >= self.buf.len() {
      return Err(Error::Eof);
    }
    let n = self.buf.read_at(pos, dst);
    (self.page, self.off) = self.buf.locate(pos + n);
    Ok(n)
  }

  #[inline(always)]
  pub fn pos(&self) -> usize {
    self.page * self.buf.page_cap() + self.off
  }

  #[inline(always)]
  pub fn remaining(&self) -> usize {
    self.buf.len() - self.pos()
  }
}

impl io::Read for Reader<'_> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    match Reader::read(self, buf) {
      Ok(n) => Ok(n),
      Err(Error::Eof) => Ok(0),
      Err(e) => Err(io::Error::other(e)),
    }
  }
}
