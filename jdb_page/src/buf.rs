//! Page buffer / 分页缓冲区

use std::{
  fmt::{Debug, Formatter, Result as FmtResult},
  io,
};

use log::{trace, warn};

use crate::{Conf, Error, ParsedConf, Reader, Result};

/// Append-only buffer made of fixed-capacity pages
/// 由固定容量页组成的追加缓冲区
///
/// Every page before the one holding the logical end is full, so position
/// `pos` lives at page `pos / page_cap`, offset `pos % page_cap`.
/// Pages past the logical end keep stale bytes that no read can reach.
///
/// 逻辑末尾所在页之前的页都已写满，位置 `pos` 位于第 `pos / page_cap` 页、
/// 页内偏移 `pos % page_cap`。逻辑末尾之后的页保留旧字节，任何读取都无法访问。
pub struct PageBuf {
  pages: Vec<Box<[u8]>>,
  len: usize,
  page_cap: usize,
}

impl PageBuf {
  /// Empty buffer, no page allocated yet
  /// 空缓冲区，尚未分配页
  ///
  /// # Panics
  /// `page_cap == 0`
  pub fn new(page_cap: usize) -> Self {
    assert!(page_cap > 0, "page capacity must be positive");
    Self {
      pages: Vec::new(),
      len: 0,
      page_cap,
    }
  }

  /// Build from options / 从选项构建
  pub fn with_conf(conf: &[Conf]) -> Result<Self> {
    let c = ParsedConf::parse(conf);
    let mut buf = Self::new(c.page_cap);
    if buf.pages.try_reserve_exact(c.pages).is_err() {
      let need = c.pages.saturating_mul(size_of::<Box<[u8]>>());
      warn!("page index reserve failed: {need} bytes");
      return Err(Error::AllocFailed(need));
    }
    Ok(buf)
  }

  /// Append all of `data`, returns `data.len()`
  /// 追加全部 `data`，返回 `data.len()`
  ///
  /// Pages are secured before any byte is copied, so a failed write leaves
  /// the logical content untouched.
  /// 拷贝前先备齐所有页，写入失败时逻辑内容不变。
  pub fn write(&mut self, mut data: &[u8]) -> Result<usize> {
    let total = data.len();
    let need = (self.len + total).div_ceil(self.page_cap);
    while self.pages.len() < need {
      self.grow()?;
    }

    let (mut idx, mut off) = self.locate(self.len);
    while !data.is_empty() {
      let n = (self.page_cap - off).min(data.len());
      self.pages[idx][off..off + n].copy_from_slice(&data[..n]);
      data = &data[n..];
      idx += 1;
      off = 0;
    }
    self.len += total;
    Ok(total)
  }

  #[inline]
  pub fn write_byte(&mut self, b: u8) -> Result<()> {
    self.write(&[b]).map(|_| ())
  }

  /// Copy of the logical content / 逻辑内容的拷贝
  pub fn bytes(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.len);
    for chunk in self.chunks() {
      out.extend_from_slice(chunk);
    }
    out
  }

  /// Used region of each page, in order (zero-copy)
  /// 按顺序返回每页已用区域（零拷贝）
  pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
    let (full, tail) = self.locate(self.len);
    self.pages[..full]
      .iter()
      .map(|p| &p[..])
      .chain((tail > 0).then(|| &self.pages[full][..tail]))
  }

  /// Set logical length to `len`, pages are kept for reuse
  /// 将逻辑长度设为 `len`，页保留以便复用
  ///
  /// # Panics
  /// `len > self.len()`
  #[inline]
  pub fn truncate(&mut self, len: usize) {
    assert!(
      len <= self.len,
      "truncate to {len} beyond length {}",
      self.len
    );
    self.len = len;
  }

  #[inline]
  pub fn reset(&mut self) {
    self.len = 0;
  }

  /// Cursor starting at `pos` / 从 `pos` 开始的游标
  ///
  /// # Panics
  /// `pos > self.len()`
  #[inline]
  pub fn reader_at(&self, pos: usize) -> Reader<'_> {
    Reader::new(self, pos)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline(always)]
  pub fn page_cap(&self) -> usize {
    self.page_cap
  }

  /// Allocated pages, including stale ones past the logical end
  /// 已分配页数，包含逻辑末尾之后的旧页
  #[inline(always)]
  pub fn page_count(&self) -> usize {
    self.pages.len()
  }

  /// (page index, in-page offset) / （页号，页内偏移）
  #[inline(always)]
  pub(crate) fn locate(&self, pos: usize) -> (usize, usize) {
    (pos / self.page_cap, pos % self.page_cap)
  }

  /// Copy from `pos` into `dst` across pages, returns bytes copied
  /// 从 `pos` 跨页拷贝到 `dst`，返回拷贝字节数
  pub(crate) fn read_at(&self, pos: usize, dst: &mut [u8]) -> usize {
    let n = dst.len().min(self.len.saturating_sub(pos));
    let (mut idx, mut off) = self.locate(pos);
    let mut done = 0;
    while done < n {
      let take = (self.page_cap - off).min(n - done);
      dst[done..done + take].copy_from_slice(&self.pages[idx][off..off + take]);
      done += take;
      idx += 1;
      off = 0;
    }
    n
  }

  fn grow(&mut self) -> Result<()> {
    let cap = self.page_cap;
    if self.pages.try_reserve(1).is_err() {
      let need = (self.pages.len() + 1).saturating_mul(size_of::<Box<[u8]>>());
      warn!("page index alloc failed: {need} bytes");
      return Err(Error::AllocFailed(need));
    }
    let mut page = Vec::new();
    if page.try_reserve_exact(cap).is_err() {
      warn!("page alloc failed: {cap} bytes");
      return Err(Error::AllocFailed(cap));
    }
    page.resize(cap, 0u8);
    trace!("page {} alloc, cap={cap}", self.pages.len());
    self.pages.push(page.into_boxed_slice());
    Ok(())
  }
}

impl io::Write for PageBuf {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    PageBuf::write(self, buf).map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl Debug for PageBuf {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("PageBuf")
      .field("len", &self.len)
      .field("page_cap", &self.page_cap)
      .field("pages", &self.pages.len())
      .finish()
  }
}
