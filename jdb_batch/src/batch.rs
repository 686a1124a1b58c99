//! Batch of records sharing one arena / 共享一个 arena 的记录批次

use std::{ptr, slice::Iter};

use jdb_alloc::{Arena, Result};

use crate::Kv;

pub struct Batch<'a, A: Arena> {
  arena: &'a A,
  kvs: Vec<Kv<'a, A>>,
  size: usize,
}

impl<'a, A: Arena> Batch<'a, A> {
  #[inline]
  pub fn new(arena: &'a A) -> Self {
    Self::with_capacity(arena, 0)
  }

  #[inline]
  pub fn with_capacity(arena: &'a A, cap: usize) -> Self {
    Self {
      arena,
      kvs: Vec::with_capacity(cap),
      size: 0,
    }
  }

  /// Fresh record on this batch's arena, not yet pushed
  /// 本批次 arena 上的新记录，尚未加入
  #[inline]
  pub fn kv(&self) -> Kv<'a, A> {
    Kv::new(self.arena)
  }

  /// Copy and append a record / 拷贝并追加一条记录
  pub fn add(&mut self, key: &[u8], value: &[u8], meta: &[u8], version: u64) -> Result<&Kv<'a, A>> {
    let mut kv = self.kv();
    kv.set_key(key)?;
    kv.set_value(value)?;
    kv.set_meta(meta)?;
    kv.version = version;
    self.push(kv);
    Ok(&self.kvs[self.kvs.len() - 1])
  }

  /// # Panics
  /// `kv` was built on another arena
  #[inline]
  pub fn push(&mut self, kv: Kv<'a, A>) {
    assert!(
      ptr::eq(kv.arena(), self.arena),
      "record built on another arena"
    );
    self.size += kv.size();
    self.kvs.push(kv);
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.kvs.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.kvs.is_empty()
  }

  /// Sum of key, value and meta bytes / 键、值和元数据字节总数
  #[inline(always)]
  pub fn size(&self) -> usize {
    self.size
  }

  #[inline]
  pub fn iter(&self) -> Iter<'_, Kv<'a, A>> {
    self.kvs.iter()
  }

  /// Drop records, arena memory is untouched until its reset
  /// 丢弃记录，arena 内存在其 reset 前不变
  #[inline]
  pub fn clear(&mut self) {
    self.kvs.clear();
    self.size = 0;
  }
}

impl<'b, 'a, A: Arena> IntoIterator for &'b Batch<'a, A> {
  type Item = &'b Kv<'a, A>;
  type IntoIter = Iter<'b, Kv<'a, A>>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.kvs.iter()
  }
}
