//! Arena-backed record / 基于 arena 的记录

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jdb_alloc::{Arena, Result};
use jdb_val::ValStruct;

/// Key/value record, bytes owned by the arena
/// 键值记录，字节由 arena 持有
pub struct Kv<'a, A: Arena> {
  arena: &'a A,
  key: &'a [u8],
  value: &'a [u8],
  meta: &'a [u8],
  pub version: u64,
  pub expires_at: u64,
}

impl<'a, A: Arena> Kv<'a, A> {
  /// Empty shell bound to `arena` / 绑定到 `arena` 的空记录
  #[inline]
  pub fn new(arena: &'a A) -> Self {
    Self {
      arena,
      key: &[],
      value: &[],
      meta: &[],
      version: 0,
      expires_at: 0,
    }
  }

  #[inline]
  pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
    let arena = self.arena;
    self.key = arena.copy(key)?;
    Ok(())
  }

  #[inline]
  pub fn set_value(&mut self, value: &[u8]) -> Result<()> {
    let arena = self.arena;
    self.value = arena.copy(value)?;
    Ok(())
  }

  #[inline]
  pub fn set_meta(&mut self, meta: &[u8]) -> Result<()> {
    let arena = self.arena;
    self.meta = arena.copy(meta)?;
    Ok(())
  }

  #[inline(always)]
  pub fn key(&self) -> &'a [u8] {
    self.key
  }

  #[inline(always)]
  pub fn value(&self) -> &'a [u8] {
    self.value
  }

  #[inline(always)]
  pub fn meta(&self) -> &'a [u8] {
    self.meta
  }

  /// Arena bytes held / 持有的 arena 字节数
  #[inline(always)]
  pub fn size(&self) -> usize {
    self.key.len() + self.value.len() + self.meta.len()
  }

  /// Stored value view, meta is the first meta byte (0 if none)
  /// 存储值视图，meta 取首个元数据字节（无则为 0）
  #[inline]
  pub fn val(&self) -> ValStruct<'a> {
    ValStruct::new(
      self.meta.first().copied().unwrap_or(0),
      self.expires_at,
      self.value,
    )
    .with_version(self.version)
  }

  #[inline(always)]
  pub(crate) fn arena(&self) -> &'a A {
    self.arena
  }
}

impl<A: Arena> Clone for Kv<'_, A> {
  #[inline(always)]
  fn clone(&self) -> Self {
    *self
  }
}

impl<A: Arena> Copy for Kv<'_, A> {}

impl<A: Arena> Debug for Kv<'_, A> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Kv")
      .field("key", &self.key)
      .field("value_len", &self.value.len())
      .field("meta", &self.meta)
      .field("version", &self.version)
      .field("expires_at", &self.expires_at)
      .finish()
  }
}
