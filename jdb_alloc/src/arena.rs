//! Arena capability / Arena 能力

use crate::Result;

/// Bulk memory pool handing out slices until reset
/// 批量内存池，分配的切片在 reset 前有效
///
/// Slices borrow the arena, `reset` takes `&mut self`, so no slice can
/// survive a reset.
/// 切片借用 arena，`reset` 需要 `&mut self`，因此切片无法跨越 reset 存活。
pub trait Arena {
  /// Carve `n` bytes / 切出 `n` 字节
  #[allow(clippy::mut_from_ref)]
  fn alloc(&self, n: usize) -> Result<&mut [u8]>;

  /// Copy `data` into the arena / 拷贝 `data` 到 arena
  #[inline]
  fn copy(&self, data: &[u8]) -> Result<&[u8]> {
    let dst = self.alloc(data.len())?;
    dst.copy_from_slice(data);
    Ok(dst)
  }

  /// Invalidate every slice, keep memory for reuse
  /// 使所有切片失效，保留内存以便复用
  fn reset(&mut self);

  /// Free the memory / 释放内存
  #[inline]
  fn release(self)
  where
    Self: Sized,
  {
    drop(self)
  }
}
