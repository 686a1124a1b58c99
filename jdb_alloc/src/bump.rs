//! Chunked bump arena / 分块 bump 分配器

use std::{
  alloc::{Layout, alloc_zeroed, dealloc},
  cell::{Cell, UnsafeCell},
  fmt::{Display, Formatter, Result as FmtResult},
  ptr::NonNull,
  slice::from_raw_parts_mut,
};

use log::{debug, warn};

use crate::{Arena, Conf, Error, ParsedConf, Result};

/// Zeroed raw chunk, owns its memory
/// 零初始化的原始块，持有内存
struct Chunk {
  ptr: NonNull<u8>,
  cap: usize,
}

// SAFETY: Chunk owns its allocation exclusively
// Chunk 独占其分配的内存
unsafe impl Send for Chunk {}

impl Chunk {
  fn new(cap: usize) -> Result<Self> {
    let lo = Layout::from_size_align(cap, 1)?;
    let ptr = unsafe { alloc_zeroed(lo) };
    let ptr = NonNull::new(ptr).ok_or(Error::AllocFailed(cap))?;
    Ok(Self { ptr, cap })
  }
}

impl Drop for Chunk {
  fn drop(&mut self) {
    unsafe { dealloc(self.ptr.as_ptr(), Layout::from_size_align_unchecked(self.cap, 1)) }
  }
}

/// Bump arena over a list of chunks, memory survives `reset`
/// 基于块列表的 bump 分配器，内存在 `reset` 后保留
///
/// Not `Sync`: one builder thread per arena.
/// 非 `Sync`：每个 arena 仅供一个构建线程使用。
pub struct Bump {
  chunks: UnsafeCell<Vec<Chunk>>,
  cur: Cell<usize>,
  off: Cell<usize>,
  used: Cell<usize>,
  chunk_size: usize,
  limit: usize,
  tag: &'static str,
}

impl Bump {
  /// No memory is taken until the first alloc
  /// 首次分配前不占用内存
  pub fn new(chunk_size: usize, tag: &'static str) -> Self {
    Self::with_conf(&[Conf::ChunkSize(chunk_size), Conf::Tag(tag)])
  }

  pub fn with_conf(conf: &[Conf]) -> Self {
    let c = ParsedConf::parse(conf);
    Self {
      chunks: UnsafeCell::new(Vec::new()),
      cur: Cell::new(0),
      off: Cell::new(0),
      used: Cell::new(0),
      chunk_size: c.chunk_size,
      limit: c.limit,
      tag: c.tag,
    }
  }

  /// Bytes handed out since last reset / 上次 reset 以来分配的字节数
  #[inline(always)]
  pub fn used(&self) -> usize {
    self.used.get()
  }

  /// Bytes held in chunks / 块中持有的字节数
  pub fn allocated(&self) -> usize {
    self.chunks().iter().map(|c| c.cap).sum()
  }

  #[inline(always)]
  pub fn tag(&self) -> &'static str {
    self.tag
  }

  #[inline(always)]
  fn chunks(&self) -> &Vec<Chunk> {
    unsafe { &*self.chunks.get() }
  }

  /// Find a chunk with `n` free bytes from the cursor on, growing if none
  /// 从游标处寻找有 `n` 字节空闲的块，没有则扩容
  fn fit(&self, n: usize) -> Result<(usize, usize)> {
    // SAFETY: not Sync, no other reference to the Vec is live here;
    // handed-out slices point into chunk memory, not into the Vec
    // 非 Sync，此处没有其他对 Vec 的引用；已分配切片指向块内存而非 Vec
    let chunks = unsafe { &mut *self.chunks.get() };
    let mut cur = self.cur.get();
    let mut off = self.off.get();
    loop {
      match chunks.get(cur) {
        Some(c) if c.cap - off >= n => return Ok((cur, off)),
        Some(_) => {
          cur += 1;
          off = 0;
        }
        None => {
          let cap = self.chunk_size.max(n);
          if chunks.try_reserve(1).is_err() {
            warn!("{}: chunk list alloc failed", self.tag);
            return Err(Error::AllocFailed(size_of::<Chunk>()));
          }
          let chunk = Chunk::new(cap).inspect_err(|e| warn!("{}: {e}", self.tag))?;
          chunks.push(chunk);
          debug!("{}: chunk {} cap={cap}", self.tag, chunks.len() - 1);
        }
      }
    }
  }
}

impl Arena for Bump {
  fn alloc(&self, n: usize) -> Result<&mut [u8]> {
    if n == 0 {
      return Ok(&mut []);
    }
    let used = match self.used.get().checked_add(n) {
      Some(used) if used <= self.limit => used,
      need => {
        let need = need.unwrap_or(usize::MAX);
        warn!("{}: exhausted {need}/{}", self.tag, self.limit);
        return Err(Error::Exhausted(need, self.limit));
      }
    };
    let (cur, off) = self.fit(n)?;
    let ptr = self.chunks()[cur].ptr;
    self.cur.set(cur);
    self.off.set(off + n);
    self.used.set(used);
    // SAFETY: [off, off + n) is inside chunk `cur` and was never handed out
    // in this generation
    // [off, off + n) 位于块 `cur` 内，且本代中未被分配过
    Ok(unsafe { from_raw_parts_mut(ptr.as_ptr().add(off), n) })
  }

  /// Several chunks are merged into one of their total size, so the next
  /// generation of the same volume fits without growing.
  /// 多个块合并为一个总大小相同的块，同等用量的下一代无需再扩容。
  fn reset(&mut self) {
    debug!("{self} reset");
    let tag = self.tag;
    let chunks = self.chunks.get_mut();
    if chunks.len() > 1 {
      let total: usize = chunks.iter().map(|c| c.cap).sum();
      chunks.clear();
      match Chunk::new(total) {
        Ok(c) => chunks.push(c),
        Err(e) => warn!("{tag}: merge {total} failed: {e}"),
      }
    }
    self.cur.set(0);
    self.off.set(0);
    self.used.set(0);
  }

  fn release(self) {
    debug!("{self} release");
  }
}

impl Display for Bump {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(
      f,
      "{}: used {}, allocated {}, chunks {}",
      self.tag,
      self.used(),
      self.allocated(),
      self.chunks().len()
    )
  }
}
