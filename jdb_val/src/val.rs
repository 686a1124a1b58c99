//! Value struct codec / 值结构编解码

use std::io::{self, Write};

use crate::{Error, Result};

/// Meta byte / 元数据字节
pub const META_SIZE: usize = 1;

/// Varint length of `v`, `size_varint(0) == 1`
/// `v` 的变长编码长度，`size_varint(0) == 1`
#[inline(always)]
pub const fn size_varint(v: u64) -> usize {
  uvarint::size(v)
}

/// Encoded size without building the value
/// 不构造值即可计算编码大小
///
/// Sizes above `u32::MAX` are cut to the low 32 bits, use
/// [`try_encoded_size`] when the payload may reach 4GB.
/// 超过 `u32::MAX` 的大小会截断为低 32 位，负载可能达到 4GB 时请用 [`try_encoded_size`]。
#[inline(always)]
pub const fn encoded_size(expires_at: u64, value_len: usize) -> u32 {
  (META_SIZE + size_varint(expires_at) + value_len) as u32
}

/// Encoded size, None when it does not fit in u32
/// 编码大小，超出 u32 时返回 None
#[inline]
pub const fn try_encoded_size(expires_at: u64, value_len: usize) -> Option<u32> {
  match value_len.checked_add(META_SIZE + size_varint(expires_at)) {
    Some(n) if n <= u32::MAX as usize => Some(n as u32),
    _ => None,
  }
}

/// Stored value, borrows its payload
/// 存储值，借用负载
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValStruct<'a> {
  pub meta: u8,
  /// Unix seconds, 0 = never / Unix 秒，0 表示永不过期
  pub expires_at: u64,
  pub value: &'a [u8],
  pub version: u64,
}

impl<'a> ValStruct<'a> {
  #[inline]
  pub const fn new(meta: u8, expires_at: u64, value: &'a [u8]) -> Self {
    Self {
      meta,
      expires_at,
      value,
      version: 0,
    }
  }

  #[inline]
  pub const fn with_version(mut self, version: u64) -> Self {
    self.version = version;
    self
  }

  #[inline(always)]
  pub const fn encoded_size(&self) -> u32 {
    encoded_size(self.expires_at, self.value.len())
  }

  /// Expired at `now` (Unix seconds) / 在 `now` 时是否已过期
  #[inline]
  pub const fn is_expired(&self, now: u64) -> bool {
    self.expires_at != 0 && self.expires_at <= now
  }

  /// Encode into `buf`, returns bytes written
  /// 编码到 `buf`，返回写入字节数
  pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
    let size = try_encoded_size(self.expires_at, self.value.len())
      .ok_or(Error::TooLarge(self.value.len()))? as usize;
    if buf.len() < size {
      return Err(Error::BufTooSmall(size, buf.len()));
    }
    buf[0] = self.meta;
    let n = META_SIZE + uvarint::encode(self.expires_at, &mut buf[META_SIZE..]);
    buf[n..size].copy_from_slice(self.value);
    Ok(size)
  }

  /// Encode into a writer, returns bytes written
  /// 编码到写入器，返回写入字节数
  pub fn encode_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
    if try_encoded_size(self.expires_at, self.value.len()).is_none() {
      return Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        Error::TooLarge(self.value.len()),
      ));
    }
    let mut head = [0u8; META_SIZE + uvarint::MAX_LEN];
    head[0] = self.meta;
    let n = META_SIZE + uvarint::encode(self.expires_at, &mut head[META_SIZE..]);
    w.write_all(&head[..n])?;
    w.write_all(self.value)?;
    Ok(n + self.value.len())
  }

  pub fn to_vec(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.encoded_size() as usize);
    out.push(self.meta);
    uvarint::push(self.expires_at, &mut out);
    out.extend_from_slice(self.value);
    out
  }

  /// Decode, `value` borrows from `buf`, `version` is 0
  /// 解码，`value` 借用 `buf`，`version` 为 0
  pub fn decode(buf: &'a [u8]) -> Result<Self> {
    let (&meta, rest) = buf.split_first().ok_or(Error::Empty)?;
    let (expires_at, n) = uvarint::decode(rest).ok_or(Error::Varint)?;
    Ok(Self::new(meta, expires_at, &rest[n..]))
  }
}
