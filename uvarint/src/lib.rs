#![cfg_attr(docsrs, feature(doc_cfg))]

//! Unsigned varint (7 data bits per byte, high bit = continuation, little-endian groups)
//! 无符号变长整数（每字节 7 位数据，最高位为延续位，小端分组）

/// Max encoded length of a u64 / u64 最大编码长度
pub const MAX_LEN: usize = 10;

const CONT: u8 = 0x80;
const MASK: u8 = 0x7f;

/// Bytes needed to encode `v`, `size(0) == 1`
/// 编码 `v` 所需字节数，`size(0) == 1`
#[inline]
pub const fn size(v: u64) -> usize {
  // bits used, at least 1 so that 0 takes one byte
  // 有效位数，至少为 1，使 0 占一个字节
  let bits = 64 - (v | 1).leading_zeros() as usize;
  bits.div_ceil(7)
}

/// Encode into `buf`, returns bytes written
/// 编码到 `buf`，返回写入字节数
///
/// # Panics
/// `buf.len() < size(v)`
#[inline]
pub fn encode(mut v: u64, buf: &mut [u8]) -> usize {
  let mut i = 0;
  while v >= CONT as u64 {
    buf[i] = (v as u8) | CONT;
    v >>= 7;
    i += 1;
  }
  buf[i] = v as u8;
  i + 1
}

/// Append encoded `v` to `out`, returns bytes written
/// 追加编码后的 `v` 到 `out`，返回写入字节数
#[inline]
pub fn push(v: u64, out: &mut Vec<u8>) -> usize {
  let mut tmp = [0u8; MAX_LEN];
  let n = encode(v, &mut tmp);
  out.extend_from_slice(&tmp[..n]);
  n
}

/// Decode from the front of `buf`, returns (value, bytes read)
/// 从 `buf` 头部解码，返回 (值, 读取字节数)
///
/// None when truncated or overflowing 64 bits
/// 截断或超出 64 位时返回 None
#[inline]
pub fn decode(buf: &[u8]) -> Option<(u64, usize)> {
  let mut v = 0u64;
  let mut shift = 0u32;
  for (i, &b) in buf.iter().enumerate() {
    if i == MAX_LEN {
      return None;
    }
    if b < CONT {
      // 10th byte may only carry the last bit
      // 第 10 字节只能携带最后 1 位
      if i == MAX_LEN - 1 && b > 1 {
        return None;
      }
      return Some((v | (b as u64) << shift, i + 1));
    }
    v |= ((b & MASK) as u64) << shift;
    shift += 7;
  }
  None
}
