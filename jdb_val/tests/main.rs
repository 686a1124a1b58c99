use aok::{OK, Void};
use jdb_page::PageBuf;
use jdb_val::{Error, META_SIZE, ValStruct, encoded_size, size_varint, try_encoded_size};
use proptest::prelude::*;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn rand_bytes(n: usize) -> Vec<u8> {
  std::iter::repeat_with(|| fastrand::u8(..)).take(n).collect()
}

#[test]
fn test_size_varint_zero() -> Void {
  assert_eq!(size_varint(0), 1);
  OK
}

#[test]
fn test_encoded_size() -> Void {
  let len = fastrand::usize(0..100_000);
  let expires_at = fastrand::u64(..);
  let value = rand_bytes(len);

  let mut tmp = vec![];
  let varint_len = uvarint::push(expires_at, &mut tmp);

  let v = ValStruct::new(0, expires_at, &value);
  assert_eq!(v.encoded_size(), (len + 1 + varint_len) as u32);
  assert_eq!(encoded_size(expires_at, len), v.encoded_size());
  OK
}

#[test]
fn test_try_encoded_size() -> Void {
  let max = u32::MAX as usize;
  assert_eq!(try_encoded_size(0, 5), Some(7));
  assert_eq!(try_encoded_size(0, max - 2), Some(u32::MAX));
  assert_eq!(try_encoded_size(0, max - 1), None);
  assert_eq!(try_encoded_size(300, max - 3), Some(u32::MAX));
  assert_eq!(try_encoded_size(300, max - 2), None);
  assert_eq!(try_encoded_size(0, usize::MAX), None);
  OK
}

#[test]
fn test_layout() -> Void {
  let v = ValStruct::new(0x42, 300, b"abc");
  // meta, 300 = ac 02, payload
  assert_eq!(v.to_vec(), [0x42, 0xac, 0x02, b'a', b'b', b'c']);

  // no expiry: one zero byte / 无过期：一个零字节
  let v = ValStruct::new(1, 0, b"");
  assert_eq!(v.to_vec(), [1, 0]);
  assert_eq!(v.encoded_size() as usize, META_SIZE + 1);
  OK
}

#[test]
fn test_encode_decode() -> Void {
  let value = rand_bytes(777);
  let v = ValStruct::new(7, 1_700_000_000, &value).with_version(99);

  let mut buf = vec![0u8; v.encoded_size() as usize + 5];
  let n = v.encode(&mut buf)?;
  assert_eq!(n, v.encoded_size() as usize);

  let d = ValStruct::decode(&buf[..n])?;
  assert_eq!(d.meta, 7);
  assert_eq!(d.expires_at, 1_700_000_000);
  assert_eq!(d.value, &value[..]);
  // version is not encoded / version 不参与编码
  assert_eq!(d.version, 0);
  assert_eq!(d, ValStruct::new(7, 1_700_000_000, &value));
  OK
}

#[test]
fn test_encode_small_buf() -> Void {
  let v = ValStruct::new(0, u64::MAX, b"xyz");
  let mut buf = [0u8; 8];
  assert_eq!(v.encode(&mut buf), Err(Error::BufTooSmall(14, 8)));
  OK
}

#[test]
fn test_decode_bad() -> Void {
  assert_eq!(ValStruct::decode(&[]), Err(Error::Empty));
  assert_eq!(ValStruct::decode(&[0]), Err(Error::Varint));
  assert_eq!(ValStruct::decode(&[0, 0x80]), Err(Error::Varint));
  OK
}

#[test]
fn test_encode_to_page_buf() -> Void {
  let mut page = PageBuf::new(16);
  let a = rand_bytes(40);
  let b = rand_bytes(3);
  let va = ValStruct::new(1, 10, &a);
  let vb = ValStruct::new(2, 0, &b);

  let na = va.encode_to(&mut page)?;
  let nb = vb.encode_to(&mut page)?;
  assert_eq!(na, va.encoded_size() as usize);
  assert_eq!(nb, vb.encoded_size() as usize);

  let all = page.bytes();
  assert_eq!(ValStruct::decode(&all[..na])?, va);
  assert_eq!(ValStruct::decode(&all[na..])?, vb);
  OK
}

#[test]
fn test_expired() -> Void {
  let v = ValStruct::new(0, 0, b"");
  assert!(!v.is_expired(u64::MAX));

  let v = ValStruct::new(0, 100, b"");
  assert!(!v.is_expired(99));
  assert!(v.is_expired(100));
  OK
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(200))]

  #[test]
  fn test_prop_roundtrip(
    meta in any::<u8>(),
    expires_at in any::<u64>(),
    value in prop::collection::vec(any::<u8>(), 0..2048),
  ) {
    let v = ValStruct::new(meta, expires_at, &value);
    let enc = v.to_vec();
    prop_assert_eq!(enc.len(), 1 + size_varint(expires_at) + value.len());
    prop_assert_eq!(enc.len() as u32, v.encoded_size());
    prop_assert_eq!(ValStruct::decode(&enc).unwrap(), v);
  }
}
