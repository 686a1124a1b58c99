use aok::{OK, Void};
use jdb_alloc::{Arena, Bump, CHUNK_SIZE, Conf, Error, ParsedConf};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_conf() -> Void {
  let c = ParsedConf::parse(&[]);
  assert_eq!(c.chunk_size, CHUNK_SIZE);
  assert_eq!(c.limit, usize::MAX);

  let c = ParsedConf::parse(&[Conf::ChunkSize(0), Conf::Limit(10), Conf::Tag("t")]);
  assert_eq!(c.chunk_size, 1);
  assert_eq!(c.limit, 10);
  assert_eq!(c.tag, "t");
  OK
}

#[test]
fn test_lazy() -> Void {
  let a = Bump::new(1024, "lazy");
  assert_eq!(a.allocated(), 0);
  assert_eq!(a.used(), 0);
  assert!(a.alloc(0)?.is_empty());
  assert_eq!(a.allocated(), 0);
  OK
}

#[test]
fn test_copy() -> Void {
  let a = Bump::new(64, "copy");
  let x = a.copy(b"hello")?;
  let y = a.copy(b"world")?;
  assert_eq!(x, b"hello");
  assert_eq!(y, b"world");
  assert_eq!(a.used(), 10);
  assert_eq!(a.allocated(), 64);
  OK
}

#[test]
fn test_alloc_zeroed_and_disjoint() -> Void {
  let a = Bump::new(32, "disjoint");
  let x = a.alloc(20)?;
  assert!(x.iter().all(|&b| b == 0));
  x.fill(1);
  // doesn't fit the 12 left: new chunk / 剩余 12 放不下：新块
  let y = a.alloc(20)?;
  y.fill(2);
  assert!(x.iter().all(|&b| b == 1));
  assert!(y.iter().all(|&b| b == 2));
  assert_eq!(a.allocated(), 64);
  OK
}

#[test]
fn test_big_alloc() -> Void {
  let a = Bump::new(16, "big");
  let data = vec![9u8; 100];
  assert_eq!(a.copy(&data)?, &data[..]);
  assert_eq!(a.allocated(), 100);
  OK
}

#[test]
fn test_reset_reuse() -> Void {
  let mut a = Bump::new(256, "reuse");
  for _ in 0..10 {
    a.copy(&[1; 200])?;
    a.copy(&[2; 200])?;
  }
  let held = a.allocated();

  for _ in 0..100 {
    a.reset();
    assert_eq!(a.used(), 0);
    for _ in 0..10 {
      let x = a.copy(&[3; 200])?;
      assert_eq!(x, &[3; 200][..]);
      a.copy(&[4; 200])?;
    }
    // steady state: merged into one chunk, no growth
    // 稳态：合并为一个块，不再增长
    assert_eq!(a.allocated(), held);
    assert!(a.to_string().contains("chunks 1"));
  }
  OK
}

#[test]
fn test_limit() -> Void {
  let mut a = Bump::with_conf(&[Conf::ChunkSize(64), Conf::Limit(100), Conf::Tag("limit")]);
  a.copy(&[0; 60])?;
  a.copy(&[0; 40])?;
  match a.alloc(1) {
    Err(Error::Exhausted(need, limit)) => {
      assert_eq!(need, 101);
      assert_eq!(limit, 100);
    }
    other => panic!("expected Exhausted, got {other:?}"),
  }
  // failed alloc takes nothing / 失败的分配不占用
  assert_eq!(a.used(), 100);

  a.reset();
  assert_eq!(a.allocated(), 128);
  assert!(a.alloc(100).is_ok());
  assert_eq!(a.allocated(), 128);
  OK
}

#[test]
fn test_huge_alloc_exhausted() -> Void {
  let a = Bump::new(64, "huge");
  a.copy(b"x")?;
  match a.alloc(usize::MAX) {
    Err(Error::Exhausted(need, limit)) => {
      assert_eq!(need, usize::MAX);
      assert_eq!(limit, usize::MAX);
    }
    other => panic!("expected Exhausted, got {other:?}"),
  }
  assert_eq!(a.used(), 1);
  assert_eq!(a.copy(b"y")?, b"y");
  OK
}

#[test]
fn test_display_release() -> Void {
  let a = Bump::new(128, "show");
  a.copy(b"abc")?;
  let s = a.to_string();
  assert!(s.contains("show"));
  assert!(s.contains("used 3"));
  assert!(s.contains("allocated 128"));
  a.release();
  OK
}

#[test]
fn test_random_sizes() -> Void {
  let mut a = Bump::new(1024, "rand");
  for _ in 0..20 {
    a.reset();
    let mut kept = vec![];
    for i in 0..200u32 {
      let n = fastrand::usize(0..3000);
      let fill = (i % 251) as u8;
      let s = a.alloc(n)?;
      s.fill(fill);
      kept.push((s, fill));
    }
    for (s, fill) in kept {
      assert!(s.iter().all(|&b| b == fill));
    }
  }
  OK
}
