//! Arena configuration / Arena 配置

/// Default chunk size 64KB / 默认块大小
pub const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Bytes per chunk / 每块字节数
  ChunkSize(usize),
  /// Max bytes handed out per generation / 每代最多分配字节数
  Limit(usize),
  /// Label in logs / 日志标签
  Tag(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ParsedConf {
  pub chunk_size: usize,
  pub limit: usize,
  pub tag: &'static str,
}

impl ParsedConf {
  pub fn parse(conf: &[Conf]) -> Self {
    let mut c = Self {
      chunk_size: CHUNK_SIZE,
      limit: usize::MAX,
      tag: "bump",
    };
    for item in conf {
      match *item {
        Conf::ChunkSize(v) => c.chunk_size = v,
        Conf::Limit(v) => c.limit = v,
        Conf::Tag(v) => c.tag = v,
      }
    }
    c.chunk_size = c.chunk_size.max(1);
    c
  }
}
