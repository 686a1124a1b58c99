//! Page buffer configuration / 分页缓冲区配置

use crate::consts::PAGE_CAP;

/// Page buffer options / 分页缓冲区选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Bytes per page / 每页字节数
  PageCap(usize),
  /// Page index slots to reserve up front / 预留的页索引槽数
  Pages(usize),
}

/// Parsed config / 解析后的配置
#[derive(Debug, Clone, Copy)]
pub struct ParsedConf {
  pub page_cap: usize,
  pub pages: usize,
}

impl ParsedConf {
  pub fn parse(conf: &[Conf]) -> Self {
    let mut c = Self {
      page_cap: PAGE_CAP,
      pages: 0,
    };
    for item in conf {
      match *item {
        Conf::PageCap(v) => c.page_cap = v,
        Conf::Pages(v) => c.pages = v,
      }
    }
    c.page_cap = c.page_cap.max(1);
    c
  }
}
