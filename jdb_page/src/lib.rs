#![cfg_attr(docsrs, feature(doc_cfg))]

//! Page-chunked append buffer
//! 分页追加缓冲区
//!
//! Bytes are appended into fixed-capacity pages, so growth never copies what
//! was already written. Truncation only moves the logical length: pages past
//! it stay allocated and are overwritten by the next writes.
//!
//! 字节追加到固定容量的页中，增长时不拷贝已写数据。
//! 截断只移动逻辑长度：其后的页保持分配，由后续写入覆盖。
//!
//! | Op         | Cost                          |
//! |------------|-------------------------------|
//! | `write`    | O(n), new page only when full |
//! | `truncate` | O(1), no dealloc              |
//! | `bytes`    | O(len), one copy              |

mod buf;
mod conf;
mod consts;
mod error;
mod reader;

pub use buf::PageBuf;
pub use conf::{Conf, ParsedConf};
pub use consts::PAGE_CAP;
pub use error::{Error, Result};
pub use reader::Reader;
