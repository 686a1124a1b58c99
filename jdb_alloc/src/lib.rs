#![cfg_attr(docsrs, feature(doc_cfg))]

//! Arena allocation for batch building
//! 用于批量构建的 Arena 分配
//!
//! [`Arena`] is the capability batch code depends on, [`Bump`] is a
//! chunked implementation of it.
//! [`Arena`] 是批处理代码依赖的能力，[`Bump`] 是其分块实现。

mod arena;
mod bump;
mod conf;
mod error;

pub use arena::Arena;
pub use bump::Bump;
pub use conf::{CHUNK_SIZE, Conf, ParsedConf};
pub use error::{Error, Result};
