#![cfg_attr(docsrs, feature(doc_cfg))]

//! Write batch records carved from an arena
//! 从 arena 切分的写批次记录
//!
//! Keys, values and meta of every record in a batch are copied into one
//! [`Arena`], so a batch costs a few chunk allocations instead of two per
//! record. Resetting the arena needs `&mut`, so records cannot outlive it.
//!
//! 批次中每条记录的键、值和元数据都拷贝进同一个 [`Arena`]，
//! 一个批次只需少量块分配，而非每条记录两次。
//! 重置 arena 需要 `&mut`，因此记录不会比它活得更久。

mod batch;
mod kv;

pub use batch::Batch;
pub use jdb_alloc::{Arena, Error, Result};
pub use kv::Kv;
