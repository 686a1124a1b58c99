#![cfg_attr(docsrs, feature(doc_cfg))]

//! # jdb_val - Stored value layout
//! 存储值布局
//!
//! ```text
//! [meta: 1][expires_at: uvarint][value: rest]
//! ```
//!
//! `value` has no length prefix, its end is given by the enclosing frame.
//! `version` orders values upstream and is not encoded.
//!
//! `value` 没有长度前缀，其结尾由外层帧决定。
//! `version` 用于上层排序，不参与编码。

mod error;
mod val;

pub use error::{Error, Result};
pub use val::{META_SIZE, ValStruct, encoded_size, size_varint, try_encoded_size};
