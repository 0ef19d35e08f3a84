//! 控制台使用的数据形状和模拟数据集。
//!
//! 本 crate 不包含任何持久化或生命周期管理：实体只是序列化契约，
//! [`fixtures`] 中的函数每次返回相同结构的固定数据。

pub mod entities;
pub mod fixtures;
pub mod pagination;
pub mod records;

pub use entities::*;
pub use pagination::Page;
pub use records::*;
