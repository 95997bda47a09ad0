//! 分类（Category）
//!
//! 组合内核全部构件的具体实体：`Uuid` 标识、受约束的字段、
//! 受校验保护的变更方法与面向外部的快照输出。
//!
mod entity;
mod validator;

pub use entity::{Category, CategoryProps, CategorySnapshot};
pub use validator::{CATEGORY_RULES, CategoryRules, CategoryValidator};
