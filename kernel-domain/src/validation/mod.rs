//! 校验管线（Validation Pipeline）
//!
//! 以数据而非继承声明约束：每个实体提供一张 `字段 -> 有序约束列表` 的规则表，
//! 由通用求值器针对实体的只读投影（`Snapshot`）逐字段、逐约束求值。
//! 同一字段的全部约束都会执行（不短路），违规消息按规则表顺序写入 `ErrorReport`，
//! 因而同一非法输入得到的报告在任何运行中都一致。
//!
//! 校验器实例不共享：每次校验构造新的实例或由调用方显式传入，
//! 其保存的最近一次报告只属于该实例。
//!
mod constraint;
mod report;
mod validator;

pub use constraint::{Constraint, FieldRules};
pub use report::ErrorReport;
pub use validator::{FieldsValidator, RuleValidator, Snapshot, evaluate};
