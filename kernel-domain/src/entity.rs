//! 实体（Entity）基础抽象
//!
//! 实体以标识区分身份：两个字段值完全相同的实体可能是不同实体，
//! 字段值不同的两个实例也可能是同一实体的不同时刻。内核本身不定义实体相等，
//! 只暴露标识访问器，供持久化等协作者据此判定身份。
//!
use crate::value_object::ValueObject;

/// 具备稳定标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，本身是一个值对象
    type Id: ValueObject;

    /// 获取实体标识
    fn entity_id(&self) -> &Self::Id;
}
