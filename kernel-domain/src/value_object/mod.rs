//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的不可变对象。相等性由派生的 `PartialEq` 逐字段递归比较，
//! 只覆盖类型中声明的字段；类型不同或与空值比较恒为不相等。
//!
use std::any::Any;
use std::fmt;

mod uuid;

pub use self::uuid::Uuid;

/// 值对象抽象
pub trait ValueObject: Clone + PartialEq + fmt::Debug {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;

    /// 结构相等；`None` 视为空值，恒为 false
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// 与任意类型比较：具体类型不同或为空值时为 false
    fn equals_any(&self, other: Option<&dyn Any>) -> bool
    where
        Self: Sized + 'static,
    {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }
}
