//! 领域内核统一错误定义
//!
//! 标识非法与字段校验失败是内核仅有的两类业务错误，
//! 均在检测点立即返回给调用方，内核不做任何本地恢复或吞没。
//!
use thiserror::Error;

use crate::validation::ErrorReport;

/// 标识不是合法 UUID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ID must be a valid UUID")]
pub struct InvalidIdentifierError {
    value: String,
}

impl InvalidIdentifierError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// 被拒绝的原始输入
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// 实体字段校验失败，携带完整的字段 -> 消息列表报告
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity validation failed: {errors}")]
pub struct EntityValidationError {
    errors: ErrorReport,
}

impl EntityValidationError {
    pub fn new(errors: ErrorReport) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &ErrorReport {
        &self.errors
    }

    pub fn into_errors(self) -> ErrorReport {
        self.errors
    }

    /// 报告是否包含 `expected` 中的全部字段，且每个字段的消息及顺序完全一致；
    /// 报告中多出的字段不影响结果
    pub fn contains_messages<I, K, V>(&self, expected: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        self.errors.contains_messages(expected)
    }
}

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),
    #[error(transparent)]
    Validation(#[from] EntityValidationError),
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
