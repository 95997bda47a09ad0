use serde_json::Value;

/// 单条字段约束，每条约束失败时产生固定格式的消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// 不得为缺省、null 或空字符串
    Required,
    /// 必须是字符串
    IsString,
    /// 必须是布尔值
    IsBoolean,
    /// 必须是字符数不超过上限的字符串；非字符串同样视为违规
    MaxLength(usize),
}

impl Constraint {
    /// 检查字段值（`None` 表示字段缺省）是否满足约束
    pub fn is_satisfied_by(&self, value: Option<&Value>) -> bool {
        match self {
            Self::Required => {
                !matches!(value, None | Some(Value::Null)) && value.and_then(Value::as_str) != Some("")
            }
            Self::IsString => matches!(value, Some(Value::String(_))),
            Self::IsBoolean => matches!(value, Some(Value::Bool(_))),
            Self::MaxLength(max) => value
                .and_then(Value::as_str)
                .is_some_and(|s| s.chars().count() <= *max),
        }
    }

    /// 违规消息
    pub fn message(&self, field: &str) -> String {
        match self {
            Self::Required => format!("{field} should not be empty"),
            Self::IsString => format!("{field} must be a string"),
            Self::IsBoolean => format!("{field} must be a boolean value"),
            Self::MaxLength(max) => {
                format!("{field} must be shorter than or equal to {max} characters")
            }
        }
    }
}

/// 规则表中的一行：字段名与其有序约束
///
/// ```
/// use kernel_domain::validation::{Constraint, FieldRules};
///
/// const RULES: &[FieldRules] = &[
///     FieldRules::new("title", &[Constraint::Required, Constraint::IsString]),
///     FieldRules::new("subtitle", &[Constraint::IsString]).optional(),
/// ];
/// assert!(RULES[1].is_optional());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    field: &'static str,
    optional: bool,
    constraints: &'static [Constraint],
}

impl FieldRules {
    pub const fn new(field: &'static str, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            optional: false,
            constraints,
        }
    }

    /// 字段缺省或为 null 时跳过其全部约束；有值时约束照常执行
    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    pub const fn field(&self) -> &'static str {
        self.field
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    pub const fn constraints(&self) -> &'static [Constraint] {
        self.constraints
    }
}
