use serde_json::Value;

use super::Category;
use crate::validation::{
    Constraint::{IsBoolean, IsString, MaxLength, Required},
    ErrorReport, FieldRules, FieldsValidator, RuleValidator, Snapshot,
};

/// 分类字段规则表，消息顺序即此处约束的声明顺序
pub const CATEGORY_RULES: &[FieldRules] = &[
    FieldRules::new("name", &[Required, IsString, MaxLength(255)]),
    FieldRules::new("description", &[IsString]).optional(),
    FieldRules::new("is_active", &[Required, IsBoolean]),
];

/// 分类的校验投影
///
/// 与实体内部表示解耦：既可由已构造的 `Category` 生成，
/// 也可直接取自未经类型化的外部输入。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRules {
    name: Option<Value>,
    description: Option<Value>,
    is_active: Option<Value>,
}

impl CategoryRules {
    /// 从原始输入中提取受约束字段
    ///
    /// 与 `Category::new` 相同地补齐默认值（`is_active` 缺省或为 null 时视为 true），
    /// 因此校验结果等同于“先构造、再校验”；`name` 不补默认值。
    pub fn from_value(raw: &Value) -> Self {
        let present = |key: &str| raw.get(key).filter(|v| !v.is_null()).cloned();
        Self {
            name: raw.get("name").cloned(),
            description: Some(present("description").unwrap_or(Value::Null)),
            is_active: Some(present("is_active").unwrap_or(Value::Bool(true))),
        }
    }
}

impl From<&Category> for CategoryRules {
    fn from(category: &Category) -> Self {
        Self {
            name: Some(Value::from(category.name())),
            description: Some(Value::from(category.description())),
            is_active: Some(Value::Bool(category.is_active())),
        }
    }
}

impl Snapshot for CategoryRules {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "name" => self.name.as_ref(),
            "description" => self.description.as_ref(),
            "is_active" => self.is_active.as_ref(),
            _ => None,
        }
    }
}

/// 分类校验器；每次校验使用独立实例
#[derive(Debug, Clone)]
pub struct CategoryValidator(RuleValidator);

impl CategoryValidator {
    pub const fn new() -> Self {
        Self(RuleValidator::new(CATEGORY_RULES))
    }
}

impl Default for CategoryValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldsValidator<CategoryRules> for CategoryValidator {
    fn validate(&mut self, data: &CategoryRules) -> bool {
        self.0.validate(data)
    }

    fn errors(&self) -> Option<&ErrorReport> {
        self.0.errors()
    }
}
