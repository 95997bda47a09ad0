use serde_json::{Map, Value};

use super::{ErrorReport, FieldRules};
use crate::error::EntityValidationError;

/// 实体的只读投影，按字段名取值；`None` 表示字段缺省
pub trait Snapshot {
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Snapshot for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Snapshot for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// 对投影求值整张规则表
///
/// 每个字段的约束全部执行，违规消息按约束声明顺序排列；
/// 标记为可选且值缺省/为 null 的字段整体跳过。
pub fn evaluate<S>(rules: &[FieldRules], snapshot: &S) -> ErrorReport
where
    S: Snapshot + ?Sized,
{
    let mut report = ErrorReport::new();
    for rule in rules {
        let value = snapshot.field(rule.field());
        if rule.is_optional() && matches!(value, None | Some(Value::Null)) {
            continue;
        }
        for constraint in rule.constraints() {
            if !constraint.is_satisfied_by(value) {
                report.push(rule.field(), constraint.message(rule.field()));
            }
        }
    }
    report
}

/// 字段校验器
///
/// `validate` 返回是否通过，失败时最近一次的报告可通过 `errors` 读取。
pub trait FieldsValidator<T: ?Sized> {
    fn validate(&mut self, data: &T) -> bool;

    /// 最近一次失败校验的报告；通过后为 `None`
    fn errors(&self) -> Option<&ErrorReport>;

    /// 校验并将失败转换为携带完整报告的 `EntityValidationError`
    fn ensure_valid(&mut self, data: &T) -> Result<(), EntityValidationError> {
        if self.validate(data) {
            return Ok(());
        }
        let errors = <Self as FieldsValidator<T>>::errors(self);
        Err(EntityValidationError::new(
            errors.cloned().unwrap_or_default(),
        ))
    }
}

/// 基于静态规则表的通用校验器
#[derive(Debug, Clone)]
pub struct RuleValidator {
    rules: &'static [FieldRules],
    errors: Option<ErrorReport>,
}

impl RuleValidator {
    pub const fn new(rules: &'static [FieldRules]) -> Self {
        Self {
            rules,
            errors: None,
        }
    }

    pub const fn rules(&self) -> &'static [FieldRules] {
        self.rules
    }

    /// 最近一次失败校验的报告
    pub fn errors(&self) -> Option<&ErrorReport> {
        self.errors.as_ref()
    }
}

impl<T> FieldsValidator<T> for RuleValidator
where
    T: Snapshot + ?Sized,
{
    fn validate(&mut self, data: &T) -> bool {
        let report = evaluate(self.rules, data);
        if report.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(rules = self.rules.len(), "validation passed");
            self.errors = None;
            return true;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rules = self.rules.len(),
            invalid_fields = report.len(),
            "validation failed"
        );
        self.errors = Some(report);
        false
    }

    fn errors(&self) -> Option<&ErrorReport> {
        self.errors.as_ref()
    }
}
