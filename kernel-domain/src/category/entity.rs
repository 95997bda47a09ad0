use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CategoryRules, CategoryValidator};
use crate::entity::Entity;
use crate::error::{DomainResult, EntityValidationError, InvalidIdentifierError};
use crate::validation::FieldsValidator;
use crate::value_object::Uuid;

/// 分类构造输入
///
/// 持久化加载或接口反序列化等协作者需提供的形状；除 `name` 外均可缺省。
///
/// ```
/// use kernel_domain::category::CategoryProps;
///
/// let props = CategoryProps::builder()
///     .name("Movie")
///     .description("films")
///     .build();
/// assert_eq!(props.is_active, None);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProps {
    pub category_id: Option<Uuid>,
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// 分类对外输出的纯数据快照（标识为原始字符串）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 分类实体
///
/// - `new` 直接构造且不校验，用于可信重建（例如从存储加载）；
/// - `create` 构造后立即校验，要么得到完全合法的实体，要么没有实体；
/// - `change_name` / `change_description` 在提交新值之前校验实体当前的完整状态，
///   校验失败时字段保持原值；
/// - `activate` / `deactivate` 无条件切换，不触发校验。
#[derive(Debug, Clone, Serialize)]
#[serde(into = "CategorySnapshot")]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// 直接构造并补齐默认值（生成标识、`description = None`、`is_active = true`、
    /// `created_at = now`），不做校验
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        }
    }

    /// 构造并校验
    pub fn create(props: CategoryProps) -> Result<Self, EntityValidationError> {
        Self::create_with(props, &mut CategoryValidator::new())
    }

    pub fn create_with<V>(
        props: CategoryProps,
        validator: &mut V,
    ) -> Result<Self, EntityValidationError>
    where
        V: FieldsValidator<CategoryRules> + ?Sized,
    {
        let category = Self::new(props);
        category.validate_with(validator)?;
        Ok(category)
    }

    /// 从未类型化的外部输入创建：先对原始投影校验（可发现类型错误），
    /// 通过后再反序列化为 `CategoryProps`
    pub fn create_from_value(raw: Value) -> DomainResult<Self> {
        Self::create_from_value_with(raw, &mut CategoryValidator::new())
    }

    pub fn create_from_value_with<V>(raw: Value, validator: &mut V) -> DomainResult<Self>
    where
        V: FieldsValidator<CategoryRules> + ?Sized,
    {
        validator.ensure_valid(&CategoryRules::from_value(&raw))?;
        let props: CategoryProps = serde_json::from_value(raw)?;
        Ok(Self::new(props))
    }

    /// 校验当前完整状态
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        self.validate_with(&mut CategoryValidator::new())
    }

    pub fn validate_with<V>(&self, validator: &mut V) -> Result<(), EntityValidationError>
    where
        V: FieldsValidator<CategoryRules> + ?Sized,
    {
        validator.ensure_valid(&CategoryRules::from(self))
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        self.change_name_with(name, &mut CategoryValidator::new())
    }

    pub fn change_name_with<V>(
        &mut self,
        name: impl Into<String>,
        validator: &mut V,
    ) -> Result<(), EntityValidationError>
    where
        V: FieldsValidator<CategoryRules> + ?Sized,
    {
        // 校验的是变更前的状态
        self.validate_with(validator)?;
        self.name = name.into();
        Ok(())
    }

    pub fn change_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), EntityValidationError> {
        self.change_description_with(description, &mut CategoryValidator::new())
    }

    pub fn change_description_with<V>(
        &mut self,
        description: impl Into<String>,
        validator: &mut V,
    ) -> Result<(), EntityValidationError>
    where
        V: FieldsValidator<CategoryRules> + ?Sized,
    {
        self.validate_with(validator)?;
        self.description = Some(description.into());
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 输出纯数据快照
    pub fn to_json(&self) -> CategorySnapshot {
        CategorySnapshot {
            category_id: self.category_id.as_str().to_owned(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

impl Entity for Category {
    type Id = Uuid;

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }
}

impl From<Category> for CategorySnapshot {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id.into(),
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
        }
    }
}

/// 从存储快照可信重建：只校验标识，不做字段校验
impl TryFrom<CategorySnapshot> for Category {
    type Error = InvalidIdentifierError;

    fn try_from(snapshot: CategorySnapshot) -> Result<Self, Self::Error> {
        Ok(Self::new(CategoryProps {
            category_id: Some(Uuid::parse(snapshot.category_id)?),
            name: snapshot.name,
            description: snapshot.description,
            is_active: Some(snapshot.is_active),
            created_at: Some(snapshot.created_at),
        }))
    }
}
