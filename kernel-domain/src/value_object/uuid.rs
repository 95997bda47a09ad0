use std::fmt;
use std::str::FromStr;

use ::uuid::{Uuid as RawUuid, Variant};
use kernel_macros::value_object;

use super::ValueObject;
use crate::error::InvalidIdentifierError;

/// 经过校验的 UUID 标识
///
/// 始终持有一个语法合法的 UUID 字符串（规范的 36 位连字符形式，
/// RFC 4122 变体且版本号为 1..=8，或 nil UUID）。校验只在构造时执行一次，
/// 之后不可变，因此无需再次校验。
///
/// # 示例
///
/// ```
/// use kernel_domain::value_object::Uuid;
///
/// let id = Uuid::parse("22ca867e-f3f0-4ebe-8751-0b1860e8b558").unwrap();
/// assert_eq!(id.as_str(), "22ca867e-f3f0-4ebe-8751-0b1860e8b558");
///
/// assert!(Uuid::parse("invalid-uuid").is_err());
/// ```
#[value_object(validated)]
#[derive(Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid(String);

impl Uuid {
    /// 生成新的随机（v4）标识
    pub fn new() -> Self {
        let id = Self(RawUuid::new_v4().hyphenated().to_string());
        if let Err(err) = id.validate() {
            unreachable!("generated v4 uuid rejected: {err}");
        }
        id
    }

    /// 包装调用方提供的字符串，非法时返回 `InvalidIdentifierError`
    pub fn parse(id: impl Into<String>) -> Result<Self, InvalidIdentifierError> {
        let id = Self(id.into());
        id.validate()?;
        Ok(id)
    }

    /// 提供则校验，缺省则生成
    pub fn try_new(id: Option<String>) -> Result<Self, InvalidIdentifierError> {
        match id {
            Some(id) => Self::parse(id),
            None => Ok(Self::new()),
        }
    }

    /// 原始字符串形式
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Uuid {
    type Error = InvalidIdentifierError;

    fn validate(&self) -> Result<(), Self::Error> {
        #[cfg(test)]
        probe::record();

        if is_valid_uuid(&self.0) {
            Ok(())
        } else {
            Err(InvalidIdentifierError::new(self.0.as_str()))
        }
    }
}

fn is_valid_uuid(s: &str) -> bool {
    // try_parse 同时接受 simple/braced/urn 形式，限定长度只保留连字符形式
    if s.len() != 36 {
        return false;
    }
    RawUuid::try_parse(s).is_ok_and(|uuid| {
        uuid.is_nil()
            || (matches!(uuid.get_variant(), Variant::RFC4122)
                && (1..=8).contains(&uuid.get_version_num()))
    })
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Uuid {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = InvalidIdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

/// 记录当前线程上 `validate` 的调用次数
#[cfg(test)]
pub(crate) mod probe {
    use std::cell::Cell;

    thread_local! {
        static VALIDATIONS: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn record() {
        VALIDATIONS.with(|c| c.set(c.get() + 1));
    }

    /// 读取并清零
    pub(crate) fn take() -> usize {
        VALIDATIONS.with(|c| c.replace(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn invalid_uuid_is_rejected() {
        probe::take();
        let err = Uuid::parse("invalid-uuid").unwrap_err();
        assert_eq!(err.to_string(), "ID must be a valid UUID");
        assert_eq!(err.value(), "invalid-uuid");
        assert_eq!(probe::take(), 1);
    }

    #[test]
    fn generated_uuid_is_valid() {
        probe::take();
        let id = Uuid::new();
        assert_eq!(probe::take(), 1);

        assert!(RawUuid::try_parse(id.as_str()).is_ok());
        assert!(is_valid_uuid(id.as_str()));
        assert_eq!(RawUuid::try_parse(id.as_str()).unwrap().get_version_num(), 4);
    }

    #[test]
    fn valid_uuid_round_trips() {
        probe::take();
        let id = Uuid::parse("22ca867e-f3f0-4ebe-8751-0b1860e8b558").unwrap();
        assert_eq!(id.as_str(), "22ca867e-f3f0-4ebe-8751-0b1860e8b558");
        assert_eq!(probe::take(), 1);
    }

    #[test]
    fn try_new_generates_or_validates() {
        probe::take();
        assert!(Uuid::try_new(None).is_ok());
        assert!(Uuid::try_new(Some("22ca867e-f3f0-4ebe-8751-0b1860e8b558".into())).is_ok());
        assert!(Uuid::try_new(Some(String::new())).is_err());
        assert_eq!(probe::take(), 3);
    }

    #[test]
    fn non_canonical_forms_are_rejected() {
        // simple / braced / urn 形式
        assert!(Uuid::parse("22ca867ef3f04ebe87510b1860e8b558").is_err());
        assert!(Uuid::parse("{22ca867e-f3f0-4ebe-8751-0b1860e8b558}").is_err());
        assert!(Uuid::parse("urn:uuid:22ca867e-f3f0-4ebe-8751-0b1860e8b558").is_err());
        // 版本号 0、非 RFC 4122 变体
        assert!(Uuid::parse("22ca867e-f3f0-0ebe-8751-0b1860e8b558").is_err());
        assert!(Uuid::parse("22ca867e-f3f0-4ebe-c751-0b1860e8b558").is_err());
        // nil 与大写均接受，且原样保留
        assert!(Uuid::parse("00000000-0000-0000-0000-000000000000").is_ok());
        let upper = Uuid::parse("22CA867E-F3F0-4EBE-8751-0B1860E8B558").unwrap();
        assert_eq!(upper.as_str(), "22CA867E-F3F0-4EBE-8751-0B1860E8B558");
    }

    #[test]
    fn equality_is_structural() {
        let a = Uuid::parse("22ca867e-f3f0-4ebe-8751-0b1860e8b558").unwrap();
        let b: Uuid = "22ca867e-f3f0-4ebe-8751-0b1860e8b558".parse().unwrap();
        assert!(a.equals(Some(&b)));
        assert!(!a.equals(Some(&Uuid::new())));
        assert!(!a.equals(None));
    }

    #[test]
    fn serde_uses_bare_string_and_revalidates() {
        let id = Uuid::parse("22ca867e-f3f0-4ebe-8751-0b1860e8b558").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"22ca867e-f3f0-4ebe-8751-0b1860e8b558\"");

        let back: Uuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let err = serde_json::from_str::<Uuid>("\"nope\"").unwrap_err();
        assert!(err.to_string().contains("ID must be a valid UUID"));
    }

    proptest! {
        #[test]
        fn any_v4_string_round_trips(bytes in any::<[u8; 16]>()) {
            let raw = ::uuid::Builder::from_random_bytes(bytes).into_uuid().to_string();
            let id = Uuid::parse(raw.clone()).unwrap();
            prop_assert_eq!(id.as_str(), raw.as_str());
        }

        #[test]
        fn arbitrary_text_is_rejected(s in "[a-z0-9 _.-]{0,40}") {
            prop_assume!(s.len() != 36);
            prop_assert!(Uuid::parse(s).is_err());
        }
    }
}
