use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 结构化错误报告：字段名 -> 有序违规消息
///
/// 不在报告中的字段没有违规。字段按名称排序存储，便于稳定输出。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorReport(BTreeMap<String, Vec<String>>);

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为字段追加一条消息，保持追加顺序
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 存在违规的字段数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `expected` 中每个字段都在报告中，且消息序列完全一致
    pub fn contains_messages<I, K, V>(&self, expected: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        expected.into_iter().all(|(field, messages)| {
            self.get(field.as_ref()).is_some_and(|actual| {
                let mut actual = actual.iter();
                let mut messages = messages.into_iter();
                loop {
                    match (actual.next(), messages.next()) {
                        (None, None) => break true,
                        (Some(a), Some(m)) if a == m.as_ref() => continue,
                        _ => break false,
                    }
                }
            })
        })
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl From<BTreeMap<String, Vec<String>>> for ErrorReport {
    fn from(value: BTreeMap<String, Vec<String>>) -> Self {
        Self(value)
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: [{}]", messages.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ErrorReport {
        let mut report = ErrorReport::new();
        report.push("name", "name should not be empty");
        report.push("name", "name must be a string");
        report.push("is_active", "is_active must be a boolean value");
        report
    }

    #[test]
    fn push_keeps_order_per_field() {
        let report = sample();
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.get("name").unwrap(),
            ["name should not be empty", "name must be a string"]
        );
        assert!(report.get("description").is_none());
    }

    #[test]
    fn contains_messages_requires_exact_sequence() {
        let report = sample();
        assert!(report.contains_messages([(
            "name",
            ["name should not be empty", "name must be a string"]
        )]));
        // 顺序不同
        assert!(!report.contains_messages([(
            "name",
            ["name must be a string", "name should not be empty"]
        )]));
        // 子集
        assert!(!report.contains_messages([("name", ["name should not be empty"])]));
        // 字段不存在
        assert!(!report.contains_messages([("description", ["description must be a string"])]));
    }

    #[test]
    fn display_and_serde() {
        let report = sample();
        assert_eq!(
            report.to_string(),
            "is_active: [is_active must be a boolean value]; \
             name: [name should not be empty, name must be a string]"
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"][1], "name must be a string");
    }
}
