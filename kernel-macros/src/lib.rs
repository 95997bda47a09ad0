//! 领域内核过程宏（kernel-macros）
//!
//! 目前仅提供 `#[value_object]`，为值对象补齐结构相等所需的派生，
//! 并按需生成 `::kernel_domain::value_object::ValueObject` 实现。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod value_object;

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：(Debug 可控), Clone, PartialEq, Eq, Serialize, Deserialize
/// - 默认生成无校验的 `ValueObject` 实现（`Error = Infallible`）
/// - 参数：
///   - `debug = true|false`，默认 true；
///   - `validated`：类型自行实现 `ValueObject`（含真实校验），宏只负责派生。
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
