//! 领域建模内核（kernel-domain）
//!
//! 提供构建富领域模型所需的最小构件：
//! - 值对象（`value_object`）：不可变、按结构相等，内置经过校验的 `Uuid` 标识；
//! - 实体（`entity`）：以标识区分身份，而非逐字段比较；
//! - 校验管线（`validation`）：声明式的字段约束表 + 通用求值器，产出结构化错误报告；
//! - 分类（`category`）：组合以上构件的具体实体，演示构造、受校验保护的变更与序列化。
//!
//! 内核是同步、无 I/O 的；持久化、接口层与依赖注入由外部协作者负责，
//! 它们只依赖实体公开的读取/变更/校验/序列化契约。
//!
//! 典型用法：
//! 1. 使用 `CategoryProps::builder()` 组装输入；
//! 2. 通过 `Category::create` 获得已校验的实体，或用 `Category::new` 做可信重建；
//! 3. 调用 `change_name` / `change_description` 等受控方法变更状态；
//! 4. 通过 `to_json` 输出给持久化或接口层。
//!
pub mod category;
pub mod entity;
pub mod error;
pub mod validation;
pub mod value_object;

// 允许在本 crate 内部通过 ::kernel_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 中同样可解析。
extern crate self as kernel_domain;
