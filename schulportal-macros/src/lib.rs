//! Schulportal 过程宏（schulportal-macros）
//!
//! 提供声明式的事件定义：`#[domain_event]` 把一个普通的具名字段结构体
//! 变成完整的领域事件（注入元数据字段、补齐标准派生、实现
//! `::schulportal_domain::domain_event::DomainEvent`）。
//!
//! 事件类型名称默认取结构体名，可通过
//! `#[domain_event(event_type = "...")]` 覆写。

use proc_macro::TokenStream;

mod domain_event;
mod utils;

/// #[domain_event] 宏
/// - 仅支持具名字段结构体
/// - 注入字段 `meta: EventMeta`（若缺失）并置于字段最前
/// - 合并默认派生：Debug, Clone, PartialEq, Serialize, Deserialize
/// - 生成 `::schulportal_domain::domain_event::DomainEvent` 实现
///   （EVENT_TYPE/event_id/created_at）
/// - 支持：`#[domain_event(event_type = "...")]` 覆写稳定类型名
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}
