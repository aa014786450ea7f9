use crate::value_object::EventId;
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// `Any` 上界使事件总线可以按具体类型（`TypeId`）建立注册表并分发；
/// 抽象标记本身从不被发布，可发布的只有具体事件类型。
pub trait DomainEvent: Any + fmt::Debug + Send + Sync {
    /// 事件类型的稳定名称（常量字符串，不随重构变化，用于日志与失败记录）
    const EVENT_TYPE: &'static str;

    /// 事件唯一标识（构造时生成，进程内唯一）
    fn event_id(&self) -> EventId;

    /// 事件构造时间（不可变）
    fn created_at(&self) -> DateTime<Utc>;

    /// 事件类型名称
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}
