use crate::value_object::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 事件元数据：构造时生成的唯一标识与时间戳
///
/// 字段私有且无修改方法，保证事件一经构造不可变。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventMeta {
    event_id: EventId,
    created_at: DateTime<Utc>,
}

impl EventMeta {
    pub fn new() -> Self {
        Self {
            event_id: EventId::new(),
            created_at: Utc::now(),
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for EventMeta {
    fn default() -> Self {
        Self::new()
    }
}
