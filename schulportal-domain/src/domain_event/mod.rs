//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`）、构造时生成的事件元数据
//! （`EventMeta`），以及 Schulportal 的具体事件类型（人员与组织两组）。
//!
//! 事件是"已经发生的事实"的不可变记录：构造后不再修改，交给事件总线恰好一次，
//! 所有处理器返回后即可被回收（无持久化、无重放）。

mod domain_event_trait;
mod event_meta;
mod organisation_events;
mod person_events;

pub use domain_event_trait::DomainEvent;
pub use event_meta::EventMeta;
pub use organisation_events::{
    KlasseCreatedEvent, KlasseDeletedEvent, KlasseUpdatedEvent, SchuleCreatedEvent,
    SchuleDeletedEvent,
};
pub use person_events::{
    PersonDeletedEvent, PersonenkontextCreatedEvent, PersonenkontextDeletedEvent,
};
