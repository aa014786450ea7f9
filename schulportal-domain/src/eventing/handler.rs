use crate::domain_event::DomainEvent;
use crate::error::DomainResult;
use async_trait::async_trait;

/// 事件处理器：处理某一具体类型的事件
///
/// 处理器在启动阶段注册到 `EventBus`，此后只被读取。
/// 同一事件类型可注册任意多个处理器（含重复注册，重复即重复调用）。
#[async_trait]
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    async fn handle(&self, event: &E) -> DomainResult<()>;

    /// 处理器名称（用于失败记录与日志）
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
