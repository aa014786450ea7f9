//! 进程内事件总线（EventBus）
//!
//! 按事件的具体类型（`TypeId`）维护有序处理器列表，`publish` 时逐个 await 调用：
//! - 注册顺序即调用顺序；重复注册即重复调用（不去重）；
//! - 无处理器的事件类型发布为静默 no-op；
//! - 错误策略为 collect-all：任一处理器失败不中断后续处理器，
//!   循环结束后将全部失败聚合为 `DomainError::EventDispatch` 返回给发布方；
//! - 分发过程从不修改注册表，处理器失败后总线对后续 `publish` 依然可用。
//!
//! 注册通过 `&mut self` 完成，发布通过 `&self`：组合根先注册、后以 `Arc`
//! 共享，借用检查器即保证"注册先于首次发布"，稳态分发无需任何锁。
//! 投递语义为至多一次、尽力而为、仅进程内（无重试、无持久化、无取消）。

use crate::domain_event::DomainEvent;
use crate::error::{DomainError, DomainResult, HandlerFailure};
use crate::eventing::EventHandler;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type HandlerFuture<'a> = Pin<Box<dyn Future<Output = DomainResult<()>> + Send + 'a>>;

type ErasedHandlerFn =
    Box<dyn for<'a> Fn(&'a (dyn Any + Send + Sync)) -> HandlerFuture<'a> + Send + Sync>;

struct RegisteredHandler {
    name: String,
    invoke: ErasedHandlerFn,
}

/// 进程内事件总线
///
/// 每个进程构建一个实例并显式注入到需要发布或注册的组件中，
/// 而非依赖全局查找（测试可构建隔离实例）。
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<TypeId, Vec<RegisteredHandler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册事件处理器：追加到 `E` 类型的有序列表末尾
    pub fn register<E, H>(&mut self, handler: Arc<H>)
    where
        E: DomainEvent,
        H: EventHandler<E> + 'static,
    {
        let name = handler.handler_name().to_string();

        let invoke: ErasedHandlerFn = Box::new(move |any| {
            let handler = handler.clone();
            Box::pin(async move {
                match any.downcast_ref::<E>() {
                    Some(event) => handler.handle(event).await,
                    // 注册键与闭包共用同一泛型 E，正常情况下不会走到这里
                    None => Err(DomainError::TypeMismatch {
                        expected: E::EVENT_TYPE,
                        found: "unknown",
                    }),
                }
            })
        });

        self.handlers
            .entry(TypeId::of::<E>())
            .or_default()
            .push(RegisteredHandler { name, invoke });
    }

    /// 已为 `E` 注册的处理器数量
    pub fn handler_count<E: DomainEvent>(&self) -> usize {
        self.handlers
            .get(&TypeId::of::<E>())
            .map_or(0, |list| list.len())
    }

    /// 发布事件：顺序 await 调用 `E` 的全部处理器
    ///
    /// 无处理器时静默返回 `Ok(())`；有失败时在全部处理器执行完毕后
    /// 返回 `DomainError::EventDispatch`，逐条附带处理器名称与原因。
    pub async fn publish<E: DomainEvent>(&self, event: &E) -> DomainResult<()> {
        let Some(list) = self.handlers.get(&TypeId::of::<E>()) else {
            return Ok(());
        };

        let any: &(dyn Any + Send + Sync) = event;
        let mut failures: Vec<HandlerFailure> = Vec::new();
        for entry in list {
            if let Err(err) = (entry.invoke)(any).await {
                tracing::warn!(
                    handler = %entry.name,
                    event_type = E::EVENT_TYPE,
                    error = %err,
                    "event handler failed"
                );
                failures.push(HandlerFailure {
                    handler: entry.name.clone(),
                    reason: err.to_string(),
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DomainError::EventDispatch {
                event_type: E::EVENT_TYPE,
                failures,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_event::{KlasseCreatedEvent, PersonDeletedEvent, SchuleDeletedEvent};
    use crate::value_object::{OrganisationId, PersonId};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        name: &'static str,
        calls: AtomicUsize,
        seen_usernames: Mutex<Vec<String>>,
    }

    impl CountingHandler {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                calls: AtomicUsize::new(0),
                seen_usernames: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl EventHandler<PersonDeletedEvent> for CountingHandler {
        async fn handle(&self, event: &PersonDeletedEvent) -> DomainResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_usernames
                .lock()
                .unwrap()
                .push(event.username.clone());
            Ok(())
        }

        fn handler_name(&self) -> &str {
            self.name
        }
    }

    struct OrderedHandler {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl EventHandler<SchuleDeletedEvent> for OrderedHandler {
        async fn handle(&self, _event: &SchuleDeletedEvent) -> DomainResult<()> {
            // 让出一次调度，确保顺序保证不依赖"处理器恰好不挂起"
            tokio::task::yield_now().await;
            self.log.lock().unwrap().push(self.name);
            Ok(())
        }

        fn handler_name(&self) -> &str {
            self.name
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler<PersonDeletedEvent> for FailingHandler {
        async fn handle(&self, _event: &PersonDeletedEvent) -> DomainResult<()> {
            Err(DomainError::EventHandler {
                handler: "FailingHandler".into(),
                reason: "fail requested".into(),
            })
        }

        fn handler_name(&self) -> &str {
            "FailingHandler"
        }
    }

    fn person_deleted(username: &str) -> PersonDeletedEvent {
        PersonDeletedEvent::new(PersonId::new(), username, None)
    }

    #[tokio::test]
    async fn test_dispatch_invokes_each_handler_once_with_payload() {
        let handler = CountingHandler::new("h1");
        let mut bus = EventBus::new();
        bus.register::<PersonDeletedEvent, _>(handler.clone());

        bus.publish(&person_deleted("mmustermann")).await.unwrap();

        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *handler.seen_usernames.lock().unwrap(),
            vec!["mmustermann".to_string()]
        );
    }

    #[tokio::test]
    async fn test_publish_without_handlers_is_silent_noop() {
        let bus = EventBus::new();
        let event = KlasseCreatedEvent::new(OrganisationId::new(), "1a", None);
        bus.publish(&event).await.unwrap();
    }

    #[tokio::test]
    async fn test_type_isolation() {
        let handler = CountingHandler::new("person-only");
        let mut bus = EventBus::new();
        bus.register::<PersonDeletedEvent, _>(handler.clone());

        let event = KlasseCreatedEvent::new(OrganisationId::new(), "1a", None);
        bus.publish(&event).await.unwrap();

        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
        assert_eq!(bus.handler_count::<PersonDeletedEvent>(), 1);
        assert_eq!(bus.handler_count::<KlasseCreatedEvent>(), 0);
    }

    #[tokio::test]
    async fn test_type_isolation_for_structurally_identical_events() {
        // SchuleDeletedEvent 与 KlasseDeletedEvent 载荷同构，仅类型不同
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.register::<SchuleDeletedEvent, _>(Arc::new(OrderedHandler {
            name: "schule-only",
            log: log.clone(),
        }));

        bus.publish(&crate::domain_event::KlasseDeletedEvent::new(
            OrganisationId::new(),
        ))
        .await
        .unwrap();

        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_registration_order_is_invocation_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.register::<SchuleDeletedEvent, _>(Arc::new(OrderedHandler {
            name: "h1",
            log: log.clone(),
        }));
        bus.register::<SchuleDeletedEvent, _>(Arc::new(OrderedHandler {
            name: "h2",
            log: log.clone(),
        }));

        bus.publish(&SchuleDeletedEvent::new(OrganisationId::new()))
            .await
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["h1", "h2"]);
    }

    #[tokio::test]
    async fn test_duplicate_registration_means_duplicate_invocation() {
        let handler = CountingHandler::new("twice");
        let mut bus = EventBus::new();
        bus.register::<PersonDeletedEvent, _>(handler.clone());
        bus.register::<PersonDeletedEvent, _>(handler.clone());

        bus.publish(&person_deleted("u1")).await.unwrap();

        assert_eq!(handler.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_collect_all_runs_later_handlers_despite_fault() {
        let healthy = CountingHandler::new("healthy");
        let mut bus = EventBus::new();
        bus.register::<PersonDeletedEvent, _>(Arc::new(FailingHandler));
        bus.register::<PersonDeletedEvent, _>(healthy.clone());

        let err = bus.publish(&person_deleted("u1")).await.unwrap_err();

        // 失败的处理器被记录，健康的处理器依然执行
        assert_eq!(healthy.calls.load(Ordering::SeqCst), 1);
        match err {
            DomainError::EventDispatch {
                event_type,
                failures,
            } => {
                assert_eq!(event_type, "PersonDeletedEvent");
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].handler, "FailingHandler");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bus_remains_usable_after_handler_fault() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.register::<PersonDeletedEvent, _>(Arc::new(FailingHandler));
        bus.register::<SchuleDeletedEvent, _>(Arc::new(OrderedHandler {
            name: "unrelated",
            log: log.clone(),
        }));

        assert!(bus.publish(&person_deleted("u1")).await.is_err());

        bus.publish(&SchuleDeletedEvent::new(OrganisationId::new()))
            .await
            .unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["unrelated"]);
    }
}
