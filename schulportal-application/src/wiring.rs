//! 组合根：事件总线装配
//!
//! 处理器注册集中在进程启动阶段的这一个函数里完成；
//! 注册完成后总线以 `Arc` 只读共享，稳态分发不再修改注册表。

use crate::handlers::{
    ItslearningKlasseCreatedHandler, LdapPersonDeletedHandler, OxPersonDeletedHandler,
};
use crate::ports::{ItslearningClient, LdapClient, OxClient};
use schulportal_domain::domain_event::{KlasseCreatedEvent, PersonDeletedEvent};
use schulportal_domain::eventing::EventBus;
use std::sync::Arc;

/// 构建事件总线并按固定顺序注册全部处理器
///
/// 同一事件类型下注册顺序即调用顺序：
/// 人员删除先吊销 LDAP 条目，再停用 OX 邮箱。
pub fn build_event_bus(
    ldap: Arc<dyn LdapClient>,
    ox: Arc<dyn OxClient>,
    itslearning: Arc<dyn ItslearningClient>,
) -> EventBus {
    let mut bus = EventBus::new();

    bus.register::<PersonDeletedEvent, _>(Arc::new(LdapPersonDeletedHandler::new(ldap)));
    bus.register::<PersonDeletedEvent, _>(Arc::new(OxPersonDeletedHandler::new(ox)));
    bus.register::<KlasseCreatedEvent, _>(Arc::new(ItslearningKlasseCreatedHandler::new(
        itslearning,
    )));

    bus
}
