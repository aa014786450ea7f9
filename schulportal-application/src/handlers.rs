//! 事件处理器
//!
//! 每个处理器订阅一种事件类型并调用端口执行副作用。
//! 端口失败被映射为 `DomainError::EventHandler`，由总线按 collect-all
//! 策略聚合后返回给发布方；处理器自身不重试。

use crate::ports::{ItslearningClient, LdapClient, OxClient};
use async_trait::async_trait;
use schulportal_domain::domain_event::{KlasseCreatedEvent, PersonDeletedEvent};
use schulportal_domain::error::{DomainError, DomainResult};
use schulportal_domain::eventing::EventHandler;
use std::sync::Arc;

/// 人员删除后吊销其 LDAP 条目
pub struct LdapPersonDeletedHandler {
    ldap: Arc<dyn LdapClient>,
}

impl LdapPersonDeletedHandler {
    pub fn new(ldap: Arc<dyn LdapClient>) -> Self {
        Self { ldap }
    }
}

#[async_trait]
impl EventHandler<PersonDeletedEvent> for LdapPersonDeletedHandler {
    async fn handle(&self, event: &PersonDeletedEvent) -> DomainResult<()> {
        tracing::debug!(username = %event.username, "removing ldap entry for deleted person");
        self.ldap
            .delete_person_entry(&event.username)
            .await
            .map_err(|err| DomainError::EventHandler {
                handler: self.handler_name().to_string(),
                reason: err.to_string(),
            })
    }

    fn handler_name(&self) -> &str {
        "LdapPersonDeletedHandler"
    }
}

/// 人员删除后停用其 OX 邮箱账户
pub struct OxPersonDeletedHandler {
    ox: Arc<dyn OxClient>,
}

impl OxPersonDeletedHandler {
    pub fn new(ox: Arc<dyn OxClient>) -> Self {
        Self { ox }
    }
}

#[async_trait]
impl EventHandler<PersonDeletedEvent> for OxPersonDeletedHandler {
    async fn handle(&self, event: &PersonDeletedEvent) -> DomainResult<()> {
        // 未开通邮箱的人员无需处理
        let Some(email_address) = &event.email_address else {
            return Ok(());
        };

        tracing::debug!(email = %email_address, "deactivating ox account for deleted person");
        self.ox
            .deactivate_account(email_address)
            .await
            .map_err(|err| DomainError::EventHandler {
                handler: self.handler_name().to_string(),
                reason: err.to_string(),
            })
    }

    fn handler_name(&self) -> &str {
        "OxPersonDeletedHandler"
    }
}

/// 班级创建后在 itslearning 中创建对应的组
pub struct ItslearningKlasseCreatedHandler {
    itslearning: Arc<dyn ItslearningClient>,
}

impl ItslearningKlasseCreatedHandler {
    pub fn new(itslearning: Arc<dyn ItslearningClient>) -> Self {
        Self { itslearning }
    }
}

#[async_trait]
impl EventHandler<KlasseCreatedEvent> for ItslearningKlasseCreatedHandler {
    async fn handle(&self, event: &KlasseCreatedEvent) -> DomainResult<()> {
        tracing::debug!(name = %event.name, "creating itslearning gruppe for new klasse");
        self.itslearning
            .create_gruppe(event.organisation_id, &event.name)
            .await
            .map_err(|err| DomainError::EventHandler {
                handler: self.handler_name().to_string(),
                reason: err.to_string(),
            })
    }

    fn handler_name(&self) -> &str {
        "ItslearningKlasseCreatedHandler"
    }
}
