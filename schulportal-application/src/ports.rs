//! 下游系统端口
//!
//! 事件处理器通过这些最小协议触达外部系统；
//! 具体的线上协议（LDAP、OX SOAP、itslearning API）由基础设施层实现。

use crate::error::AppError;
use async_trait::async_trait;
use schulportal_domain::value_object::OrganisationId;

/// LDAP 目录服务
#[async_trait]
pub trait LdapClient: Send + Sync {
    /// 删除人员的目录条目
    async fn delete_person_entry(&self, username: &str) -> Result<(), AppError>;
}

/// OX 邮件系统
#[async_trait]
pub trait OxClient: Send + Sync {
    /// 停用邮箱账户
    async fn deactivate_account(&self, email_address: &str) -> Result<(), AppError>;
}

/// itslearning 学习平台
#[async_trait]
pub trait ItslearningClient: Send + Sync {
    /// 为新建班级创建对应的组
    async fn create_gruppe(
        &self,
        organisation_id: OrganisationId,
        name: &str,
    ) -> Result<(), AppError>;
}
