//! 人员（Person）相关事件
//!
//! 人员删除会触发多个独立的下游反应（LDAP 条目吊销、邮箱账户停用等），
//! 这些反应由事件总线按类型扇出，生产方无需感知消费者。

use super::EventMeta;
use crate::value_object::{OrganisationId, PersonId, RolleId};
use schulportal_macros::domain_event;

/// 人员已删除
#[domain_event]
pub struct PersonDeletedEvent {
    pub person_id: PersonId,
    pub username: String,
    /// 人员在 OX 上的邮箱地址（未开通邮箱的人员为 None）
    pub email_address: Option<String>,
}

impl PersonDeletedEvent {
    pub fn new(
        person_id: PersonId,
        username: impl Into<String>,
        email_address: Option<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            person_id,
            username: username.into(),
            email_address,
        }
    }
}

/// 人员与组织/角色的关联（Personenkontext）已建立
#[domain_event]
pub struct PersonenkontextCreatedEvent {
    pub person_id: PersonId,
    pub organisation_id: OrganisationId,
    pub rolle_id: RolleId,
}

impl PersonenkontextCreatedEvent {
    pub fn new(person_id: PersonId, organisation_id: OrganisationId, rolle_id: RolleId) -> Self {
        Self {
            meta: EventMeta::new(),
            person_id,
            organisation_id,
            rolle_id,
        }
    }
}

/// 人员与组织/角色的关联（Personenkontext）已解除
#[domain_event]
pub struct PersonenkontextDeletedEvent {
    pub person_id: PersonId,
    pub organisation_id: OrganisationId,
    pub rolle_id: RolleId,
}

impl PersonenkontextDeletedEvent {
    pub fn new(person_id: PersonId, organisation_id: OrganisationId, rolle_id: RolleId) -> Self {
        Self {
            meta: EventMeta::new(),
            person_id,
            organisation_id,
            rolle_id,
        }
    }
}
