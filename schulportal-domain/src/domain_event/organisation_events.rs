//! 组织（Organisation）相关事件：学校（Schule）与班级（Klasse）

use super::EventMeta;
use crate::value_object::OrganisationId;
use schulportal_macros::domain_event;

/// 学校已创建
#[domain_event]
pub struct SchuleCreatedEvent {
    pub organisation_id: OrganisationId,
    /// 官方学校编号（Dienststellennummer）
    pub kennung: Option<String>,
    pub name: String,
}

impl SchuleCreatedEvent {
    pub fn new(
        organisation_id: OrganisationId,
        kennung: Option<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            organisation_id,
            kennung,
            name: name.into(),
        }
    }
}

/// 学校已删除
#[domain_event]
pub struct SchuleDeletedEvent {
    pub organisation_id: OrganisationId,
}

impl SchuleDeletedEvent {
    pub fn new(organisation_id: OrganisationId) -> Self {
        Self {
            meta: EventMeta::new(),
            organisation_id,
        }
    }
}

/// 班级已创建
#[domain_event]
pub struct KlasseCreatedEvent {
    pub organisation_id: OrganisationId,
    pub name: String,
    /// 管理该班级的学校
    pub administriert_von: Option<OrganisationId>,
}

impl KlasseCreatedEvent {
    pub fn new(
        organisation_id: OrganisationId,
        name: impl Into<String>,
        administriert_von: Option<OrganisationId>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            organisation_id,
            name: name.into(),
            administriert_von,
        }
    }
}

/// 班级已改名
#[domain_event]
pub struct KlasseUpdatedEvent {
    pub organisation_id: OrganisationId,
    pub name: String,
}

impl KlasseUpdatedEvent {
    pub fn new(organisation_id: OrganisationId, name: impl Into<String>) -> Self {
        Self {
            meta: EventMeta::new(),
            organisation_id,
            name: name.into(),
        }
    }
}

/// 班级已删除
#[domain_event]
pub struct KlasseDeletedEvent {
    pub organisation_id: OrganisationId,
}

impl KlasseDeletedEvent {
    pub fn new(organisation_id: OrganisationId) -> Self {
        Self {
            meta: EventMeta::new(),
            organisation_id,
        }
    }
}
