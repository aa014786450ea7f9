use crate::value_object::OrganisationId;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 组织类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganisationsTyp {
    Root,
    Land,
    /// 学校承载方
    Traeger,
    Schule,
    Klasse,
    Anbieter,
    Sonstige,
}

/// 组织实体
///
/// `administriert_von`/`zugehoerig_zu` 指向组织树中的上级节点；
/// 根节点两者皆为 None。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    id: OrganisationId,
    typ: OrganisationsTyp,
    administriert_von: Option<OrganisationId>,
    zugehoerig_zu: Option<OrganisationId>,
    /// 官方学校编号（Dienststellennummer），仅学校必填
    kennung: Option<String>,
    name: Option<String>,
}

impl Organisation {
    pub fn id(&self) -> OrganisationId {
        self.id
    }

    pub fn typ(&self) -> OrganisationsTyp {
        self.typ
    }

    pub fn administriert_von(&self) -> Option<OrganisationId> {
        self.administriert_von
    }

    pub fn zugehoerig_zu(&self) -> Option<OrganisationId> {
        self.zugehoerig_zu
    }

    pub fn kennung(&self) -> Option<&str> {
        self.kennung.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
