//! 组织业务规约（叶子规约）
//!
//! 每条规约封装一条可独立测试的业务规则，供应用服务通过
//! `and`/`or`/`not`/`and_not`/`or_not` 组合成完整的校验表达式。
//!
//! 闭包性质：仓储错误与缺失的关联关系一律折算为 `false`，不向上传播，
//! 以保证任意组合求值不会因单个叶子而抛出。

use super::{Organisation, OrganisationRepository, OrganisationsTyp};
use crate::specification::Specification;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// 候选对象是一所学校
pub struct IstSchule;

#[async_trait]
impl Specification<Organisation> for IstSchule {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        candidate.typ() == OrganisationsTyp::Schule
    }
}

/// 候选对象是一个学校承载方
pub struct IstTraeger;

#[async_trait]
impl Specification<Organisation> for IstTraeger {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        candidate.typ() == OrganisationsTyp::Traeger
    }
}

/// 候选对象是一个班级
pub struct IstKlasse;

#[async_trait]
impl Specification<Organisation> for IstKlasse {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        candidate.typ() == OrganisationsTyp::Klasse
    }
}

/// 名称存在且非空白
pub struct NameErforderlich;

#[async_trait]
impl Specification<Organisation> for NameErforderlich {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        candidate.name().is_some_and(|n| !n.trim().is_empty())
    }
}

/// 名称带有首尾空白（通常与 `and_not` 组合使用）
pub struct NameHatLeerzeichenAmRand;

#[async_trait]
impl Specification<Organisation> for NameHatLeerzeichenAmRand {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        candidate.name().is_some_and(|n| n.trim() != n)
    }
}

/// 学校必须具有编号（非学校组织不受约束）
pub struct KennungErforderlichFuerSchule;

#[async_trait]
impl Specification<Organisation> for KennungErforderlichFuerSchule {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        if candidate.typ() != OrganisationsTyp::Schule {
            return true;
        }
        candidate.kennung().is_some_and(|k| !k.trim().is_empty())
    }
}

/// 学校编号在全部学校中唯一（非学校或无编号时不受约束）
pub struct KennungEindeutigFuerSchule {
    repo: Arc<dyn OrganisationRepository>,
}

impl KennungEindeutigFuerSchule {
    pub fn new(repo: Arc<dyn OrganisationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Specification<Organisation> for KennungEindeutigFuerSchule {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        if candidate.typ() != OrganisationsTyp::Schule {
            return true;
        }
        let Some(kennung) = candidate.kennung() else {
            return true;
        };
        match self.repo.kennung_vergeben(kennung).await {
            Ok(vergeben) => !vergeben,
            Err(_) => false,
        }
    }
}

/// 学校必须挂在承载方（Traeger）之下
pub struct SchuleUnterTraeger {
    repo: Arc<dyn OrganisationRepository>,
}

impl SchuleUnterTraeger {
    pub fn new(repo: Arc<dyn OrganisationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Specification<Organisation> for SchuleUnterTraeger {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        if candidate.typ() != OrganisationsTyp::Schule {
            return true;
        }
        let Some(parent_id) = candidate.administriert_von() else {
            return false;
        };
        match self.repo.find_by_id(&parent_id).await {
            Ok(Some(parent)) => parent.typ() == OrganisationsTyp::Traeger,
            _ => false,
        }
    }
}

/// 只有班级可以挂在学校之下；班级也只能挂在学校之下
pub struct NurKlasseUnterSchule {
    repo: Arc<dyn OrganisationRepository>,
}

impl NurKlasseUnterSchule {
    pub fn new(repo: Arc<dyn OrganisationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Specification<Organisation> for NurKlasseUnterSchule {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        let Some(parent_id) = candidate.administriert_von() else {
            // 无上级：班级必须有上级学校，其余类型不受约束
            return candidate.typ() != OrganisationsTyp::Klasse;
        };
        match self.repo.find_by_id(&parent_id).await {
            Ok(Some(parent)) => {
                if candidate.typ() == OrganisationsTyp::Klasse {
                    parent.typ() == OrganisationsTyp::Schule
                } else {
                    parent.typ() != OrganisationsTyp::Schule
                }
            }
            _ => false,
        }
    }
}

/// `administriert_von` 链上存在环（调用方通常以 `not()` 组合）
pub struct ZyklusInAdministriertVon {
    repo: Arc<dyn OrganisationRepository>,
}

impl ZyklusInAdministriertVon {
    pub fn new(repo: Arc<dyn OrganisationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Specification<Organisation> for ZyklusInAdministriertVon {
    async fn is_satisfied_by(&self, candidate: &Organisation) -> bool {
        let mut seen = HashSet::new();
        seen.insert(candidate.id());

        let mut current = candidate.administriert_von();
        while let Some(id) = current {
            if !seen.insert(id) {
                return true;
            }
            match self.repo.find_by_id(&id).await {
                Ok(Some(org)) => current = org.administriert_von(),
                _ => return false,
            }
        }
        false
    }
}
