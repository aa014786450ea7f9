//! 组织应用服务
//!
//! 创建学校/班级前通过规约组合校验候选组织；
//! 校验失败以 `AppError::Validation` 拒绝，成功后发布对应事实。

use crate::error::AppError;
use schulportal_domain::domain_event::{KlasseCreatedEvent, SchuleCreatedEvent};
use schulportal_domain::eventing::EventBus;
use schulportal_domain::organisation::specs::{
    IstKlasse, IstSchule, KennungEindeutigFuerSchule, KennungErforderlichFuerSchule,
    NameErforderlich, NameHatLeerzeichenAmRand, NurKlasseUnterSchule, SchuleUnterTraeger,
    ZyklusInAdministriertVon,
};
use schulportal_domain::organisation::{Organisation, OrganisationRepository};
use schulportal_domain::specification::Specification;
use std::sync::Arc;

pub struct OrganisationService {
    repo: Arc<dyn OrganisationRepository>,
    bus: Arc<EventBus>,
}

impl OrganisationService {
    pub fn new(repo: Arc<dyn OrganisationRepository>, bus: Arc<EventBus>) -> Self {
        Self { repo, bus }
    }

    /// 校验并登记一所学校
    pub async fn schule_anlegen(&self, organisation: &Organisation) -> Result<(), AppError> {
        let gueltig = IstSchule
            .and(NameErforderlich)
            .and(KennungErforderlichFuerSchule)
            .and(KennungEindeutigFuerSchule::new(self.repo.clone()))
            .and(SchuleUnterTraeger::new(self.repo.clone()))
            .and_not(NameHatLeerzeichenAmRand);

        if !gueltig.is_satisfied_by(organisation).await {
            return Err(AppError::Validation(format!(
                "organisation {} is not a valid schule",
                organisation.id()
            )));
        }

        let event = SchuleCreatedEvent::new(
            organisation.id(),
            organisation.kennung().map(str::to_string),
            organisation.name().unwrap_or_default(),
        );
        self.bus.publish(&event).await?;
        Ok(())
    }

    /// 校验并登记一个班级
    pub async fn klasse_anlegen(&self, organisation: &Organisation) -> Result<(), AppError> {
        let gueltig = IstKlasse
            .and(NameErforderlich)
            .and(NurKlasseUnterSchule::new(self.repo.clone()))
            .and(ZyklusInAdministriertVon::new(self.repo.clone()).not());

        if !gueltig.is_satisfied_by(organisation).await {
            return Err(AppError::Validation(format!(
                "organisation {} is not a valid klasse",
                organisation.id()
            )));
        }

        let event = KlasseCreatedEvent::new(
            organisation.id(),
            organisation.name().unwrap_or_default(),
            organisation.administriert_von(),
        );
        self.bus.publish(&event).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use schulportal_domain::error::DomainResult;
    use schulportal_domain::organisation::OrganisationsTyp;
    use schulportal_domain::value_object::OrganisationId;
    use std::collections::HashMap;

    #[derive(Default)]
    struct InMemoryRepo {
        orgs: HashMap<OrganisationId, Organisation>,
    }

    #[async_trait]
    impl OrganisationRepository for InMemoryRepo {
        async fn find_by_id(&self, id: &OrganisationId) -> DomainResult<Option<Organisation>> {
            Ok(self.orgs.get(id).cloned())
        }

        async fn kennung_vergeben(&self, _kennung: &str) -> DomainResult<bool> {
            Ok(false)
        }
    }

    fn service_with(orgs: Vec<Organisation>) -> OrganisationService {
        let repo = Arc::new(InMemoryRepo {
            orgs: orgs.into_iter().map(|o| (o.id(), o)).collect(),
        });
        OrganisationService::new(repo, Arc::new(EventBus::new()))
    }

    #[tokio::test]
    async fn test_schule_anlegen_accepts_valid_candidate() {
        let traeger = Organisation::builder()
            .id(OrganisationId::new())
            .typ(OrganisationsTyp::Traeger)
            .maybe_name(Some("Bezirk Nord".into()))
            .build();
        let schule = Organisation::builder()
            .id(OrganisationId::new())
            .typ(OrganisationsTyp::Schule)
            .maybe_administriert_von(Some(traeger.id()))
            .maybe_kennung(Some("0706543".into()))
            .maybe_name(Some("Gymnasium Altona".into()))
            .build();

        let service = service_with(vec![traeger]);
        service.schule_anlegen(&schule).await.unwrap();
    }

    #[tokio::test]
    async fn test_schule_anlegen_rejects_trailing_space_name() {
        let traeger = Organisation::builder()
            .id(OrganisationId::new())
            .typ(OrganisationsTyp::Traeger)
            .build();
        let schule = Organisation::builder()
            .id(OrganisationId::new())
            .typ(OrganisationsTyp::Schule)
            .maybe_administriert_von(Some(traeger.id()))
            .maybe_kennung(Some("0706543".into()))
            .maybe_name(Some("Gymnasium Altona ".into()))
            .build();

        let service = service_with(vec![traeger]);
        let err = service.schule_anlegen(&schule).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_klasse_anlegen_rejects_klasse_without_schule() {
        let klasse = Organisation::builder()
            .id(OrganisationId::new())
            .typ(OrganisationsTyp::Klasse)
            .maybe_name(Some("1a".into()))
            .build();

        let service = service_with(vec![]);
        let err = service.klasse_anlegen(&klasse).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
