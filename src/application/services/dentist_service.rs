//! Dentist Service
//!
//! CRUD over dentists. Deleting a dentist removes their appointments.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::request::{CreateDentistRequest, UpdateDentistRequest};
use crate::application::dto::response::DentistResponse;
use crate::domain::DentistRepository;
use crate::shared::error::AppError;

pub(crate) const DENTIST: &str = "Odontologo";

/// Dentist service trait.
#[async_trait]
pub trait DentistService: Send + Sync {
    async fn list_dentists(&self) -> Result<Vec<DentistResponse>, AppError>;

    async fn get_dentist(&self, id: i64) -> Result<DentistResponse, AppError>;

    async fn create_dentist(&self, request: CreateDentistRequest)
        -> Result<DentistResponse, AppError>;

    async fn update_dentist(
        &self,
        id: i64,
        request: UpdateDentistRequest,
    ) -> Result<DentistResponse, AppError>;

    async fn delete_dentist(&self, id: i64) -> Result<(), AppError>;
}

pub struct DentistServiceImpl {
    dentist_repo: Arc<dyn DentistRepository>,
}

impl DentistServiceImpl {
    pub fn new(dentist_repo: Arc<dyn DentistRepository>) -> Self {
        Self { dentist_repo }
    }
}

#[async_trait]
impl DentistService for DentistServiceImpl {
    async fn list_dentists(&self) -> Result<Vec<DentistResponse>, AppError> {
        let dentists = self.dentist_repo.find_all().await?;
        Ok(dentists.into_iter().map(DentistResponse::from).collect())
    }

    async fn get_dentist(&self, id: i64) -> Result<DentistResponse, AppError> {
        self.dentist_repo
            .find_by_id(id)
            .await?
            .map(DentistResponse::from)
            .ok_or_else(|| AppError::not_found(DENTIST, id))
    }

    async fn create_dentist(
        &self,
        request: CreateDentistRequest,
    ) -> Result<DentistResponse, AppError> {
        let saved = self.dentist_repo.save(&request.into_entity()).await?;
        tracing::info!(dentist_id = saved.id, license = %saved.license_number, "Dentist created");
        Ok(saved.into())
    }

    async fn update_dentist(
        &self,
        id: i64,
        request: UpdateDentistRequest,
    ) -> Result<DentistResponse, AppError> {
        let mut dentist = self
            .dentist_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(DENTIST, id))?;

        request.apply_to(&mut dentist);

        let saved = self.dentist_repo.save(&dentist).await?;
        tracing::debug!(dentist_id = id, "Dentist updated");
        Ok(saved.into())
    }

    async fn delete_dentist(&self, id: i64) -> Result<(), AppError> {
        if !self.dentist_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(DENTIST, id));
        }

        self.dentist_repo.delete_by_id(id).await?;
        tracing::info!(dentist_id = id, "Dentist deleted");
        Ok(())
    }
}
