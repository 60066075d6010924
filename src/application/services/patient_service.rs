//! Patient Service
//!
//! CRUD over patients. Deleting a patient removes its appointments and its
//! medical record through the storage cascade.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::request::{CreatePatientRequest, UpdatePatientRequest};
use crate::application::dto::response::PatientResponse;
use crate::domain::PatientRepository;
use crate::shared::error::AppError;

pub(crate) const PATIENT: &str = "Paciente";

/// Patient service trait.
#[async_trait]
pub trait PatientService: Send + Sync {
    async fn list_patients(&self) -> Result<Vec<PatientResponse>, AppError>;

    /// Get a patient by id.
    async fn get_patient(&self, id: i64) -> Result<PatientResponse, AppError>;

    async fn create_patient(&self, request: CreatePatientRequest)
        -> Result<PatientResponse, AppError>;

    /// Overwrite the provided fields of an existing patient.
    async fn update_patient(
        &self,
        id: i64,
        request: UpdatePatientRequest,
    ) -> Result<PatientResponse, AppError>;

    async fn delete_patient(&self, id: i64) -> Result<(), AppError>;
}

/// PatientService implementation.
pub struct PatientServiceImpl {
    patient_repo: Arc<dyn PatientRepository>,
}

impl PatientServiceImpl {
    pub fn new(patient_repo: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repo }
    }
}

#[async_trait]
impl PatientService for PatientServiceImpl {
    async fn list_patients(&self) -> Result<Vec<PatientResponse>, AppError> {
        let patients = self.patient_repo.find_all().await?;
        Ok(patients.into_iter().map(PatientResponse::from).collect())
    }

    async fn get_patient(&self, id: i64) -> Result<PatientResponse, AppError> {
        self.patient_repo
            .find_by_id(id)
            .await?
            .map(PatientResponse::from)
            .ok_or_else(|| AppError::not_found(PATIENT, id))
    }

    async fn create_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<PatientResponse, AppError> {
        let saved = self.patient_repo.save(&request.into_entity()).await?;
        tracing::info!(patient_id = saved.id, "Patient created");
        Ok(saved.into())
    }

    async fn update_patient(
        &self,
        id: i64,
        request: UpdatePatientRequest,
    ) -> Result<PatientResponse, AppError> {
        let mut patient = self
            .patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(PATIENT, id))?;

        request.apply_to(&mut patient);

        let saved = self.patient_repo.save(&patient).await?;
        tracing::debug!(patient_id = id, "Patient updated");
        Ok(saved.into())
    }

    async fn delete_patient(&self, id: i64) -> Result<(), AppError> {
        if !self.patient_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(PATIENT, id));
        }

        self.patient_repo.delete_by_id(id).await?;
        tracing::info!(patient_id = id, "Patient deleted");
        Ok(())
    }
}
