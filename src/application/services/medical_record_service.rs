//! Medical Record Service
//!
//! A patient has at most one medical record; a second one is rejected by
//! storage as a conflict.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::patient_service::PATIENT;
use crate::application::dto::request::{
    CreateMedicalRecordRequest, EntityRef, UpdateMedicalRecordRequest,
};
use crate::application::dto::response::MedicalRecordResponse;
use crate::domain::{MedicalRecordRepository, Patient, PatientRepository};
use crate::shared::error::AppError;

pub(crate) const MEDICAL_RECORD: &str = "Historia clinica";

/// Medical record service trait.
#[async_trait]
pub trait MedicalRecordService: Send + Sync {
    async fn list_medical_records(&self) -> Result<Vec<MedicalRecordResponse>, AppError>;

    async fn get_medical_record(&self, id: i64) -> Result<MedicalRecordResponse, AppError>;

    async fn create_medical_record(
        &self,
        request: CreateMedicalRecordRequest,
    ) -> Result<MedicalRecordResponse, AppError>;

    async fn update_medical_record(
        &self,
        id: i64,
        request: UpdateMedicalRecordRequest,
    ) -> Result<MedicalRecordResponse, AppError>;

    async fn delete_medical_record(&self, id: i64) -> Result<(), AppError>;
}

pub struct MedicalRecordServiceImpl {
    record_repo: Arc<dyn MedicalRecordRepository>,
    patient_repo: Arc<dyn PatientRepository>,
}

impl MedicalRecordServiceImpl {
    pub fn new(
        record_repo: Arc<dyn MedicalRecordRepository>,
        patient_repo: Arc<dyn PatientRepository>,
    ) -> Self {
        Self {
            record_repo,
            patient_repo,
        }
    }

    async fn resolve_patient(&self, id: i64) -> Result<Patient, AppError> {
        self.patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(PATIENT, id))
    }
}

#[async_trait]
impl MedicalRecordService for MedicalRecordServiceImpl {
    async fn list_medical_records(&self) -> Result<Vec<MedicalRecordResponse>, AppError> {
        let records = self.record_repo.find_all().await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let patients: HashMap<i64, Patient> = self
            .patient_repo
            .find_all()
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(records
            .into_iter()
            .map(|r| {
                let patient = patients.get(&r.patient_id);
                MedicalRecordResponse::assemble(r, patient)
            })
            .collect())
    }

    async fn get_medical_record(&self, id: i64) -> Result<MedicalRecordResponse, AppError> {
        let record = self
            .record_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(MEDICAL_RECORD, id))?;

        let patient = self.patient_repo.find_by_id(record.patient_id).await?;
        Ok(MedicalRecordResponse::assemble(record, patient.as_ref()))
    }

    async fn create_medical_record(
        &self,
        request: CreateMedicalRecordRequest,
    ) -> Result<MedicalRecordResponse, AppError> {
        let patient_id = request
            .patient
            .map(|r| r.id)
            .ok_or_else(|| AppError::Validation("Se requiere el paciente (id)".into()))?;

        let patient = self.resolve_patient(patient_id).await?;
        let saved = self.record_repo.save(&request.into_entity(patient.id)).await?;

        tracing::info!(medical_record_id = saved.id, patient_id = patient.id, "Medical record created");
        Ok(MedicalRecordResponse::assemble(saved, Some(&patient)))
    }

    async fn update_medical_record(
        &self,
        id: i64,
        request: UpdateMedicalRecordRequest,
    ) -> Result<MedicalRecordResponse, AppError> {
        let mut record = self
            .record_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(MEDICAL_RECORD, id))?;

        request.apply_scalars_to(&mut record);

        let patient = match request.patient {
            Some(EntityRef { id: patient_id }) => {
                let patient = self.resolve_patient(patient_id).await?;
                record.patient_id = patient.id;
                Some(patient)
            }
            None => self.patient_repo.find_by_id(record.patient_id).await?,
        };

        let saved = self.record_repo.save(&record).await?;
        tracing::debug!(medical_record_id = id, "Medical record updated");

        Ok(MedicalRecordResponse::assemble(saved, patient.as_ref()))
    }

    async fn delete_medical_record(&self, id: i64) -> Result<(), AppError> {
        if !self.record_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(MEDICAL_RECORD, id));
        }

        self.record_repo.delete_by_id(id).await?;
        tracing::info!(medical_record_id = id, "Medical record deleted");
        Ok(())
    }
}
