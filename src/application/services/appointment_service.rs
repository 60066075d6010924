//! Appointment Service
//!
//! Appointments reference a patient, a dentist, an appointment type and,
//! optionally, the patient's medical record. Every reference is resolved
//! by id before anything is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::appointment_type_service::APPOINTMENT_TYPE;
use super::dentist_service::DENTIST;
use super::medical_record_service::MEDICAL_RECORD;
use super::patient_service::PATIENT;
use crate::application::dto::request::{
    CreateAppointmentRequest, EntityRef, UpdateAppointmentRequest,
};
use crate::application::dto::response::AppointmentResponse;
use crate::domain::{
    Appointment, AppointmentRepository, AppointmentType, AppointmentTypeRepository, Dentist,
    DentistRepository, MedicalRecordRepository, Patient, PatientRepository,
};
use crate::shared::error::AppError;

const APPOINTMENT: &str = "Cita";

/// Appointment service trait.
#[async_trait]
pub trait AppointmentService: Send + Sync {
    async fn list_appointments(&self) -> Result<Vec<AppointmentResponse>, AppError>;

    async fn get_appointment(&self, id: i64) -> Result<AppointmentResponse, AppError>;

    /// Create an appointment. Patient, dentist and type references are required.
    async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<AppointmentResponse, AppError>;

    /// Update an appointment, re-resolving only the references supplied.
    async fn update_appointment(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<AppointmentResponse, AppError>;

    async fn delete_appointment(&self, id: i64) -> Result<(), AppError>;
}

pub struct AppointmentServiceImpl {
    appointment_repo: Arc<dyn AppointmentRepository>,
    patient_repo: Arc<dyn PatientRepository>,
    dentist_repo: Arc<dyn DentistRepository>,
    type_repo: Arc<dyn AppointmentTypeRepository>,
    record_repo: Arc<dyn MedicalRecordRepository>,
}

impl AppointmentServiceImpl {
    pub fn new(
        appointment_repo: Arc<dyn AppointmentRepository>,
        patient_repo: Arc<dyn PatientRepository>,
        dentist_repo: Arc<dyn DentistRepository>,
        type_repo: Arc<dyn AppointmentTypeRepository>,
        record_repo: Arc<dyn MedicalRecordRepository>,
    ) -> Self {
        Self {
            appointment_repo,
            patient_repo,
            dentist_repo,
            type_repo,
            record_repo,
        }
    }

    async fn resolve_patient(&self, id: i64) -> Result<Patient, AppError> {
        self.patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(PATIENT, id))
    }

    async fn resolve_dentist(&self, id: i64) -> Result<Dentist, AppError> {
        self.dentist_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(DENTIST, id))
    }

    async fn resolve_type(&self, id: i64) -> Result<AppointmentType, AppError> {
        self.type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(APPOINTMENT_TYPE, id))
    }

    /// Check that a referenced medical record exists and return its id.
    async fn resolve_record(&self, reference: Option<EntityRef>) -> Result<Option<i64>, AppError> {
        match reference {
            Some(EntityRef { id }) => {
                if !self.record_repo.exists_by_id(id).await? {
                    return Err(AppError::not_found(MEDICAL_RECORD, id));
                }
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Load the current relations of a stored appointment and build the response.
    async fn to_response(&self, appointment: Appointment) -> Result<AppointmentResponse, AppError> {
        let patient = self.patient_repo.find_by_id(appointment.patient_id).await?;
        let dentist = self.dentist_repo.find_by_id(appointment.dentist_id).await?;
        let kind = self.type_repo.find_by_id(appointment.appointment_type_id).await?;

        Ok(AppointmentResponse::assemble(
            appointment,
            patient.as_ref(),
            dentist.as_ref(),
            kind.as_ref(),
        ))
    }
}

fn required(reference: Option<EntityRef>, what: &str) -> Result<i64, AppError> {
    reference
        .map(|r| r.id)
        .ok_or_else(|| AppError::Validation(format!("Se requiere {} (id)", what)))
}

#[async_trait]
impl AppointmentService for AppointmentServiceImpl {
    async fn list_appointments(&self) -> Result<Vec<AppointmentResponse>, AppError> {
        let appointments = self.appointment_repo.find_all().await?;
        if appointments.is_empty() {
            return Ok(Vec::new());
        }

        let patients: HashMap<i64, Patient> = self
            .patient_repo
            .find_all()
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let dentists: HashMap<i64, Dentist> = self
            .dentist_repo
            .find_all()
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        let types: HashMap<i64, AppointmentType> = self
            .type_repo
            .find_all()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        Ok(appointments
            .into_iter()
            .map(|a| {
                let patient = patients.get(&a.patient_id);
                let dentist = dentists.get(&a.dentist_id);
                let kind = types.get(&a.appointment_type_id);
                AppointmentResponse::assemble(a, patient, dentist, kind)
            })
            .collect())
    }

    async fn get_appointment(&self, id: i64) -> Result<AppointmentResponse, AppError> {
        let appointment = self
            .appointment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(APPOINTMENT, id))?;

        self.to_response(appointment).await
    }

    async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<AppointmentResponse, AppError> {
        let patient_id = required(request.patient, "el paciente")?;
        let dentist_id = required(request.dentist, "el odontologo")?;
        let type_id = required(request.appointment_type, "el tipo de cita")?;

        let patient = self.resolve_patient(patient_id).await?;
        let dentist = self.resolve_dentist(dentist_id).await?;
        let kind = self.resolve_type(type_id).await?;
        let record_id = self.resolve_record(request.medical_record).await?;

        let appointment = request.into_entity(patient.id, dentist.id, kind.id, record_id);
        let saved = self.appointment_repo.save(&appointment).await?;

        tracing::info!(
            appointment_id = saved.id,
            patient_id = patient.id,
            dentist_id = dentist.id,
            scheduled_at = %saved.scheduled_at(),
            "Appointment created"
        );

        Ok(AppointmentResponse::assemble(
            saved,
            Some(&patient),
            Some(&dentist),
            Some(&kind),
        ))
    }

    async fn update_appointment(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<AppointmentResponse, AppError> {
        let mut appointment = self
            .appointment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(APPOINTMENT, id))?;

        request.apply_scalars_to(&mut appointment);

        if let Some(EntityRef { id }) = request.patient {
            appointment.patient_id = self.resolve_patient(id).await?.id;
        }
        if let Some(EntityRef { id }) = request.dentist {
            appointment.dentist_id = self.resolve_dentist(id).await?.id;
        }
        if let Some(EntityRef { id }) = request.appointment_type {
            appointment.appointment_type_id = self.resolve_type(id).await?.id;
        }
        if request.medical_record.is_some() {
            appointment.medical_record_id = self.resolve_record(request.medical_record).await?;
        }

        let saved = self.appointment_repo.save(&appointment).await?;
        tracing::debug!(appointment_id = id, status = %saved.status, "Appointment updated");

        self.to_response(saved).await
    }

    async fn delete_appointment(&self, id: i64) -> Result<(), AppError> {
        if !self.appointment_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(APPOINTMENT, id));
        }

        self.appointment_repo.delete_by_id(id).await?;
        tracing::info!(appointment_id = id, "Appointment deleted");
        Ok(())
    }
}
