//! Appointment Type Service

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::request::{
    CreateAppointmentTypeRequest, UpdateAppointmentTypeRequest,
};
use crate::application::dto::response::AppointmentTypeResponse;
use crate::domain::AppointmentTypeRepository;
use crate::shared::error::AppError;

pub(crate) const APPOINTMENT_TYPE: &str = "Tipo de cita";

/// Appointment type service trait.
#[async_trait]
pub trait AppointmentTypeService: Send + Sync {
    async fn list_appointment_types(&self) -> Result<Vec<AppointmentTypeResponse>, AppError>;

    async fn get_appointment_type(&self, id: i64) -> Result<AppointmentTypeResponse, AppError>;

    async fn create_appointment_type(
        &self,
        request: CreateAppointmentTypeRequest,
    ) -> Result<AppointmentTypeResponse, AppError>;

    async fn update_appointment_type(
        &self,
        id: i64,
        request: UpdateAppointmentTypeRequest,
    ) -> Result<AppointmentTypeResponse, AppError>;

    /// Delete a type together with every appointment of that type.
    async fn delete_appointment_type(&self, id: i64) -> Result<(), AppError>;
}

pub struct AppointmentTypeServiceImpl {
    type_repo: Arc<dyn AppointmentTypeRepository>,
}

impl AppointmentTypeServiceImpl {
    pub fn new(type_repo: Arc<dyn AppointmentTypeRepository>) -> Self {
        Self { type_repo }
    }
}

#[async_trait]
impl AppointmentTypeService for AppointmentTypeServiceImpl {
    async fn list_appointment_types(&self) -> Result<Vec<AppointmentTypeResponse>, AppError> {
        let types = self.type_repo.find_all().await?;
        Ok(types.into_iter().map(AppointmentTypeResponse::from).collect())
    }

    async fn get_appointment_type(&self, id: i64) -> Result<AppointmentTypeResponse, AppError> {
        self.type_repo
            .find_by_id(id)
            .await?
            .map(AppointmentTypeResponse::from)
            .ok_or_else(|| AppError::not_found(APPOINTMENT_TYPE, id))
    }

    async fn create_appointment_type(
        &self,
        request: CreateAppointmentTypeRequest,
    ) -> Result<AppointmentTypeResponse, AppError> {
        let saved = self.type_repo.save(&request.into_entity()).await?;
        tracing::info!(appointment_type_id = saved.id, name = %saved.name, "Appointment type created");
        Ok(saved.into())
    }

    async fn update_appointment_type(
        &self,
        id: i64,
        request: UpdateAppointmentTypeRequest,
    ) -> Result<AppointmentTypeResponse, AppError> {
        let mut appointment_type = self
            .type_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(APPOINTMENT_TYPE, id))?;

        request.apply_to(&mut appointment_type);

        Ok(self.type_repo.save(&appointment_type).await?.into())
    }

    async fn delete_appointment_type(&self, id: i64) -> Result<(), AppError> {
        if !self.type_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(APPOINTMENT_TYPE, id));
        }

        self.type_repo.delete_by_id(id).await?;
        tracing::info!(appointment_type_id = id, "Appointment type deleted");
        Ok(())
    }
}
