//! Request DTOs
//!
//! Data structures for API request bodies, plus the DTO -> entity mapping.
//!
//! Wire names follow the clinic front-end (Spanish, camelCase). Create
//! requests carry the required fields; update requests make every field
//! optional, and an absent or `null` field keeps the stored value.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::{
    Appointment, AppointmentStatus, AppointmentType, Dentist, MedicalRecord, Patient, Role, User,
};
use crate::shared::time_format;
use crate::shared::validation::non_blank;

/// Reference to another record by id, e.g. `"paciente": {"id": 3}`.
///
/// Extra fields (as echoed back from a response) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

/// Overwrite `target` when `value` is present.
fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Overwrite an optional column when `value` is present.
fn set_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

// =============================================================================
// Patients
// =============================================================================

/// Create patient request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePatientRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub first_name: String,

    #[serde(rename = "apellido", default)]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(max = 10))]
    pub document_type: Option<String>,

    #[serde(rename = "documento")]
    #[validate(length(min = 1, max = 50, message = "Document must be 1-50 characters"))]
    pub document: String,

    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "genero", default)]
    #[validate(length(max = 1, message = "Gender is a single-letter code"))]
    pub gender: Option<String>,

    #[serde(rename = "correo", alias = "email", default)]
    #[validate(email(message = "Invalid email format"), length(max = 150))]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[serde(rename = "direccion", default)]
    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(rename = "contactoEmergenciaNombre", default)]
    #[validate(length(max = 100))]
    pub emergency_contact_name: Option<String>,

    #[serde(rename = "contactoEmergenciaParentesco", default)]
    #[validate(length(max = 50))]
    pub emergency_contact_relationship: Option<String>,

    #[serde(rename = "contactoEmergenciaTelefono", default)]
    #[validate(length(max = 20))]
    pub emergency_contact_phone: Option<String>,

    #[serde(rename = "alergias", default)]
    pub allergies: Option<String>,

    #[serde(rename = "medicamentos", default)]
    pub medications: Option<String>,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl CreatePatientRequest {
    /// Map to a new, unsaved patient.
    pub fn into_entity(self) -> Patient {
        Patient {
            first_name: self.first_name,
            last_name: self.last_name,
            document_type: self.document_type,
            document: self.document,
            birth_date: self.birth_date,
            gender: self.gender,
            email: non_blank(self.email),
            phone: self.phone,
            address: self.address,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_relationship: self.emergency_contact_relationship,
            emergency_contact_phone: self.emergency_contact_phone,
            allergies: self.allergies,
            medications: self.medications,
            notes: self.notes,
            ..Default::default()
        }
    }
}

/// Update patient request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePatientRequest {
    #[serde(rename = "nombre", default)]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[serde(rename = "apellido", default)]
    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(max = 10))]
    pub document_type: Option<String>,

    #[serde(rename = "documento", default)]
    #[validate(length(min = 1, max = 50, message = "Document must be 1-50 characters"))]
    pub document: Option<String>,

    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "genero", default)]
    #[validate(length(max = 1))]
    pub gender: Option<String>,

    #[serde(rename = "correo", alias = "email", default)]
    #[validate(email(message = "Invalid email format"), length(max = 150))]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[serde(rename = "direccion", default)]
    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(rename = "contactoEmergenciaNombre", default)]
    #[validate(length(max = 100))]
    pub emergency_contact_name: Option<String>,

    #[serde(rename = "contactoEmergenciaParentesco", default)]
    #[validate(length(max = 50))]
    pub emergency_contact_relationship: Option<String>,

    #[serde(rename = "contactoEmergenciaTelefono", default)]
    #[validate(length(max = 20))]
    pub emergency_contact_phone: Option<String>,

    #[serde(rename = "alergias", default)]
    pub allergies: Option<String>,

    #[serde(rename = "medicamentos", default)]
    pub medications: Option<String>,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl UpdatePatientRequest {
    /// Copy the provided fields onto `patient`.
    pub fn apply_to(self, patient: &mut Patient) {
        set(&mut patient.first_name, self.first_name);
        set_opt(&mut patient.last_name, self.last_name);
        set_opt(&mut patient.document_type, self.document_type);
        set(&mut patient.document, self.document);
        set_opt(&mut patient.birth_date, self.birth_date);
        set_opt(&mut patient.gender, self.gender);
        set_opt(&mut patient.email, non_blank(self.email));
        set_opt(&mut patient.phone, self.phone);
        set_opt(&mut patient.address, self.address);
        set_opt(&mut patient.emergency_contact_name, self.emergency_contact_name);
        set_opt(
            &mut patient.emergency_contact_relationship,
            self.emergency_contact_relationship,
        );
        set_opt(&mut patient.emergency_contact_phone, self.emergency_contact_phone);
        set_opt(&mut patient.allergies, self.allergies);
        set_opt(&mut patient.medications, self.medications);
        set_opt(&mut patient.notes, self.notes);
        patient.updated_at = Utc::now();
    }
}

// =============================================================================
// Dentists
// =============================================================================

/// Create dentist request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDentistRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub first_name: String,

    #[serde(rename = "apellido")]
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[serde(rename = "matricula")]
    #[validate(length(min = 1, max = 20, message = "License number must be 1-20 characters"))]
    pub license_number: String,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(max = 10))]
    pub document_type: Option<String>,

    #[serde(rename = "documento", default)]
    #[validate(length(max = 20))]
    pub document: Option<String>,

    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "genero", default)]
    #[validate(length(max = 1))]
    pub gender: Option<String>,

    #[serde(rename = "email", alias = "correo", default)]
    #[validate(email(message = "Invalid email format"), length(max = 150))]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[serde(rename = "direccion", default)]
    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(rename = "universidad", default)]
    #[validate(length(max = 200))]
    pub university: Option<String>,

    #[serde(rename = "anoGraduacion", default)]
    #[validate(range(min = 1900, max = 2100))]
    pub graduation_year: Option<i32>,

    #[serde(rename = "experiencia", default)]
    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: Option<i32>,

    #[serde(rename = "especialidades", default)]
    pub specialties: Option<String>,

    #[serde(rename = "contactoEmergenciaNombre", default)]
    #[validate(length(max = 100))]
    pub emergency_contact_name: Option<String>,

    #[serde(rename = "contactoEmergenciaParentesco", default)]
    #[validate(length(max = 50))]
    pub emergency_contact_relationship: Option<String>,

    #[serde(rename = "contactoEmergenciaTelefono", default)]
    #[validate(length(max = 15))]
    pub emergency_contact_phone: Option<String>,

    #[serde(rename = "diasTrabajo", default)]
    pub working_days: Option<String>,

    #[serde(rename = "horaInicio", default)]
    #[validate(length(max = 5))]
    pub start_time: Option<String>,

    #[serde(rename = "horaFin", default)]
    #[validate(length(max = 5))]
    pub end_time: Option<String>,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl CreateDentistRequest {
    pub fn into_entity(self) -> Dentist {
        Dentist {
            first_name: self.first_name,
            last_name: self.last_name,
            license_number: self.license_number,
            document_type: self.document_type,
            document: non_blank(self.document),
            birth_date: self.birth_date,
            gender: self.gender,
            email: non_blank(self.email),
            phone: self.phone,
            address: self.address,
            university: self.university,
            graduation_year: self.graduation_year,
            years_of_experience: self.years_of_experience,
            specialties: self.specialties,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_relationship: self.emergency_contact_relationship,
            emergency_contact_phone: self.emergency_contact_phone,
            working_days: self.working_days,
            start_time: self.start_time,
            end_time: self.end_time,
            notes: self.notes,
            ..Default::default()
        }
    }
}

/// Update dentist request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDentistRequest {
    #[serde(rename = "nombre", default)]
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[serde(rename = "apellido", default)]
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[serde(rename = "matricula", default)]
    #[validate(length(min = 1, max = 20))]
    pub license_number: Option<String>,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(max = 10))]
    pub document_type: Option<String>,

    #[serde(rename = "documento", default)]
    #[validate(length(max = 20))]
    pub document: Option<String>,

    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "genero", default)]
    #[validate(length(max = 1))]
    pub gender: Option<String>,

    #[serde(rename = "email", alias = "correo", default)]
    #[validate(email(message = "Invalid email format"), length(max = 150))]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[serde(rename = "direccion", default)]
    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(rename = "universidad", default)]
    #[validate(length(max = 200))]
    pub university: Option<String>,

    #[serde(rename = "anoGraduacion", default)]
    #[validate(range(min = 1900, max = 2100))]
    pub graduation_year: Option<i32>,

    #[serde(rename = "experiencia", default)]
    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: Option<i32>,

    #[serde(rename = "especialidades", default)]
    pub specialties: Option<String>,

    #[serde(rename = "contactoEmergenciaNombre", default)]
    #[validate(length(max = 100))]
    pub emergency_contact_name: Option<String>,

    #[serde(rename = "contactoEmergenciaParentesco", default)]
    #[validate(length(max = 50))]
    pub emergency_contact_relationship: Option<String>,

    #[serde(rename = "contactoEmergenciaTelefono", default)]
    #[validate(length(max = 15))]
    pub emergency_contact_phone: Option<String>,

    #[serde(rename = "diasTrabajo", default)]
    pub working_days: Option<String>,

    #[serde(rename = "horaInicio", default)]
    #[validate(length(max = 5))]
    pub start_time: Option<String>,

    #[serde(rename = "horaFin", default)]
    #[validate(length(max = 5))]
    pub end_time: Option<String>,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl UpdateDentistRequest {
    pub fn apply_to(self, dentist: &mut Dentist) {
        set(&mut dentist.first_name, self.first_name);
        set(&mut dentist.last_name, self.last_name);
        set(&mut dentist.license_number, self.license_number);
        set_opt(&mut dentist.document_type, self.document_type);
        set_opt(&mut dentist.document, non_blank(self.document));
        set_opt(&mut dentist.birth_date, self.birth_date);
        set_opt(&mut dentist.gender, self.gender);
        set_opt(&mut dentist.email, non_blank(self.email));
        set_opt(&mut dentist.phone, self.phone);
        set_opt(&mut dentist.address, self.address);
        set_opt(&mut dentist.university, self.university);
        set_opt(&mut dentist.graduation_year, self.graduation_year);
        set_opt(&mut dentist.years_of_experience, self.years_of_experience);
        set_opt(&mut dentist.specialties, self.specialties);
        set_opt(&mut dentist.emergency_contact_name, self.emergency_contact_name);
        set_opt(
            &mut dentist.emergency_contact_relationship,
            self.emergency_contact_relationship,
        );
        set_opt(&mut dentist.emergency_contact_phone, self.emergency_contact_phone);
        set_opt(&mut dentist.working_days, self.working_days);
        set_opt(&mut dentist.start_time, self.start_time);
        set_opt(&mut dentist.end_time, self.end_time);
        set_opt(&mut dentist.notes, self.notes);
        dentist.updated_at = Utc::now();
    }
}

// =============================================================================
// Appointment types
// =============================================================================

/// Create appointment type request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentTypeRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

impl CreateAppointmentTypeRequest {
    pub fn into_entity(self) -> AppointmentType {
        AppointmentType {
            name: self.name,
            description: self.description,
            ..Default::default()
        }
    }
}

/// Update appointment type request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAppointmentTypeRequest {
    #[serde(rename = "nombre", default)]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[serde(rename = "descripcion", default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

impl UpdateAppointmentTypeRequest {
    pub fn apply_to(self, appointment_type: &mut AppointmentType) {
        set(&mut appointment_type.name, self.name);
        set_opt(&mut appointment_type.description, self.description);
        appointment_type.updated_at = Utc::now();
    }
}

// =============================================================================
// Appointments
// =============================================================================

/// Create appointment request.
///
/// Relations are resolved by the service; only scalar fields are mapped here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[serde(rename = "paciente", default)]
    pub patient: Option<EntityRef>,

    #[serde(rename = "odontologo", default)]
    pub dentist: Option<EntityRef>,

    #[serde(rename = "tipoCita", default)]
    pub appointment_type: Option<EntityRef>,

    #[serde(rename = "historiaClinica", default)]
    pub medical_record: Option<EntityRef>,

    #[serde(rename = "fecha")]
    pub date: NaiveDate,

    #[serde(rename = "hora", with = "time_format")]
    pub time: NaiveTime,

    #[serde(rename = "estado", default)]
    pub status: Option<AppointmentStatus>,

    #[serde(rename = "observaciones", default)]
    #[validate(length(max = 255))]
    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    /// Map scalar fields onto a new appointment for the given relation ids.
    pub fn into_entity(
        self,
        patient_id: i64,
        dentist_id: i64,
        appointment_type_id: i64,
        medical_record_id: Option<i64>,
    ) -> Appointment {
        Appointment {
            patient_id,
            dentist_id,
            appointment_type_id,
            medical_record_id,
            date: self.date,
            time: self.time,
            status: self.status.unwrap_or_default(),
            notes: self.notes,
            ..Default::default()
        }
    }
}

/// Update appointment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAppointmentRequest {
    #[serde(rename = "paciente", default)]
    pub patient: Option<EntityRef>,

    #[serde(rename = "odontologo", default)]
    pub dentist: Option<EntityRef>,

    #[serde(rename = "tipoCita", default)]
    pub appointment_type: Option<EntityRef>,

    #[serde(rename = "historiaClinica", default)]
    pub medical_record: Option<EntityRef>,

    #[serde(rename = "fecha", default)]
    pub date: Option<NaiveDate>,

    #[serde(rename = "hora", with = "time_format::option", default)]
    pub time: Option<NaiveTime>,

    #[serde(rename = "estado", default)]
    pub status: Option<AppointmentStatus>,

    #[serde(rename = "observaciones", default)]
    #[validate(length(max = 255))]
    pub notes: Option<String>,
}

impl UpdateAppointmentRequest {
    /// Copy the provided scalar fields. Relations are re-resolved by the service.
    pub fn apply_scalars_to(&self, appointment: &mut Appointment) {
        set(&mut appointment.date, self.date);
        set(&mut appointment.time, self.time);
        set(&mut appointment.status, self.status);
        set_opt(&mut appointment.notes, self.notes.clone());
        appointment.updated_at = Utc::now();
    }
}

// =============================================================================
// Medical records
// =============================================================================

/// Create medical record request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMedicalRecordRequest {
    #[serde(rename = "paciente", default)]
    pub patient: Option<EntityRef>,

    #[serde(rename = "antecedentes", default)]
    #[validate(length(max = 255))]
    pub medical_history: Option<String>,

    #[serde(rename = "alergias", default)]
    #[validate(length(max = 255))]
    pub allergies: Option<String>,

    #[serde(rename = "medicamentos", default)]
    #[validate(length(max = 255))]
    pub medications: Option<String>,

    #[serde(rename = "enfermedades", default)]
    pub diseases: Option<String>,

    #[serde(rename = "cirugias", default)]
    pub surgeries: Option<String>,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl CreateMedicalRecordRequest {
    pub fn into_entity(self, patient_id: i64) -> MedicalRecord {
        MedicalRecord {
            patient_id,
            medical_history: self.medical_history,
            allergies: self.allergies,
            medications: self.medications,
            diseases: self.diseases,
            surgeries: self.surgeries,
            notes: self.notes,
            ..Default::default()
        }
    }
}

/// Update medical record request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMedicalRecordRequest {
    #[serde(rename = "paciente", default)]
    pub patient: Option<EntityRef>,

    #[serde(rename = "antecedentes", default)]
    #[validate(length(max = 255))]
    pub medical_history: Option<String>,

    #[serde(rename = "alergias", default)]
    #[validate(length(max = 255))]
    pub allergies: Option<String>,

    #[serde(rename = "medicamentos", default)]
    #[validate(length(max = 255))]
    pub medications: Option<String>,

    #[serde(rename = "enfermedades", default)]
    pub diseases: Option<String>,

    #[serde(rename = "cirugias", default)]
    pub surgeries: Option<String>,

    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}

impl UpdateMedicalRecordRequest {
    pub fn apply_scalars_to(&self, record: &mut MedicalRecord) {
        set_opt(&mut record.medical_history, self.medical_history.clone());
        set_opt(&mut record.allergies, self.allergies.clone());
        set_opt(&mut record.medications, self.medications.clone());
        set_opt(&mut record.diseases, self.diseases.clone());
        set_opt(&mut record.surgeries, self.surgeries.clone());
        set_opt(&mut record.notes, self.notes.clone());
        record.updated_at = Utc::now();
    }
}

// =============================================================================
// Roles
// =============================================================================

/// Create role request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
}

impl CreateRoleRequest {
    pub fn into_entity(self) -> Role {
        Role {
            name: self.name,
            ..Default::default()
        }
    }
}

/// Update role request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[serde(rename = "nombre", default)]
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: Option<String>,
}

impl UpdateRoleRequest {
    pub fn apply_to(self, role: &mut Role) {
        set(&mut role.name, self.name);
        role.updated_at = Utc::now();
    }
}

// =============================================================================
// Users
// =============================================================================

/// Create user request.
///
/// `username` and `password` may be omitted; the service fills defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(rename = "nombres", default)]
    #[validate(length(max = 100))]
    pub first_names: Option<String>,

    #[serde(rename = "apellidos", default)]
    #[validate(length(max = 100))]
    pub last_names: Option<String>,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(max = 10))]
    pub document_type: Option<String>,

    #[serde(rename = "documento", default)]
    #[validate(length(max = 20))]
    pub document: Option<String>,

    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "genero", default)]
    #[validate(length(max = 1))]
    pub gender: Option<String>,

    #[serde(rename = "email", alias = "correo", default)]
    #[validate(email(message = "Invalid email format"), length(max = 150))]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[serde(rename = "direccion", default)]
    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Username must be at most 50 characters"))]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "Password must be at most 100 characters"))]
    pub password: Option<String>,

    #[serde(rename = "activo", default)]
    pub active: Option<bool>,

    #[serde(rename = "rol", default)]
    pub role: Option<EntityRef>,
}

impl CreateUserRequest {
    /// Map profile fields onto a new user. Credentials and role are set by the service.
    pub fn profile_into_entity(&self) -> User {
        User {
            first_names: self.first_names.clone(),
            last_names: self.last_names.clone(),
            document_type: self.document_type.clone(),
            document: non_blank(self.document.clone()),
            birth_date: self.birth_date,
            gender: self.gender.clone(),
            email: non_blank(self.email.clone()),
            phone: self.phone.clone(),
            address: self.address.clone(),
            active: self.active.unwrap_or(true),
            ..Default::default()
        }
    }
}

/// Update user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(rename = "nombres", default)]
    #[validate(length(max = 100))]
    pub first_names: Option<String>,

    #[serde(rename = "apellidos", default)]
    #[validate(length(max = 100))]
    pub last_names: Option<String>,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(max = 10))]
    pub document_type: Option<String>,

    #[serde(rename = "documento", default)]
    #[validate(length(max = 20))]
    pub document: Option<String>,

    #[serde(rename = "fechaNacimiento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "genero", default)]
    #[validate(length(max = 1))]
    pub gender: Option<String>,

    #[serde(rename = "email", alias = "correo", default)]
    #[validate(email(message = "Invalid email format"), length(max = 150))]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[serde(rename = "direccion", default)]
    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: Option<String>,

    /// New password; blank keeps the current one
    #[serde(default)]
    #[validate(length(max = 100))]
    pub password: Option<String>,

    #[serde(rename = "activo", default)]
    pub active: Option<bool>,

    #[serde(rename = "rol", default)]
    pub role: Option<EntityRef>,
}

impl UpdateUserRequest {
    /// Copy the provided profile fields. Password and role are handled by the service.
    pub fn apply_profile_to(&self, user: &mut User) {
        set_opt(&mut user.first_names, self.first_names.clone());
        set_opt(&mut user.last_names, self.last_names.clone());
        set_opt(&mut user.document_type, self.document_type.clone());
        set_opt(&mut user.document, non_blank(self.document.clone()));
        set_opt(&mut user.birth_date, self.birth_date);
        set_opt(&mut user.gender, self.gender.clone());
        set_opt(&mut user.email, non_blank(self.email.clone()));
        set_opt(&mut user.phone, self.phone.clone());
        set_opt(&mut user.address, self.address.clone());
        set(&mut user.username, self.username.clone());
        set(&mut user.active, self.active);
        user.updated_at = Utc::now();
    }
}

/// Body of `PUT /api/usuarios/{id}/estado`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserStatusRequest {
    #[serde(rename = "activo", default)]
    #[validate(required(message = "El campo 'activo' es requerido"))]
    pub active: Option<bool>,
}
