//! Response DTOs
//!
//! Data structures for API responses, plus the entity -> DTO mapping.
//! Related records are embedded as compact summaries.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::{
    Appointment, AppointmentStatus, AppointmentType, Dentist, MedicalRecord, Patient, Role, User,
};
use crate::shared::time_format;

/// Reference to a related record by id only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdRef {
    pub id: i64,
}

// =============================================================================
// Patients
// =============================================================================

/// Patient response
#[derive(Debug, Clone, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    #[serde(rename = "tipoDocumento")]
    pub document_type: Option<String>,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
    #[serde(rename = "correo")]
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "contactoEmergenciaNombre")]
    pub emergency_contact_name: Option<String>,
    #[serde(rename = "contactoEmergenciaParentesco")]
    pub emergency_contact_relationship: Option<String>,
    #[serde(rename = "contactoEmergenciaTelefono")]
    pub emergency_contact_phone: Option<String>,
    #[serde(rename = "alergias")]
    pub allergies: Option<String>,
    #[serde(rename = "medicamentos")]
    pub medications: Option<String>,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            document_type: p.document_type,
            document: p.document,
            birth_date: p.birth_date,
            gender: p.gender,
            email: p.email,
            phone: p.phone,
            address: p.address,
            emergency_contact_name: p.emergency_contact_name,
            emergency_contact_relationship: p.emergency_contact_relationship,
            emergency_contact_phone: p.emergency_contact_phone,
            allergies: p.allergies,
            medications: p.medications,
            notes: p.notes,
        }
    }
}

/// Patient as embedded in appointments and medical records
#[derive(Debug, Clone, Serialize)]
pub struct PatientSummary {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    #[serde(rename = "documento")]
    pub document: String,
}

impl From<&Patient> for PatientSummary {
    fn from(p: &Patient) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            document: p.document.clone(),
        }
    }
}

// =============================================================================
// Dentists
// =============================================================================

/// Dentist response
#[derive(Debug, Clone, Serialize)]
pub struct DentistResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "matricula")]
    pub license_number: String,
    #[serde(rename = "tipoDocumento")]
    pub document_type: Option<String>,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "universidad")]
    pub university: Option<String>,
    #[serde(rename = "anoGraduacion")]
    pub graduation_year: Option<i32>,
    #[serde(rename = "experiencia")]
    pub years_of_experience: Option<i32>,
    #[serde(rename = "especialidades")]
    pub specialties: Option<String>,
    #[serde(rename = "contactoEmergenciaNombre")]
    pub emergency_contact_name: Option<String>,
    #[serde(rename = "contactoEmergenciaParentesco")]
    pub emergency_contact_relationship: Option<String>,
    #[serde(rename = "contactoEmergenciaTelefono")]
    pub emergency_contact_phone: Option<String>,
    #[serde(rename = "diasTrabajo")]
    pub working_days: Option<String>,
    #[serde(rename = "horaInicio")]
    pub start_time: Option<String>,
    #[serde(rename = "horaFin")]
    pub end_time: Option<String>,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
}

impl From<Dentist> for DentistResponse {
    fn from(d: Dentist) -> Self {
        Self {
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            license_number: d.license_number,
            document_type: d.document_type,
            document: d.document,
            birth_date: d.birth_date,
            gender: d.gender,
            email: d.email,
            phone: d.phone,
            address: d.address,
            university: d.university,
            graduation_year: d.graduation_year,
            years_of_experience: d.years_of_experience,
            specialties: d.specialties,
            emergency_contact_name: d.emergency_contact_name,
            emergency_contact_relationship: d.emergency_contact_relationship,
            emergency_contact_phone: d.emergency_contact_phone,
            working_days: d.working_days,
            start_time: d.start_time,
            end_time: d.end_time,
            notes: d.notes,
        }
    }
}

/// Dentist as embedded in appointments
#[derive(Debug, Clone, Serialize)]
pub struct DentistSummary {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "matricula")]
    pub license_number: String,
}

impl From<&Dentist> for DentistSummary {
    fn from(d: &Dentist) -> Self {
        Self {
            id: d.id,
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            license_number: d.license_number.clone(),
        }
    }
}

// =============================================================================
// Appointment types
// =============================================================================

/// Appointment type response, also embedded in appointments
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentTypeResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

impl From<AppointmentType> for AppointmentTypeResponse {
    fn from(t: AppointmentType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
        }
    }
}

impl From<&AppointmentType> for AppointmentTypeResponse {
    fn from(t: &AppointmentType) -> Self {
        t.clone().into()
    }
}

// =============================================================================
// Appointments
// =============================================================================

/// Appointment response with its relations embedded
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    #[serde(rename = "paciente")]
    pub patient: Option<PatientSummary>,
    #[serde(rename = "odontologo")]
    pub dentist: Option<DentistSummary>,
    #[serde(rename = "tipoCita")]
    pub appointment_type: Option<AppointmentTypeResponse>,
    #[serde(rename = "historiaClinica")]
    pub medical_record: Option<IdRef>,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "time_format")]
    pub time: NaiveTime,
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
}

impl AppointmentResponse {
    /// Build the response from an appointment and whatever relations were found.
    pub fn assemble(
        appointment: Appointment,
        patient: Option<&Patient>,
        dentist: Option<&Dentist>,
        appointment_type: Option<&AppointmentType>,
    ) -> Self {
        Self {
            id: appointment.id,
            patient: patient.map(PatientSummary::from),
            dentist: dentist.map(DentistSummary::from),
            appointment_type: appointment_type.map(AppointmentTypeResponse::from),
            medical_record: appointment.medical_record_id.map(|id| IdRef { id }),
            date: appointment.date,
            time: appointment.time,
            status: appointment.status,
            notes: appointment.notes,
        }
    }
}

// =============================================================================
// Medical records
// =============================================================================

/// Medical record response
#[derive(Debug, Clone, Serialize)]
pub struct MedicalRecordResponse {
    pub id: i64,
    #[serde(rename = "paciente")]
    pub patient: Option<PatientSummary>,
    #[serde(rename = "antecedentes")]
    pub medical_history: Option<String>,
    #[serde(rename = "alergias")]
    pub allergies: Option<String>,
    #[serde(rename = "medicamentos")]
    pub medications: Option<String>,
    #[serde(rename = "enfermedades")]
    pub diseases: Option<String>,
    #[serde(rename = "cirugias")]
    pub surgeries: Option<String>,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
}

impl MedicalRecordResponse {
    pub fn assemble(record: MedicalRecord, patient: Option<&Patient>) -> Self {
        Self {
            id: record.id,
            patient: patient.map(PatientSummary::from),
            medical_history: record.medical_history,
            allergies: record.allergies,
            medications: record.medications,
            diseases: record.diseases,
            surgeries: record.surgeries,
            notes: record.notes,
        }
    }
}

// =============================================================================
// Roles
// =============================================================================

/// Role response, also embedded in users
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

// =============================================================================
// Users
// =============================================================================

/// User response. The password hash never leaves the service layer.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(rename = "nombres")]
    pub first_names: Option<String>,
    #[serde(rename = "apellidos")]
    pub last_names: Option<String>,
    #[serde(rename = "tipoDocumento")]
    pub document_type: Option<String>,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    pub username: String,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "rol")]
    pub role: Option<RoleResponse>,
}

impl UserResponse {
    pub fn assemble(user: User, role: Option<&Role>) -> Self {
        Self {
            id: user.id,
            first_names: user.first_names,
            last_names: user.last_names,
            document_type: user.document_type,
            document: user.document,
            birth_date: user.birth_date,
            gender: user.gender,
            email: user.email,
            phone: user.phone,
            address: user.address,
            username: user.username,
            active: user.active,
            role: role.cloned().map(RoleResponse::from),
        }
    }
}
