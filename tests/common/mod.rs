//! Common Test Utilities
//!
//! In-memory store standing in for PostgreSQL, plus fixtures and a
//! [`TestServer`] wired through the real router.
//!
//! The store mirrors the schema in `migrations/`: unique columns answer with
//! `Conflict`, dangling foreign keys with `NotFound`, and deletes cascade the
//! same way the `ON DELETE` clauses do.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use parking_lot::Mutex;
use serde_json::{json, Value};

use dental_clinic::domain::{
    Appointment, AppointmentRepository, AppointmentType, AppointmentTypeRepository, Dentist,
    DentistRepository, MedicalRecord, MedicalRecordRepository, Patient, PatientRepository, Role,
    RoleRepository, User, UserRepository,
};
use dental_clinic::infrastructure::database::HealthProbe;
use dental_clinic::presentation::http::routes;
use dental_clinic::shared::error::AppError;
use dental_clinic::startup::{AppState, Repositories};

// =============================================================================
// In-memory store
// =============================================================================

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    fn allocate(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn remove(&mut self, id: i64) -> Result<T, AppError> {
        self.rows
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("row {} not found", id)))
    }
}

struct Db {
    patients: Table<Patient>,
    dentists: Table<Dentist>,
    appointment_types: Table<AppointmentType>,
    appointments: Table<Appointment>,
    medical_records: Table<MedicalRecord>,
    roles: Table<Role>,
    users: Table<User>,
}

impl Db {
    fn new() -> Self {
        Self {
            patients: Table::new(),
            dentists: Table::new(),
            appointment_types: Table::new(),
            appointments: Table::new(),
            medical_records: Table::new(),
            roles: Table::new(),
            users: Table::new(),
        }
    }

    fn delete_patient(&mut self, id: i64) -> Result<(), AppError> {
        self.patients.remove(id)?;
        let records: Vec<i64> = self
            .medical_records
            .rows
            .values()
            .filter(|r| r.patient_id == id)
            .map(|r| r.id)
            .collect();
        for record_id in records {
            self.delete_medical_record(record_id)?;
        }
        self.appointments.rows.retain(|_, a| a.patient_id != id);
        Ok(())
    }

    fn delete_medical_record(&mut self, id: i64) -> Result<(), AppError> {
        self.medical_records.remove(id)?;
        self.appointments
            .rows
            .retain(|_, a| a.medical_record_id != Some(id));
        Ok(())
    }
}

/// Fails with `Conflict` when another row already holds `value` in `column`.
fn ensure_unique<'a, T: 'a>(
    rows: impl Iterator<Item = &'a T>,
    self_id: i64,
    column: &str,
    value: Option<&str>,
    id_of: impl Fn(&T) -> i64,
    value_of: impl Fn(&T) -> Option<&str>,
) -> Result<(), AppError> {
    let Some(value) = value else {
        return Ok(());
    };
    let taken = rows
        .filter(|row| id_of(*row) != self_id)
        .any(|row| value_of(row) == Some(value));
    if taken {
        return Err(AppError::Conflict(format!(
            "duplicate key value violates unique constraint on {}",
            column
        )));
    }
    Ok(())
}

fn ensure_reference(present: bool, entity: &str, id: i64) -> Result<(), AppError> {
    if present {
        Ok(())
    } else {
        Err(AppError::NotFound(format!(
            "foreign key violation: {} {} does not exist",
            entity, id
        )))
    }
}

/// Columns every table carries.
trait Row: Clone {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn stamp(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_row {
    ($($entity:ty),* $(,)?) => {
        $(
            impl Row for $entity {
                fn id(&self) -> i64 {
                    self.id
                }

                fn set_id(&mut self, id: i64) {
                    self.id = id;
                }

                fn stamp(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
                    self.created_at = created_at;
                    self.updated_at = updated_at;
                }

                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }
            }
        )*
    };
}

impl_row!(Patient, Dentist, AppointmentType, Appointment, MedicalRecord, Role, User);

/// Insert when the id is 0, otherwise replace the stored row.
fn upsert<T: Row>(table: &mut Table<T>, row: &T) -> Result<T, AppError> {
    let mut row = row.clone();
    let now = Utc::now();
    if row.id() == 0 {
        row.set_id(table.allocate());
        row.stamp(now, now);
    } else {
        let created_at = table
            .rows
            .get(&row.id())
            .map(Row::created_at)
            .ok_or_else(|| AppError::NotFound(format!("row {} not found", row.id())))?;
        row.stamp(created_at, now);
    }
    table.rows.insert(row.id(), row.clone());
    Ok(row)
}

/// Shared in-memory database implementing every repository trait.
#[derive(Clone)]
pub struct InMemoryStore {
    db: Arc<Mutex<Db>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            db: Arc::new(Mutex::new(Db::new())),
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            patients: Arc::new(self.clone()),
            dentists: Arc::new(self.clone()),
            appointment_types: Arc::new(self.clone()),
            appointments: Arc::new(self.clone()),
            medical_records: Arc::new(self.clone()),
            roles: Arc::new(self.clone()),
            users: Arc::new(self.clone()),
        }
    }

    pub fn patient_count(&self) -> usize {
        self.db.lock().patients.rows.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.db.lock().appointments.rows.len()
    }

    pub fn medical_record_count(&self) -> usize {
        self.db.lock().medical_records.rows.len()
    }

    pub fn user_count(&self) -> usize {
        self.db.lock().users.rows.len()
    }

    pub fn stored_user(&self, id: i64) -> Option<User> {
        self.db.lock().users.get(id)
    }
}

#[async_trait]
impl PatientRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Patient>, AppError> {
        Ok(self.db.lock().patients.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        Ok(self.db.lock().patients.get(id))
    }

    async fn save(&self, patient: &Patient) -> Result<Patient, AppError> {
        let mut db = self.db.lock();
        ensure_unique(
            db.patients.rows.values(),
            patient.id,
            "patients.document",
            Some(patient.document.as_str()),
            |p: &Patient| p.id,
            |p| Some(p.document.as_str()),
        )?;
        ensure_unique(
            db.patients.rows.values(),
            patient.id,
            "patients.email",
            patient.email.as_deref(),
            |p: &Patient| p.id,
            |p| p.email.as_deref(),
        )?;
        upsert(&mut db.patients, patient)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().patients.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.db.lock().delete_patient(id)
    }
}

#[async_trait]
impl DentistRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Dentist>, AppError> {
        Ok(self.db.lock().dentists.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dentist>, AppError> {
        Ok(self.db.lock().dentists.get(id))
    }

    async fn save(&self, dentist: &Dentist) -> Result<Dentist, AppError> {
        let mut db = self.db.lock();
        ensure_unique(
            db.dentists.rows.values(),
            dentist.id,
            "dentists.license_number",
            Some(dentist.license_number.as_str()),
            |d: &Dentist| d.id,
            |d| Some(d.license_number.as_str()),
        )?;
        ensure_unique(
            db.dentists.rows.values(),
            dentist.id,
            "dentists.document",
            dentist.document.as_deref(),
            |d: &Dentist| d.id,
            |d| d.document.as_deref(),
        )?;
        ensure_unique(
            db.dentists.rows.values(),
            dentist.id,
            "dentists.email",
            dentist.email.as_deref(),
            |d: &Dentist| d.id,
            |d| d.email.as_deref(),
        )?;
        upsert(&mut db.dentists, dentist)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().dentists.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut db = self.db.lock();
        db.dentists.remove(id)?;
        db.appointments.rows.retain(|_, a| a.dentist_id != id);
        Ok(())
    }
}

#[async_trait]
impl AppointmentTypeRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<AppointmentType>, AppError> {
        Ok(self.db.lock().appointment_types.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AppointmentType>, AppError> {
        Ok(self.db.lock().appointment_types.get(id))
    }

    async fn save(&self, appointment_type: &AppointmentType) -> Result<AppointmentType, AppError> {
        let mut db = self.db.lock();
        upsert(&mut db.appointment_types, appointment_type)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().appointment_types.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut db = self.db.lock();
        db.appointment_types.remove(id)?;
        db.appointments.rows.retain(|_, a| a.appointment_type_id != id);
        Ok(())
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(self.db.lock().appointments.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        Ok(self.db.lock().appointments.get(id))
    }

    async fn save(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut db = self.db.lock();
        ensure_reference(
            db.patients.contains(appointment.patient_id),
            "patients",
            appointment.patient_id,
        )?;
        ensure_reference(
            db.dentists.contains(appointment.dentist_id),
            "dentists",
            appointment.dentist_id,
        )?;
        ensure_reference(
            db.appointment_types.contains(appointment.appointment_type_id),
            "appointment_types",
            appointment.appointment_type_id,
        )?;
        if let Some(record_id) = appointment.medical_record_id {
            ensure_reference(
                db.medical_records.contains(record_id),
                "medical_records",
                record_id,
            )?;
        }
        upsert(&mut db.appointments, appointment)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().appointments.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.db.lock().appointments.remove(id).map(|_| ())
    }
}

#[async_trait]
impl MedicalRecordRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<MedicalRecord>, AppError> {
        Ok(self.db.lock().medical_records.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MedicalRecord>, AppError> {
        Ok(self.db.lock().medical_records.get(id))
    }

    async fn save(&self, record: &MedicalRecord) -> Result<MedicalRecord, AppError> {
        let mut db = self.db.lock();
        ensure_reference(db.patients.contains(record.patient_id), "patients", record.patient_id)?;
        let taken = db
            .medical_records
            .rows
            .values()
            .any(|r| r.id != record.id && r.patient_id == record.patient_id);
        if taken {
            return Err(AppError::Conflict(
                "duplicate key value violates unique constraint on medical_records.patient_id"
                    .into(),
            ));
        }
        upsert(&mut db.medical_records, record)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().medical_records.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.db.lock().delete_medical_record(id)
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Role>, AppError> {
        Ok(self.db.lock().roles.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, AppError> {
        Ok(self.db.lock().roles.get(id))
    }

    async fn save(&self, role: &Role) -> Result<Role, AppError> {
        let mut db = self.db.lock();
        ensure_unique(
            db.roles.rows.values(),
            role.id,
            "roles.name",
            Some(role.name.as_str()),
            |r: &Role| r.id,
            |r| Some(r.name.as_str()),
        )?;
        upsert(&mut db.roles, role)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().roles.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut db = self.db.lock();
        db.roles.remove(id)?;
        db.users.rows.retain(|_, u| u.role_id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.db.lock().users.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.db.lock().users.get(id))
    }

    async fn save(&self, user: &User) -> Result<User, AppError> {
        let mut db = self.db.lock();
        ensure_reference(db.roles.contains(user.role_id), "roles", user.role_id)?;
        ensure_unique(
            db.users.rows.values(),
            user.id,
            "users.username",
            Some(user.username.as_str()),
            |u: &User| u.id,
            |u| Some(u.username.as_str()),
        )?;
        ensure_unique(
            db.users.rows.values(),
            user.id,
            "users.document",
            user.document.as_deref(),
            |u: &User| u.id,
            |u| u.document.as_deref(),
        )?;
        ensure_unique(
            db.users.rows.values(),
            user.id,
            "users.email",
            user.email.as_deref(),
            |u: &User| u.id,
            |u| u.email.as_deref(),
        )?;
        upsert(&mut db.users, user)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.db.lock().users.contains(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.db.lock().users.remove(id).map(|_| ())
    }
}

// =============================================================================
// Health probe
// =============================================================================

/// Probe with a fixed answer.
pub struct StubProbe {
    pub up: bool,
}

#[async_trait]
impl HealthProbe for StubProbe {
    async fn ping(&self) -> Result<(), AppError> {
        if self.up {
            Ok(())
        } else {
            Err(AppError::Internal("connection refused".into()))
        }
    }
}

// =============================================================================
// Test application
// =============================================================================

/// Router over an in-memory store, driven through `axum-test`.
pub struct TestApp {
    pub server: TestServer,
    pub store: InMemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_probe(true)
    }

    pub fn with_probe(database_up: bool) -> Self {
        let store = InMemoryStore::new();
        let state = AppState::new(
            store.repositories(),
            Arc::new(StubProbe { up: database_up }),
        );
        let server = TestServer::new(routes::create_router(state)).expect("test server");
        Self { server, store }
    }

    /// POST `body` to `path` and return the created resource's id.
    pub async fn create(&self, path: &str, body: Value) -> i64 {
        let response = self.server.post(path).json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_i64()
            .expect("created resource has an id")
    }

    pub async fn create_patient(&self) -> i64 {
        self.create("/api/pacientes", patient_body()).await
    }

    pub async fn create_dentist(&self) -> i64 {
        self.create("/api/odontologos", dentist_body()).await
    }

    pub async fn create_appointment_type(&self) -> i64 {
        self.create(
            "/api/tipos-cita",
            json!({ "nombre": "Limpieza", "descripcion": "Profilaxis dental" }),
        )
        .await
    }

    pub async fn create_role(&self, name: &str) -> i64 {
        self.create("/api/roles", json!({ "nombre": name })).await
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Unique digits for document and license columns.
pub fn unique_digits() -> String {
    (10_000_000u64..99_999_999).fake::<u64>().to_string()
}

pub fn patient_body() -> Value {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    json!({
        "nombre": first,
        "apellido": last,
        "tipoDocumento": "CC",
        "documento": unique_digits(),
        "fechaNacimiento": "1990-05-17",
        "genero": "F",
        "correo": format!("{}.{}", unique_digits(), SafeEmail().fake::<String>()),
        "telefono": "3001234567",
        "alergias": "Penicilina"
    })
}

pub fn dentist_body() -> Value {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    json!({
        "nombre": first,
        "apellido": last,
        "matricula": format!("MP-{}", unique_digits()),
        "especialidades": "Ortodoncia",
        "horaInicio": "08:00",
        "horaFin": "17:00"
    })
}
