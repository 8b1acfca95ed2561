use crate::commands::{index_by_key, patch_text, CmdMessage, CmdOutcome};
use crate::error::{CabinetError, Result};
use crate::model::appointment::{Appointment, Status, UNSET};
use crate::model::doctor::Doctor;
use crate::model::medicine::Medicine;
use crate::model::patient::Patient;
use crate::model::{appointment, doctor, medicine, patient};
use crate::store::Store;

#[derive(Debug, Clone, Default)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub allergies: Option<String>,
    pub medical_history: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub phone: Option<String>,
    pub schedule: Option<String>,
    pub consultation_fee: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct MedicinePatch {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub price: Option<f32>,
    pub quantity: Option<i32>,
    pub expiry_date: Option<String>,
}

/// Itemized bill for one completed appointment.
#[derive(Debug, Clone)]
pub struct Bill {
    pub appointment: Appointment,
    pub patient_name: String,
    pub doctor_name: String,
}

pub fn add_patient(
    patients: &mut Store<Patient>,
    name: String,
    address: String,
    phone: String,
    age: i32,
    gender: char,
    blood_group: String,
    allergies: String,
    medical_history: String,
) -> Result<CmdOutcome<Patient>> {
    let record = Patient {
        id: patients.next_key(patient::ID_BASE),
        name,
        address,
        phone,
        age,
        gender,
        blood_group,
        allergies,
        medical_history,
    };
    let added = record.clone();
    patients.create(record)?;
    Ok(CmdOutcome::new(added.clone()).with_message(CmdMessage::success(format!(
        "Patient registered. Id: {}",
        added.id
    ))))
}

pub fn update_patient(
    patients: &mut Store<Patient>,
    id: i32,
    patch: &PatientPatch,
) -> Result<CmdOutcome<Patient>> {
    let index = index_by_key(patients, id, "patient")?;
    let record = patients
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("patient {} not found", id)))?;

    patch_text(&mut record.name, &patch.name);
    patch_text(&mut record.address, &patch.address);
    patch_text(&mut record.phone, &patch.phone);
    patch_text(&mut record.allergies, &patch.allergies);
    patch_text(&mut record.medical_history, &patch.medical_history);
    if let Some(age) = patch.age {
        record.age = age;
    }

    let updated = record.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Patient {} updated",
        updated.id
    ))))
}

pub fn delete_patient(patients: &mut Store<Patient>, id: i32) -> Result<CmdOutcome<Patient>> {
    let index = index_by_key(patients, id, "patient")?;
    let removed = patients.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone()).with_message(CmdMessage::success(format!(
        "Patient {} deleted",
        removed.id
    ))))
}

pub fn search_patients(
    patients: &Store<Patient>,
    term: &str,
) -> Result<CmdOutcome<Vec<Patient>>> {
    let matches: Vec<Patient> = patients
        .search(term)
        .filter_map(|i| patients.get(i).cloned())
        .collect();
    Ok(CmdOutcome::new(matches))
}

pub fn add_doctor(
    doctors: &mut Store<Doctor>,
    name: String,
    specialization: String,
    phone: String,
    schedule: String,
    consultation_fee: i32,
) -> Result<CmdOutcome<Doctor>> {
    let record = Doctor {
        id: doctors.next_key(doctor::ID_BASE),
        name,
        specialization,
        phone,
        schedule,
        consultation_fee,
    };
    let added = record.clone();
    doctors.create(record)?;
    Ok(CmdOutcome::new(added.clone()).with_message(CmdMessage::success(format!(
        "Doctor registered. Id: {}",
        added.id
    ))))
}

pub fn update_doctor(
    doctors: &mut Store<Doctor>,
    id: i32,
    patch: &DoctorPatch,
) -> Result<CmdOutcome<Doctor>> {
    let index = index_by_key(doctors, id, "doctor")?;
    let record = doctors
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("doctor {} not found", id)))?;

    patch_text(&mut record.name, &patch.name);
    patch_text(&mut record.specialization, &patch.specialization);
    patch_text(&mut record.phone, &patch.phone);
    patch_text(&mut record.schedule, &patch.schedule);
    if let Some(fee) = patch.consultation_fee {
        record.consultation_fee = fee;
    }

    let updated = record.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Doctor {} updated",
        updated.id
    ))))
}

pub fn delete_doctor(doctors: &mut Store<Doctor>, id: i32) -> Result<CmdOutcome<Doctor>> {
    let index = index_by_key(doctors, id, "doctor")?;
    let removed = doctors.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone()).with_message(CmdMessage::success(format!(
        "Doctor {} deleted",
        removed.id
    ))))
}

pub fn search_doctors(doctors: &Store<Doctor>, term: &str) -> Result<CmdOutcome<Vec<Doctor>>> {
    let matches: Vec<Doctor> = doctors
        .search(term)
        .filter_map(|i| doctors.get(i).cloned())
        .collect();
    Ok(CmdOutcome::new(matches))
}

pub fn add_medicine(
    medicines: &mut Store<Medicine>,
    name: String,
    manufacturer: String,
    price: f32,
    quantity: i32,
    expiry_date: String,
) -> Result<CmdOutcome<Medicine>> {
    let record = Medicine {
        id: medicines.next_key(medicine::ID_BASE),
        name,
        manufacturer,
        price,
        quantity,
        expiry_date,
    };
    let added = record.clone();
    medicines.create(record)?;
    Ok(CmdOutcome::new(added.clone()).with_message(CmdMessage::success(format!(
        "Medicine added. Id: {}",
        added.id
    ))))
}

pub fn update_medicine(
    medicines: &mut Store<Medicine>,
    id: i32,
    patch: &MedicinePatch,
) -> Result<CmdOutcome<Medicine>> {
    let index = index_by_key(medicines, id, "medicine")?;
    let record = medicines
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("medicine {} not found", id)))?;

    patch_text(&mut record.name, &patch.name);
    patch_text(&mut record.manufacturer, &patch.manufacturer);
    patch_text(&mut record.expiry_date, &patch.expiry_date);
    if let Some(price) = patch.price {
        record.price = price;
    }
    if let Some(quantity) = patch.quantity {
        record.quantity = quantity;
    }

    let updated = record.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Medicine {} updated",
        updated.id
    ))))
}

pub fn delete_medicine(medicines: &mut Store<Medicine>, id: i32) -> Result<CmdOutcome<Medicine>> {
    let index = index_by_key(medicines, id, "medicine")?;
    let removed = medicines.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone()).with_message(CmdMessage::success(format!(
        "Medicine {} deleted",
        removed.id
    ))))
}

pub fn search_medicines(
    medicines: &Store<Medicine>,
    term: &str,
) -> Result<CmdOutcome<Vec<Medicine>>> {
    let matches: Vec<Medicine> = medicines
        .search(term)
        .filter_map(|i| medicines.get(i).cloned())
        .collect();
    Ok(CmdOutcome::new(matches))
}

/// Book an appointment. Both referenced records must exist; the fee starts
/// at the doctor's consultation fee and grows at completion.
pub fn schedule(
    appointments: &mut Store<Appointment>,
    patients: &Store<Patient>,
    doctors: &Store<Doctor>,
    patient_id: i32,
    doctor_id: i32,
    date: String,
    time: String,
) -> Result<CmdOutcome<Appointment>> {
    index_by_key(patients, patient_id, "patient")?;
    let doctor_index = index_by_key(doctors, doctor_id, "doctor")?;
    let fee = doctors
        .get(doctor_index)
        .ok_or_else(|| CabinetError::NotFound(format!("doctor {} not found", doctor_id)))?
        .consultation_fee as f32;

    let record = Appointment {
        id: appointments.next_key(appointment::ID_BASE),
        patient_id,
        doctor_id,
        date,
        time,
        diagnosis: UNSET.into(),
        prescription: UNSET.into(),
        fee,
        status: Status::Scheduled,
    };
    let booked = record.clone();
    appointments.create(record)?;
    Ok(CmdOutcome::new(booked.clone()).with_message(CmdMessage::success(format!(
        "Appointment scheduled. Id: {}",
        booked.id
    ))))
}

/// Close out a scheduled appointment with its diagnosis, prescription, and
/// any extra charges on top of the consultation fee.
pub fn complete(
    appointments: &mut Store<Appointment>,
    id: i32,
    diagnosis: String,
    prescription: String,
    extra_charges: f32,
) -> Result<CmdOutcome<Appointment>> {
    let index = index_by_key(appointments, id, "appointment")?;
    let record = appointments
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("appointment {} not found", id)))?;
    if record.status != Status::Scheduled {
        return Err(CabinetError::InvalidInput(format!(
            "appointment {} is {}, not Scheduled",
            id,
            record.status.as_str()
        )));
    }

    record.diagnosis = diagnosis;
    record.prescription = prescription;
    record.fee += extra_charges;
    record.status = Status::Completed;

    let updated = record.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Appointment {} completed. Total fee: ${:.2}",
        updated.id, updated.fee
    ))))
}

/// Cancel a scheduled appointment. Completed and cancelled ones stay as
/// they are.
pub fn cancel(appointments: &mut Store<Appointment>, id: i32) -> Result<CmdOutcome<Appointment>> {
    let index = index_by_key(appointments, id, "appointment")?;
    let record = appointments
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("appointment {} not found", id)))?;
    if record.status != Status::Scheduled {
        return Err(CabinetError::InvalidInput(format!(
            "appointment {} is {}, not Scheduled",
            id,
            record.status.as_str()
        )));
    }

    record.status = Status::Cancelled;
    let updated = record.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Appointment {} cancelled",
        updated.id
    ))))
}

/// Scheduled appointments for one doctor, in store order.
pub fn doctor_schedule(
    appointments: &Store<Appointment>,
    doctor_id: i32,
) -> Result<CmdOutcome<Vec<Appointment>>> {
    let upcoming: Vec<Appointment> = appointments
        .records()
        .iter()
        .filter(|a| a.doctor_id == doctor_id && a.status == Status::Scheduled)
        .cloned()
        .collect();
    Ok(CmdOutcome::new(upcoming))
}

/// Completed appointments for one patient, in store order.
pub fn patient_history(
    appointments: &Store<Appointment>,
    patient_id: i32,
) -> Result<CmdOutcome<Vec<Appointment>>> {
    let visits: Vec<Appointment> = appointments
        .records()
        .iter()
        .filter(|a| a.patient_id == patient_id && a.status == Status::Completed)
        .cloned()
        .collect();
    Ok(CmdOutcome::new(visits))
}

/// Bill for a completed appointment. Names of deleted patients or doctors
/// render as "Unknown" rather than failing the bill.
pub fn bill(
    appointments: &Store<Appointment>,
    patients: &Store<Patient>,
    doctors: &Store<Doctor>,
    id: i32,
) -> Result<CmdOutcome<Bill>> {
    let index = index_by_key(appointments, id, "appointment")?;
    let appointment = appointments
        .get(index)
        .ok_or_else(|| CabinetError::NotFound(format!("appointment {} not found", id)))?
        .clone();
    if appointment.status != Status::Completed {
        return Err(CabinetError::InvalidInput(format!(
            "appointment {} is {}, not Completed",
            id,
            appointment.status.as_str()
        )));
    }

    let patient_name = patients
        .find_by_key(appointment.patient_id)
        .and_then(|i| patients.get(i))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown".into());
    let doctor_name = doctors
        .find_by_key(appointment.doctor_id)
        .and_then(|i| doctors.get(i))
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "Unknown".into());

    Ok(CmdOutcome::new(Bill {
        appointment,
        patient_name,
        doctor_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic() -> (Store<Patient>, Store<Doctor>, Store<Appointment>) {
        let mut patients = Store::with_capacity(patient::DEFAULT_CAPACITY);
        add_patient(
            &mut patients,
            "Ada".into(),
            "1 Main St".into(),
            "555".into(),
            30,
            'F',
            "O+".into(),
            "None".into(),
            "None".into(),
        )
        .unwrap();

        let mut doctors = Store::with_capacity(doctor::DEFAULT_CAPACITY);
        add_doctor(
            &mut doctors,
            "Dr. Grey".into(),
            "Cardiology".into(),
            "556".into(),
            "Mon-Fri 9:00-13:00".into(),
            150,
        )
        .unwrap();

        (
            patients,
            doctors,
            Store::with_capacity(appointment::DEFAULT_CAPACITY),
        )
    }

    fn booked() -> (Store<Patient>, Store<Doctor>, Store<Appointment>) {
        let (patients, doctors, mut appointments) = clinic();
        schedule(
            &mut appointments,
            &patients,
            &doctors,
            1000,
            2000,
            "01/09/2026".into(),
            "10:00".into(),
        )
        .unwrap();
        (patients, doctors, appointments)
    }

    #[test]
    fn ids_start_at_their_domain_base() {
        let (patients, doctors, appointments) = booked();
        assert_eq!(patients.get(0).unwrap().id, 1000);
        assert_eq!(doctors.get(0).unwrap().id, 2000);
        assert_eq!(appointments.get(0).unwrap().id, 4000);
    }

    #[test]
    fn schedule_copies_the_consultation_fee_and_placeholders() {
        let (_, _, appointments) = booked();
        let appointment = appointments.get(0).unwrap();
        assert_eq!(appointment.fee, 150.0);
        assert_eq!(appointment.status, Status::Scheduled);
        assert_eq!(appointment.diagnosis, UNSET);
        assert_eq!(appointment.prescription, UNSET);
    }

    #[test]
    fn schedule_requires_existing_patient_and_doctor() {
        let (patients, doctors, mut appointments) = clinic();
        assert!(matches!(
            schedule(
                &mut appointments,
                &patients,
                &doctors,
                9999,
                2000,
                "01/09/2026".into(),
                "10:00".into()
            ),
            Err(CabinetError::NotFound(_))
        ));
        assert!(schedule(
            &mut appointments,
            &patients,
            &doctors,
            1000,
            9999,
            "01/09/2026".into(),
            "10:00".into()
        )
        .is_err());
        assert!(appointments.is_empty());
    }

    #[test]
    fn complete_adds_extra_charges_to_the_fee() {
        let (_, _, mut appointments) = booked();
        let updated = complete(
            &mut appointments,
            4000,
            "Flu".into(),
            "Rest".into(),
            25.0,
        )
        .unwrap()
        .value;
        assert_eq!(updated.fee, 175.0);
        assert_eq!(updated.status, Status::Completed);
        assert_eq!(updated.diagnosis, "Flu");
    }

    #[test]
    fn complete_requires_scheduled_status() {
        let (_, _, mut appointments) = booked();
        cancel(&mut appointments, 4000).unwrap();
        assert!(matches!(
            complete(&mut appointments, 4000, "Flu".into(), "Rest".into(), 0.0),
            Err(CabinetError::InvalidInput(_))
        ));
    }

    #[test]
    fn cancel_is_single_shot() {
        let (_, _, mut appointments) = booked();
        cancel(&mut appointments, 4000).unwrap();
        assert_eq!(appointments.get(0).unwrap().status, Status::Cancelled);
        assert!(cancel(&mut appointments, 4000).is_err());
    }

    #[test]
    fn doctor_schedule_lists_only_scheduled() {
        let (patients, doctors, mut appointments) = booked();
        schedule(
            &mut appointments,
            &patients,
            &doctors,
            1000,
            2000,
            "02/09/2026".into(),
            "11:00".into(),
        )
        .unwrap();
        complete(&mut appointments, 4000, "Flu".into(), "Rest".into(), 0.0).unwrap();

        let upcoming = doctor_schedule(&appointments, 2000).unwrap().value;
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, 4001);
    }

    #[test]
    fn patient_history_lists_only_completed() {
        let (_, _, mut appointments) = booked();
        assert!(patient_history(&appointments, 1000).unwrap().value.is_empty());
        complete(&mut appointments, 4000, "Flu".into(), "Rest".into(), 0.0).unwrap();
        let visits = patient_history(&appointments, 1000).unwrap().value;
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].diagnosis, "Flu");
    }

    #[test]
    fn bill_requires_completion_and_survives_deleted_references() {
        let (mut patients, doctors, mut appointments) = booked();
        assert!(bill(&appointments, &patients, &doctors, 4000).is_err());

        complete(&mut appointments, 4000, "Flu".into(), "Rest".into(), 25.0).unwrap();
        let bill_out = bill(&appointments, &patients, &doctors, 4000).unwrap().value;
        assert_eq!(bill_out.patient_name, "Ada");
        assert_eq!(bill_out.doctor_name, "Dr. Grey");
        assert_eq!(bill_out.appointment.fee, 175.0);

        delete_patient(&mut patients, 1000).unwrap();
        let bill_out = bill(&appointments, &patients, &doctors, 4000).unwrap().value;
        assert_eq!(bill_out.patient_name, "Unknown");
    }

    #[test]
    fn medicine_stock_updates_in_place() {
        let mut medicines = Store::with_capacity(medicine::DEFAULT_CAPACITY);
        add_medicine(
            &mut medicines,
            "Aspirin".into(),
            "Bayer".into(),
            3.5,
            100,
            "01/01/2028".into(),
        )
        .unwrap();
        assert_eq!(medicines.get(0).unwrap().id, 3000);

        let patch = MedicinePatch {
            quantity: Some(80),
            ..Default::default()
        };
        let updated = update_medicine(&mut medicines, 3000, &patch).unwrap().value;
        assert_eq!(updated.quantity, 80);
        assert_eq!(updated.name, "Aspirin");
    }
}
