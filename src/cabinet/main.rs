use cabinet::commands::{bank, clinic, contacts, library, students, CmdMessage, MessageLevel};
use cabinet::config::CabinetConfig;
use cabinet::error::{CabinetError, Result};
use cabinet::model::account::{Account, AccountType};
use cabinet::model::appointment::Appointment;
use cabinet::model::book::Book;
use cabinet::model::borrower::Borrower;
use cabinet::model::contact::Contact;
use cabinet::model::doctor::Doctor;
use cabinet::model::medicine::Medicine;
use cabinet::model::patient::Patient;
use cabinet::model::student::{Student, SUBJECT_COUNT};
use cabinet::model::user::User;
use cabinet::store::{snapshot, Record, Store};
use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{
    BankAction, Cli, ClinicAction, Commands, ContactsAction, LibraryAction, StudentsAction,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    data_dir: PathBuf,
    config: CabinetConfig,
}

impl AppContext {
    fn load<R: Record>(&self, capacity: usize) -> Result<Store<R>> {
        snapshot::load(&self.data_dir.join(R::SNAPSHOT_FILE), capacity)
    }

    fn save<R: Record>(&self, store: &Store<R>) -> Result<()> {
        snapshot::save(&self.data_dir.join(R::SNAPSHOT_FILE), store)
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Contacts { action } => handle_contacts(&ctx, action),
        Commands::Bank { action } => handle_bank(&ctx, action),
        Commands::Students { action } => handle_students(&ctx, action),
        Commands::Library { action } => handle_library(&ctx, action),
        Commands::Clinic { action } => handle_clinic(&ctx, action),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Check => handle_check(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("CABINET_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "cabinet", "cabinet")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    CabinetError::InvalidInput(
                        "could not determine a data directory; pass --data-dir".into(),
                    )
                })?,
        },
    };
    let config = CabinetConfig::load(&data_dir)?;
    Ok(AppContext { data_dir, config })
}

fn handle_contacts(ctx: &AppContext, action: ContactsAction) -> Result<()> {
    let mut store: Store<Contact> = ctx.load(ctx.config.capacities.contacts)?;
    match action {
        ContactsAction::Add {
            name,
            phone,
            email,
            address,
        } => {
            let result = contacts::add(
                &mut store,
                Contact {
                    name,
                    phone,
                    email,
                    address,
                },
            )?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        ContactsAction::List => print_contacts(&store.all()),
        ContactsAction::Search { term } => {
            let result = contacts::search(&store, &term)?;
            print_contacts(&result.value);
        }
        ContactsAction::Edit {
            term,
            name,
            phone,
            email,
            address,
        } => {
            let patch = contacts::ContactPatch {
                name,
                phone,
                email,
                address,
            };
            let result = contacts::edit(&mut store, &term, &patch)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        ContactsAction::Delete { term } => {
            let result = contacts::delete(&mut store, &term)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_bank(ctx: &AppContext, action: BankAction) -> Result<()> {
    let mut store: Store<Account> = ctx.load(ctx.config.capacities.accounts)?;
    let now = Utc::now();
    match action {
        BankAction::Open {
            name,
            address,
            phone,
            account_type,
            deposit,
        } => {
            let account_type = AccountType::parse(&account_type)?;
            let result =
                bank::open_account(&mut store, name, address, phone, account_type, deposit, now)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        BankAction::List => print_accounts(&store.all()),
        BankAction::Show { number } => {
            let result = bank::find(&store, number)?;
            print_accounts(&[result.value]);
        }
        BankAction::Deposit { number, amount } => {
            let result = bank::deposit(&mut store, number, amount, now)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        BankAction::Withdraw { number, amount } => {
            let result = bank::withdraw(&mut store, number, amount, now)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        BankAction::Transfer { from, to, amount } => {
            let result = bank::transfer(&mut store, from, to, amount, now)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        BankAction::Modify {
            number,
            name,
            address,
            phone,
            account_type,
        } => {
            let account_type = account_type
                .as_deref()
                .map(AccountType::parse)
                .transpose()?;
            let patch = bank::AccountPatch {
                name,
                address,
                phone,
                account_type,
            };
            let result = bank::modify(&mut store, number, &patch, now)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        BankAction::Close { number } => {
            let result = bank::close(&mut store, number)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_students(ctx: &AppContext, action: StudentsAction) -> Result<()> {
    let mut store: Store<Student> = ctx.load(ctx.config.capacities.students)?;
    match action {
        StudentsAction::Enroll {
            roll_number,
            name,
            age,
            gender,
            course,
            semester,
        } => {
            let result =
                students::enroll(&mut store, roll_number, name, age, gender, course, semester)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        StudentsAction::List => print_students(&store.all()),
        StudentsAction::Search { term } => {
            let result = students::search(&store, &term)?;
            print_students(&result.value);
        }
        StudentsAction::Update {
            roll_number,
            name,
            age,
            gender,
            course,
            semester,
        } => {
            let patch = students::StudentPatch {
                name,
                age,
                gender,
                course,
                semester,
            };
            let result = students::update(&mut store, roll_number, &patch)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        StudentsAction::Remove { roll_number } => {
            let result = students::remove(&mut store, roll_number)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        StudentsAction::Marks { roll_number, marks } => {
            let marks: [f32; SUBJECT_COUNT] = marks.try_into().map_err(|_| {
                CabinetError::InvalidInput(format!("expected {} marks", SUBJECT_COUNT))
            })?;
            let result = students::record_marks(&mut store, roll_number, marks)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        StudentsAction::Attendance {
            roll_number,
            percent,
        } => {
            let result = students::set_attendance(&mut store, roll_number, percent)?;
            ctx.save(&store)?;
            print_messages(&result.messages);
        }
        StudentsAction::Report { roll_number } => {
            let result = students::report(&store, roll_number)?;
            print_report(&result.value);
        }
    }
    Ok(())
}

fn handle_library(ctx: &AppContext, action: LibraryAction) -> Result<()> {
    let now = Utc::now();
    match action {
        LibraryAction::AddBook {
            title,
            author,
            year,
        } => {
            let mut books: Store<Book> = ctx.load(ctx.config.capacities.books)?;
            let result = library::add_book(&mut books, title, author, year)?;
            ctx.save(&books)?;
            print_messages(&result.messages);
        }
        LibraryAction::ListBooks => {
            let books: Store<Book> = ctx.load(ctx.config.capacities.books)?;
            print_books(&books.all());
        }
        LibraryAction::SearchBooks { term } => {
            let books: Store<Book> = ctx.load(ctx.config.capacities.books)?;
            let result = library::search_books(&books, &term)?;
            print_books(&result.value);
        }
        LibraryAction::RemoveBook { book_id } => {
            let mut books: Store<Book> = ctx.load(ctx.config.capacities.books)?;
            let borrowers: Store<Borrower> = ctx.load(ctx.config.capacities.borrowers)?;
            let result = library::remove_book(&mut books, &borrowers, book_id)?;
            ctx.save(&books)?;
            print_messages(&result.messages);
        }
        LibraryAction::Borrow {
            book_id,
            borrower_id,
            borrower_name,
        } => {
            let mut books: Store<Book> = ctx.load(ctx.config.capacities.books)?;
            let mut borrowers: Store<Borrower> = ctx.load(ctx.config.capacities.borrowers)?;
            let result = library::borrow(
                &mut books,
                &mut borrowers,
                book_id,
                borrower_id,
                borrower_name,
                now,
            )?;
            ctx.save(&books)?;
            ctx.save(&borrowers)?;
            print_messages(&result.messages);
        }
        LibraryAction::Return { book_id } => {
            let mut books: Store<Book> = ctx.load(ctx.config.capacities.books)?;
            let mut borrowers: Store<Borrower> = ctx.load(ctx.config.capacities.borrowers)?;
            let result = library::return_book(&mut books, &mut borrowers, book_id, now)?;
            ctx.save(&books)?;
            ctx.save(&borrowers)?;
            print_messages(&result.messages);
        }
        LibraryAction::Borrowed => {
            let borrowers: Store<Borrower> = ctx.load(ctx.config.capacities.borrowers)?;
            let result = library::borrowed(&borrowers)?;
            print_loans(&result.value);
        }
        LibraryAction::Overdue => {
            let borrowers: Store<Borrower> = ctx.load(ctx.config.capacities.borrowers)?;
            let result = library::overdue(&borrowers, now)?;
            print_loans(&result.value);
        }
        LibraryAction::Register {
            username,
            password,
            librarian,
        } => {
            let mut users: Store<User> = ctx.load(ctx.config.capacities.users)?;
            let result = library::register(&mut users, username, password, librarian)?;
            ctx.save(&users)?;
            print_messages(&result.messages);
        }
        LibraryAction::Passwd {
            username,
            current,
            new,
        } => {
            let mut users: Store<User> = ctx.load(ctx.config.capacities.users)?;
            let result = library::change_password(&mut users, &username, &current, new)?;
            ctx.save(&users)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_clinic(ctx: &AppContext, action: ClinicAction) -> Result<()> {
    match action {
        ClinicAction::AddPatient {
            name,
            age,
            gender,
            address,
            phone,
            blood_group,
            allergies,
            history,
        } => {
            let mut patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            let result = clinic::add_patient(
                &mut patients,
                name,
                address,
                phone,
                age,
                gender,
                blood_group,
                allergies,
                history,
            )?;
            ctx.save(&patients)?;
            print_messages(&result.messages);
        }
        ClinicAction::UpdatePatient {
            id,
            name,
            address,
            phone,
            age,
            allergies,
            history,
        } => {
            let mut patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            let patch = clinic::PatientPatch {
                name,
                address,
                phone,
                age,
                allergies,
                medical_history: history,
            };
            let result = clinic::update_patient(&mut patients, id, &patch)?;
            ctx.save(&patients)?;
            print_messages(&result.messages);
        }
        ClinicAction::DeletePatient { id } => {
            let mut patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            let result = clinic::delete_patient(&mut patients, id)?;
            ctx.save(&patients)?;
            print_messages(&result.messages);
        }
        ClinicAction::ListPatients => {
            let patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            print_patients(&patients.all());
        }
        ClinicAction::SearchPatients { term } => {
            let patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            let result = clinic::search_patients(&patients, &term)?;
            print_patients(&result.value);
        }
        ClinicAction::AddDoctor {
            name,
            specialization,
            phone,
            schedule,
            fee,
        } => {
            let mut doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            let result =
                clinic::add_doctor(&mut doctors, name, specialization, phone, schedule, fee)?;
            ctx.save(&doctors)?;
            print_messages(&result.messages);
        }
        ClinicAction::UpdateDoctor {
            id,
            name,
            specialization,
            phone,
            schedule,
            fee,
        } => {
            let mut doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            let patch = clinic::DoctorPatch {
                name,
                specialization,
                phone,
                schedule,
                consultation_fee: fee,
            };
            let result = clinic::update_doctor(&mut doctors, id, &patch)?;
            ctx.save(&doctors)?;
            print_messages(&result.messages);
        }
        ClinicAction::DeleteDoctor { id } => {
            let mut doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            let result = clinic::delete_doctor(&mut doctors, id)?;
            ctx.save(&doctors)?;
            print_messages(&result.messages);
        }
        ClinicAction::ListDoctors => {
            let doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            print_doctors(&doctors.all());
        }
        ClinicAction::SearchDoctors { term } => {
            let doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            let result = clinic::search_doctors(&doctors, &term)?;
            print_doctors(&result.value);
        }
        ClinicAction::AddMedicine {
            name,
            manufacturer,
            price,
            quantity,
            expiry,
        } => {
            let mut medicines: Store<Medicine> = ctx.load(ctx.config.capacities.medicines)?;
            let result =
                clinic::add_medicine(&mut medicines, name, manufacturer, price, quantity, expiry)?;
            ctx.save(&medicines)?;
            print_messages(&result.messages);
        }
        ClinicAction::UpdateMedicine {
            id,
            name,
            manufacturer,
            price,
            quantity,
            expiry,
        } => {
            let mut medicines: Store<Medicine> = ctx.load(ctx.config.capacities.medicines)?;
            let patch = clinic::MedicinePatch {
                name,
                manufacturer,
                price,
                quantity,
                expiry_date: expiry,
            };
            let result = clinic::update_medicine(&mut medicines, id, &patch)?;
            ctx.save(&medicines)?;
            print_messages(&result.messages);
        }
        ClinicAction::DeleteMedicine { id } => {
            let mut medicines: Store<Medicine> = ctx.load(ctx.config.capacities.medicines)?;
            let result = clinic::delete_medicine(&mut medicines, id)?;
            ctx.save(&medicines)?;
            print_messages(&result.messages);
        }
        ClinicAction::ListMedicines => {
            let medicines: Store<Medicine> = ctx.load(ctx.config.capacities.medicines)?;
            print_medicines(&medicines.all());
        }
        ClinicAction::SearchMedicines { term } => {
            let medicines: Store<Medicine> = ctx.load(ctx.config.capacities.medicines)?;
            let result = clinic::search_medicines(&medicines, &term)?;
            print_medicines(&result.value);
        }
        ClinicAction::Schedule {
            patient_id,
            doctor_id,
            date,
            time,
        } => {
            let patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            let doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            let mut appointments: Store<Appointment> =
                ctx.load(ctx.config.capacities.appointments)?;
            let result = clinic::schedule(
                &mut appointments,
                &patients,
                &doctors,
                patient_id,
                doctor_id,
                date,
                time,
            )?;
            ctx.save(&appointments)?;
            print_messages(&result.messages);
        }
        ClinicAction::Complete {
            id,
            diagnosis,
            prescription,
            extra,
        } => {
            let mut appointments: Store<Appointment> =
                ctx.load(ctx.config.capacities.appointments)?;
            let result = clinic::complete(&mut appointments, id, diagnosis, prescription, extra)?;
            ctx.save(&appointments)?;
            print_messages(&result.messages);
        }
        ClinicAction::Cancel { id } => {
            let mut appointments: Store<Appointment> =
                ctx.load(ctx.config.capacities.appointments)?;
            let result = clinic::cancel(&mut appointments, id)?;
            ctx.save(&appointments)?;
            print_messages(&result.messages);
        }
        ClinicAction::ListAppointments => {
            let appointments: Store<Appointment> = ctx.load(ctx.config.capacities.appointments)?;
            print_appointments(&appointments.all());
        }
        ClinicAction::DoctorSchedule { doctor_id } => {
            let appointments: Store<Appointment> = ctx.load(ctx.config.capacities.appointments)?;
            let result = clinic::doctor_schedule(&appointments, doctor_id)?;
            print_appointments(&result.value);
        }
        ClinicAction::PatientHistory { patient_id } => {
            let appointments: Store<Appointment> = ctx.load(ctx.config.capacities.appointments)?;
            let result = clinic::patient_history(&appointments, patient_id)?;
            print_appointments(&result.value);
        }
        ClinicAction::Bill { id } => {
            let appointments: Store<Appointment> = ctx.load(ctx.config.capacities.appointments)?;
            let patients: Store<Patient> = ctx.load(ctx.config.capacities.patients)?;
            let doctors: Store<Doctor> = ctx.load(ctx.config.capacities.doctors)?;
            let result = clinic::bill(&appointments, &patients, &doctors, id)?;
            print_bill(&result.value);
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ctx.config.clone();
    let c = &mut config.capacities;

    let Some(key) = key else {
        for (name, value) in [
            ("capacity.contacts", c.contacts),
            ("capacity.accounts", c.accounts),
            ("capacity.patients", c.patients),
            ("capacity.doctors", c.doctors),
            ("capacity.appointments", c.appointments),
            ("capacity.medicines", c.medicines),
            ("capacity.books", c.books),
            ("capacity.borrowers", c.borrowers),
            ("capacity.users", c.users),
            ("capacity.students", c.students),
        ] {
            println!("{} = {}", name, value);
        }
        return Ok(());
    };

    let slot = match key.as_str() {
        "capacity.contacts" => &mut c.contacts,
        "capacity.accounts" => &mut c.accounts,
        "capacity.patients" => &mut c.patients,
        "capacity.doctors" => &mut c.doctors,
        "capacity.appointments" => &mut c.appointments,
        "capacity.medicines" => &mut c.medicines,
        "capacity.books" => &mut c.books,
        "capacity.borrowers" => &mut c.borrowers,
        "capacity.users" => &mut c.users,
        "capacity.students" => &mut c.students,
        other => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    match value {
        None => println!("{} = {}", key, slot),
        Some(raw) => {
            let parsed: usize = raw
                .parse()
                .map_err(|_| CabinetError::InvalidInput(format!("not a capacity: {}", raw)))?;
            if parsed == 0 {
                return Err(CabinetError::InvalidInput("capacity must be positive".into()));
            }
            *slot = parsed;
            config.save(&ctx.data_dir)?;
            println!("{} = {}", key, parsed);
        }
    }
    Ok(())
}

/// One line per snapshot file: record width, live count, and whether the
/// file carries trailing bytes that are not a whole record.
fn handle_check(ctx: &AppContext) -> Result<()> {
    println!("Data directory: {}", ctx.data_dir.display());
    check_file::<Contact>(ctx, "contacts", ctx.config.capacities.contacts);
    check_file::<Account>(ctx, "accounts", ctx.config.capacities.accounts);
    check_file::<Patient>(ctx, "patients", ctx.config.capacities.patients);
    check_file::<Doctor>(ctx, "doctors", ctx.config.capacities.doctors);
    check_file::<Appointment>(ctx, "appointments", ctx.config.capacities.appointments);
    check_file::<Medicine>(ctx, "medicines", ctx.config.capacities.medicines);
    check_file::<Book>(ctx, "books", ctx.config.capacities.books);
    check_file::<Borrower>(ctx, "borrowers", ctx.config.capacities.borrowers);
    check_file::<User>(ctx, "users", ctx.config.capacities.users);
    check_file::<Student>(ctx, "students", ctx.config.capacities.students);
    Ok(())
}

fn check_file<R: Record>(ctx: &AppContext, label: &str, capacity: usize) {
    let path = ctx.data_dir.join(R::SNAPSHOT_FILE);
    let Ok(bytes) = std::fs::read(&path) else {
        println!("{:<14} {} (absent)", label, R::SNAPSHOT_FILE.dimmed());
        return;
    };
    let count = bytes.len() / R::ENCODED_LEN;
    let trailing = bytes.len() % R::ENCODED_LEN;

    let mut line = format!(
        "{:<14} {} {} records x {} bytes",
        label,
        R::SNAPSHOT_FILE,
        count,
        R::ENCODED_LEN
    );
    if trailing != 0 {
        line.push_str(&format!("  {}", format!("{} trailing bytes", trailing).yellow()));
    }
    if count > capacity {
        line.push_str(&format!(
            "  {}",
            format!("{} records beyond capacity {}", count - capacity, capacity).yellow()
        ));
    }
    println!("{}", line);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_contacts(records: &[Contact]) {
    if records.is_empty() {
        println!("No contacts found.");
        return;
    }
    for contact in records {
        println!(
            "{:<24} {:<16} {:<24} {}",
            clip(&contact.name, 24).bold(),
            contact.phone,
            clip(&contact.email, 24),
            clip(&contact.address, 30).dimmed()
        );
    }
}

fn print_accounts(records: &[Account]) {
    if records.is_empty() {
        println!("No accounts found.");
        return;
    }
    for account in records {
        println!(
            "{} {:<24} {:<8} {:>12} {}",
            account.number.to_string().yellow(),
            clip(&account.name, 24),
            account.account_type.as_str(),
            format!("${:.2}", account.balance).green(),
            account
                .last_transaction
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed()
        );
    }
}

fn print_students(records: &[Student]) {
    if records.is_empty() {
        println!("No students found.");
        return;
    }
    for student in records {
        println!(
            "{} {:<24} {:<16} sem {} grade {} {:>3}%",
            student.roll_number.to_string().yellow(),
            clip(&student.name, 24),
            clip(&student.course, 16),
            student.semester,
            student.grade,
            student.attendance
        );
    }
}

fn print_report(report: &students::Report) {
    let student = &report.student;
    println!(
        "{} {} ({}, sem {})",
        student.roll_number.to_string().yellow(),
        student.name.bold(),
        student.course,
        student.semester
    );
    for line in &report.lines {
        println!("  {:<12} {:>6.1}", line.subject, line.mark);
    }
    println!("  {:<12} {:>6.1}", "Average", report.average);
    println!("  Grade: {}  Attendance: {}%", student.grade, student.attendance);
}

fn print_books(records: &[Book]) {
    if records.is_empty() {
        println!("No books found.");
        return;
    }
    for book in records {
        let availability = if book.available {
            "available".green()
        } else {
            "on loan".yellow()
        };
        println!(
            "{:>4} {:<32} {:<24} {} [{}]",
            book.id.to_string().yellow(),
            clip(&book.title, 32),
            clip(&book.author, 24).dimmed(),
            book.year,
            availability
        );
    }
}

fn print_loans(records: &[Borrower]) {
    if records.is_empty() {
        println!("No loans found.");
        return;
    }
    for loan in records {
        println!(
            "book {:>4}  borrower {:>4} {:<24} due {}",
            loan.book_id.to_string().yellow(),
            loan.borrower_id,
            clip(&loan.borrower_name, 24),
            loan.due_date.format("%Y-%m-%d")
        );
    }
}

fn print_patients(records: &[Patient]) {
    if records.is_empty() {
        println!("No patients found.");
        return;
    }
    for patient in records {
        println!(
            "{} {:<24} {:>3} {} {:<4} {}",
            patient.id.to_string().yellow(),
            clip(&patient.name, 24),
            patient.age,
            patient.gender,
            patient.blood_group,
            clip(&patient.phone, 16).dimmed()
        );
    }
}

fn print_doctors(records: &[Doctor]) {
    if records.is_empty() {
        println!("No doctors found.");
        return;
    }
    for doctor in records {
        println!(
            "{} {:<24} {:<20} fee {:>5} {}",
            doctor.id.to_string().yellow(),
            clip(&doctor.name, 24),
            clip(&doctor.specialization, 20),
            doctor.consultation_fee,
            clip(&doctor.schedule, 24).dimmed()
        );
    }
}

fn print_medicines(records: &[Medicine]) {
    if records.is_empty() {
        println!("No medicines found.");
        return;
    }
    for medicine in records {
        println!(
            "{} {:<24} {:<20} {:>8} x{:<5} exp {}",
            medicine.id.to_string().yellow(),
            clip(&medicine.name, 24),
            clip(&medicine.manufacturer, 20).dimmed(),
            format!("${:.2}", medicine.price),
            medicine.quantity,
            medicine.expiry_date
        );
    }
}

fn print_appointments(records: &[Appointment]) {
    if records.is_empty() {
        println!("No appointments found.");
        return;
    }
    for appointment in records {
        println!(
            "{} patient {} doctor {} {} {} {:<10} ${:.2}",
            appointment.id.to_string().yellow(),
            appointment.patient_id,
            appointment.doctor_id,
            appointment.date,
            appointment.time,
            appointment.status.as_str(),
            appointment.fee
        );
    }
}

fn print_bill(bill: &clinic::Bill) {
    let appointment = &bill.appointment;
    println!("Appointment {}", appointment.id.to_string().yellow());
    println!("  Patient:      {}", bill.patient_name);
    println!("  Doctor:       {}", bill.doctor_name);
    println!("  Date:         {} {}", appointment.date, appointment.time);
    println!("  Diagnosis:    {}", appointment.diagnosis);
    println!("  Prescription: {}", appointment.prescription);
    println!("  {}", format!("Total: ${:.2}", appointment.fee).bold());
}

/// Truncate to a display width, ellipsized; wide characters count double.
fn clip(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
