use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cabinet")]
#[command(about = "Flat-file record keeper for small fixed-capacity datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the snapshot files (default: platform data dir,
    /// or $CABINET_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Address book
    Contacts {
        #[command(subcommand)]
        action: ContactsAction,
    },

    /// Bank accounts
    Bank {
        #[command(subcommand)]
        action: BankAction,
    },

    /// Student enrollment and grading
    Students {
        #[command(subcommand)]
        action: StudentsAction,
    },

    /// Books, loans, and library accounts
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },

    /// Patients, doctors, medicines, and appointments
    Clinic {
        #[command(subcommand)]
        action: ClinicAction,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., capacity.books)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Inspect the snapshot files and report inconsistencies
    Check,
}

#[derive(Subcommand, Debug)]
pub enum ContactsAction {
    /// Add a contact
    Add {
        name: String,
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        address: String,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Search by name, phone, or a leading-digit term
    Search { term: String },

    /// Edit the first contact matching the term; omitted fields keep
    /// their current value
    Edit {
        term: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete the first contact matching the term
    #[command(alias = "rm")]
    Delete { term: String },
}

#[derive(Subcommand, Debug)]
pub enum BankAction {
    /// Open an account
    Open {
        name: String,
        address: String,
        phone: String,
        /// "savings" or "current"
        #[arg(long, default_value = "savings")]
        account_type: String,
        #[arg(long, default_value_t = 0.0)]
        deposit: f64,
    },

    /// List all accounts
    #[command(alias = "ls")]
    List,

    /// Show one account
    Show { number: i32 },

    Deposit { number: i32, amount: f64 },

    Withdraw { number: i32, amount: f64 },

    /// Move money between two accounts
    Transfer { from: i32, to: i32, amount: f64 },

    /// Edit account details; omitted fields keep their current value
    Modify {
        number: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// "savings" or "current"
        #[arg(long)]
        account_type: Option<String>,
    },

    /// Close an account
    Close { number: i32 },
}

#[derive(Subcommand, Debug)]
pub enum StudentsAction {
    /// Enroll a student under a caller-chosen roll number
    Enroll {
        roll_number: i32,
        name: String,
        age: i32,
        gender: char,
        course: String,
        semester: i32,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Search by name or roll number
    Search { term: String },

    /// Edit enrollment details; omitted fields keep their current value
    Update {
        roll_number: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<i32>,
        #[arg(long)]
        gender: Option<char>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        semester: Option<i32>,
    },

    /// Remove a student
    #[command(alias = "rm")]
    Remove { roll_number: i32 },

    /// Record marks for all five subjects and recompute the grade
    Marks {
        roll_number: i32,
        #[arg(required = true, num_args = 5)]
        marks: Vec<f32>,
    },

    /// Set the attendance percentage
    Attendance { roll_number: i32, percent: i32 },

    /// Print a report card
    Report { roll_number: i32 },
}

#[derive(Subcommand, Debug)]
pub enum LibraryAction {
    /// Add a book
    AddBook {
        title: String,
        author: String,
        year: i32,
    },

    /// List all books
    #[command(alias = "ls")]
    ListBooks,

    /// Search by title, author, or id
    SearchBooks { term: String },

    /// Remove a book that is not on loan
    RemoveBook { book_id: i32 },

    /// Lend a book
    Borrow {
        book_id: i32,
        borrower_id: i32,
        borrower_name: String,
    },

    /// Take a book back
    Return { book_id: i32 },

    /// List current loans
    Borrowed,

    /// List loans past their due date
    Overdue,

    /// Register a library account
    Register {
        username: String,
        password: String,
        #[arg(long)]
        librarian: bool,
    },

    /// Change an account's password
    Passwd {
        username: String,
        current: String,
        new: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClinicAction {
    /// Register a patient
    AddPatient {
        name: String,
        age: i32,
        gender: char,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        blood_group: String,
        #[arg(long, default_value = "None")]
        allergies: String,
        #[arg(long, default_value = "None")]
        history: String,
    },

    /// Edit patient details; omitted fields keep their current value
    UpdatePatient {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        age: Option<i32>,
        #[arg(long)]
        allergies: Option<String>,
        #[arg(long)]
        history: Option<String>,
    },

    DeletePatient { id: i32 },

    /// List all patients
    ListPatients,

    /// Search patients by name or id
    SearchPatients { term: String },

    /// Register a doctor
    AddDoctor {
        name: String,
        specialization: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        schedule: String,
        #[arg(long, default_value_t = 0)]
        fee: i32,
    },

    /// Edit doctor details; omitted fields keep their current value
    UpdateDoctor {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        specialization: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        schedule: Option<String>,
        #[arg(long)]
        fee: Option<i32>,
    },

    DeleteDoctor { id: i32 },

    /// List all doctors
    ListDoctors,

    /// Search doctors by name, specialization, or id
    SearchDoctors { term: String },

    /// Add a medicine to the inventory
    AddMedicine {
        name: String,
        manufacturer: String,
        price: f32,
        quantity: i32,
        /// DD/MM/YYYY
        expiry: String,
    },

    /// Edit a medicine; omitted fields keep their current value
    UpdateMedicine {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        manufacturer: Option<String>,
        #[arg(long)]
        price: Option<f32>,
        #[arg(long)]
        quantity: Option<i32>,
        #[arg(long)]
        expiry: Option<String>,
    },

    DeleteMedicine { id: i32 },

    /// List all medicines
    ListMedicines,

    /// Search medicines by name or id
    SearchMedicines { term: String },

    /// Book an appointment
    Schedule {
        patient_id: i32,
        doctor_id: i32,
        /// DD/MM/YYYY
        date: String,
        /// HH:MM
        time: String,
    },

    /// Close out a scheduled appointment
    Complete {
        id: i32,
        diagnosis: String,
        prescription: String,
        #[arg(long, default_value_t = 0.0)]
        extra: f32,
    },

    /// Cancel a scheduled appointment
    Cancel { id: i32 },

    /// List all appointments
    ListAppointments,

    /// List a doctor's scheduled appointments
    DoctorSchedule { doctor_id: i32 },

    /// List a patient's completed appointments
    PatientHistory { patient_id: i32 },

    /// Print the bill for a completed appointment
    Bill { id: i32 },
}
