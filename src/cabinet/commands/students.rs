use crate::commands::{index_by_key, patch_text, CmdMessage, CmdOutcome};
use crate::error::{CabinetError, Result};
use crate::model::student::{grade_for, Student, SUBJECTS, SUBJECT_COUNT};
use crate::store::Store;

#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<char>,
    pub course: Option<String>,
    pub semester: Option<i32>,
}

/// One line of a student's report card.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub subject: &'static str,
    pub mark: f32,
}

/// Full report card for one student.
#[derive(Debug, Clone)]
pub struct Report {
    pub student: Student,
    pub lines: Vec<ReportLine>,
    pub average: f32,
}

/// Enroll a student. Roll numbers are caller-supplied and must be unique
/// among live records.
pub fn enroll(
    store: &mut Store<Student>,
    roll_number: i32,
    name: String,
    age: i32,
    gender: char,
    course: String,
    semester: i32,
) -> Result<CmdOutcome<Student>> {
    if store.find_by_key(roll_number).is_some() {
        return Err(CabinetError::DuplicateKey(format!(
            "roll number {} already enrolled",
            roll_number
        )));
    }
    let student = Student {
        roll_number,
        name,
        age,
        gender,
        course,
        semester,
        marks: [0.0; SUBJECT_COUNT],
        attendance: 0,
        grade: 'F',
    };
    let enrolled = student.clone();
    store.create(student)?;
    Ok(CmdOutcome::new(enrolled.clone()).with_message(CmdMessage::success(format!(
        "Student enrolled. Roll number: {}",
        enrolled.roll_number
    ))))
}

pub fn find(store: &Store<Student>, roll_number: i32) -> Result<CmdOutcome<Student>> {
    let index = index_by_key(store, roll_number, "student")?;
    Ok(CmdOutcome::new(record(store, index)?.clone()))
}

pub fn search(store: &Store<Student>, term: &str) -> Result<CmdOutcome<Vec<Student>>> {
    let matches: Vec<Student> = store
        .search(term)
        .filter_map(|i| store.get(i).cloned())
        .collect();
    Ok(CmdOutcome::new(matches))
}

/// Patch enrollment details; blank text keeps current. Marks, attendance,
/// and grade are untouched here.
pub fn update(
    store: &mut Store<Student>,
    roll_number: i32,
    patch: &StudentPatch,
) -> Result<CmdOutcome<Student>> {
    let index = index_by_key(store, roll_number, "student")?;
    let student = record_mut(store, index)?;

    patch_text(&mut student.name, &patch.name);
    patch_text(&mut student.course, &patch.course);
    if let Some(age) = patch.age {
        student.age = age;
    }
    if let Some(gender) = patch.gender {
        student.gender = gender;
    }
    if let Some(semester) = patch.semester {
        student.semester = semester;
    }

    let updated = student.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Student {} updated",
        updated.roll_number
    ))))
}

pub fn remove(store: &mut Store<Student>, roll_number: i32) -> Result<CmdOutcome<Student>> {
    let index = index_by_key(store, roll_number, "student")?;
    let removed = store.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone()).with_message(CmdMessage::success(format!(
        "Student {} removed",
        removed.roll_number
    ))))
}

/// Record marks for all five subjects and recompute the letter grade. Each
/// mark must be in 0-100.
pub fn record_marks(
    store: &mut Store<Student>,
    roll_number: i32,
    marks: [f32; SUBJECT_COUNT],
) -> Result<CmdOutcome<Student>> {
    for (subject, mark) in SUBJECTS.iter().zip(marks) {
        if !(0.0..=100.0).contains(&mark) {
            return Err(CabinetError::InvalidInput(format!(
                "mark for {} must be between 0 and 100",
                subject
            )));
        }
    }
    let index = index_by_key(store, roll_number, "student")?;
    let student = record_mut(store, index)?;
    student.marks = marks;
    student.grade = grade_for(&marks);

    let updated = student.clone();
    Ok(CmdOutcome::new(updated.clone()).with_message(CmdMessage::success(format!(
        "Marks recorded. Grade: {}",
        updated.grade
    ))))
}

/// Set the attendance percentage, 0-100.
pub fn set_attendance(
    store: &mut Store<Student>,
    roll_number: i32,
    attendance: i32,
) -> Result<CmdOutcome<Student>> {
    if !(0..=100).contains(&attendance) {
        return Err(CabinetError::InvalidInput(
            "attendance must be between 0 and 100".into(),
        ));
    }
    let index = index_by_key(store, roll_number, "student")?;
    let student = record_mut(store, index)?;
    student.attendance = attendance;

    let mut outcome = CmdOutcome::new(student.clone()).with_message(CmdMessage::success(format!(
        "Attendance set to {}%",
        attendance
    )));
    if attendance < 75 {
        outcome.add_message(CmdMessage::warning("Attendance below 75%"));
    }
    Ok(outcome)
}

/// Report card: one line per subject plus the average the grade derives
/// from.
pub fn report(store: &Store<Student>, roll_number: i32) -> Result<CmdOutcome<Report>> {
    let index = index_by_key(store, roll_number, "student")?;
    let student = record(store, index)?.clone();
    let lines = SUBJECTS
        .into_iter()
        .zip(student.marks)
        .map(|(subject, mark)| ReportLine { subject, mark })
        .collect();
    let average = student.marks.iter().sum::<f32>() / SUBJECT_COUNT as f32;
    Ok(CmdOutcome::new(Report {
        student,
        lines,
        average,
    }))
}

fn record(store: &Store<Student>, index: usize) -> Result<&Student> {
    store
        .get(index)
        .ok_or_else(|| CabinetError::NotFound(format!("no student at index {}", index)))
}

fn record_mut(store: &mut Store<Student>, index: usize) -> Result<&mut Student> {
    store
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("no student at index {}", index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::student::DEFAULT_CAPACITY;

    fn store_with_one() -> Store<Student> {
        let mut store = Store::with_capacity(DEFAULT_CAPACITY);
        enroll(&mut store, 42, "Ada".into(), 20, 'F', "CS".into(), 3).unwrap();
        store
    }

    #[test]
    fn enroll_rejects_duplicate_roll_number() {
        let mut store = store_with_one();
        let err = enroll(&mut store, 42, "Grace".into(), 21, 'F', "EE".into(), 1).unwrap_err();
        assert!(matches!(err, CabinetError::DuplicateKey(_)));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn new_student_starts_with_zero_marks_and_f() {
        let store = store_with_one();
        let student = store.get(0).unwrap();
        assert_eq!(student.marks, [0.0; SUBJECT_COUNT]);
        assert_eq!(student.grade, 'F');
        assert_eq!(student.attendance, 0);
    }

    #[test]
    fn record_marks_recomputes_grade() {
        let mut store = store_with_one();
        let updated = record_marks(&mut store, 42, [95.0, 92.0, 88.0, 91.0, 97.0])
            .unwrap()
            .value;
        assert_eq!(updated.grade, 'A');

        let updated = record_marks(&mut store, 42, [40.0, 45.0, 50.0, 42.0, 48.0])
            .unwrap()
            .value;
        assert_eq!(updated.grade, 'F');
    }

    #[test]
    fn record_marks_rejects_out_of_range() {
        let mut store = store_with_one();
        let err = record_marks(&mut store, 42, [95.0, 101.0, 88.0, 91.0, 97.0]).unwrap_err();
        assert!(matches!(err, CabinetError::InvalidInput(_)));
        assert_eq!(store.get(0).unwrap().marks, [0.0; SUBJECT_COUNT]);

        assert!(record_marks(&mut store, 42, [-1.0, 0.0, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn attendance_is_bounded_and_warns_when_low() {
        let mut store = store_with_one();
        assert!(set_attendance(&mut store, 42, 101).is_err());
        assert!(set_attendance(&mut store, 42, -1).is_err());

        let outcome = set_attendance(&mut store, 42, 60).unwrap();
        assert_eq!(outcome.value.attendance, 60);
        assert!(outcome
            .messages
            .iter()
            .any(|m| m.content.contains("below 75%")));

        let outcome = set_attendance(&mut store, 42, 90).unwrap();
        assert_eq!(outcome.messages.len(), 1);
    }

    #[test]
    fn update_patches_only_given_fields() {
        let mut store = store_with_one();
        let patch = StudentPatch {
            course: Some("Math".into()),
            semester: Some(4),
            name: Some(String::new()),
            ..Default::default()
        };
        let updated = update(&mut store, 42, &patch).unwrap().value;
        assert_eq!(updated.course, "Math");
        assert_eq!(updated.semester, 4);
        assert_eq!(updated.name, "Ada");
    }

    #[test]
    fn report_lists_subjects_in_marks_order() {
        let mut store = store_with_one();
        record_marks(&mut store, 42, [90.0, 80.0, 70.0, 60.0, 50.0]).unwrap();

        let report = report(&store, 42).unwrap().value;
        assert_eq!(report.lines.len(), SUBJECT_COUNT);
        assert_eq!(report.lines[0], ReportLine { subject: "Math", mark: 90.0 });
        assert_eq!(
            report.lines[4],
            ReportLine { subject: "Programming", mark: 50.0 }
        );
        assert_eq!(report.average, 70.0);
    }

    #[test]
    fn remove_unknown_roll_is_not_found() {
        let mut store = store_with_one();
        assert!(matches!(
            remove(&mut store, 7),
            Err(CabinetError::NotFound(_))
        ));
        remove(&mut store, 42).unwrap();
        assert!(store.is_empty());
    }
}
