use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::{Keyed, Record, Searchable};

pub const NAME_LEN: usize = 50;
pub const COURSE_LEN: usize = 50;

pub const DEFAULT_CAPACITY: usize = 100;

/// The five fixed subjects, in marks order.
pub const SUBJECTS: [&str; 5] = ["Math", "Science", "English", "History", "Programming"];
pub const SUBJECT_COUNT: usize = SUBJECTS.len();

/// Roll numbers are user-supplied and enforced unique at enrollment.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub roll_number: i32,
    pub name: String,
    pub age: i32,
    pub gender: char,
    pub course: String,
    pub semester: i32,
    pub marks: [f32; SUBJECT_COUNT],
    /// Percentage, 0-100.
    pub attendance: i32,
    pub grade: char,
}

impl Record for Student {
    const ENCODED_LEN: usize =
        4 + NAME_LEN + 4 + 1 + COURSE_LEN + 4 + 4 * SUBJECT_COUNT + 4 + 1;
    const SNAPSHOT_FILE: &'static str = "student_data.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_i32(self.roll_number);
        w.put_text(&self.name, NAME_LEN);
        w.put_i32(self.age);
        w.put_char(self.gender);
        w.put_text(&self.course, COURSE_LEN);
        w.put_i32(self.semester);
        for mark in self.marks {
            w.put_f32(mark);
        }
        w.put_i32(self.attendance);
        w.put_char(self.grade);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        let roll_number = r.take_i32()?;
        let name = r.take_text(NAME_LEN)?;
        let age = r.take_i32()?;
        let gender = r.take_char()?;
        let course = r.take_text(COURSE_LEN)?;
        let semester = r.take_i32()?;
        let mut marks = [0.0f32; SUBJECT_COUNT];
        for mark in &mut marks {
            *mark = r.take_f32()?;
        }
        Ok(Self {
            roll_number,
            name,
            age,
            gender,
            course,
            semester,
            marks,
            attendance: r.take_i32()?,
            grade: r.take_char()?,
        })
    }
}

impl Keyed for Student {
    fn key(&self) -> i32 {
        self.roll_number
    }
}

impl Searchable for Student {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn numeric_key(&self) -> Option<i32> {
        Some(self.roll_number)
    }
}

/// Letter grade from the subject average: >=90 A, >=80 B, >=70 C, >=60 D,
/// >=50 E, else F.
pub fn grade_for(marks: &[f32; SUBJECT_COUNT]) -> char {
    let average = marks.iter().sum::<f32>() / SUBJECT_COUNT as f32;
    match average {
        a if a >= 90.0 => 'A',
        a if a >= 80.0 => 'B',
        a if a >= 70.0 => 'C',
        a if a >= 60.0 => 'D',
        a if a >= 50.0 => 'E',
        _ => 'F',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_average_grades_a() {
        // Average 92.6
        assert_eq!(grade_for(&[95.0, 92.0, 88.0, 91.0, 97.0]), 'A');
    }

    #[test]
    fn failing_average_grades_f() {
        // Average 45
        assert_eq!(grade_for(&[40.0, 45.0, 50.0, 42.0, 48.0]), 'F');
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(grade_for(&[90.0; 5]), 'A');
        assert_eq!(grade_for(&[80.0; 5]), 'B');
        assert_eq!(grade_for(&[70.0; 5]), 'C');
        assert_eq!(grade_for(&[60.0; 5]), 'D');
        assert_eq!(grade_for(&[50.0; 5]), 'E');
        assert_eq!(grade_for(&[49.9; 5]), 'F');
    }
}
