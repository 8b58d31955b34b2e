use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::data::student::StudentRecord;
use crate::error::Result;

/// Column header of the exported dataset.
pub const CSV_HEADER: [&str; 5] = ["ID", "Attendance", "Homework", "TestScore", "FinalScore"];

/// Writes `students` as CSV to `writer`: the fixed header, then one row per record with the id
/// as an integer and every score with two decimals.
pub fn write_students<W: Write>(writer: W, students: &[StudentRecord]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for s in students {
        wtr.write_record([
            s.id.to_string(),
            format!("{:.2}", s.attendance),
            format!("{:.2}", s.homework),
            format!("{:.2}", s.test_score),
            format!("{:.2}", s.final_score),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `students` to it.
pub fn save_students_csv<P: AsRef<Path>>(path: P, students: &[StudentRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_students(file, students)?;
    log::info!("saved {} students to {}", students.len(), path.display());
    Ok(())
}
