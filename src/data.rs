pub mod export;
pub mod split;
pub mod student;
pub mod synthetic;

pub use export::{save_students_csv, write_students, CSV_HEADER};
pub use split::train_test_split;
pub use student::{features_and_labels, StudentRecord, STUDENT_FEATURES};
pub use synthetic::{generate_students, SyntheticConfig};
