pub mod company;
pub mod curriculum;
pub mod student;
pub mod year;

pub use company::Company;
pub use curriculum::Curriculum;
pub use student::{Student, StudentProfile};
pub use year::AcademicYear;
