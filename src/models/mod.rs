pub mod calendar_input;
pub mod employee;
pub mod employee_input;
pub mod entry;
pub mod user;
pub mod user_input;

pub use calendar_input::{CalendarMutationResponse, SetDayStatusInput};
pub use employee::Employee;
pub use employee_input::{CreateEmployeeInput, EmployeeMutationResponse, UpdateEmployeeInput};
pub use entry::{DayEntry, ShiftStatus};
pub use user::{Role, Session, UserRecord, UserView};
pub use user_input::{CreateUserInput, UserMutationResponse};
