use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shiftcal API",
        version = "1.0.0",
        description = "Shift calendar with supervisor request / admin approval workflow"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Auth
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::logout,
        crate::handlers::auth_handler::get_me,

        // Users
        crate::handlers::users_handler::get_users,
        crate::handlers::users_handler::create_user,
        crate::handlers::users_handler::delete_user,

        // Employees
        crate::handlers::employees_handler::get_employees,
        crate::handlers::employees_handler::create_employee,
        crate::handlers::employees_handler::update_employee,
        crate::handlers::employees_handler::delete_employee,

        // Calendar
        crate::handlers::calendar_handler::get_calendar,
        crate::handlers::calendar_handler::set_day_status,
        crate::handlers::calendar_handler::approve_day,
        crate::handlers::calendar_handler::reject_day,

        // Export
        crate::handlers::export_handler::get_export,
    ),
    components(schemas(
        crate::models::Role,
        crate::models::Session,
        crate::models::UserView,
        crate::models::CreateUserInput,
        crate::models::UserMutationResponse,
        crate::models::Employee,
        crate::models::ShiftStatus,
        crate::models::CreateEmployeeInput,
        crate::models::UpdateEmployeeInput,
        crate::models::EmployeeMutationResponse,
        crate::models::SetDayStatusInput,
        crate::models::CalendarMutationResponse,
        crate::handlers::auth_handler::LoginRequest,
        crate::handlers::auth_handler::LogoutResponse,
        crate::handlers::calendar_handler::CalendarCell,
        crate::handlers::calendar_handler::CalendarRow,
        crate::handlers::calendar_handler::CalendarResponse,
        crate::export::ExportTable,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Session management"),
        (name = "users", description = "Application user administration"),
        (name = "employees", description = "Employee administration"),
        (name = "calendar", description = "Shift calendar and approval workflow"),
        (name = "export", description = "Tabular calendar export")
    )
)]
pub struct ApiDoc;
