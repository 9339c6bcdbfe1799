pub mod auth;
pub use auth::AuthService;
pub mod client_service;
pub use client_service::ClientService;
pub mod employee_service;
pub use employee_service::EmployeeService;
pub mod product_service;
pub use product_service::ProductService;
pub mod request_service;
pub use request_service::RequestService;
pub mod user_service;
pub use user_service::UserService;
