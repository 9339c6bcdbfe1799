pub mod http;
pub use http::ApiClient;
pub mod auth_repo;
pub use auth_repo::AuthRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod request_repo;
pub use request_repo::RequestRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
