pub mod schema;
pub mod validator;

pub use schema::parameters_schema;
pub use validator::Validator;
