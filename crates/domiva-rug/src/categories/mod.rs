pub mod behaviour;
pub mod clinically_complex;
pub mod extensive_services;
pub mod impaired_cognition;
pub mod physical_function;
pub mod special_care;
pub mod special_rehab;
