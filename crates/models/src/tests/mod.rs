/// Field validation helpers on every entity
pub mod validation_tests;
