pub mod article;
pub mod errors;
pub mod validation;
