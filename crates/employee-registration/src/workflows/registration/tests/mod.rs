mod common;
mod education;
mod validation;
