pub mod cli;
pub mod matches;
pub mod validator;
