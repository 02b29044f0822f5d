//! Feature surfaces: state, logic, and views.

pub mod login;
