//! Stateless wrappers around native controls with the fixed marketplace styling.

mod button;
mod center;
mod input;
mod text;

pub(crate) use button::Button;
pub(crate) use center::Center;
pub(crate) use input::{Input, ProtectedInput};
pub(crate) use text::{BigText, Text};
