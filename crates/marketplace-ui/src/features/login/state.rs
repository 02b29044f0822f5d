//! Login page state.
//!
//! # Design
//! - The page owns both fields; inputs only render the current value.
//! - Every keystroke replaces the whole field value, untouched.
//! - Submitting is not wired to a backend yet and leaves the draft as-is.

use std::rc::Rc;
use yew::functional::Reducible;

/// Field values typed into the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    /// Text typed into the login field.
    pub login: String,
    /// Text typed into the password field.
    pub password: String,
}

/// Transitions the login page can apply to its draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginAction {
    /// Replace the login value with the control's current text.
    SetLogin(String),
    /// Replace the password value with the control's current text.
    SetPassword(String),
    /// Submit button pressed.
    Submit,
}

impl Reducible for CredentialsDraft {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LoginAction::SetLogin(login) => Rc::new(Self {
                login,
                password: self.password.clone(),
            }),
            LoginAction::SetPassword(password) => Rc::new(Self {
                login: self.login.clone(),
                password,
            }),
            // Same allocation back so the page does not re-render.
            LoginAction::Submit => self,
        }
    }
}
