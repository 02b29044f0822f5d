//! Presentational components shared by feature views.

pub(crate) mod page;
pub(crate) mod theming;
pub(crate) mod toast;
