//! UI components for the certificate generator

pub mod dialog;
pub mod form;
pub mod preview;
