//! HTTP request handlers organized by collection

pub mod artists;
pub mod galleries;
pub mod paintings;
pub mod response;
pub mod system;
