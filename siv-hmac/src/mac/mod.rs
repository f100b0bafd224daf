//! Message Authentication Codes

pub(crate) mod hmac;
