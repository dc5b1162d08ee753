//! Certificate value objects

mod certificate;

pub use certificate::{Certificate, CertificateCheck, ChainIntegrity};
