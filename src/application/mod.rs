//! Application layer - use cases and orchestration.
//!
//! Services here depend on domain ports (traits) rather than concrete
//! implementations, so handlers and tests can inject fakes.

pub mod services;

pub use services::{
    ChatService, Consultation, ConsultService, Diagnosis, DiagnosisService, HospitalSearch,
    HospitalService, IndexService, RagService,
};
