mod chat;
mod consult;
mod diagnosis;
mod hospitals;
mod indexing;
mod rag;
mod translate;

pub use chat::ChatService;
pub use consult::{Consultation, ConsultService};
pub use diagnosis::{Diagnosis, DiagnosisService};
pub use hospitals::{HospitalSearch, HospitalService};
pub use indexing::IndexService;
pub use rag::RagService;
pub use translate::translate_or_original;
