use std::sync::Arc;

use crate::application::{ChatService, ConsultService, DiagnosisService, HospitalService};
use crate::domain::ports::Translator;

/// Everything a request handler needs, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    pub consult: Arc<ConsultService>,
    pub diagnosis: Arc<DiagnosisService>,
    pub hospitals: Arc<HospitalService>,
    pub translator: Arc<dyn Translator>,
    pub default_lang: String,
}
