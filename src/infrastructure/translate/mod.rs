mod google;

pub use google::GoogleTranslate;
