// Marketplace domain rules: fees, status allow-lists, languages, image analysis

pub mod fees;
pub mod i18n;
pub mod image_analysis;
pub mod status;
