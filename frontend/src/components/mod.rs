pub mod loading;
pub mod loading_spinner;

pub use loading::{Loading, LoadingOverlay};
pub use loading_spinner::LoadingSpinner;
