pub mod alquran_cloud;
pub mod quran_com;

pub use alquran_cloud::AlQuranCloudSource;
pub use quran_com::QuranComSource;
