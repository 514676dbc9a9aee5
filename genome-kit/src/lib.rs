pub mod amino;
pub mod genome;

pub use amino::AminoAcid;
pub use genome::Genome;
