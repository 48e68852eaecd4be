pub mod aggregate;

pub use aggregate::DocumentViewModel;
