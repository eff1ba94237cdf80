pub mod aladin;
pub mod fake;

pub use aladin::Aladin;
pub use fake::FakeProvider;
