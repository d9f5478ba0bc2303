pub mod arithmetic_checker;
pub mod profile_store;

pub use arithmetic_checker::IArithmeticChecker;
pub use profile_store::IUserProfileStore;
