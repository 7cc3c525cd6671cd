mod store;

pub use store::LocalStore;
pub use store::load;
pub use store::save;
