mod register;
pub use register::RegisterView;
