pub mod ps2;
pub mod stub;
pub mod vera;

pub use ps2::Ps2Port;
pub use stub::StubRegisterBank;
pub use vera::Vera;
