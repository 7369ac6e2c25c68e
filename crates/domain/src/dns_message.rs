mod header;
mod packet;
mod question;

pub use header::Header;
pub use packet::Packet;
pub use question::Question;
