//! relay-dns infrastructure: wire codec, cache store, upstream transport and
//! the UDP request handler.
pub mod dns;
