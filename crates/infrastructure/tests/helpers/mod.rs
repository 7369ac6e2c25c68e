pub mod builders;
pub mod dns_server_mock;

pub use builders::{client_query, query_packet};
pub use dns_server_mock::{MockDnsServer, MockReply};
