//! Upstream query construction.

use crate::dns::wire::{encode_packet, WireError};
use relay_dns_domain::{Packet, Question};

/// Builds upstream query messages in wire format.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Single-question recursive query with a random id.
    ///
    /// Returns the id alongside the bytes so the reply can be matched.
    pub fn build_query(question: &Question) -> Result<(u16, Vec<u8>), WireError> {
        Self::build_query_with_id(fastrand::u16(..), question)
    }

    pub fn build_query_with_id(id: u16, question: &Question) -> Result<(u16, Vec<u8>), WireError> {
        let packet = Packet::query(id, question.clone());
        Ok((id, encode_packet(&packet)?))
    }
}
