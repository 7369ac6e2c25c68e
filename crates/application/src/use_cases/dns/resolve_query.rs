use crate::ports::{DnsCachePort, UpstreamResolver};
use relay_dns_domain::{DomainError, Packet, Question, ResourceRecord, UpstreamError};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a single question of a request was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    CacheHit { records: usize },
    Forwarded { records: usize },
    Skipped(UpstreamError),
}

impl QuestionOutcome {
    pub fn is_cache_hit(&self) -> bool {
        matches!(self, QuestionOutcome::CacheHit { .. })
    }
}

/// Result of resolving one client request.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Ready to encode and send back to the client.
    pub response: Packet,
    /// Authority records gathered from upstream replies. Cached, not sent.
    pub authority: Vec<ResourceRecord>,
    /// Additional records gathered from upstream replies. Cached, not sent.
    pub additional: Vec<ResourceRecord>,
    /// One entry per request question, in request order.
    pub outcomes: Vec<QuestionOutcome>,
}

impl Resolution {
    pub fn cache_hits(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_cache_hit()).count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &UpstreamError> {
        self.outcomes.iter().filter_map(|o| match o {
            QuestionOutcome::Skipped(err) => Some(err),
            _ => None,
        })
    }
}

pub struct ResolveQueryUseCase {
    cache: Arc<dyn DnsCachePort>,
    upstream: Arc<dyn UpstreamResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(cache: Arc<dyn DnsCachePort>, upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self { cache, upstream }
    }

    /// Answers every question of `request` from cache or upstream, in order.
    ///
    /// A failed upstream exchange only drops the question it belongs to.
    pub async fn execute(&self, request: &Packet) -> Resolution {
        let mut answers = Vec::new();
        let mut authority = Vec::new();
        let mut additional = Vec::new();
        let mut outcomes = Vec::with_capacity(request.questions.len());

        for question in &request.questions {
            let outcome = match self.lookup_cache(question) {
                Some(cached) => {
                    let records = cached.len();
                    answers.extend(cached);
                    QuestionOutcome::CacheHit { records }
                }
                None => match self.upstream.forward(question).await {
                    Ok(reply) => {
                        for record in reply.records() {
                            self.cache.add(record);
                        }
                        let records = reply.answers.len();
                        answers.extend(reply.answers);
                        authority.extend(reply.authority);
                        additional.extend(reply.additional);
                        QuestionOutcome::Forwarded { records }
                    }
                    Err(e) => {
                        warn!(
                            question = %question,
                            upstream = %self.upstream.server(),
                            kind = e.kind(),
                            error = %e,
                            "Upstream lookup failed, skipping question"
                        );
                        QuestionOutcome::Skipped(e)
                    }
                },
            };
            debug!(question = %question, outcome = ?outcome, "Question resolved");
            outcomes.push(outcome);
        }

        let response = Packet::response(&request.header, request.questions.clone(), answers);

        Resolution {
            response,
            authority,
            additional,
            outcomes,
        }
    }

    pub fn persist_cache(&self) -> Result<(), DomainError> {
        self.cache.persist()
    }

    fn lookup_cache(&self, question: &Question) -> Option<Vec<ResourceRecord>> {
        let swept = self.cache.sweep();
        if swept > 0 {
            debug!(swept, "Expired cache entries removed");
        }

        self.cache
            .find(&question.qname, question.qtype, question.qclass)
            .filter(|records| !records.is_empty())
    }
}
