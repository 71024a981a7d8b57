#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// No credential configured, or the completion call failed.
    #[error("recommendation.service_unavailable")]
    ServiceUnavailable,
    /// The reply carried no usable marker line.
    #[error("recommendation.malformed_upstream_reply")]
    MalformedUpstreamReply,
    /// The pre-filter removed every catalog item.
    #[error("recommendation.empty_candidate_set")]
    EmptyCandidateSet,
    #[error("recommendation.catalog_unavailable")]
    CatalogUnavailable,
}
