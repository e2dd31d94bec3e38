use jobcost_error::GenerationError;
use jobcost_schema::{CostSuggestionRequest, CostSuggestionResponse};

/// Cost suggestion generation.
///
/// A port so the CLI can be driven by the LLM-backed generator or by anything
/// else that answers the same contract. Implementations are stateless between
/// calls: one request in, one validated response or one error out.
pub trait CostSuggester {
    fn suggest(
        &self,
        request: &CostSuggestionRequest,
    ) -> Result<CostSuggestionResponse, GenerationError>;
}

impl<T: CostSuggester + ?Sized> CostSuggester for &T {
    fn suggest(
        &self,
        request: &CostSuggestionRequest,
    ) -> Result<CostSuggestionResponse, GenerationError> {
        (**self).suggest(request)
    }
}

impl<T: CostSuggester + ?Sized> CostSuggester for Box<T> {
    fn suggest(
        &self,
        request: &CostSuggestionRequest,
    ) -> Result<CostSuggestionResponse, GenerationError> {
        (**self).suggest(request)
    }
}
