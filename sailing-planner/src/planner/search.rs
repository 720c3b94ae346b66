//! Depth-first route search.
//!
//! Finds the single best itinerary between two ports, either the cheapest
//! (total rate in the base currency) or the fastest (total days at sea).
//! The catalog is first reduced to one best edge per port pair; itineraries
//! are then enumerated depth-first over that reduced graph.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::dataset::{
    CatalogError, DatasetError, DatasetSource, LegCatalog, build_exchange_rates,
};
use crate::domain::{DomainError, Itinerary, Leg, PortCode};
use crate::exchange::{ConversionError, CurrencyConverter, ExchangeRateTable};

use super::config::PlannerConfig;
use super::criterion::Criterion;
use super::edges::{BestEdges, EdgeId};
use super::rank::{Candidate, Incumbent};

/// Error from route search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Failed to load the dataset
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Dataset records could not be turned into legs
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A rate could not be converted to the base currency
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A found route did not form a valid itinerary
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SearchError {
    /// Returns true if the dataset is internally inconsistent: a sailing
    /// without a rate, or a rate without the exchange rate it needs.
    pub fn is_data_integrity(&self) -> bool {
        match self {
            SearchError::Catalog(e) => e.is_data_integrity(),
            SearchError::Conversion(e) => matches!(
                e,
                ConversionError::MissingDate(_) | ConversionError::MissingCurrency { .. }
            ),
            SearchError::Dataset(_) | SearchError::Domain(_) => false,
        }
    }
}

/// Limits on the shape of returned itineraries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only single-leg itineraries. Overrides `max_legs`.
    pub direct: bool,

    /// Upper bound on legs per itinerary. `None` means unbounded.
    pub max_legs: Option<usize>,
}

impl SearchOptions {
    /// The leg bound actually applied.
    pub fn effective_max_legs(&self) -> Option<usize> {
        if self.direct { Some(1) } else { self.max_legs }
    }
}

/// Request for route search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: PortCode,
    pub destination: PortCode,
    pub criterion: Criterion,
    pub options: SearchOptions,
}

impl SearchRequest {
    /// Create a new search request with no leg bound.
    pub fn new(origin: PortCode, destination: PortCode, criterion: Criterion) -> Self {
        Self {
            origin,
            destination,
            criterion,
            options: SearchOptions::default(),
        }
    }

    /// Restrict the search to direct sailings.
    pub fn direct(mut self) -> Self {
        self.options.direct = true;
        self
    }

    /// Bound the number of legs per itinerary.
    pub fn with_max_legs(mut self, max_legs: usize) -> Self {
        self.options.max_legs = Some(max_legs);
        self
    }
}

/// Result of a search, with counters for diagnostics.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The best itinerary, if any route exists.
    pub itinerary: Option<Itinerary>,

    /// Number of complete routes considered.
    pub candidates: usize,

    /// Number of port pairs in the reduced graph.
    pub best_edges: usize,
}

/// A partial path on the DFS stack.
#[derive(Debug, Clone)]
struct Frame {
    port: PortCode,
    edges: Vec<EdgeId>,
    visited: HashSet<PortCode>,
    weight: f64,
}

/// Route planner over a fixed leg catalog.
///
/// Holds no state between searches; each call rebuilds the reduced graph
/// for its criterion.
pub struct Planner<'a> {
    legs: &'a [Leg],
    converter: CurrencyConverter<'a>,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(legs: &'a [Leg], rates: &'a ExchangeRateTable, config: &PlannerConfig) -> Self {
        Self {
            legs,
            converter: CurrencyConverter::new(rates, config.base_currency),
        }
    }

    /// Load the dataset from `source` once and search it.
    pub fn search_source<S: DatasetSource + ?Sized>(
        source: &S,
        config: &PlannerConfig,
        request: &SearchRequest,
    ) -> Result<Option<Itinerary>, SearchError> {
        let dataset = source.load()?;
        let catalog = LegCatalog::build(&dataset)?;
        let rates = build_exchange_rates(&dataset)?;

        Planner::new(catalog.legs(), &rates, config).search(request)
    }

    /// Reduce the catalog to the best edge per port pair.
    pub fn best_edges(&self, criterion: Criterion) -> Result<BestEdges<'a>, ConversionError> {
        BestEdges::build(self.legs, criterion, &self.converter)
    }

    /// Search for the best itinerary.
    ///
    /// Returns `Ok(None)` when no route satisfies the request.
    pub fn search(&self, request: &SearchRequest) -> Result<Option<Itinerary>, SearchError> {
        Ok(self.explore(request)?.itinerary)
    }

    /// Search for the best itinerary and report how much work it took.
    pub fn explore(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let max_legs = request.options.effective_max_legs();

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            criterion = %request.criterion,
            base = %self.converter.base(),
            max_legs = ?max_legs,
            "Searching"
        );

        if max_legs == Some(0) || request.origin == request.destination {
            return Ok(SearchOutcome {
                itinerary: None,
                candidates: 0,
                best_edges: 0,
            });
        }

        let edges = self.best_edges(request.criterion)?;
        let incumbent = enumerate(&edges, request, max_legs.unwrap_or(usize::MAX));
        let candidates = incumbent.offered();

        let itinerary = match incumbent.into_best() {
            Some(best) => Some(Itinerary::new(
                best.edges
                    .iter()
                    .map(|&id| edges.edge(id).leg().clone())
                    .collect(),
            )?),
            None => None,
        };

        debug!(
            criterion = %edges.criterion(),
            best_edges = edges.len(),
            candidates,
            found = itinerary.is_some(),
            "Search complete"
        );

        Ok(SearchOutcome {
            itinerary,
            candidates,
            best_edges: edges.len(),
        })
    }
}

/// Enumerate loop-free paths from origin to destination of at most
/// `max_legs` edges, keeping the lowest-weight one.
///
/// At each port the direct hit to the destination is offered first, then
/// the remaining outgoing edges are extended in exploration order.
fn enumerate(edges: &BestEdges<'_>, request: &SearchRequest, max_legs: usize) -> Incumbent {
    let destination = &request.destination;
    let mut incumbent = Incumbent::new();

    let mut stack = vec![Frame {
        port: request.origin.clone(),
        edges: Vec::new(),
        visited: HashSet::from([request.origin.clone()]),
        weight: 0.0,
    }];

    while let Some(frame) = stack.pop() {
        if let Some((id, edge)) = edges.between(&frame.port, destination) {
            let mut path = frame.edges.clone();
            path.push(id);
            let candidate = Candidate {
                edges: path,
                weight: frame.weight + edge.weight(),
            };
            let weight = candidate.weight;
            if incumbent.offer(candidate) {
                trace!(weight, legs = frame.edges.len() + 1, "New best route");
            }
        }

        // Extending here adds one leg before the destination leg
        if frame.edges.len() + 2 > max_legs {
            continue;
        }

        let children: Vec<_> = edges
            .leaving(&frame.port)
            .filter(|(_, edge)| {
                edge.destination() != destination && !frame.visited.contains(edge.destination())
            })
            .collect();

        // Reversed so the first child is popped first
        for (id, edge) in children.into_iter().rev() {
            let mut path = frame.edges.clone();
            path.push(id);
            let mut visited = frame.visited.clone();
            visited.insert(edge.destination().clone());

            stack.push(Frame {
                port: edge.destination().clone(),
                edges: path,
                visited,
                weight: frame.weight + edge.weight(),
            });
        }
    }

    incumbent
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
