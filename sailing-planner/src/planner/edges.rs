//! Reduction of the leg catalog to one best edge per port pair.
//!
//! Multi-leg enumeration never looks at the full catalog. For every ordered
//! (origin, destination) pair with at least one direct leg, only the leg
//! with the lowest weight under the active criterion survives. Ties go to
//! the leg that appears first in the catalog.

use std::collections::HashMap;

use crate::domain::{Leg, PortCode};
use crate::exchange::{ConversionError, CurrencyConverter};

use super::Criterion;

/// The best leg for one ordered port pair, with its weight.
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    leg: &'a Leg,
    weight: f64,
}

impl<'a> Edge<'a> {
    pub fn leg(&self) -> &'a Leg {
        self.leg
    }

    /// Base-currency rate (cheapest) or days at sea (fastest).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn origin(&self) -> &'a PortCode {
        self.leg.origin()
    }

    pub fn destination(&self) -> &'a PortCode {
        self.leg.destination()
    }
}

/// Index of an edge within a [`BestEdges`] set.
pub type EdgeId = usize;

/// The reduced graph: at most one edge per ordered port pair.
///
/// Outgoing edges of a port are kept in a fixed exploration order: by the
/// position at which each destination port first appears as a destination
/// anywhere in the catalog.
#[derive(Debug, Clone)]
pub struct BestEdges<'a> {
    criterion: Criterion,
    edges: Vec<Edge<'a>>,
    by_pair: HashMap<(PortCode, PortCode), EdgeId>,
    outgoing: HashMap<PortCode, Vec<EdgeId>>,
}

impl<'a> BestEdges<'a> {
    /// Reduce `legs` to the best edge per port pair under `criterion`.
    ///
    /// Legs whose origin equals their destination are ignored.
    ///
    /// # Errors
    ///
    /// For the cheapest criterion, fails if any considered leg's rate cannot
    /// be converted to the base currency.
    pub fn build(
        legs: &'a [Leg],
        criterion: Criterion,
        converter: &CurrencyConverter<'_>,
    ) -> Result<Self, ConversionError> {
        let mut destination_rank: HashMap<&PortCode, usize> = HashMap::new();
        for leg in legs {
            let next = destination_rank.len();
            destination_rank.entry(leg.destination()).or_insert(next);
        }

        let mut edges: Vec<Edge<'a>> = Vec::new();
        let mut by_pair: HashMap<(PortCode, PortCode), EdgeId> = HashMap::new();

        for leg in legs {
            if leg.origin() == leg.destination() {
                continue;
            }

            let weight = criterion.weight(leg, converter)?;
            let key = (leg.origin().clone(), leg.destination().clone());

            match by_pair.get(&key) {
                // Strictly lower only: the earlier leg keeps ties
                Some(&id) => {
                    if weight < edges[id].weight {
                        edges[id] = Edge { leg, weight };
                    }
                }
                None => {
                    by_pair.insert(key, edges.len());
                    edges.push(Edge { leg, weight });
                }
            }
        }

        let mut outgoing: HashMap<PortCode, Vec<EdgeId>> = HashMap::new();
        for (id, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.origin().clone()).or_default().push(id);
        }
        for ids in outgoing.values_mut() {
            ids.sort_by_key(|&id| destination_rank[edges[id].destination()]);
        }

        Ok(Self {
            criterion,
            edges,
            by_pair,
            outgoing,
        })
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Returns the edge with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this set.
    pub fn edge(&self, id: EdgeId) -> &Edge<'a> {
        &self.edges[id]
    }

    /// Returns the best edge from `origin` to `destination`, if any.
    pub fn between(
        &self,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Option<(EdgeId, &Edge<'a>)> {
        let id = *self.by_pair.get(&(origin.clone(), destination.clone()))?;
        Some((id, &self.edges[id]))
    }

    /// Returns the edges leaving `origin`, in exploration order.
    pub fn leaving(&self, origin: &PortCode) -> impl Iterator<Item = (EdgeId, &Edge<'a>)> {
        self.outgoing
            .get(origin)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|&id| (id, &self.edges[id]))
    }

    /// Returns all edges in the order their port pair was first seen.
    pub fn iter(&self) -> impl Iterator<Item = &Edge<'a>> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
