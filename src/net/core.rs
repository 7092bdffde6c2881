//! The net container: entity tables, arc buckets and name resolution.
use serde::{Deserialize, Serialize};

use crate::net::ids::{PlaceId, TransitionId};
use crate::net::index_vec::IndexVec;
use crate::net::structure::{InputArc, OutputArc, Place, PriorityArc, Transition, Weight};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Net {
    /// Optional net name from an `h` line; recorded but not part of the
    /// LSN output.
    pub name: Option<String>,
    pub places: IndexVec<PlaceId, Place>,
    pub transitions: IndexVec<TransitionId, Transition>,
    pub input_arcs: Vec<InputArc>,
    pub output_arcs: Vec<OutputArc>,
    pub priority_arcs: Vec<PriorityArc>,
}

impl Net {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add_place(&mut self, place: Place) -> PlaceId {
        self.places.push(place)
    }

    pub fn add_transition(&mut self, transition: Transition) -> TransitionId {
        self.transitions.push(transition)
    }

    /// First place declared under `name`, if any.
    pub fn place_by_name(&self, name: &str) -> Option<PlaceId> {
        self.places
            .iter_enumerated()
            .find(|(_, place)| place.name == name)
            .map(|(id, _)| id)
    }

    /// First transition declared under `name`, if any.
    pub fn transition_by_name(&self, name: &str) -> Option<TransitionId> {
        self.transitions
            .iter_enumerated()
            .find(|(_, transition)| transition.name == name)
            .map(|(id, _)| id)
    }

    /// Does `name` already denote a place or a transition? Places and
    /// transitions share one namespace.
    pub fn contains_name(&self, name: &str) -> bool {
        self.place_by_name(name).is_some() || self.transition_by_name(name).is_some()
    }

    pub fn add_input_arc(&mut self, place: PlaceId, transition: TransitionId, weight: Weight) {
        self.input_arcs.push(InputArc {
            place,
            transition,
            weight,
        });
    }

    pub fn add_output_arc(&mut self, transition: TransitionId, place: PlaceId, weight: Weight) {
        self.output_arcs.push(OutputArc {
            transition,
            place,
            weight,
        });
    }

    pub fn add_priority_arc(&mut self, source: TransitionId, target: TransitionId) {
        self.priority_arcs.push(PriorityArc { source, target });
    }

    /// Total arc count over all three buckets.
    pub fn arc_count(&self) -> usize {
        self.input_arcs.len() + self.output_arcs.len() + self.priority_arcs.len()
    }

    /// Number of places with a strictly positive marking.
    pub fn marked_place_count(&self) -> usize {
        self.places.iter().filter(|place| place.tokens > 0).count()
    }

    /// Labelled transitions in id order, which is also the order the
    /// labels were captured in.
    pub fn labelled_transitions(&self) -> impl Iterator<Item = (TransitionId, &str)> {
        self.transitions
            .iter_enumerated()
            .filter_map(|(id, transition)| transition.label.as_deref().map(|label| (id, label)))
    }

    pub fn label_count(&self) -> usize {
        self.labelled_transitions().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Net {
        let mut net = Net::empty();
        net.add_place(Place::new("p0", 2));
        net.add_place(Place::new("p1", 0));
        net.add_transition(Transition::new("t0"));
        net.add_transition(Transition::new_with_label("t1", "Sub i p0 1"));
        net
    }

    #[test]
    fn lookup_is_first_match() {
        let net = sample();
        assert_eq!(net.place_by_name("p1"), Some(PlaceId::new(1)));
        assert_eq!(net.transition_by_name("t0"), Some(TransitionId::new(0)));
        assert_eq!(net.place_by_name("t0"), None);
        assert!(net.contains_name("p0"));
        assert!(net.contains_name("t1"));
        assert!(!net.contains_name("zz"));
    }

    #[test]
    fn counters() {
        let mut net = sample();
        let p0 = PlaceId::new(0);
        let p1 = PlaceId::new(1);
        let t0 = TransitionId::new(0);
        let t1 = TransitionId::new(1);
        net.add_input_arc(p0, t0, 1);
        net.add_output_arc(t0, p1, 1);
        net.add_priority_arc(t0, t1);
        assert_eq!(net.arc_count(), 3);
        assert_eq!(net.marked_place_count(), 1);
        assert_eq!(net.label_count(), 1);
    }

    #[test]
    fn labelled_transitions_in_id_order() {
        let net = sample();
        let labelled: Vec<_> = net.labelled_transitions().collect();
        assert_eq!(labelled, vec![(TransitionId::new(1), "Sub i p0 1")]);
    }
}
