//! Contract between domain entities and the resources served for them.
//!
//! Application code implements [`ResourceAssembler`] for each entity it
//! exposes. Assemblers either produce a complete resource or fail with an
//! [`InvalidResourceError`]; there is no partial result.

use tracing::debug;

use crate::error::InvalidResourceError;

/// Turns a domain entity into a response-worthy resource.
pub trait ResourceAssembler {
    /// The domain entity being exposed.
    type Entity;
    /// The assembled representation.
    type Resource;

    /// Assemble a resource for a single entity.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResourceError`] when the entity cannot be turned
    /// into a valid resource.
    fn to_resource(&self, entity: &Self::Entity) -> Result<Self::Resource, InvalidResourceError>;

    /// Assemble resources for every entity in order.
    ///
    /// Stops at the first failure and returns it as-is.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidResourceError`] raised by
    /// [`to_resource`](Self::to_resource).
    fn to_resources<'a, I>(&self, entities: I) -> Result<Vec<Self::Resource>, InvalidResourceError>
    where
        I: IntoIterator<Item = &'a Self::Entity>,
        Self::Entity: 'a,
    {
        let mut resources = Vec::new();
        for (index, entity) in entities.into_iter().enumerate() {
            match self.to_resource(entity) {
                Ok(resource) => resources.push(resource),
                Err(err) => {
                    debug!(index, error = %err, "resource assembly failed");
                    return Err(err);
                }
            }
        }
        Ok(resources)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::error::Error as _;
    use std::num::ParseIntError;

    use super::*;

    /// Entity as stored: the capacity is kept as raw text.
    struct Event {
        name: String,
        capacity: String,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct EventResource {
        name: String,
        capacity: u32,
        href: String,
    }

    struct EventAssembler;

    impl ResourceAssembler for EventAssembler {
        type Entity = Event;
        type Resource = EventResource;

        fn to_resource(&self, entity: &Event) -> Result<EventResource, InvalidResourceError> {
            if entity.name.is_empty() {
                return Err(InvalidResourceError::with_message("event has no name"));
            }
            let capacity = entity.capacity.parse::<u32>().map_err(|e| {
                InvalidResourceError::with_message_and_source(
                    format!("cannot assemble event {}", entity.name),
                    e,
                )
            })?;
            Ok(EventResource {
                href: format!("/api/events/{}", entity.name),
                name: entity.name.clone(),
                capacity,
            })
        }
    }

    fn event(name: &str, capacity: &str) -> Event {
        Event {
            name: name.to_owned(),
            capacity: capacity.to_owned(),
        }
    }

    #[test]
    fn assembles_valid_entity() {
        let resource = EventAssembler.to_resource(&event("rustfest", "40")).unwrap();
        assert_eq!(
            resource,
            EventResource {
                name: String::from("rustfest"),
                capacity: 40,
                href: String::from("/api/events/rustfest"),
            }
        );
    }

    #[test]
    fn failure_carries_message_and_cause() {
        let err = EventAssembler
            .to_resource(&event("rustfest", "many"))
            .unwrap_err();
        assert_eq!(err.message(), Some("cannot assemble event rustfest"));
        assert!(err.source().unwrap().downcast_ref::<ParseIntError>().is_some());
    }

    #[test]
    fn batch_assembles_in_order() {
        let entities = [event("a", "1"), event("b", "2")];
        let resources = EventAssembler.to_resources(&entities).unwrap();
        let names: Vec<_> = resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn batch_returns_first_failure_unchanged() {
        let entities = [event("a", "1"), event("", "2"), event("c", "x")];
        let err = EventAssembler.to_resources(&entities).unwrap_err();
        assert_eq!(err.message(), Some("event has no name"));
        assert!(err.source().is_none());
    }

    #[test]
    fn empty_batch_is_empty() {
        let resources = EventAssembler.to_resources(&Vec::<Event>::new()).unwrap();
        assert!(resources.is_empty());
    }
}
