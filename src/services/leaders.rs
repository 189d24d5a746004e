//! Leaders service
//!
//! Same read-modify-write pattern as the events service, over the leaders
//! key.

use crate::bus::ChangeBus;
use crate::config::LEADERS_KEY;
use crate::error::{AppError, Result};
use crate::models::Leader;
use crate::seed;
use crate::storage::Store;

/// Service for managing leadership profiles
#[derive(Clone)]
pub struct LeadersService {
    store: Store,
    bus: ChangeBus,
}

impl LeadersService {
    pub fn new(store: Store, bus: ChangeBus) -> Self {
        Self { store, bus }
    }

    /// All leaders in display order, seeding or healing as needed
    pub fn list(&self) -> Vec<Leader> {
        match self.store.read::<Vec<Leader>>(LEADERS_KEY) {
            Ok(Some(leaders)) => leaders,
            Ok(None) => self.reseed(),
            Err(err) => {
                tracing::warn!("Leaders collection unreadable ({}), reseeding", err);
                self.reseed()
            }
        }
    }

    fn reseed(&self) -> Vec<Leader> {
        let leaders = seed::default_leaders();
        if let Err(err) = self.store.write(LEADERS_KEY, &leaders) {
            tracing::warn!("Failed to persist leaders seed: {}", err);
        }
        leaders
    }

    /// A single leader by id
    pub fn get(&self, id: &str) -> Result<Leader> {
        self.list()
            .into_iter()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::NotFound("Leader", id.to_string()))
    }

    /// Insert or update one leader, keyed by id, then broadcast
    pub fn save(&self, leader: Leader) -> Result<()> {
        tracing::info!("Saving leader: {}", leader.id);

        let mut leaders = self.list();
        match leaders.iter_mut().find(|l| l.id == leader.id) {
            Some(existing) => *existing = leader,
            None => leaders.push(leader),
        }

        self.store.write(LEADERS_KEY, &leaders)?;
        self.bus.broadcast();

        Ok(())
    }

    /// Remove the matching leader and re-persist the reduced collection
    pub fn delete(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting leader: {}", id);

        let mut leaders = self.list();
        leaders.retain(|l| l.id != id);

        self.store.write(LEADERS_KEY, &leaders)?;
        self.bus.broadcast();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> LeadersService {
        LeadersService::new(Store::in_memory(), ChangeBus::new())
    }

    fn sample_leader(id: &str, name: &str) -> Leader {
        Leader {
            id: id.into(),
            name: name.into(),
            role: "Deacon".into(),
            bio: None,
            image: "https://example.com/leader.jpg".into(),
        }
    }

    #[test]
    fn first_read_seeds_the_defaults() {
        let service = create_test_service();
        assert_eq!(service.list(), seed::default_leaders());
    }

    #[test]
    fn deleting_every_leader_yields_an_empty_collection() {
        let service = create_test_service();

        for leader in service.list() {
            service.delete(&leader.id).unwrap();
        }

        // Empty is a valid persisted state, not absence; it must not reseed.
        assert!(service.list().is_empty());
    }

    #[test]
    fn get_missing_leader_is_not_found() {
        let service = create_test_service();
        let result = service.get("nope");
        assert!(matches!(result, Err(AppError::NotFound(_, _))));
    }

    #[test]
    fn save_then_get_round_trips() {
        let service = create_test_service();
        let leader = sample_leader("x", "Rev. Example");

        service.save(leader.clone()).unwrap();
        assert_eq!(service.get("x").unwrap(), leader);
    }
}
