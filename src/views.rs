//! Public views
//!
//! Materialized read models for the public pages. Each view takes an
//! initial snapshot on mount, subscribes to the change bus, and on any
//! signal re-reads every collection it depends on. The signal carries no
//! payload, so re-reading everything is the contract the rest of the
//! system relies on, not an optimization target.
//!
//! Dropping a view drops its subscription, so an unmounted view never
//! runs a stale closure.

use std::sync::{Arc, Mutex};

use crate::bus::{ChangeBus, Subscription};
use crate::models::{ContentImages, Event, Leader, SiteContent};
use crate::services::{ContentService, EventsService, LeadersService};

fn lock<T>(state: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// The public events listing
pub struct EventsView {
    state: Arc<Mutex<Vec<Event>>>,
    _subscription: Subscription,
}

impl EventsView {
    pub fn mount(events: EventsService, bus: &ChangeBus) -> Self {
        let state = Arc::new(Mutex::new(events.list()));

        let handle = state.clone();
        let _subscription = bus.subscribe(move || {
            *lock(&handle) = events.list();
        });

        Self {
            state,
            _subscription,
        }
    }

    pub fn events(&self) -> Vec<Event> {
        lock(&self.state).clone()
    }
}

/// Everything the home page renders
#[derive(Clone)]
pub struct HomeData {
    pub events: Vec<Event>,
    pub leaders: Vec<Leader>,
    pub content: SiteContent,
    pub images: ContentImages,
}

/// The home page
pub struct HomeView {
    state: Arc<Mutex<HomeData>>,
    _subscription: Subscription,
}

impl HomeView {
    pub fn mount(
        events: EventsService,
        leaders: LeadersService,
        content: ContentService,
        bus: &ChangeBus,
    ) -> Self {
        let read = {
            let events = events.clone();
            let leaders = leaders.clone();
            let content = content.clone();
            move || HomeData {
                events: events.list(),
                leaders: leaders.list(),
                content: content.text(),
                images: content.images(),
            }
        };

        let state = Arc::new(Mutex::new(read()));

        let handle = state.clone();
        let _subscription = bus.subscribe(move || {
            *lock(&handle) = read();
        });

        Self {
            state,
            _subscription,
        }
    }

    pub fn data(&self) -> HomeData {
        lock(&self.state).clone()
    }
}

/// Everything the about page renders
#[derive(Clone)]
pub struct AboutData {
    pub leaders: Vec<Leader>,
    pub content: SiteContent,
    pub images: ContentImages,
}

/// The about page
pub struct AboutView {
    state: Arc<Mutex<AboutData>>,
    _subscription: Subscription,
}

impl AboutView {
    pub fn mount(leaders: LeadersService, content: ContentService, bus: &ChangeBus) -> Self {
        let read = {
            let leaders = leaders.clone();
            let content = content.clone();
            move || AboutData {
                leaders: leaders.list(),
                content: content.text(),
                images: content.images(),
            }
        };

        let state = Arc::new(Mutex::new(read()));

        let handle = state.clone();
        let _subscription = bus.subscribe(move || {
            *lock(&handle) = read();
        });

        Self {
            state,
            _subscription,
        }
    }

    pub fn data(&self) -> AboutData {
        lock(&self.state).clone()
    }

    /// The leadership section, or `None` when there are no leaders to show
    pub fn leadership(&self) -> Option<Vec<Leader>> {
        let leaders = lock(&self.state).leaders.clone();
        if leaders.is_empty() {
            None
        } else {
            Some(leaders)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;

    struct Fixture {
        bus: ChangeBus,
        events: EventsService,
        leaders: LeadersService,
        content: ContentService,
    }

    fn create_fixture() -> Fixture {
        let store = Store::in_memory();
        let bus = ChangeBus::new();
        Fixture {
            events: EventsService::new(store.clone(), bus.clone()),
            leaders: LeadersService::new(store.clone(), bus.clone()),
            content: ContentService::new(store, bus.clone()),
            bus,
        }
    }

    #[test]
    fn events_view_sees_a_save_without_remounting() {
        let f = create_fixture();
        let view = EventsView::mount(f.events.clone(), &f.bus);
        let before = view.events().len();

        f.events
            .save(Event {
                id: "v1".into(),
                title: "Vigil".into(),
                date: "Dec 31, 2025".into(),
                description: "Watch night".into(),
                image: "x".into(),
            })
            .unwrap();

        let events = view.events();
        assert_eq!(events.len(), before + 1);
        assert!(events.iter().any(|e| e.id == "v1"));
    }

    #[test]
    fn home_view_re_reads_all_collections_on_any_signal() {
        let f = create_fixture();
        let view = HomeView::mount(
            f.events.clone(),
            f.leaders.clone(),
            f.content.clone(),
            &f.bus,
        );

        // A content-only edit still refreshes events and leaders.
        f.content
            .set_text(
                crate::models::Language::English,
                crate::models::Page::Homepage,
                "heroTitle",
                "Fresh title",
            )
            .unwrap();

        let data = view.data();
        assert_eq!(data.content.english.homepage.hero_title, "Fresh title");
        assert!(!data.events.is_empty());
        assert!(!data.leaders.is_empty());
    }

    #[test]
    fn about_view_omits_leadership_when_collection_is_empty() {
        let f = create_fixture();
        let view = AboutView::mount(f.leaders.clone(), f.content.clone(), &f.bus);
        assert!(view.leadership().is_some());

        for leader in f.leaders.list() {
            f.leaders.delete(&leader.id).unwrap();
        }

        assert!(view.leadership().is_none());
        assert!(view.data().leaders.is_empty());
    }

    #[test]
    fn unmounted_view_stops_listening() {
        let f = create_fixture();
        let view = EventsView::mount(f.events.clone(), &f.bus);
        assert_eq!(f.bus.listener_count(), 1);

        drop(view);
        assert_eq!(f.bus.listener_count(), 0);
    }
}
