//! Cookie consent banner state and the persisted choice behind it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::PageConfig;
use crate::error::{Error, Result};

pub const BANNER_CLASS: &str = "cookie-banner";
pub const BANNER_SHOWN_CLASS: &str = "show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Declined => "declined",
        }
    }
}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accepted" => Ok(ConsentChoice::Accepted),
            "declined" => Ok(ConsentChoice::Declined),
            other => Err(Error::Storage(format!("unknown consent value {:?}", other))),
        }
    }
}

/// Key-value persistence for the consent choice (`localStorage` in the
/// browser).
#[cfg_attr(test, mockall::automock)]
pub trait ConsentStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used when the browser refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl ConsentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: ConsentStore + ?Sized> ConsentStore for std::rc::Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    /// No stored choice; waiting for the show delay.
    Scheduled,
    /// Show delay elapsed, markup being built and appended.
    Inserting,
    /// In the page but not yet visible (`show` class pending).
    Appended,
    Shown,
    /// Fading out before removal.
    Dismissing,
}

#[derive(Debug)]
pub struct ConsentBanner<S> {
    store: S,
    key: String,
    state: BannerState,
    show_after_ms: u32,
    fade_ms: u32,
}

impl<S: ConsentStore> ConsentBanner<S> {
    pub fn new(store: S, config: &PageConfig) -> Self {
        Self {
            store,
            key: config.consent_storage_key.clone(),
            state: BannerState::Hidden,
            show_after_ms: config.consent_delay_ms,
            fade_ms: config.banner_fade_ms,
        }
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    /// Stored choice, if any. Unreadable or unknown values count as none.
    pub fn stored_choice(&self) -> Option<ConsentChoice> {
        match self.store.load(&self.key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(choice) => Some(choice),
                Err(e) => {
                    log::warn!("Ignoring stored consent: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read consent: {}", e);
                None
            }
        }
    }

    /// Page load. Returns the delay after which to show the banner, or
    /// `None` when a choice is already stored.
    pub fn on_load(&mut self) -> Option<u32> {
        if let Some(choice) = self.stored_choice() {
            log::debug!("Consent already {}", choice);
            return None;
        }
        self.state = BannerState::Scheduled;
        Some(self.show_after_ms)
    }

    /// Show delay elapsed. Returns whether the banner should be inserted.
    pub fn show(&mut self) -> bool {
        if self.state != BannerState::Scheduled {
            return false;
        }
        self.state = BannerState::Inserting;
        true
    }

    /// Outcome of inserting the banner. A failed insertion leaves nothing on
    /// the page, so the banner goes back to hidden.
    pub fn inserted(&mut self, ok: bool) {
        if self.state != BannerState::Inserting {
            return;
        }
        self.state = if ok {
            BannerState::Appended
        } else {
            BannerState::Hidden
        };
    }

    /// Show class is about to be applied. Returns false when the banner was
    /// dismissed in the meantime.
    pub fn revealed(&mut self) -> bool {
        if self.state != BannerState::Appended {
            return false;
        }
        self.state = BannerState::Shown;
        true
    }

    /// Persist a choice. Returns the fade duration when a shown banner must
    /// be dismissed.
    pub fn choose(&mut self, choice: ConsentChoice) -> Option<u32> {
        if let Err(e) = self.store.save(&self.key, choice.as_str()) {
            log::warn!("Could not persist consent: {}", e);
        }
        log::info!("Cookie consent {}", choice);
        match self.state {
            BannerState::Shown | BannerState::Appended => {
                self.state = BannerState::Dismissing;
                Some(self.fade_ms)
            }
            BannerState::Scheduled | BannerState::Inserting => {
                self.state = BannerState::Hidden;
                None
            }
            BannerState::Hidden | BannerState::Dismissing => None,
        }
    }

    /// Escape key: declines a visible banner.
    pub fn on_escape(&mut self) -> Option<u32> {
        if self.state == BannerState::Shown {
            self.choose(ConsentChoice::Declined)
        } else {
            None
        }
    }

    /// Fade-out finished and the banner left the page.
    pub fn removed(&mut self) {
        if self.state == BannerState::Dismissing {
            self.state = BannerState::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn banner(store: Rc<MemoryStore>) -> ConsentBanner<Rc<MemoryStore>> {
        ConsentBanner::new(store, &PageConfig::default())
    }

    #[test]
    fn test_choice_round_trips_through_strings() {
        assert_eq!("accepted".parse::<ConsentChoice>(), Ok(ConsentChoice::Accepted));
        assert_eq!("declined".parse::<ConsentChoice>(), Ok(ConsentChoice::Declined));
        assert!("maybe".parse::<ConsentChoice>().is_err());
    }

    #[test]
    fn test_first_visit_schedules_banner() {
        let store = Rc::new(MemoryStore::default());
        let mut consent = banner(store);
        assert_eq!(consent.on_load(), Some(2000));
        assert_eq!(consent.state(), BannerState::Scheduled);
        assert!(consent.show());
        assert_eq!(consent.state(), BannerState::Inserting);
        consent.inserted(true);
        assert_eq!(consent.state(), BannerState::Appended);
        assert!(consent.revealed());
        assert_eq!(consent.state(), BannerState::Shown);
    }

    #[test]
    fn test_accept_then_reload_skips_banner() {
        let store = Rc::new(MemoryStore::default());

        let mut first = banner(store.clone());
        first.on_load();
        first.show();
        first.inserted(true);
        first.revealed();
        assert_eq!(first.choose(ConsentChoice::Accepted), Some(300));
        assert_eq!(first.state(), BannerState::Dismissing);
        first.removed();
        assert_eq!(first.state(), BannerState::Hidden);
        assert_eq!(
            store.load("cookieConsent").unwrap().as_deref(),
            Some("accepted")
        );

        let mut reload = banner(store);
        assert_eq!(reload.on_load(), None);
        assert!(!reload.show());
        assert_eq!(reload.stored_choice(), Some(ConsentChoice::Accepted));
    }

    #[test]
    fn test_escape_declines_only_open_banner() {
        let store = Rc::new(MemoryStore::default());
        let mut consent = banner(store.clone());
        assert_eq!(consent.on_escape(), None);
        assert_eq!(store.load("cookieConsent").unwrap(), None);

        consent.on_load();
        consent.show();
        consent.inserted(true);
        consent.revealed();
        assert_eq!(consent.on_escape(), Some(300));
        assert_eq!(consent.stored_choice(), Some(ConsentChoice::Declined));
        // second press while fading does nothing
        assert_eq!(consent.on_escape(), None);
    }

    #[test]
    fn test_choice_before_show_cancels_pending_banner() {
        let store = Rc::new(MemoryStore::default());
        let mut consent = banner(store);
        consent.on_load();
        assert_eq!(consent.choose(ConsentChoice::Accepted), None);
        assert!(!consent.show());
    }

    #[test]
    fn test_unknown_stored_value_reprompts() {
        let store = Rc::new(MemoryStore::default());
        store.save("cookieConsent", "yes please").unwrap();
        let mut consent = banner(store);
        assert_eq!(consent.on_load(), Some(2000));
    }

    #[test]
    fn test_storage_failures_do_not_block_dismissal() {
        let mut store = MockConsentStore::new();
        store
            .expect_load()
            .returning(|_| Err(Error::Storage("denied".into())));
        store
            .expect_save()
            .times(1)
            .returning(|_, _| Err(Error::Storage("quota".into())));

        let mut consent = ConsentBanner::new(store, &PageConfig::default());
        assert_eq!(consent.on_load(), Some(2000));
        consent.show();
        consent.inserted(true);
        consent.revealed();
        assert_eq!(consent.choose(ConsentChoice::Declined), Some(300));
    }

    #[test]
    fn test_failed_insertion_ignores_escape() {
        let store = Rc::new(MemoryStore::default());
        let mut consent = banner(store.clone());
        consent.on_load();
        assert!(consent.show());
        consent.inserted(false);
        assert_eq!(consent.state(), BannerState::Hidden);

        assert_eq!(consent.on_escape(), None);
        assert_eq!(consent.state(), BannerState::Hidden);
        assert_eq!(store.load("cookieConsent").unwrap(), None);
        assert!(!consent.revealed());
    }

    #[test]
    fn test_escape_waits_for_visible_banner() {
        let store = Rc::new(MemoryStore::default());
        let mut consent = banner(store.clone());
        consent.on_load();
        consent.show();
        assert_eq!(consent.on_escape(), None);
        consent.inserted(true);
        assert_eq!(consent.on_escape(), None);
        assert_eq!(consent.state(), BannerState::Appended);
        assert_eq!(store.load("cookieConsent").unwrap(), None);
    }

    #[test]
    fn test_choice_before_reveal_dismisses_appended_banner() {
        let store = Rc::new(MemoryStore::default());
        let mut consent = banner(store);
        consent.on_load();
        consent.show();
        consent.inserted(true);
        assert_eq!(consent.choose(ConsentChoice::Accepted), Some(300));
        assert_eq!(consent.state(), BannerState::Dismissing);
        assert!(!consent.revealed());
    }
}
