// SPDX-License-Identifier: LGPL-3.0-only

//! Delayed hiding of submenu popups.
//!
//! When the pointer leaves a submenu on its way to that submenu's popup, hiding
//! right away would close the popup before the pointer gets there. The
//! [HideCoordinator] keeps at most one hide pending per bar: scheduling a new one
//! hands the previous menu back so the caller hides it at once.

use cmdbar_core::menu::MenuId;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingHide {
    menu: MenuId,
    deadline: Instant,
}

/// Single-slot hide timer shared by all menus of one bar.
#[derive(Debug, Clone)]
pub struct HideCoordinator {
    delay: Duration,
    pending: Option<PendingHide>,
}

impl HideCoordinator {
    /// Create a coordinator that waits `delay` before hiding.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The hide delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the hide delay. A pending hide keeps its deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedule `menu` to hide after the delay.
    ///
    /// Returns the previously pending menu, which must be hidden immediately.
    /// Rescheduling the pending menu just restarts its timer.
    pub fn schedule(&mut self, menu: MenuId, now: Instant) -> Option<MenuId> {
        let previous = self
            .pending
            .replace(PendingHide {
                menu,
                deadline: now + self.delay,
            })
            .map(|pending| pending.menu)
            .filter(|&previous| previous != menu);

        log::debug!("Scheduled hide of {:?} in {:?}", menu, self.delay);
        if let Some(previous) = previous {
            log::debug!("Hide of {:?} superseded, hiding now", previous);
        }
        previous
    }

    /// Drop the pending hide, returning the menu it was for.
    pub fn cancel(&mut self) -> Option<MenuId> {
        self.pending.take().map(|pending| pending.menu)
    }

    /// Drop the pending hide before `menu` opens.
    ///
    /// If `menu` itself was pending it simply stays open and `None` is returned.
    /// Any other pending menu is returned so the caller can hide it now.
    pub fn cancel_for(&mut self, menu: MenuId) -> Option<MenuId> {
        self.cancel().filter(|&pending| pending != menu)
    }

    /// Fire the pending hide if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<MenuId> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.menu)
            },
            _ => None,
        }
    }

    /// The menu waiting to be hidden.
    pub fn pending(&self) -> Option<MenuId> {
        self.pending.map(|pending| pending.menu)
    }

    /// Whether a hide is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending hide fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline)
    }

    /// A timer that completes at the pending deadline.
    ///
    /// Await it, then call [poll](Self::poll).
    pub fn timer(&self) -> Option<smol::Timer> {
        self.deadline().map(smol::Timer::at)
    }
}

impl Default for HideCoordinator {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            cmdbar_core::menu::constants::OPEN_DELAY_MS + cmdbar_core::menu::constants::HIDE_GRACE_MS,
        ))
    }
}
