// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consumer delegate for popover lifecycle events.
//!
//! Every method has a default, so a delegate implements only the events it
//! cares about. The defaults encode the documented fallback behavior:
//! repositioning proceeds unmodified, outside interactions are allowed to
//! dismiss, and dismissal completion is ignored.

use kurbo::Rect;

/// Receives popover lifecycle events relayed by [`Popover`](crate::Popover).
///
/// `V` is the application's view-handle type, matching the popover's.
///
/// All methods are optional in the sense that each has a default body; the
/// adapter calls them unconditionally and the defaults supply the documented
/// behavior when a consumer opts out.
pub trait PopoverDelegate<V> {
    /// The host needs to move the popover's anchor (for example after a
    /// rotation or because the anchor view moved).
    ///
    /// `rect` and `view` are the host's proposed new anchor; the delegate
    /// may overwrite either to redirect the popover. The default leaves
    /// both untouched, so the host's own repositioning proceeds.
    fn will_reposition(&mut self, rect: &mut Rect, view: &mut V) {
        let _ = (rect, view);
    }

    /// The host asks whether an outside interaction may dismiss the popover.
    ///
    /// Returning `false` keeps the popover up. The default is `true`:
    /// taps outside the popover close it.
    fn should_dismiss(&mut self) -> bool {
        true
    }

    /// The host finished dismissing the popover.
    fn did_dismiss(&mut self) {}
}

/// A delegate that accepts every default.
///
/// This is the default delegate type parameter of
/// [`Popover`](crate::Popover), for popovers presented without a consumer
/// delegate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoDelegate;

impl<V> PopoverDelegate<V> for NoDelegate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_delegate_permits_dismissal() {
        let mut d = NoDelegate;
        assert!(PopoverDelegate::<u32>::should_dismiss(&mut d));
    }

    #[test]
    fn default_reposition_leaves_proposal_untouched() {
        let mut d = NoDelegate;
        let mut rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let mut view = 7_u32;
        d.will_reposition(&mut rect, &mut view);
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(view, 7);
    }
}
