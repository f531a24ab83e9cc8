// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow direction option set for anchored popovers.

bitflags::bitflags! {
    /// The edges of a popover on which the anchoring arrow may appear.
    ///
    /// This is an option set, not a single choice: a popover configured with
    /// `UP | DOWN` lets the host place the arrow on whichever of the two
    /// edges fits the available screen space. [`ArrowDirections::ANY`] leaves
    /// the choice entirely to the host and is the default.
    ///
    /// An empty set is representable and means "unknown"; the adapter never
    /// passes it to a host on its own (unset configuration falls back to
    /// `ANY`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ArrowDirections: u8 {
        /// Arrow on the top edge; the popover appears below its anchor.
        const UP    = 0b0000_0001;
        /// Arrow on the bottom edge; the popover appears above its anchor.
        const DOWN  = 0b0000_0010;
        /// Arrow on the left edge; the popover appears to the right.
        const LEFT  = 0b0000_0100;
        /// Arrow on the right edge; the popover appears to the left.
        const RIGHT = 0b0000_1000;
        /// Any edge; the host picks whichever placement fits.
        const ANY = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl Default for ArrowDirections {
    fn default() -> Self {
        Self::ANY
    }
}
