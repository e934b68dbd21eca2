//! Order status lifecycle.
//!
//! An order progresses through a fixed sequence of fulfillment states, with
//! two absorbing side-states (`Cancelled`, `Returned`) reachable from any
//! non-terminal state. The wire format uses the platform's human-readable
//! labels (`"Order Placed"`, `"Order Shipped"`, ...).

use serde::{Deserialize, Serialize};

/// The lifecycle status of an order.
///
/// Variants are declared in lifecycle order; [`OrderStatus::position`]
/// exposes that ordering for the main line. `Cancelled` and `Returned` sit
/// outside the main line and absorb: once entered, no further transition is
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Order Placed")]
    Placed,
    #[serde(rename = "Order Accepted")]
    Accepted,
    #[serde(rename = "Order Processing")]
    Processing,
    #[serde(rename = "Order Packed")]
    Packed,
    #[serde(rename = "Order Picked")]
    Picked,
    #[serde(rename = "Order Shipped")]
    Shipped,
    #[serde(rename = "Order Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Order Delivered")]
    Delivered,
    #[serde(rename = "Order Cancelled")]
    Cancelled,
    #[serde(rename = "Order Returned")]
    Returned,
}

impl OrderStatus {
    /// Every status, in the order the status selector presents them.
    pub const ALL: [Self; 10] = [
        Self::Placed,
        Self::Accepted,
        Self::Processing,
        Self::Packed,
        Self::Picked,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    /// The wire label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Placed => "Order Placed",
            Self::Accepted => "Order Accepted",
            Self::Processing => "Order Processing",
            Self::Packed => "Order Packed",
            Self::Picked => "Order Picked",
            Self::Shipped => "Order Shipped",
            Self::OutForDelivery => "Order Out for Delivery",
            Self::Delivered => "Order Delivered",
            Self::Cancelled => "Order Cancelled",
            Self::Returned => "Order Returned",
        }
    }

    /// Position along the main fulfillment line, or `None` for the absorbing
    /// side-states.
    #[must_use]
    pub const fn position(self) -> Option<u8> {
        match self {
            Self::Placed => Some(0),
            Self::Accepted => Some(1),
            Self::Processing => Some(2),
            Self::Packed => Some(3),
            Self::Picked => Some(4),
            Self::Shipped => Some(5),
            Self::OutForDelivery => Some(6),
            Self::Delivered => Some(7),
            Self::Cancelled | Self::Returned => None,
        }
    }

    /// The next status along the main fulfillment line.
    ///
    /// `Delivered` and the absorbing side-states have no successor.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Placed => Some(Self::Accepted),
            Self::Accepted => Some(Self::Processing),
            Self::Processing => Some(Self::Packed),
            Self::Packed => Some(Self::Picked),
            Self::Picked => Some(Self::Shipped),
            Self::Shipped => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled | Self::Returned => None,
        }
    }

    /// Whether this status ends the lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Returned)
    }

    /// Whether this is one of the absorbing side-states.
    #[must_use]
    pub const fn is_absorbing(self) -> bool {
        matches!(self, Self::Cancelled | Self::Returned)
    }

    /// Whether a transition from `self` to `target` is legal.
    ///
    /// Legal moves are any forward step along the main line (skipping stages
    /// is allowed), or a move into an absorbing state from any non-terminal
    /// state. Self-transitions and backward moves are not legal.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        if target.is_absorbing() {
            return !self.is_terminal();
        }
        match (self.position(), target.position()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for status in Self::ALL {
            if status.label().eq_ignore_ascii_case(s.trim()) {
                return Ok(status);
            }
        }
        Err(format!("invalid order status: {s}"))
    }
}

/// How a status assignment is checked before dispatch.
///
/// The platform's control surface presents the full status list and lets an
/// operator assign any status regardless of the current one. `Permissive`
/// preserves that behavior; `Enforced` rejects assignments the lifecycle
/// does not allow before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Accept any assignment (the observed behavior).
    #[default]
    Permissive,
    /// Reject assignments for which [`OrderStatus::can_transition_to`] is false.
    Enforced,
}

impl TransitionPolicy {
    /// Whether this policy allows assigning `target` to an order currently
    /// in `current`.
    #[must_use]
    pub const fn allows(self, current: OrderStatus, target: OrderStatus) -> bool {
        match self {
            Self::Permissive => true,
            Self::Enforced => current.can_transition_to(target),
        }
    }
}
