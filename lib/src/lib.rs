//! Rules engine behind the WHOSENXT marketplace.
//!
//! Two pure resolvers form the core of the crate:
//!
//! - [`subscription`] maps a subscriber's tier onto a benefits profile and
//!   derives category-gated discounts,
//! - [`store`] evaluates weekly store hours against a point in time.
//!
//! [`checkout`], [`marketplace`] and [`gig`] compose them into the views the
//! application renders. Data is loaded by the caller; nothing here performs
//! I/O apart from the [`config`] and [`util`] loaders.

#[macro_use]
extern crate serde_derive;

pub mod checkout;
pub mod config;
pub mod error;
pub mod gig;
pub mod marketplace;
pub mod store;
pub mod subscription;
pub mod tracing;
pub mod util;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use store::{AvailabilityStatus, Day, TimeOfDay, WeeklySchedule};
pub use subscription::{resolve_benefits, BenefitsProfile, Subscription, SubscriptionTier};
