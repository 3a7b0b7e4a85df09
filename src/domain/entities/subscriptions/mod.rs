//! Subscriptions Entity Module

pub mod subscription;

pub use subscription::{Subscription, SubscriptionStatus, SubscriptionTier};
