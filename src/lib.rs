//! Retention Flow - Subscription Cancellation Retention Backend
//!
//! This crate implements the scripted retention chat a user goes through when
//! cancelling a subscription: conversation start, message exchange with a
//! scripted responder, retention offer generation and resolution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
