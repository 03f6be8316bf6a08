// ABOUTME: Core types and constants for the CozyPaws exercise platform
// ABOUTME: Foundation crate with error handling, dog profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

#![deny(unsafe_code)]

//! # CozyPaws Core
//!
//! Foundation crate providing shared types and constants for the CozyPaws
//! exercise recommendation platform. This crate is designed to change
//! infrequently, so the calculation crate and the application crate can build
//! on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Absolute bounds, rounding step and input defaults
//! - **models**: Dog profile input record, recommendation output record, notes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`DogProfile`, `ExerciseRecommendation`, `AdvisoryNote`, ...)
pub mod models;
