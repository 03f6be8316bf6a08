// ABOUTME: Re-exports command modules for cozypaws-cli
// ABOUTME: Provides the recommend command and the preset catalog listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

pub mod catalog;
pub mod recommend;
