// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resources read by the operator.

pub mod hosted_control_plane;

pub use hosted_control_plane::HostedControlPlane;
