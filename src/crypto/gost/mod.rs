// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GOST R 34.10-2012 digital signatures over the named curves of
//! R 1323565.1.024-2019.

mod context;
mod error;
mod params;

pub use context::{Mode, SignatureContext};
pub use error::GostSignatureError;
pub use params::{named_curve, CurveParams};
