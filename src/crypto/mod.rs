// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod codecs;
pub mod gost;
pub mod hash;

pub use codecs::bytes_to_hex;
pub use codecs::hex_to_bytes;
pub use codecs::CodecsError;
