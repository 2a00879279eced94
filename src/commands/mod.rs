//! # Commands
//!
//! CLI command implementations for crockid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod checksum;
pub mod completions;
pub mod config;
pub mod decode;
pub mod encode;
pub mod gen;
pub mod normalize;
pub mod validate;

pub use self::{
    checksum::{execute as checksum, ChecksumArgs},
    completions::execute as completions,
    config::execute as config,
    decode::{execute as decode, DecodeArgs},
    encode::{execute as encode, EncodeArgs},
    gen::{execute as gen, GenArgs},
    normalize::execute as normalize,
    validate::execute as validate,
};
