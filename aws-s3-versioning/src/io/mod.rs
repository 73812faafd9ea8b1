/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// In-memory object body
mod payload;

// re-exports
pub use self::payload::Payload;
