/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the bucket versioning status operation
pub mod check_versioning;

/// Types for single object upload operation
pub mod upload;

/// Types for single object (or object version) download operation
pub mod get_object;

/// Types for the unqualified delete operation
pub mod delete_object;

/// Types for the single version delete operation
pub mod delete_object_version;
