/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

mod failing_committer;
pub use failing_committer::FailingCommitter;
mod recording_committer;
pub use recording_committer::RecordingCommitter;
mod panicking_provider;
pub use panicking_provider::PanickingProvider;
mod static_table_provider;
pub use static_table_provider::StaticTableProvider;
mod logging;
pub use logging::init_logging;
mod specs;
pub use specs::{entry, route};
