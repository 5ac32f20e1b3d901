// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_fonts;
mod test_scenarios;
mod utils;
