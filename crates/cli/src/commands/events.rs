// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event vocabulary listing

use crate::output::{self, OutputFormat};
use clap::Args;

#[derive(Args)]
pub struct EventsArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn handle(args: EventsArgs) -> anyhow::Result<()> {
    output::print_list(&rb_bot::events::ALL, args.output)
}
